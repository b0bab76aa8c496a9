/// Maximum number of snippets embedded into the system instruction,
/// however many the retriever handed over.
pub const MAX_CONTEXT_SNIPPETS: usize = 3;

const GROUNDED_PREAMBLE: &str = "You are an AI assistant providing helpful information. \
     Use the following context to answer the user's query:";
const GENERIC_PREAMBLE: &str = "You are an AI assistant providing helpful information.";

/// Context carried into the system instruction: either the retrieved
/// snippets, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextBlock {
    Grounded(String),
    Empty,
}

impl ContextBlock {
    /// Build from retrieved snippets, joining the first
    /// [`MAX_CONTEXT_SNIPPETS`] with a blank line.
    pub fn from_snippets(snippets: &[String]) -> Self {
        if snippets.is_empty() {
            return ContextBlock::Empty;
        }

        let joined = snippets
            .iter()
            .take(MAX_CONTEXT_SNIPPETS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n");
        ContextBlock::Grounded(joined)
    }

    /// Render the system instruction for the chat model.
    pub fn system_instruction(&self) -> String {
        match self {
            ContextBlock::Grounded(context) => {
                format!("{}\n\n{}", GROUNDED_PREAMBLE, context)
            }
            ContextBlock::Empty => GENERIC_PREAMBLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippets(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn empty_snippets_produce_the_generic_instruction() {
        let block = ContextBlock::from_snippets(&[]);

        assert_eq!(block, ContextBlock::Empty);
        assert_eq!(
            block.system_instruction(),
            "You are an AI assistant providing helpful information."
        );
        assert!(!block.system_instruction().contains("context"));
    }

    #[test]
    fn snippets_join_with_exactly_one_blank_line() {
        let block = ContextBlock::from_snippets(&snippets(&["alpha", "beta", "gamma"]));

        assert_eq!(
            block,
            ContextBlock::Grounded("alpha\n\nbeta\n\ngamma".to_string())
        );
    }

    #[test]
    fn single_snippet_has_no_surrounding_blank_lines() {
        let block = ContextBlock::from_snippets(&snippets(&["only one"]));

        assert_eq!(block, ContextBlock::Grounded("only one".to_string()));
    }

    #[test]
    fn only_the_first_three_snippets_participate() {
        let block = ContextBlock::from_snippets(&snippets(&["a", "b", "c", "d", "e"]));

        assert_eq!(block, ContextBlock::Grounded("a\n\nb\n\nc".to_string()));
    }

    #[test]
    fn grounded_instruction_embeds_the_context_after_the_preamble() {
        let block = ContextBlock::from_snippets(&snippets(&["Refunds within 30 days."]));

        assert_eq!(
            block.system_instruction(),
            "You are an AI assistant providing helpful information. \
             Use the following context to answer the user's query:\n\nRefunds within 30 days."
        );
    }
}
