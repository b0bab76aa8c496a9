//! Hand-built HTML for the query form and its results.

/// What one request renders: the echoed query, the raw snippets, and the
/// model's answer.
#[derive(Debug, Default, PartialEq)]
pub struct PageData {
    pub query: String,
    pub results: Vec<String>,
    pub answer: String,
}

pub fn render(data: &PageData) -> String {
    let mut body = String::new();

    body.push_str("    <form method=\"post\" action=\"/\">\n");
    body.push_str(&format!(
        "      <input type=\"text\" name=\"query\" value=\"{}\" placeholder=\"Ask a question\">\n",
        escape(&data.query)
    ));
    body.push_str("      <button type=\"submit\">Search</button>\n");
    body.push_str("    </form>\n");

    if !data.results.is_empty() {
        body.push_str("    <h2>Search results</h2>\n    <ul>\n");
        for snippet in &data.results {
            body.push_str(&format!("      <li>{}</li>\n", escape(snippet)));
        }
        body.push_str("    </ul>\n");
    }

    if !data.answer.is_empty() {
        body.push_str(&format!(
            "    <h2>Answer</h2>\n    <p>{}</p>\n",
            escape(&data.answer)
        ));
    }

    wrap("Ask the index", &body)
}

pub fn render_error(stage: &str, message: &str) -> String {
    let body = format!(
        "    <h2>Request failed</h2>\n    <p>The {} call failed: {}</p>\n    <p><a href=\"/\">Back</a></p>\n",
        escape(stage),
        escape(message)
    );
    wrap("Error", &body)
}

fn wrap(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>{title}</title>\n  </head>\n  <body>\n    <h1>{title}</h1>\n{body}  </body>\n</html>\n",
        title = escape(title),
        body = body
    )
}

/// Minimal HTML escaping for text interpolated into the page.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#39;chips&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn empty_page_renders_only_the_form() {
        let html = render(&PageData::default());

        assert!(html.contains("name=\"query\""));
        assert!(!html.contains("<h2>Search results</h2>"));
        assert!(!html.contains("<h2>Answer</h2>"));
    }

    #[test]
    fn results_and_answer_render_escaped() {
        let html = render(&PageData {
            query: "a & b".to_string(),
            results: vec!["<script>alert(1)</script>".to_string()],
            answer: "1 < 2".to_string(),
        });

        assert!(html.contains("value=\"a &amp; b\""));
        assert!(html.contains("<li>&lt;script&gt;alert(1)&lt;/script&gt;</li>"));
        assert!(html.contains("<p>1 &lt; 2</p>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn error_page_names_the_failed_stage() {
        let html = render_error("search", "503 upstream down");

        assert!(html.contains("Request failed"));
        assert!(html.contains("The search call failed: 503 upstream down"));
    }
}
