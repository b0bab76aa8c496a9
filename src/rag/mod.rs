//! Retrieval-augmented response assembly.
//!
//! `ContextBlock` shapes retrieved snippets into the system instruction and
//! `Responder` turns that plus the user query into one chat completion.

mod context;
mod responder;

pub use context::ContextBlock;
pub use responder::Responder;
