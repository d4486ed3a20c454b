//! Applies dialect rules directly to a translation unit.
//!
//! Rewriting works on tokens but edits text: every vendor identifier is
//! elided or replaced in place, and everything between tokens (layout,
//! comments, literals) is copied through untouched.  Replacement bodies are
//! rescanned with the same rules, with the macro being expanded hidden from
//! its own expansion.

mod error;
mod rewriter;
mod tests;

pub use error::RewriteError;
pub use rewriter::{apply, RewriteResult, Rewriter, MAX_EXPANSION_DEPTH};
