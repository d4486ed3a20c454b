pub mod cli;
pub mod diagnostics;
pub mod dialect;
pub mod io;

pub use dialect::{DialectProfile, Registry, Rewriter, SymbolRewriteRule};
