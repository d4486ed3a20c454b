/*!
 * The dialect tables and the machinery which applies them.
 *
 * A dialect profile is a set of rewrite rules for one compiler family and
 * target architecture (armclang, Keil C51, IAR STM8, ...).  Every rule names
 * one vendor symbol and states how that symbol is neutralized so that a
 * standards conforming C front end can parse code written for the vendor's
 * compiler: it is elided, elided along with its argument list, replaced by a
 * constant expression, declared as an inert prototype, or mapped onto a
 * standard type.
 *
 * Profiles are assembled from three kinds of input:
 * 1. The built in tables in [`builtin`], one per supported toolchain.
 * 2. Dialect headers written in preprocessor syntax, read by [`header`].
 * 3. Serialized tables in YAML or JSON, read by [`table`].
 *
 * All three pass through [`ProfileBuilder`], which refuses two conflicting
 * definitions of the same symbol rather than letting the last one win.
 *
 * A finished profile is consumed in one of two ways: the host force includes
 * the text produced by [`prologue`], or it hands the translation unit to the
 * [`rewrite`] module which returns the unit with every vendor token already
 * neutralized.
 */

macro_rules! err {
    ($line:expr, $span:expr, $inner:expr) => {
        Err(crate::dialect::Located::new($line, $span, $inner))
    };
}

pub mod builtin;
pub mod error;
pub mod header;
pub mod lexer;
pub mod profile;
pub mod prologue;
pub mod registry;
pub mod rewrite;
pub mod source;
pub mod table;

pub use error::{DialectError, Located};
pub use header::{load_header, parse_header, HeaderError, HeaderItem};
pub use lexer::{tokenize, Lexer, LexerError};
pub use profile::{
    CompilerFamily, DialectProfile, Origin, ProfileBuilder, ProfileError, Replacement, RuleKind,
    SymbolRewriteRule,
};
pub use prologue::{render_prologue, render_rule, Prologue};
pub use registry::{Registry, RegistryError};
pub use rewrite::{apply, RewriteError, Rewriter};
pub use source::{Source, SourceChar, Span};
pub use table::{Table, TableError, TableFormat};
