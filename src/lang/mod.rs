/*!
# FPL Language Module

Lexical analysis of FPL source: token classification, the line scanner,
and the diagnostic type shared by the whole crate.

*/

#[macro_use]
mod error;
mod lex;
mod line;

pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use line::Line;

/// Source line number attached to a diagnostic, when one applies.
pub type LineNumber = Option<usize>;

/// Tokens kept per source line; later tokens are a diagnostic.
pub const MAX_LINE_TOKENS: usize = 3;
