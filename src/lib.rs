//! Lexical front end for the Nocturn scripting language: turns source text
//! into a flat token sequence for a downstream parser.

pub mod error;
pub mod scanner;
pub mod token;

pub use crate::error::{Error, ErrorKind, Result};
pub use crate::scanner::Scanner;
pub use crate::token::{Token, TokenKind};
