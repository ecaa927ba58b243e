//! **gridle-input** — Line-oriented input loading and parsing.
//!
//! The resource-owning edge of the *gridle* workspace: [`LineReader`] walks
//! a file line by line and can rewind for multi-pass solutions, the
//! [`Parser`] trait pairs a reader with one input format, and the free
//! functions in [`parse`] turn delimited fields into positions and float
//! vectors.

pub mod parse;
pub mod reader;

pub use parse::{
    ParseError, parse_long_position, parse_position, parse_vec2, parse_vec3, split_trim,
};
pub use reader::{LineReader, Lines, Parser};
