pub mod lexer;
pub mod macros;
pub mod errors;
pub mod meta;

extern crate regex;
