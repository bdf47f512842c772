//! DDL parsing
//!
//! Parsing happens in two layers: `script` does statement-level scanning
//! (splitting dumps, peeling DROP TABLE preambles and comment lines) with
//! regexes, and `table_parser` turns one CREATE TABLE statement into a
//! dialect-neutral [`crate::model::Table`] by walking the token stream.

mod script;
mod table_parser;
mod token_parser_base;

pub use script::{split_preamble, split_statements};
pub use table_parser::parse_create_table;
pub use token_parser_base::TokenParser;
