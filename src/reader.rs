mod lexer;
mod parser;

pub use self::parser::Opening;

use anyhow::Result;
use parser::Parser;
use std::path::PathBuf;

pub fn parse_openings_file(catalogue_path: &PathBuf) -> Result<Vec<Opening>> {
    Parser::parse_file(catalogue_path)
}
