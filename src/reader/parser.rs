use crate::reader::lexer::{self, Layout, LineError};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// One catalogue entry: classification code, display name and the move
/// sequence of the opening, in playing order.
#[derive(Debug, PartialEq)]
pub struct Opening {
    pub code: String,
    pub name: String,
    pub moves: Vec<String>,
}

#[derive(Default)]
pub struct Parser {
    openings: Vec<Opening>,
}

impl Parser {
    pub fn parse_file(path: &PathBuf) -> Result<Vec<Opening>> {
        let file = File::open(path).with_context(|| {
            format!("Could not open catalogue file {}", path.to_string_lossy())
        })?;

        let mut parser = Parser::default();
        parser.read_lines(BufReader::new(file))?;
        Ok(parser.openings)
    }

    /// One record per line, in input order. The first bad line aborts
    /// the whole run, identified by number and raw content.
    fn read_lines(&mut self, input: impl BufRead) -> Result<()> {
        let mut line_number = 0u32;

        for line_result in input.lines() {
            line_number += 1;
            let line = line_result?;

            let opening = parse_line(&line).with_context(|| {
                format!("Bad catalogue entry at line {}: '{}'", line_number, line)
            })?;
            self.openings.push(opening);
        }

        Ok(())
    }
}

fn parse_line(line: &str) -> Result<Opening, LineError> {
    match lexer::detect_layout(line)? {
        Layout::QuotedName => {
            let name = lexer::quoted_name(line)?;
            let fields: Vec<&str> = line.split(',').collect();

            // The quoted name holds an unknown number of commas, so only
            // the first and last comma-separated fields are positionally
            // reliable.
            Ok(Opening {
                code: fields[0].to_string(),
                name: name.to_string(),
                moves: split_moves(fields[fields.len() - 1]),
            })
        }
        Layout::UnquotedName => {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 3 {
                return Err(LineError::FieldCount {
                    expected: 3,
                    found: fields.len(),
                });
            }

            // A trailing annotation after the name is discarded.
            let name = match fields[1].split_once(';') {
                Some((name, _annotation)) => name,
                None => fields[1],
            };

            Ok(Opening {
                code: fields[0].to_string(),
                name: name.to_string(),
                moves: split_moves(fields[2]),
            })
        }
    }
}

/// Naive split-and-trim: an empty field yields a single empty token,
/// not an empty list. Downstream output depends on this.
fn split_moves(field: &str) -> Vec<String> {
    field
        .split(' ')
        .map(|token| token.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_lines(input: &str) -> Result<Vec<Opening>> {
        let mut parser = Parser::default();
        parser.read_lines(Cursor::new(input))?;
        Ok(parser.openings)
    }

    #[test]
    fn quoted_name_line_uses_first_and_last_fields() {
        let opening =
            parse_line(r#"B01,"Scandinavian Defense, Modern Variation",d4,d5,exd5,Qxd5"#).unwrap();

        assert_eq!(
            opening,
            Opening {
                code: "B01".to_string(),
                name: "Scandinavian Defense, Modern Variation".to_string(),
                moves: vec!["Qxd5".to_string()],
            }
        );
    }

    #[test]
    fn unquoted_name_line_uses_three_fields() {
        let opening = parse_line("C50,Italian Game;old line,e4 e5 Bc4").unwrap();

        assert_eq!(
            opening,
            Opening {
                code: "C50".to_string(),
                name: "Italian Game".to_string(),
                moves: vec!["e4".to_string(), "e5".to_string(), "Bc4".to_string()],
            }
        );
    }

    #[test]
    fn unquoted_name_without_annotation_is_kept_whole() {
        let opening = parse_line("C50,Italian Game,e4 e5").unwrap();
        assert_eq!(opening.name, "Italian Game");
    }

    #[test]
    fn move_tokens_are_trimmed_individually() {
        let opening = parse_line("C50,Italian Game,e4  e5").unwrap();
        assert_eq!(opening.moves, vec!["e4", "", "e5"]);
    }

    #[test]
    fn empty_moves_field_yields_a_single_empty_token() {
        let opening = parse_line("C50,Italian Game,").unwrap();
        assert_eq!(opening.moves, vec![""]);
    }

    #[test]
    fn extra_unquoted_fields_are_ignored() {
        let opening = parse_line("C50,Italian Game,e4 e5,stray").unwrap();
        assert_eq!(opening.moves, vec!["e4", "e5"]);
    }

    #[test]
    fn too_few_unquoted_fields_is_a_field_count_error() {
        assert_eq!(
            parse_line("C50,Italian Game"),
            Err(LineError::FieldCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn short_line_is_malformed() {
        assert!(matches!(
            parse_line("ab"),
            Err(LineError::MalformedLine(_))
        ));
    }

    #[test]
    fn unterminated_quoted_name_is_malformed() {
        assert!(matches!(
            parse_line(r#"B01,"Scandinavian Defense,e4 d5"#),
            Err(LineError::MalformedLine(_))
        ));
    }

    #[test]
    fn input_order_is_preserved() {
        let openings = parse_lines(
            "C50,Italian Game,e4 e5 Bc4\n\
             C51,Evans Gambit,e4 e5 Nf3 Nc6 Bc4 Bc5 b4\n\
             B01,\"Scandinavian Defense\",e4 d5\n",
        )
        .unwrap();

        let codes: Vec<&str> = openings.iter().map(|o| o.code.as_str()).collect();
        assert_eq!(codes, vec!["C50", "C51", "B01"]);
    }

    #[test]
    fn first_bad_line_aborts_and_names_the_line() {
        let error = parse_lines("C50,Italian Game,e4 e5\nab\nC51,Evans Gambit,e4\n")
            .unwrap_err();

        let message = format!("{:#}", error);
        assert!(message.contains("line 2"), "unexpected message: {}", message);
        assert!(message.contains("'ab'"), "unexpected message: {}", message);
    }
}
