//! A tokenizer for SVG path data strings.
//!
//! The grammar is the SVG one: a command letter followed by a number list
//! whose entries are separated by commas, whitespace, or nothing at all
//! where a sign or decimal point makes the boundary unambiguous
//! (`M10-20l30.1.5` is two commands and four numbers). The two boolean
//! flags of an arc command are single `0`/`1` digits and need no separator
//! before the value that follows them.
//!
//! [`PathParser`] yields one [`PathCommand`] per command letter, with all
//! of its repeated parameter groups collected into a single parameter
//! list; deciding what the repetitions mean is left to the replay step.

use trazo_path::{replay, Build, CommandKind, PathBuilder, PathCommand};

use crate::error::ParserError;

/// Builds a path object from a path-data string.
///
/// The whole string is tokenized before any operation is emitted, so
/// either the complete operation sequence for the path is produced or an
/// error pointing at the offending byte (or command index) is returned and
/// the builder stays untouched.
///
/// # Examples
///
/// ```
/// use trazo_path::Path;
/// use trazo_svg::build_path;
///
/// let path = build_path(Path::builder(), "M 0 0 L 10 0 10 10 L 0 10 z").unwrap();
/// ```
pub fn build_path<B>(mut builder: B, src: &str) -> Result<B::PathType, ParserError>
where
    B: PathBuilder + Build,
{
    let commands = parse_path(src)?;
    replay(&commands, &mut builder)?;

    Ok(builder.build())
}

/// Tokenizes a whole path-data string into typed commands.
pub fn parse_path(src: &str) -> Result<Vec<PathCommand>, ParserError> {
    PathParser::new(src).collect()
}

/// An iterator over the commands of a path-data string.
///
/// Lexing stops at the first malformed byte; the error is yielded once and
/// the iterator is exhausted afterwards.
#[derive(Clone, Debug)]
pub struct PathParser<'l> {
    src: &'l [u8],
    pos: usize,
}

impl<'l> PathParser<'l> {
    pub fn new(src: &'l str) -> PathParser<'l> {
        PathParser {
            src: src.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(b) = self.peek() {
            if b == b',' || b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn at_number_start(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9' | b'+' | b'-' | b'.'))
    }

    fn parse_number(&mut self) -> Result<f32, ParserError> {
        let start = self.pos;

        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }

        let mut digits = false;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
            digits = true;
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
                digits = true;
            }
        }
        if !digits {
            return Err(ParserError::Number { position: start });
        }

        // An exponent is only consumed when it is complete; `10e` is the
        // number 10 followed by a stray letter.
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if matches!(self.peek(), Some(b'0'..=b'9')) {
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            } else {
                self.pos = mark;
            }
        }

        std::str::from_utf8(&self.src[start..self.pos])
            .ok()
            .and_then(|text| text.parse().ok())
            .ok_or(ParserError::Number { position: start })
    }

    fn parse_flag(&mut self) -> Result<f32, ParserError> {
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(0.0)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(1.0)
            }
            _ => Err(ParserError::Flag { position: self.pos }),
        }
    }
}

impl<'l> Iterator for PathParser<'l> {
    type Item = Result<PathCommand, ParserError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_separators();
        let letter = self.peek()?;

        let kind = match CommandKind::from_letter(letter) {
            Some(kind) => kind,
            None => {
                let err = ParserError::Command { position: self.pos };
                self.pos = self.src.len();
                return Some(Err(err));
            }
        };
        self.pos += 1;

        let mut params = Vec::new();
        if kind != CommandKind::Close {
            let arity = kind.arity();
            let is_arc = matches!(kind, CommandKind::ArcAbs | CommandKind::ArcRel);
            loop {
                self.skip_separators();
                if !self.at_number_start() {
                    break;
                }
                // Arc flags are bare digits at fixed positions in each
                // group.
                let offset = params.len() % arity;
                let value = if is_arc && (offset == 3 || offset == 4) {
                    self.parse_flag()
                } else {
                    self.parse_number()
                };
                match value {
                    Ok(value) => params.push(value),
                    Err(err) => {
                        self.pos = self.src.len();
                        return Some(Err(err));
                    }
                }
            }
        }

        Some(Ok(PathCommand::new(kind, params)))
    }
}

#[cfg(test)]
use trazo_path::{Path, PathOp};
#[cfg(test)]
use trazo_path::math::point;

#[test]
fn commands_group_their_repetitions() {
    let commands = parse_path("M 10 20 30 40 L50,60l1-2z").unwrap();

    assert_eq!(
        commands,
        vec![
            PathCommand::new(CommandKind::MoveAbs, vec![10.0, 20.0, 30.0, 40.0]),
            PathCommand::new(CommandKind::LineAbs, vec![50.0, 60.0]),
            PathCommand::new(CommandKind::LineRel, vec![1.0, -2.0]),
            PathCommand::new(CommandKind::Close, vec![]),
        ]
    );
}

#[test]
fn compact_numbers_lex_on_sign_and_dot_boundaries() {
    let commands = parse_path("M10-20l30.1.5.1-20").unwrap();

    assert_eq!(
        commands,
        vec![
            PathCommand::new(CommandKind::MoveAbs, vec![10.0, -20.0]),
            PathCommand::new(CommandKind::LineRel, vec![30.1, 0.5, 0.1, -20.0]),
        ]
    );
}

#[test]
fn exponents_and_leading_dots() {
    let commands = parse_path("L 1e2,-.5 +3.25e-1 4.").unwrap();

    assert_eq!(
        commands,
        vec![PathCommand::new(
            CommandKind::LineAbs,
            vec![100.0, -0.5, 0.325, 4.0]
        )]
    );
}

#[test]
fn arc_flags_are_single_digits() {
    let commands = parse_path("M0,0 a1.5,1.5,0,1,0,5,5 A2,2 0 0112 12").unwrap();

    assert_eq!(
        commands,
        vec![
            PathCommand::new(CommandKind::MoveAbs, vec![0.0, 0.0]),
            PathCommand::new(
                CommandKind::ArcRel,
                vec![1.5, 1.5, 0.0, 1.0, 0.0, 5.0, 5.0]
            ),
            PathCommand::new(
                CommandKind::ArcAbs,
                vec![2.0, 2.0, 0.0, 0.0, 1.0, 12.0, 12.0]
            ),
        ]
    );
}

#[test]
fn bad_arc_flag_is_rejected() {
    let err = parse_path("M0,0 a1,1,0,2,0,5,5").unwrap_err();
    assert!(matches!(err, ParserError::Flag { .. }));
}

#[test]
fn unknown_letter_is_rejected() {
    let err = parse_path("M 0 0 X 1 1").unwrap_err();
    assert_eq!(err, ParserError::Command { position: 6 });
}

#[test]
fn truncated_number_is_rejected() {
    let err = parse_path("L 10 .").unwrap_err();
    assert_eq!(err, ParserError::Number { position: 5 });
}

#[test]
fn build_path_emits_operations() {
    let path = build_path(Path::builder(), "M 0 0 L 10 0 10 10 z").unwrap();
    let ops: Vec<PathOp> = path.iter().collect();

    assert_eq!(
        ops,
        vec![
            PathOp::MoveTo(point(0.0, 0.0)),
            PathOp::LineTo(point(10.0, 0.0)),
            PathOp::LineTo(point(10.0, 10.0)),
            PathOp::Close,
        ]
    );
}

#[test]
fn build_path_rejects_odd_parameter_counts() {
    // Two parameters short of a 2-arity multiple: nothing is emitted.
    let result = build_path(Path::builder(), "M 0 0 L 10");
    assert!(matches!(result, Err(ParserError::Replay(_))));
}
