//! Typed path commands, one letter of path data each.

use std::fmt;

/// A path-data command letter together with its absolute/relative mode.
///
/// This is a closed set: matching on it exhaustively is what replaces the
/// character comparisons a textual interpreter would do, so an unhandled
/// command cannot slip through at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum CommandKind {
    MoveAbs,
    MoveRel,
    LineAbs,
    LineRel,
    HorizontalAbs,
    HorizontalRel,
    VerticalAbs,
    VerticalRel,
    CubicAbs,
    CubicRel,
    SmoothCubicAbs,
    SmoothCubicRel,
    QuadraticAbs,
    QuadraticRel,
    SmoothQuadraticAbs,
    SmoothQuadraticRel,
    ArcAbs,
    ArcRel,
    Close,
}

impl CommandKind {
    /// Maps a path-data command letter to its kind.
    pub fn from_letter(letter: u8) -> Option<CommandKind> {
        Some(match letter {
            b'M' => CommandKind::MoveAbs,
            b'm' => CommandKind::MoveRel,
            b'L' => CommandKind::LineAbs,
            b'l' => CommandKind::LineRel,
            b'H' => CommandKind::HorizontalAbs,
            b'h' => CommandKind::HorizontalRel,
            b'V' => CommandKind::VerticalAbs,
            b'v' => CommandKind::VerticalRel,
            b'C' => CommandKind::CubicAbs,
            b'c' => CommandKind::CubicRel,
            b'S' => CommandKind::SmoothCubicAbs,
            b's' => CommandKind::SmoothCubicRel,
            b'Q' => CommandKind::QuadraticAbs,
            b'q' => CommandKind::QuadraticRel,
            b'T' => CommandKind::SmoothQuadraticAbs,
            b't' => CommandKind::SmoothQuadraticRel,
            b'A' => CommandKind::ArcAbs,
            b'a' => CommandKind::ArcRel,
            b'Z' | b'z' => CommandKind::Close,
            _ => return None,
        })
    }

    /// The command letter, as it appears in path data.
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveAbs => 'M',
            CommandKind::MoveRel => 'm',
            CommandKind::LineAbs => 'L',
            CommandKind::LineRel => 'l',
            CommandKind::HorizontalAbs => 'H',
            CommandKind::HorizontalRel => 'h',
            CommandKind::VerticalAbs => 'V',
            CommandKind::VerticalRel => 'v',
            CommandKind::CubicAbs => 'C',
            CommandKind::CubicRel => 'c',
            CommandKind::SmoothCubicAbs => 'S',
            CommandKind::SmoothCubicRel => 's',
            CommandKind::QuadraticAbs => 'Q',
            CommandKind::QuadraticRel => 'q',
            CommandKind::SmoothQuadraticAbs => 'T',
            CommandKind::SmoothQuadraticRel => 't',
            CommandKind::ArcAbs => 'A',
            CommandKind::ArcRel => 'a',
            CommandKind::Close => 'z',
        }
    }

    /// How many parameters one repetition of the command consumes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveAbs
            | CommandKind::MoveRel
            | CommandKind::LineAbs
            | CommandKind::LineRel
            | CommandKind::SmoothQuadraticAbs
            | CommandKind::SmoothQuadraticRel => 2,
            CommandKind::HorizontalAbs
            | CommandKind::HorizontalRel
            | CommandKind::VerticalAbs
            | CommandKind::VerticalRel => 1,
            CommandKind::CubicAbs | CommandKind::CubicRel => 6,
            CommandKind::SmoothCubicAbs
            | CommandKind::SmoothCubicRel
            | CommandKind::QuadraticAbs
            | CommandKind::QuadraticRel => 4,
            CommandKind::ArcAbs | CommandKind::ArcRel => 7,
            CommandKind::Close => 0,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One parsed command: a kind plus its parameter list.
///
/// The parameter list concatenates one or more groups of
/// [`CommandKind::arity`] values; every group repeats the command in the
/// same absolute/relative mode. `Close` carries no parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCommand {
    pub kind: CommandKind,
    pub params: Vec<f32>,
}

impl PathCommand {
    pub fn new(kind: CommandKind, params: Vec<f32>) -> PathCommand {
        PathCommand { kind, params }
    }
}

#[test]
fn letters_round_trip() {
    for letter in b"MmLlHhVvCcSsQqTtAa".iter() {
        let kind = CommandKind::from_letter(*letter).unwrap();
        assert_eq!(kind.letter(), *letter as char);
    }
    // Both close letters map to the same kind; the canonical spelling is
    // the lowercase one.
    assert_eq!(CommandKind::from_letter(b'Z'), Some(CommandKind::Close));
    assert_eq!(CommandKind::from_letter(b'z'), Some(CommandKind::Close));
    assert_eq!(CommandKind::Close.letter(), 'z');
    assert_eq!(CommandKind::from_letter(b'x'), None);
}
