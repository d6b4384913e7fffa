use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MoveParseError {
    #[error("Unrecognized move symbol '{symbol}' at position {position}")]
    InvalidSymbol { position: usize, symbol: char },
}

/// A relative turn, interpreted against the direction of the previous step.
///
/// The alphabet is closed: anything outside `L`/`F`/`R` is rejected at the
/// parse boundary and cannot reach walk construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Left,    // L
    Forward, // F
    Right,   // R
}

impl Turn {
    pub const ALPHABET: [Turn; 3] = [Turn::Left, Turn::Forward, Turn::Right];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Self::Left),
            'F' => Some(Self::Forward),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Left => 'L',
            Self::Forward => 'F',
            Self::Right => 'R',
        }
    }

    /// The two alphabet symbols different from `self`; the candidate set for a
    /// single-position mutation.
    pub fn others(self) -> [Turn; 2] {
        match self {
            Self::Left => [Self::Forward, Self::Right],
            Self::Forward => [Self::Left, Self::Right],
            Self::Right => [Self::Left, Self::Forward],
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses a move string over the `L`/`F`/`R` alphabet, failing fast on the
/// first unrecognized symbol.
pub fn parse_moves(input: &str) -> Result<Vec<Turn>, MoveParseError> {
    input
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Turn::from_symbol(symbol).ok_or(MoveParseError::InvalidSymbol { position, symbol })
        })
        .collect()
}

pub fn format_moves(moves: &[Turn]) -> String {
    moves.iter().map(Turn::symbol).collect()
}
