//! Player marks.
//!
//! ## Mark
//!
//! One of exactly two symbols placed on the board. `X` always moves first.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symbol a player places on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks in play order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other mark.
    ///
    /// ```
    /// use tictactoe_core::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Lowercase letter used for rendering.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }

    /// Parse a single board character. Case-insensitive.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Mark {
    type Err = char;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::from_char(c).ok_or(c),
            (Some(c), Some(_)) => Err(c),
            (None, _) => Err(' '),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::ALL {
            assert_ne!(mark, mark.opponent());
            assert_eq!(mark, mark.opponent().opponent());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Mark::X.to_string(), "x");
        assert_eq!(Mark::O.to_string(), "o");
    }

    #[test]
    fn test_parse() {
        assert_eq!("x".parse::<Mark>(), Ok(Mark::X));
        assert_eq!(" O ".parse::<Mark>(), Ok(Mark::O));
        assert_eq!("q".parse::<Mark>(), Err('q'));
        assert!("xo".parse::<Mark>().is_err());
        assert!("".parse::<Mark>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Mark::X).unwrap();
        assert_eq!(json, "\"x\"");
        let mark: Mark = serde_json::from_str("\"o\"").unwrap();
        assert_eq!(mark, Mark::O);
    }
}
