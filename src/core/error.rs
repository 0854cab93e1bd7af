//! Error types.
//!
//! Invalid moves are expected during play: the game loop reports them to the
//! display and asks again. Nothing here is fatal.

/// Why a proposed move cannot be played.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Raw input could not be read as a position.
    #[error("not a position: {0:?}")]
    NotANumber(String),

    /// Position lies outside the board.
    #[error("position {position} is outside a board of {cells} cells")]
    OutOfRange { position: usize, cells: usize },

    /// Position already holds a mark.
    #[error("position {0} is already taken")]
    Occupied(usize),

    /// No position is left to choose.
    #[error("board is full")]
    BoardFull,
}

/// Errors from parsing a board literal such as `"xo_ _o_ x__"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    /// Neither 9 nor 16 cells.
    #[error("expected 9 or 16 cells, found {0}")]
    CellCount(usize),

    /// Character that is neither a mark nor an empty-cell marker.
    #[error("invalid cell character {0:?}")]
    InvalidCell(char),
}

/// Errors from parsing a game mode selector.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModeParseError {
    #[error("unknown game mode {0:?} (expected hvh, hvc, cvh or cvc)")]
    Unknown(String),
}
