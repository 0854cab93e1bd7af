//! Game modes and the player factory.

use std::fmt;
use std::str::FromStr;

use crate::core::{GameRng, Mark, ModeParseError};
use crate::negamax::{NegamaxAi, SearchConfig};

use super::player::{Human, MoveInput, Player};

/// Which seats are human and which are computer. `X` is listed first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsComputer,
    ComputerVsHuman,
    ComputerVsComputer,
}

impl GameMode {
    /// Whether the seat playing `mark` is a computer.
    #[must_use]
    pub fn is_computer(self, mark: Mark) -> bool {
        let (x, o) = match self {
            GameMode::HumanVsHuman => (false, false),
            GameMode::HumanVsComputer => (false, true),
            GameMode::ComputerVsHuman => (true, false),
            GameMode::ComputerVsComputer => (true, true),
        };
        match mark {
            Mark::X => x,
            Mark::O => o,
        }
    }

    /// Short selector: `hvh`, `hvc`, `cvh` or `cvc`.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            GameMode::HumanVsHuman => "hvh",
            GameMode::HumanVsComputer => "hvc",
            GameMode::ComputerVsHuman => "cvh",
            GameMode::ComputerVsComputer => "cvc",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for GameMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hvh" => Ok(GameMode::HumanVsHuman),
            "hvc" => Ok(GameMode::HumanVsComputer),
            "cvh" => Ok(GameMode::ComputerVsHuman),
            "cvc" => Ok(GameMode::ComputerVsComputer),
            _ => Err(ModeParseError::Unknown(s.to_string())),
        }
    }
}

/// Build both players for `mode`: `X` first, `O` second.
///
/// Human seats share clones of `input`. Each computer seat gets its own fork
/// of an RNG seeded from `config.seed`.
pub fn make_players<I>(mode: GameMode, input: I, config: &SearchConfig) -> [Box<dyn Player>; 2]
where
    I: MoveInput + Clone + 'static,
{
    let mut root = GameRng::new(config.seed);
    Mark::ALL.map(|mark| -> Box<dyn Player> {
        if mode.is_computer(mark) {
            Box::new(NegamaxAi::with_rng(mark, config.clone(), root.fork()))
        } else {
            Box::new(Human::new(mark, input.clone()))
        }
    })
}
