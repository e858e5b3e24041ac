use std::fmt;
use std::str::FromStr;

use trustnet_kernel::{EngineConfig, TransitionEngine};

use crate::commands::inspect::print_snapshot;
use crate::load_engine;

/// A navigation action, as a renderer's previous/next buttons would send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Next,
    Previous,
    GoTo(usize),
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "next" | "n" => Ok(Move::Next),
            "prev" | "previous" | "p" => Ok(Move::Previous),
            other => other
                .strip_prefix("goto:")
                .and_then(|n| n.parse().ok())
                .map(Move::GoTo)
                .ok_or_else(|| format!("unknown move `{other}` (expected next, prev or goto:N)")),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Next => f.write_str("next"),
            Move::Previous => f.write_str("prev"),
            Move::GoTo(n) => write!(f, "goto:{n}"),
        }
    }
}

/// Applies `moves` in order and returns the final index.
pub fn apply(engine: &mut TransitionEngine, moves: &[Move]) -> anyhow::Result<usize> {
    for mv in moves {
        let changed = match mv {
            Move::Next => engine.next()?,
            Move::Previous => engine.previous()?,
            Move::GoTo(n) => engine.go_to(*n)?,
        };
        if changed {
            tracing::info!(%mv, index = engine.index(), title = %engine.current_step().title, "moved");
        } else {
            tracing::info!(%mv, index = engine.index(), "boundary, no change");
        }
    }
    Ok(engine.index())
}

pub fn run(config: EngineConfig, moves: &[Move]) -> anyhow::Result<()> {
    let mut engine = load_engine(config)?;
    apply(&mut engine, moves)?;
    print_snapshot(&engine.snapshot());
    Ok(())
}
