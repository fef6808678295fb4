//! Headless replay driver.
//!
//! Reads a line-oriented script, applies it to an engine and writes
//! line-delimited JSON observations.
//!
//! # Script format
//!
//! ```text
//! # comments and blank lines are skipped
//! left
//! right
//! rotate
//! down
//! tick 1200
//! ```
//!
//! `moveLeft`, `moveRight` and `moveDown` are accepted as well. `tick <ms>`
//! feeds a drop timer and applies one gravity drop when it fires.
//!
//! # Environment Variables
//!
//! - `TETRIS_SEED`: RNG seed (default: random)
//! - `TETRIS_PIECES`: fixed piece sequence such as `"OITZ"`, cycled; overrides the seed
//! - `TETRIS_DROP_INTERVAL_MS`: drop interval for `tick` (default: 1000)
//! - `TETRIS_REPLAY_TRACE`: `1` or `true` to emit an observation after every step
//!
//! Unset or blank variables fall back to the defaults. A value that does not
//! parse is an error.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;

use crate::core::{ArenaGrid, GameSnapshot, RandomSource, ScriptedSource, SimpleRng, Tetris};
use crate::input::DropTimer;
use crate::types::{Action, Cell, PieceKind, DEFAULT_DROP_INTERVAL_MS};

/// Script parse failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("line {line}: unknown command '{text}'")]
    UnknownCommand { line: usize, text: String },
    #[error("line {line}: bad tick '{text}'")]
    BadTick { line: usize, text: String },
}

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Action(Action),
    Tick(u32),
}

/// Parse a single script line (`line` is 1-based, for error messages)
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Step>, ReplayError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut parts = trimmed.split_whitespace();
    let head = parts.next().unwrap_or_default();

    if head.eq_ignore_ascii_case("tick") {
        let bad_tick = || ReplayError::BadTick {
            line,
            text: trimmed.to_string(),
        };
        let ms = parts
            .next()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(bad_tick)?;
        if parts.next().is_some() {
            return Err(bad_tick());
        }
        return Ok(Some(Step::Tick(ms)));
    }

    match Action::from_str(head) {
        Some(action) if parts.next().is_none() => Ok(Some(Step::Action(action))),
        _ => Err(ReplayError::UnknownCommand {
            line,
            text: trimmed.to_string(),
        }),
    }
}

/// Replay settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayConfig {
    pub seed: Option<u32>,
    pub pieces: Option<Vec<PieceKind>>,
    pub drop_interval_ms: u32,
    pub trace: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pieces: None,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            trace: false,
        }
    }
}

impl ReplayConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    ///
    /// Unset or blank variables take their defaults; anything else that
    /// fails to parse is an error naming the variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = var("TETRIS_SEED")
            .map(|s| s.parse::<u32>())
            .transpose()
            .context("invalid TETRIS_SEED")?;

        let pieces = var("TETRIS_PIECES")
            .map(|s| {
                s.chars()
                    .map(|c| c.to_string().parse::<PieceKind>())
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
            .context("invalid TETRIS_PIECES")?;

        let drop_interval_ms = var("TETRIS_DROP_INTERVAL_MS")
            .map(|s| s.parse::<u32>())
            .transpose()
            .context("invalid TETRIS_DROP_INTERVAL_MS")?
            .unwrap_or(DEFAULT_DROP_INTERVAL_MS);

        let trace = match var("TETRIS_REPLAY_TRACE").map(|v| v.to_lowercase()) {
            None => false,
            Some(v) if v == "1" || v == "true" => true,
            Some(v) if v == "0" || v == "false" => false,
            Some(v) => {
                anyhow::bail!("invalid TETRIS_REPLAY_TRACE '{v}': expected 1, 0, true or false")
            }
        };

        Ok(Self {
            seed,
            pieces,
            drop_interval_ms,
            trace,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerObservation {
    pub matrix: Vec<Vec<Cell>>,
    pub pos: Position,
    pub score: u32,
}

/// JSON form of a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub steps: usize,
    pub arena: ArenaGrid,
    pub player: PlayerObservation,
}

impl Observation {
    pub fn new(snapshot: &GameSnapshot, steps: usize) -> Self {
        Self {
            steps,
            arena: snapshot.arena,
            player: PlayerObservation {
                matrix: snapshot.player.matrix.to_rows(),
                pos: Position {
                    x: snapshot.player.pos.x,
                    y: snapshot.player.pos.y,
                },
                score: snapshot.player.score,
            },
        }
    }
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub steps: usize,
    pub gravity_drops: usize,
    pub last: Observation,
}

/// Build the engine the config asks for and replay `input` on it
pub fn run_with_config<I: BufRead, W: Write>(
    config: &ReplayConfig,
    input: I,
    out: W,
) -> Result<ReplaySummary> {
    match (&config.pieces, config.seed) {
        (Some(pieces), _) => run(
            Tetris::with_source(ScriptedSource::new(pieces)),
            config,
            input,
            out,
        ),
        (None, Some(seed)) => run(Tetris::new(seed), config, input, out),
        (None, None) => run(
            Tetris::with_source(SimpleRng::from_entropy()),
            config,
            input,
            out,
        ),
    }
}

/// Replay `input` on `game`, writing observations to `out`
pub fn run<R, I, W>(
    mut game: Tetris<R>,
    config: &ReplayConfig,
    input: I,
    mut out: W,
) -> Result<ReplaySummary>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    let mut timer = DropTimer::new(config.drop_interval_ms);
    let mut snapshot = GameSnapshot::default();
    let mut steps = 0usize;
    let mut gravity_drops = 0usize;

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read replay script")?;
        let Some(step) = parse_line(idx + 1, &line)? else {
            continue;
        };

        match step {
            Step::Action(action) => game.apply_action(action),
            Step::Tick(ms) => {
                if timer.advance(ms) {
                    game.move_down();
                    gravity_drops += 1;
                }
            }
        }
        steps += 1;
        debug!("step {steps}: {step:?} score={}", game.score());

        if config.trace {
            game.snapshot_into(&mut snapshot);
            write_observation(&mut out, &Observation::new(&snapshot, steps))?;
        }
    }

    game.snapshot_into(&mut snapshot);
    let last = Observation::new(&snapshot, steps);
    if !config.trace || steps == 0 {
        write_observation(&mut out, &last)?;
    }
    out.flush().context("failed to flush output")?;

    info!(
        "replayed {steps} steps ({gravity_drops} gravity drops), score {}",
        last.player.score
    );
    Ok(ReplaySummary {
        steps,
        gravity_drops,
        last,
    })
}

fn write_observation<W: Write>(out: &mut W, obs: &Observation) -> Result<()> {
    serde_json::to_writer(&mut *out, obs).context("failed to encode observation")?;
    out.write_all(b"\n").context("failed to write observation")?;
    Ok(())
}
