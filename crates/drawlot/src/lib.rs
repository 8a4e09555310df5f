#![doc = include_str!("../README.md")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

// ── Error ────────────────────────────────────────────────────────────

/// Errors from dispatch operations.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DispatchError>;

// ── Draws ────────────────────────────────────────────────────────────

/// Number of draws performed per run.
pub const ITERATIONS: usize = 10;

/// Number of branches a draw can select between.
pub const BRANCHES: u32 = 5;

/// One random draw, always in `[0, 4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw(u8);

impl Draw {
    /// Maps a raw random value into `[0, 4]` by reduction modulo 5.
    ///
    /// The reduction is slightly biased toward the lower residues because
    /// `u32::MAX + 1` is not a multiple of 5. The original dispatcher had
    /// the same bias, so it is kept rather than corrected.
    pub fn from_raw(raw: u32) -> Self {
        Draw((raw % BRANCHES) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────

/// Action A: prints the fixed label `a`.
pub fn action_a(out: &mut impl Write) -> Result<()> {
    writeln!(out, "a")?;
    Ok(())
}

/// Action B: prints the fixed label `b`.
pub fn action_b(out: &mut impl Write) -> Result<()> {
    writeln!(out, "b")?;
    Ok(())
}

/// Writes the outcome for one draw.
///
/// The original branch structure fell through from case 1 into case 2, and
/// that double print is observable behavior: draw 1 produces both the `1`
/// line and the `a` line. Case 1 here encodes both effects explicitly.
/// Draws 0 and 4 match no named branch and print `default`.
pub fn dispatch(draw: Draw, out: &mut impl Write) -> Result<()> {
    match draw.value() {
        1 => {
            writeln!(out, "1")?;
            action_a(out)
        }
        2 => action_a(out),
        3 => action_b(out),
        _ => {
            writeln!(out, "default")?;
            Ok(())
        }
    }
}

/// Runs the full loop: exactly [`ITERATIONS`] draws from `source`, each
/// dispatched to its outcome on `out`.
pub fn run(source: &mut impl DrawSource, out: &mut impl Write) -> Result<()> {
    for _ in 0..ITERATIONS {
        dispatch(Draw::from_raw(source.next_raw()), out)?;
    }
    Ok(())
}

// ── Sources ──────────────────────────────────────────────────────────

/// A supply of raw random values for the dispatch loop.
///
/// The loop owns exactly one source for its whole run. Production code uses
/// [`TimeSeeded`]; tests substitute [`Sequence`] to pin the output.
pub trait DrawSource {
    /// The next raw value. [`Draw::from_raw`] reduces it into `[0, 4]`.
    fn next_raw(&mut self) -> u32;
}

/// Process-lifetime source seeded once from the wall clock, at second
/// resolution.
///
/// Runs started within the same second share a seed and produce identical
/// sequences. That is an accepted property of time-based seeding, not an
/// error.
#[derive(Debug)]
pub struct TimeSeeded {
    rng: StdRng,
}

impl TimeSeeded {
    /// Seeds from the current time.
    pub fn new() -> Self {
        Self::with_seed(chrono::Utc::now().timestamp() as u64)
    }

    /// Seeds from an explicit value. Same seed, same sequence.
    pub fn with_seed(seed: u64) -> Self {
        TimeSeeded {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for TimeSeeded {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSource for TimeSeeded {
    fn next_raw(&mut self) -> u32 {
        self.rng.random()
    }
}

/// Deterministic source that yields a fixed list of values in order,
/// cycling back to the start when exhausted.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<u32>,
    next: usize,
}

impl Sequence {
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "Sequence needs at least one value");
        Sequence { values, next: 0 }
    }
}

impl DrawSource for Sequence {
    fn next_raw(&mut self) -> u32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

// ── Tests ────────────────────────────────────────────────────────────
