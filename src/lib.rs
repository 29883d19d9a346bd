//! garble core library.
//!
//! Streams an archive image from a reader to a writer, damaging it on the
//! way, for fault-injection testing of archive readers:
//! - Human-friendly size parsing ("1024", "64k", "2Mb")
//! - Random corruption-point and split-point scheduling over a size hint
//! - A block-by-block copy loop that corrupts single bytes and injects
//!   random trash filler at split points
//! - A preserved header span that shields archive magic from any damage
//! - Optional blocks of pure random bytes before and after the payload
//!
//! The binary wires this to stdin/stdout; the library stays generic over
//! `Read`, `Write` and the entropy source (`rand::Rng`), so tests drive it
//! with in-memory buffers and deterministic generators.

pub mod config;
pub mod mutate;
pub mod schedule;
pub mod stream;
pub mod units;

pub use config::Options;
pub use stream::{Copier, Summary};

use std::io::{Read, Write};

use anyhow::Result;
use rand::Rng;

/// Copy `input` to `output`, applying the damage described by `opts`.
///
/// Clamps the options once, draws both point schedules from `rng`, then
/// drives the copy loop to completion. This is the whole pipeline; the
/// binary is a thin argument-parsing wrapper around it.
pub fn run<R: Read, W: Write, G: Rng>(
    input: R,
    output: W,
    rng: G,
    opts: Options,
) -> Result<Summary> {
    Copier::new(input, output, rng, opts.normalized()).run()
}
