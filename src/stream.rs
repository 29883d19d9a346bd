use std::io::{ErrorKind, Read, Write};

use anyhow::{Context, Result};
use rand::Rng;

use crate::config::Options;
use crate::mutate;
use crate::schedule::{self, Points};

/// Byte totals accumulated over one copy run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Bytes consumed from the input stream.
    pub bytes_read: u64,
    /// Bytes emitted to the output stream, filler included.
    pub bytes_written: u64,
    /// Corruption points that fired.
    pub corruptions: u64,
    /// Split points that fired.
    pub splits: u64,
}

/// The block-by-block copy loop.
///
/// Pulls chunks of at most `block` bytes from the input, damages the ones a
/// scheduled point has come due for, and writes them out, injecting trash
/// filler at split points. At most one block lives in memory at a time (plus
/// the preserve/before/after chunks), so arbitrarily large inputs stream
/// through in bounded space.
///
/// Both schedules trigger against `bytes_read` (the input position), never
/// against the output position, so injected filler does not shift later
/// points.
pub struct Copier<R, W, G> {
    input: R,
    output: W,
    rng: G,
    opts: Options,
    corruption_points: Points,
    split_points: Points,
    bytes_read: u64,
    bytes_written: u64,
    corruptions: u64,
    splits: u64,
}

impl<R: Read, W: Write, G: Rng> Copier<R, W, G> {
    /// Set up a copy run, drawing the split schedule and then the corruption
    /// schedule from `rng`. `opts` is used as given; apply
    /// [`Options::normalized`] first (the [`crate::run`] entry point does).
    pub fn new(input: R, output: W, mut rng: G, opts: Options) -> Self {
        let split_points = schedule::split_points(&mut rng, opts.size, opts.split);
        let corruption_points = schedule::corruption_points(&mut rng, opts.size, opts.corrupt);
        Copier {
            input,
            output,
            rng,
            opts,
            corruption_points,
            split_points,
            bytes_read: 0,
            bytes_written: 0,
            corruptions: 0,
            splits: 0,
        }
    }

    /// Drive the whole run: random lead-in blocks, the preserved header, the
    /// damage loop, random tail blocks. Consumes the copier; the totals come
    /// back in the [`Summary`].
    pub fn run(mut self) -> Result<Summary> {
        if self.opts.before {
            self.put_filler(self.opts.block)?;
            self.put_filler(self.opts.block)?;
        }

        if self.opts.preserve > 0 {
            self.copy_header()?;
        }

        let mut block = vec![0u8; self.opts.block as usize];
        loop {
            let n = self.get_block(&mut block)?;
            if n == 0 {
                break;
            }
            let chunk = &mut block[..n];

            if let Some(point) = self.corruption_points.take_due(self.bytes_read) {
                if self.opts.verbose {
                    eprintln!("inserting corruption here at: {}", point as i64);
                }
                mutate::corrupt_block(&mut self.rng, chunk);
                self.corruptions += 1;
            }
            self.put_block(chunk)?;

            if let Some(point) = self.split_points.take_due(self.bytes_read) {
                if self.opts.verbose {
                    eprintln!("inserting split here at: {}", point as i64);
                }
                self.put_filler(self.opts.trash)?;
                self.splits += 1;
            }
        }

        if self.opts.after {
            self.put_filler(self.opts.block)?;
            self.put_filler(self.opts.block)?;
        }

        self.output.flush().context("flush output")?;
        Ok(Summary {
            bytes_read: self.bytes_read,
            bytes_written: self.bytes_written,
            corruptions: self.corruptions,
            splits: self.splits,
        })
    }

    /// Copy the protected header span through untouched. The span still
    /// counts toward the trigger position, so a point scheduled inside it
    /// fires on the first body block instead.
    fn copy_header(&mut self) -> Result<()> {
        let mut header = vec![0u8; self.opts.preserve as usize];
        let n = self.get_block(&mut header)?;
        self.put_block(&header[..n])
    }

    /// Fill `buf` from the input, coalescing short reads; a return of zero
    /// means end of stream.
    fn get_block(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.input.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).context("read input"),
            }
        }
        self.bytes_read += filled as u64;
        Ok(filled)
    }

    fn put_block(&mut self, data: &[u8]) -> Result<()> {
        self.output.write_all(data).context("write output")?;
        self.bytes_written += data.len() as u64;
        Ok(())
    }

    /// Write `len` fresh random bytes straight to the output, bypassing the
    /// input entirely.
    fn put_filler(&mut self, len: u64) -> Result<()> {
        let mut filler = vec![0u8; len as usize];
        self.rng.fill_bytes(&mut filler);
        self.put_block(&filler)
    }
}
