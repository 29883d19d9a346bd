#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;

use garble::Options;

/// Run the whole copy loop over arbitrary input, with the damage knobs
/// derived from the first bytes. Beyond the absence of panics, this checks
/// the length accounting: only splits and lead-in/tail blocks add bytes.
fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (knobs, input) = data.split_at(8);
    let opts = Options {
        before: knobs[0] & 1 != 0,
        after: knobs[0] & 2 != 0,
        preserve: u64::from(knobs[1]),
        corrupt: f64::from(knobs[2]) / 64.0,
        split: u64::from(knobs[3] % 8),
        trash: u64::from(knobs[4]),
        size: u64::from(u16::from_le_bytes([knobs[5], knobs[6]])),
        block: u64::from(knobs[7]),
        verbose: false,
    };
    let clamped = opts.clone().normalized();
    let rng = StdRng::seed_from_u64(u64::from_le_bytes(knobs.try_into().unwrap()));

    let mut output = Vec::new();
    let summary = garble::run(Cursor::new(input), &mut output, rng, opts)
        .expect("in-memory copy cannot fail");

    assert_eq!(summary.bytes_read, input.len() as u64);
    let mut expected = summary.bytes_read + summary.splits * clamped.trash;
    if clamped.before {
        expected += 2 * clamped.block;
    }
    if clamped.after {
        expected += 2 * clamped.block;
    }
    assert_eq!(summary.bytes_written, expected);
    assert_eq!(output.len() as u64, summary.bytes_written);
});
