//! Boundary and hostile-configuration tests for the copy loop.
//!
//! Each one defends against a specific way the tool could wedge or
//! misbehave: a zero size hint, schedules past the end of the stream,
//! degenerate trash/block sizes, densities that parse but mean nothing.

use std::io::Cursor;

use rand::rngs::mock::StepRng;
use rand::Rng;

use garble::{Options, Summary};

fn run_with<G: Rng>(input: &[u8], rng: G, opts: Options) -> (Vec<u8>, Summary) {
    let mut output = Vec::new();
    let summary =
        garble::run(Cursor::new(input), &mut output, rng, opts).expect("copy should succeed");
    (output, summary)
}

#[test]
fn zero_size_hint_fires_splits_on_the_first_blocks() {
    // width = 0 / 3 = 0, so every split offset collapses to 0.0 and the
    // three of them fire on the first three blocks, one per block.
    let input = vec![0xEEu8; 100];
    let opts = Options {
        preserve: 0,
        split: 3,
        size: 0,
        trash: 8,
        block: 8,
        ..Options::default()
    };
    let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
    assert_eq!(summary.splits, 3);
    assert_eq!(summary.bytes_written, 100 + 24);
    assert!(output[8..16].iter().all(|&b| b == 0));
    assert!(output[24..32].iter().all(|&b| b == 0));
    assert!(output[40..48].iter().all(|&b| b == 0));
}

#[test]
fn split_point_past_the_end_never_fires() {
    // size hint says 1000 bytes, the stream holds 10: the single offset at
    // 500 is never reached and stays pending when the input runs out.
    let input = vec![0x11u8; 10];
    let opts = Options {
        preserve: 0,
        split: 1,
        size: 1000,
        ..Options::default()
    };
    let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
    assert_eq!(output, input);
    assert_eq!(summary.splits, 0);
}

#[test]
fn pending_splits_defer_one_block_at_a_time() {
    // Four offsets (4, 12, 20, 28) all fall inside the first two blocks'
    // span, but only one may fire per block; the input ends after two
    // blocks, so two offsets stay pending forever.
    let input = vec![0xBBu8; 32];
    let opts = Options {
        preserve: 0,
        split: 4,
        size: 32,
        trash: 16,
        block: 16,
        ..Options::default()
    };
    let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
    assert_eq!(summary.splits, 2);
    assert_eq!(output.len(), 64);
    assert!(output[..16].iter().all(|&b| b == 0xBB));
    assert!(output[16..32].iter().all(|&b| b == 0x00));
    assert!(output[32..48].iter().all(|&b| b == 0xBB));
    assert!(output[48..].iter().all(|&b| b == 0x00));
}

#[test]
fn zero_trash_degrades_splits_to_markers_of_nothing() {
    // block > trash clamps to 0, which the at-least-one rule then lifts to
    // a single byte; split filler writes zero bytes, so the stream is
    // byte-exact even though a split fired.
    let input = [10u8, 20, 30, 40, 50];
    let opts = Options {
        preserve: 0,
        split: 1,
        size: 5,
        trash: 0,
        block: 1024,
        ..Options::default()
    };
    let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
    assert_eq!(output, input);
    assert_eq!(summary.splits, 1, "the point at 2.5 fires once byte 3 is read");
    assert_eq!(summary.bytes_written, summary.bytes_read);
}

#[test]
fn preserve_longer_than_the_input_copies_what_there_is() {
    let input = vec![0x42u8; 10];
    let opts = Options { preserve: 1000, ..Options::default() };
    let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
    assert_eq!(output, input);
    assert_eq!(summary.bytes_read, 10);
}

#[test]
fn meaningless_densities_schedule_no_corruption() {
    let input: Vec<u8> = (0..200).map(|i| i as u8).collect();
    for density in [0.0, -0.5, f64::NAN] {
        let opts = Options { corrupt: density, size: 200, ..Options::default() };
        let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
        assert_eq!(output, input, "density {density} must schedule nothing");
        assert_eq!(summary.corruptions, 0);
    }
}

#[test]
fn single_byte_blocks_still_stream() {
    let input: Vec<u8> = (0..300).map(|i| i as u8).collect();
    let opts = Options {
        preserve: 0,
        trash: 1,
        block: 1,
        ..Options::default()
    };
    let (output, summary) = run_with(&input, StepRng::new(0, 0), opts);
    assert_eq!(output, input);
    assert_eq!(summary.bytes_read, 300);
}
