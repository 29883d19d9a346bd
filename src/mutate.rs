use rand::Rng;

/// Damage a block in place: one byte, at a uniformly chosen index, is
/// replaced with itself plus one (mod 256). Every other byte is untouched.
///
/// The block must be non-empty; the copy loop never hands an empty block in,
/// because a zero-length read ends the run instead.
pub fn corrupt_block<R: Rng + ?Sized>(rng: &mut R, block: &mut [u8]) {
    let k = rng.gen_range(0..block.len());
    block[k] = block[k].wrapping_add(1);
}
