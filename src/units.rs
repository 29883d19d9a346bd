use anyhow::{bail, Context, Result};

/// Parse a human-friendly byte count like `1024`, `64k` or `2Mb`.
///
/// Grammar: `digits [k|m|g] [b]`, case-insensitive, matched against the whole
/// string. The multiplier letter scales by a power of ten (`1k` = 1000,
/// `1m` = 10^6, `1g` = 10^9); a trailing `b` switches it to the power-of-two
/// equivalent (`1kb` = 1024, `1mb` = 2^20, `1gb` = 2^30). A bare `b` after
/// the digits is accepted and leaves the count unscaled.
pub fn parse_size(text: &str) -> Result<u64> {
    let digits_end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    if digits_end == 0 {
        bail!("the unit in '{text}' is unknown");
    }
    let count: u64 = text[..digits_end]
        .parse()
        .with_context(|| format!("the count in '{text}' does not fit in 64 bits"))?;

    let mut suffix = text[digits_end..].chars().peekable();
    let exponent: u32 = match suffix.peek().map(|c| c.to_ascii_lowercase()) {
        Some('k') => {
            suffix.next();
            1
        }
        Some('m') => {
            suffix.next();
            2
        }
        Some('g') => {
            suffix.next();
            3
        }
        _ => 0,
    };
    let binary = match suffix.next() {
        None => false,
        Some(c) if c.eq_ignore_ascii_case(&'b') => true,
        Some(_) => bail!("the unit in '{text}' is unknown"),
    };
    if suffix.next().is_some() {
        bail!("the unit in '{text}' is unknown");
    }

    let multiplier = if binary {
        1u64 << (10 * exponent)
    } else {
        10u64.pow(3 * exponent)
    };
    count
        .checked_mul(multiplier)
        .with_context(|| format!("the size '{text}' overflows a 64-bit byte count"))
}
