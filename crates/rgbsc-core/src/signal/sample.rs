// crates/rgbsc-core/src/signal/sample.rs
//
// Receiver-side sampling model. A camera or sensor polling faster than the
// emitter sees each color several times in a row; the decoder must treat
// those repeats as idle.

use crate::signal::color::ColorState;
use crate::signal::sequence::ColorSequence;

/// Repeat each color `holds[i % holds.len()]` times (at least once).
/// An empty `holds` returns the input unchanged.
pub fn oversample(colors: &[ColorState], holds: &[u32]) -> ColorSequence {
    if holds.is_empty() {
        return ColorSequence::from(colors.to_vec());
    }
    let mut out = ColorSequence::with_capacity(colors.len() * 2);
    for (i, &c) in colors.iter().enumerate() {
        let n = holds[i % holds.len()].max(1);
        for _ in 0..n {
            out.push(c);
        }
    }
    out
}

/// Deterministic hold counts in `1..=max_hold` (LCG; not random-quality).
pub fn hold_pattern(seed: u64, len: usize, max_hold: u32) -> Vec<u32> {
    let max_hold = max_hold.max(1) as u64;
    let mut x = seed;
    (0..len)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((x >> 33) % max_hold) as u32 + 1
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColorState::*;

    #[test]
    fn oversample_repeats_by_pattern() {
        let out = oversample(&[Green, Cyan, White], &[2, 1]);
        assert_eq!(out.as_slice(), &[Green, Green, Cyan, White, White]);
    }

    #[test]
    fn zero_hold_still_emits_once() {
        let out = oversample(&[Green, Cyan], &[0]);
        assert_eq!(out.as_slice(), &[Green, Cyan]);
    }

    #[test]
    fn hold_pattern_is_bounded_and_repeatable() {
        let a = hold_pattern(7, 64, 4);
        let b = hold_pattern(7, 64, 4);
        assert_eq!(a, b);
        assert!(a.iter().all(|&h| (1..=4).contains(&h)));
        assert!(a.iter().any(|&h| h > 1));
    }
}
