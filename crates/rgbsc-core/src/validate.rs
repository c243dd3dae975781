use crate::error::{Result, RgbError};
use crate::profile::profile::Profile;
use crate::signal::color::ColorState;
use crate::signal::transition::RING_LEN;

/// Largest offset the reference table uses; larger values add nothing mod 5.
pub const MAX_OFFSET: u8 = 5;

pub fn validate_profile(p: &Profile) -> Result<()> {
    // Marks: two distinct, lit colors.
    if p.end_mark == ColorState::Dark || p.alt_mark == ColorState::Dark {
        return Err(RgbError::Validation("marks must not be Dark".into()));
    }
    if p.end_mark == p.alt_mark {
        return Err(RgbError::Validation("end_mark must differ from alt_mark".into()));
    }

    // Ring: five distinct data colors, disjoint from Dark and the marks.
    let mut seen = [false; 8];
    for &c in &p.ring {
        if c == ColorState::Dark || c == p.end_mark || c == p.alt_mark {
            return Err(RgbError::Validation(format!(
                "ring may not contain Dark or a mark color, found {c}"
            )));
        }
        if seen[c.index()] {
            return Err(RgbError::Validation(format!("ring repeats {c}")));
        }
        seen[c.index()] = true;
    }

    for (code, &off) in p.offsets.iter().enumerate() {
        if off > MAX_OFFSET {
            return Err(RgbError::Validation(format!(
                "offset for {} must be <= {MAX_OFFSET}, got {off}",
                ColorState::from_bits(code as u8)
            )));
        }
    }

    // No-repeat: after the color in slot s, symbols 0..=3 must reach every
    // slot except s, which needs offset == s + 1 (mod 5).
    for (slot, &c) in p.ring.iter().enumerate() {
        let off = p.offsets[c.index()];
        if off % RING_LEN != (slot as u8 + 1) % RING_LEN {
            return Err(RgbError::Validation(format!(
                "offset for {c} (slot {slot}) must be congruent to {} mod 5, got {off}",
                slot + 1
            )));
        }
    }

    if p.max_idle == 0 {
        return Err(RgbError::Validation("max_idle must be non-zero".into()));
    }

    Ok(())
}
