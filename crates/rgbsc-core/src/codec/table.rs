// crates/rgbsc-core/src/codec/table.rs
//
// A validated profile flattened into lookup tables. Encoder and decoder
// share one `Codec`, so the transition rule cannot drift between them.

use crate::error::Result;
use crate::profile::defaults::standard_profile;
use crate::profile::profile::Profile;
use crate::signal::color::ColorState;
use crate::signal::transition::{ring_distance, split_byte, Signal, Symbol, RING_LEN};
use crate::validate::validate_profile;

/// What an incoming color means to the decoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Closed,
    EndMark,
    AltMark,
    /// Data color in the given ring slot.
    Data(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Codec {
    ring: [ColorState; 5],
    offsets: [u8; 8],
    roles: [Role; 8],
    end_mark: ColorState,
    max_idle: u32,
    strict: bool,
}

impl Codec {
    pub fn new(profile: &Profile) -> Result<Self> {
        validate_profile(profile)?;
        Ok(Self::build(profile))
    }

    /// The reference assignment (White ends bytes, Yellow is the spare mark).
    pub fn standard() -> Self {
        Self::build(&standard_profile())
    }

    // Caller guarantees `p` passed validation: ring, marks and Dark then
    // cover all eight colors exactly once.
    fn build(p: &Profile) -> Self {
        let mut roles = [Role::Closed; 8];
        roles[p.end_mark.index()] = Role::EndMark;
        roles[p.alt_mark.index()] = Role::AltMark;
        for (slot, c) in p.ring.iter().enumerate() {
            roles[c.index()] = Role::Data(slot as u8);
        }
        Self {
            ring: p.ring,
            offsets: p.offsets,
            roles,
            end_mark: p.end_mark,
            max_idle: p.max_idle,
            strict: p.strict,
        }
    }

    #[inline]
    pub fn role(&self, c: ColorState) -> Role {
        self.roles[c.index()]
    }

    #[inline]
    pub fn offset_for(&self, previous: ColorState) -> u8 {
        self.offsets[previous.index()]
    }

    #[inline]
    pub fn end_mark(&self) -> ColorState {
        self.end_mark
    }

    #[inline]
    pub fn max_idle(&self) -> u32 {
        self.max_idle
    }

    #[inline]
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn next_color(&self, symbol: Symbol, previous: ColorState) -> ColorState {
        let slot = (symbol.value() + self.offset_for(previous)) % RING_LEN;
        self.ring[slot as usize]
    }

    /// Four data transitions then the end mark.
    pub fn encode_byte(&self, byte: u8, previous: ColorState) -> [ColorState; 5] {
        let mut out = [self.end_mark; 5];
        let mut prev = previous;
        for (slot, sym) in out.iter_mut().zip(split_byte(byte)) {
            *slot = self.next_color(sym, prev);
            prev = *slot;
        }
        out
    }

    pub fn recover_symbol(&self, incoming: ColorState, previous: ColorState) -> std::result::Result<Symbol, Signal> {
        if incoming == previous {
            return Err(Signal::Idle);
        }
        match self.role(incoming) {
            Role::Closed => Err(Signal::ChannelClosed),
            Role::EndMark => Err(Signal::Mark1),
            Role::AltMark => Err(Signal::Mark2),
            Role::Data(base) => Ok(Symbol::new(ring_distance(base, self.offset_for(previous)) % 4)),
        }
    }

    /// Whether `previous -> incoming` is a transition `next_color` can produce.
    /// Marks and Dark are always reachable; a data color is not when it lands
    /// on the slot the encoder skips after `previous`.
    pub fn is_reachable(&self, incoming: ColorState, previous: ColorState) -> bool {
        match self.role(incoming) {
            Role::Data(base) => ring_distance(base, self.offset_for(previous)) < 4,
            Role::Closed | Role::EndMark | Role::AltMark => true,
        }
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::standard()
    }
}
