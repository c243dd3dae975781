// crates/rgbsc-core/tests/transition_laws.rs

use rgbsc_core::signal::transition::{is_data_color, DATA_RING};
use rgbsc_core::{next_color, recover_symbol, ColorState, Signal, Symbol};

#[test]
fn symbol_roundtrip_for_every_predecessor() {
    for prev in ColorState::ALL {
        for sym in Symbol::ALL {
            let c = next_color(sym, prev);
            assert_eq!(recover_symbol(c, prev), Ok(sym), "prev={prev} sym={}", sym.value());
        }
    }
}

#[test]
fn next_color_is_always_a_data_color() {
    for prev in ColorState::ALL {
        for sym in Symbol::ALL {
            assert!(is_data_color(next_color(sym, prev)));
        }
    }
}

#[test]
fn data_predecessor_is_never_repeated() {
    for prev in DATA_RING {
        let mut seen = Vec::new();
        for sym in Symbol::ALL {
            let c = next_color(sym, prev);
            assert_ne!(c, prev, "prev={prev} sym={}", sym.value());
            assert!(!seen.contains(&c), "two symbols map to {c} after {prev}");
            seen.push(c);
        }
    }
}

#[test]
fn dark_always_closes_and_never_decodes() {
    for prev in ColorState::ALL {
        let r = recover_symbol(ColorState::Dark, prev);
        if prev == ColorState::Dark {
            assert_eq!(r, Err(Signal::Idle));
        } else {
            assert_eq!(r, Err(Signal::ChannelClosed));
        }
    }
}

#[test]
fn repeats_are_idle() {
    for c in ColorState::ALL {
        assert_eq!(recover_symbol(c, c), Err(Signal::Idle));
    }
}
