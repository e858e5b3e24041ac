// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::state::effect::Effect;
use crate::state::network::NetworkState;
use crate::types::amount::format_amount;
use crate::types::id::ParticipantName;
use crate::verify::{check_invariants, hash_hex, network_state_hash, InvariantViolation};

fn network() -> NetworkState {
    NetworkState::builder()
        .participant("a", 10)
        .participant("b", 10)
        .trust_line("a", "b", 5)
        .build()
        .unwrap()
}

#[test]
fn test_clean_state_passes() {
    assert_eq!(check_invariants(&network()), Ok(()));
}

#[test]
fn test_each_violation_is_reported() {
    let mut state = network();
    state.apply_effect(&Effect::new().add("b", -11)).unwrap();
    assert_eq!(
        check_invariants(&state),
        Err(InvariantViolation::NegativeBalance {
            name: ParticipantName::from("b"),
            balance: -1,
        })
    );

    let mut state = network();
    state.apply_effect(&Effect::new().draw("a", "b", -1)).unwrap();
    assert!(matches!(
        check_invariants(&state),
        Err(InvariantViolation::NegativeUsage { used: -1, .. })
    ));

    let mut state = network();
    state.apply_effect(&Effect::new().draw("a", "b", 6)).unwrap();
    let violation = check_invariants(&state).unwrap_err();
    assert_eq!(
        violation.to_string(),
        "trust line a -> b is overdrawn: used 6 exceeds capacity 5"
    );
}

#[test]
fn test_hash_distinguishes_states() {
    let base = network();
    let mut drawn = network();
    drawn.apply_effect(&Effect::new().draw("a", "b", 1)).unwrap();

    assert_eq!(network_state_hash(&base), network_state_hash(&network()));
    assert_ne!(network_state_hash(&base), network_state_hash(&drawn));
}

#[test]
fn test_hash_depends_on_participant_order() {
    let ab = NetworkState::builder().participant("a", 1).participant("b", 1).build().unwrap();
    let ba = NetworkState::builder().participant("b", 1).participant("a", 1).build().unwrap();
    assert_ne!(network_state_hash(&ab), network_state_hash(&ba));
}

#[test]
fn test_hash_hex_is_64_chars() {
    let hex = hash_hex(&network_state_hash(&network()));
    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(20_000_000), "20M");
    assert_eq!(format_amount(0), "0M");
    assert_eq!(format_amount(2_500_000), "2.5M");
    assert_eq!(format_amount(-10_000_000), "-10M");
    assert_eq!(format_amount(1_250), "0.00125M");
}
