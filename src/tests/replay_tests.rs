// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::EngineConfig;
use crate::error::KernelError;
use crate::replay::{apply_step, settlements, state_at, timeline, total_settled};
use crate::scenario::{FlowHint, Script, Step};
use crate::state::effect::Effect;
use crate::state::network::NetworkState;
use crate::types::enums::BalanceField;
use crate::types::id::ParticipantName;
use crate::verify::InvariantViolation;

fn network() -> NetworkState {
    NetworkState::builder()
        .participant("buyer", 100)
        .participant("friend", 100)
        .merchant("shop")
        .trust_line("friend", "buyer", 50)
        .trust_line("buyer", "shop", 0)
        .build()
        .unwrap()
}

fn script() -> Script {
    Script::new(vec![
        Step::new("start", "baseline"),
        Step::new("pay", "buyer pays").with_effect(Effect::new().add("buyer", -60)),
        Step::new("borrow", "friend covers the rest")
            .with_flow(FlowHint::new(["friend", "buyer"], 1.0))
            .with_effect(Effect::new().add("friend", -40).draw("friend", "buyer", 40)),
        Step::new("look", "nothing changes").with_flow(FlowHint::new(["buyer", "shop"], 0.5)),
        Step::new("settle", "shop receives")
            .with_effect(Effect::new().set("shop", BalanceField::Received, 100)),
    ])
    .unwrap()
}

#[test]
fn test_state_at_zero_is_initial() {
    let initial = network();
    let state = state_at(&initial, &script(), 0, &EngineConfig::strict()).unwrap();
    assert_eq!(state, initial);
}

#[test]
fn test_state_at_folds_effects_in_order() {
    let initial = network();
    let script = script();
    let cfg = EngineConfig::strict();

    let s2 = state_at(&initial, &script, 2, &cfg).unwrap();
    assert_eq!(s2.participant("buyer").unwrap().balance, 40);
    assert_eq!(s2.participant("friend").unwrap().balance, 60);
    assert_eq!(s2.trust_line("friend", "buyer").unwrap().used, 40);

    // A flow-only step leaves the ledger untouched.
    let s3 = state_at(&initial, &script, 3, &cfg).unwrap();
    assert_eq!(s3, s2);

    let s4 = state_at(&initial, &script, 4, &cfg).unwrap();
    assert_eq!(s4.participant("shop").unwrap().received, Some(100));
}

#[test]
fn test_state_at_clamps_past_the_end() {
    let initial = network();
    let script = script();
    let cfg = EngineConfig::strict();
    let last = state_at(&initial, &script, script.last_index(), &cfg).unwrap();
    let beyond = state_at(&initial, &script, 999, &cfg).unwrap();
    assert_eq!(last, beyond);
}

#[test]
fn test_timeline_matches_state_at() {
    let initial = network();
    let script = script();
    let cfg = EngineConfig::strict();
    let states = timeline(&initial, &script, &cfg).unwrap();
    assert_eq!(states.len(), script.len());
    for (i, state) in states.iter().enumerate() {
        assert_eq!(state, &state_at(&initial, &script, i, &cfg).unwrap(), "index {i}");
    }
}

#[test]
fn test_missing_reference_reports_step_index() {
    let script = Script::new(vec![
        Step::new("start", ""),
        Step::new("ok", "").with_effect(Effect::new().add("buyer", -1)),
        Step::new("bad", "").with_effect(Effect::new().draw("shop", "buyer", 1)),
    ])
    .unwrap();

    let err = state_at(&network(), &script, 2, &EngineConfig::lenient()).unwrap_err();
    assert_eq!(err.step(), Some(2));
    assert_eq!(
        err.root(),
        &KernelError::UnknownTrustLine {
            from: ParticipantName::from("shop"),
            to: ParticipantName::from("buyer"),
        }
    );
    assert!(err.to_string().starts_with("step 2: unknown trust line"));

    // Stopping before the bad step succeeds.
    assert!(state_at(&network(), &script, 1, &EngineConfig::lenient()).is_ok());
}

#[test]
fn test_invariant_checks_follow_config() {
    let script = Script::new(vec![
        Step::new("start", ""),
        Step::new("overdraw", "").with_effect(Effect::new().draw("friend", "buyer", 80)),
    ])
    .unwrap();

    let err = state_at(&network(), &script, 1, &EngineConfig::strict()).unwrap_err();
    assert_eq!(err.step(), Some(1));
    assert!(matches!(
        err.root(),
        KernelError::InvariantViolated(InvariantViolation::OverCapacity { used: 80, capacity: 50, .. })
    ));

    // Lenient replay lets the broken state through for inspection.
    let state = state_at(&network(), &script, 1, &EngineConfig::lenient()).unwrap();
    assert_eq!(state.trust_line("friend", "buyer").unwrap().used, 80);
}

#[test]
fn test_apply_step_without_effect_is_a_no_op() {
    let mut state = network();
    apply_step(&mut state, &script(), 3, &EngineConfig::strict()).unwrap();
    assert_eq!(state, network());
}

#[test]
fn test_settlements_only_count_merchants() {
    let script = Script::new(vec![
        Step::new("start", ""),
        Step::new("settle", "").with_effect(Effect::new().set("shop", BalanceField::Received, 30)),
        Step::new("not a merchant", "")
            .with_effect(Effect::new().set("buyer", BalanceField::Received, 5)),
        Step::new("settle again", "")
            .with_effect(Effect::new().set("shop", BalanceField::Received, 70)),
    ])
    .unwrap();

    let found = settlements(&network(), &script, &EngineConfig::strict()).unwrap();
    let steps: Vec<usize> = found.iter().map(|s| s.step).collect();
    assert_eq!(steps, vec![1, 3]);
    assert_eq!(total_settled(&found), 100);
}
