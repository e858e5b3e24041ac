// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::EngineConfig;
use crate::error::KernelError;
use crate::replay::{settlements, state_at, timeline, total_settled};
use crate::scenario::demo::{self, ABBAS, DAVOOD, HADI, HOSSEIN, PURCHASES, SAEED, STORE};
use crate::scenario::{FlowHint, Script, Step};
use crate::state::effect::Effect;
use crate::verify::check_invariants;

const M: i64 = 1_000_000;

#[test]
fn test_script_shape_is_validated() {
    assert_eq!(Script::new(Vec::new()).unwrap_err(), KernelError::EmptyScript);

    let err = Script::new(vec![Step::new("start", "").with_effect(Effect::new().add("a", 1))])
        .unwrap_err();
    assert_eq!(err.step(), Some(0));
    assert_eq!(err.root(), &KernelError::BaselineEffect);

    let err = Script::new(vec![
        Step::new("start", ""),
        Step::new("bad", "").with_flow(FlowHint::new(["a"], 1.5)),
    ])
    .unwrap_err();
    assert_eq!(err.step(), Some(1));
    assert!(matches!(err.root(), KernelError::InvalidProgress { .. }));
}

#[test]
fn test_demo_topology() {
    let network = demo::network().unwrap();
    assert_eq!(network.participant_count(), 6);
    assert_eq!(network.trust_line_count(), 6);
    let merchants: Vec<&str> = network.merchants().map(|p| p.name.as_str()).collect();
    assert_eq!(merchants, vec![STORE]);
    assert_eq!(network.trust_line(SAEED, STORE).unwrap().capacity, 0);
    assert_eq!(network.incoming(SAEED).count(), 2);
    assert_eq!(network.outgoing(DAVOOD).count(), 2);
}

#[test]
fn test_invariants_hold_at_every_index() {
    let states = timeline(
        &demo::network().unwrap(),
        &demo::script().unwrap(),
        &EngineConfig::lenient(),
    )
    .unwrap();
    for (i, state) in states.iter().enumerate() {
        check_invariants(state).unwrap_or_else(|v| panic!("index {i}: {v}"));
        for line in state.trust_lines() {
            assert!(0 <= line.used && line.used <= line.capacity, "index {i}");
        }
        for participant in state.participants() {
            assert!(participant.balance >= 0, "index {i}");
        }
    }
}

#[test]
fn test_total_settled_equals_all_purchases() {
    let found = settlements(
        &demo::network().unwrap(),
        &demo::script().unwrap(),
        &EngineConfig::strict(),
    )
    .unwrap();
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|s| s.merchant.as_str() == STORE));
    assert_eq!(total_settled(&found), 20 * M + 40 * M + 80 * M);
    assert_eq!(total_settled(&found), PURCHASES.iter().sum::<i64>());
}

#[test]
fn test_capacity_raise_leaves_sixty_million_headroom() {
    let state = state_at(
        &demo::network().unwrap(),
        &demo::script().unwrap(),
        demo::CAPACITY_RAISE_STEP,
        &EngineConfig::strict(),
    )
    .unwrap();
    let line = state.trust_line(ABBAS, SAEED).unwrap();
    assert_eq!(line.capacity, 70 * M);
    assert_eq!(line.used, 10 * M);
    assert_eq!(line.headroom(), 60 * M);
}

#[test]
fn test_chained_purchase_moves_abbas_and_his_line() {
    let initial = demo::network().unwrap();
    let script = demo::script().unwrap();
    let cfg = EngineConfig::strict();

    let before = state_at(&initial, &script, demo::SPLIT_PURCHASE_END, &cfg).unwrap();
    let after = state_at(&initial, &script, script.last_index(), &cfg).unwrap();

    let balance = |s: &crate::state::network::NetworkState| s.participant(ABBAS).unwrap().balance;
    let used = |s: &crate::state::network::NetworkState| s.trust_line(ABBAS, SAEED).unwrap().used;

    assert_eq!(balance(&before) - balance(&after), 40 * M);
    assert_eq!(used(&after) - used(&before), 50 * M);
    assert_eq!(used(&before), 10 * M);
}

#[test]
fn test_final_ledger() {
    let initial = demo::network().unwrap();
    let script = demo::script().unwrap();
    let end = state_at(&initial, &script, script.last_index(), &EngineConfig::strict()).unwrap();

    let balance = |name: &str| end.participant(name).unwrap().balance;
    assert_eq!(balance(SAEED), 0);
    assert_eq!(balance(HOSSEIN), 50 * M);
    assert_eq!(balance(ABBAS), 0);
    assert_eq!(balance(HADI), 70 * M);
    assert_eq!(balance(DAVOOD), 40 * M);
    assert_eq!(end.participant(STORE).unwrap().received, Some(80 * M));

    assert_eq!(end.trust_line(HOSSEIN, SAEED).unwrap().used, 50 * M);
    assert_eq!(end.trust_line(DAVOOD, ABBAS).unwrap().used, 10 * M);
    assert_eq!(end.trust_line(HADI, HOSSEIN).unwrap().used, 0);
}
