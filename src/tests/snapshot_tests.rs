// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::EngineConfig;
use crate::engine::TransitionEngine;
use crate::scenario::demo::{ABBAS, DAVOOD, HOSSEIN, SAEED, STORE};
use crate::snapshot::encode::to_json;

#[test]
fn test_baseline_snapshot_has_no_flow() {
    let engine = TransitionEngine::demo(EngineConfig::strict()).unwrap();
    let snap = engine.snapshot();
    assert_eq!(snap.index, 0);
    assert_eq!(snap.step_count, 16);
    assert!(snap.path().is_empty());
    assert_eq!(snap.progress(), 0.0);
    assert!(snap.trust_lines().all(|l| !snap.is_line_active(l)));
}

#[test]
fn test_partial_progress_and_highlighting() {
    let mut engine = TransitionEngine::demo(EngineConfig::strict()).unwrap();
    engine.go_to(10).unwrap();
    let snap = engine.snapshot();

    let path: Vec<&str> = snap.path().iter().map(|p| p.as_str()).collect();
    assert_eq!(path, vec![HOSSEIN, SAEED, ABBAS, DAVOOD]);
    assert!((snap.progress() - 0.3).abs() < f64::EPSILON);
    assert!(snap.is_highlighted(DAVOOD));
    assert!(!snap.is_highlighted(STORE));

    let active: Vec<(&str, &str)> = snap
        .trust_lines()
        .filter(|l| snap.is_line_active(l))
        .map(|l| (l.from.as_str(), l.to.as_str()))
        .collect();
    assert_eq!(
        active,
        vec![(HOSSEIN, SAEED), (ABBAS, SAEED), (DAVOOD, HOSSEIN), (DAVOOD, ABBAS)]
    );
}

#[test]
fn test_json_frame_carries_ledger_and_flow() {
    let mut engine = TransitionEngine::demo(EngineConfig::strict()).unwrap();
    engine.go_to(3).unwrap();
    let json = to_json(&engine.snapshot(), false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["index"], 3);
    assert_eq!(value["step_count"], 16);
    assert_eq!(value["progress"], 1.0);
    assert_eq!(value["path"], serde_json::json!([SAEED, STORE]));
    // Only the settlement edge joins the two highlighted participants.
    assert_eq!(value["active_lines"], serde_json::json!([5]));

    let participants = value["network"]["participants"].as_array().unwrap();
    assert_eq!(participants.len(), 6);
    assert_eq!(participants[0]["name"], SAEED);
    assert_eq!(participants[0]["balance"], 10_000_000);
    assert!(participants[0].get("received").is_none());
    assert_eq!(participants[5]["role"], "merchant");
    assert_eq!(participants[5]["received"], 20_000_000);

    let lines = value["network"]["trust_lines"].as_array().unwrap();
    assert_eq!(lines[0]["from"], HOSSEIN);
    assert_eq!(lines[0]["capacity"], 50_000_000);
    assert_eq!(lines[0]["used"], 0);
}
