//! Snapshot encoding for out-of-process renderers.

use serde::Serialize;

use crate::snapshot::Snapshot;

#[derive(Serialize)]
struct Frame<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot<'a>,
    path: &'a [crate::types::id::ParticipantName],
    progress: f64,
    active_lines: Vec<usize>,
}

/// Encodes a snapshot as JSON, adding the resolved path, progress and the
/// positions of the active trust lines so a renderer needs no kernel logic.
pub fn to_json(snapshot: &Snapshot<'_>, pretty: bool) -> serde_json::Result<String> {
    let active_lines = snapshot
        .trust_lines()
        .enumerate()
        .filter(|(_, line)| snapshot.is_line_active(line))
        .map(|(i, _)| i)
        .collect();
    let frame = Frame {
        snapshot,
        path: snapshot.path(),
        progress: snapshot.progress(),
        active_lines,
    };
    if pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
}
