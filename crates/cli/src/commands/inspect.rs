use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use trustnet_kernel::snapshot::encode::to_json;
use trustnet_kernel::types::{format_amount, Role, TrustLineKind};
use trustnet_kernel::{EngineConfig, Snapshot, TransitionEngine};

use crate::load_engine;

fn engine_at(config: EngineConfig, at: usize) -> anyhow::Result<TransitionEngine> {
    let mut engine = load_engine(config)?;
    engine.go_to(at)?;
    if engine.index() != at {
        tracing::warn!(requested = at, shown = engine.index(), "step index clamped");
    }
    Ok(engine)
}

/// The renderer JSON frame for step `at`, as `inspect --json` prints it.
pub fn render_json(config: EngineConfig, at: usize) -> anyhow::Result<String> {
    let engine = engine_at(config, at)?;
    Ok(to_json(&engine.snapshot(), true)?)
}

pub fn run(config: EngineConfig, at: usize, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", render_json(config, at)?);
        return Ok(());
    }
    let engine = engine_at(config, at)?;
    print_snapshot(&engine.snapshot());
    Ok(())
}

pub fn print_snapshot(snapshot: &Snapshot<'_>) {
    println!("\nStep {} of {}: {}", snapshot.index, snapshot.step_count - 1, snapshot.step.title);
    println!("{}", snapshot.step.description);
    if !snapshot.path().is_empty() {
        let path: Vec<&str> = snapshot.path().iter().map(|p| p.as_str()).collect();
        println!("Flow: {} ({:.0}%)", path.join(" -> "), snapshot.progress() * 100.0);
    }

    let mut participants = Table::new();
    participants
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Participant", "Role", "Balance", "Received", "Available", "Active"]);

    for p in snapshot.participants() {
        let role = match p.role {
            Role::Member => "member",
            Role::Merchant => "merchant",
        };
        let available = snapshot
            .network
            .available_credit(p.name.as_str())
            .map(format_amount)
            .unwrap_or_default();
        participants.add_row(vec![
            p.name.to_string(),
            role.to_string(),
            format_amount(p.balance),
            p.received.map(format_amount).unwrap_or_default(),
            available,
            marker(snapshot.is_highlighted(p.name.as_str())),
        ]);
    }

    let mut lines = Table::new();
    lines
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["From", "To", "Kind", "Capacity", "Used", "Headroom", "Active"]);

    for line in snapshot.trust_lines() {
        let kind = match line.kind() {
            TrustLineKind::Credit => "credit",
            TrustLineKind::Settlement => "settlement",
        };
        lines.add_row(vec![
            line.from.to_string(),
            line.to.to_string(),
            kind.to_string(),
            format_amount(line.capacity),
            format_amount(line.used),
            format_amount(line.headroom()),
            marker(snapshot.is_line_active(line)),
        ]);
    }

    println!("\nParticipants");
    println!("------------");
    println!("{participants}\n");
    println!("Trust Lines");
    println!("-----------");
    println!("{lines}\n");
}

fn marker(active: bool) -> String {
    if active { "*".to_string() } else { String::new() }
}
