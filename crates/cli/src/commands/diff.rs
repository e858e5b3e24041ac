use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use trustnet_kernel::replay::state_at;
use trustnet_kernel::types::{format_amount, Amount};
use trustnet_kernel::verify::{hash_hex, network_state_hash};
use trustnet_kernel::{EngineConfig, NetworkState};

use crate::load_engine;

/// One field that differs between two states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub subject: String,
    pub field: &'static str,
    pub before: Option<Amount>,
    pub after: Option<Amount>,
}

impl Change {
    /// `after - before`, or `None` when a side is missing or the difference
    /// does not fit an `Amount`.
    pub fn delta(&self) -> Option<Amount> {
        self.after?.checked_sub(self.before?)
    }
}

/// Field-level comparison of two states over the same topology.
pub fn compare(a: &NetworkState, b: &NetworkState) -> Vec<Change> {
    let mut changes = Vec::new();

    for after in b.participants() {
        let Some(before) = a.participant(after.name.as_str()) else {
            continue;
        };
        if before.balance != after.balance {
            changes.push(Change {
                subject: after.name.to_string(),
                field: "balance",
                before: Some(before.balance),
                after: Some(after.balance),
            });
        }
        if before.received != after.received {
            changes.push(Change {
                subject: after.name.to_string(),
                field: "received",
                before: before.received,
                after: after.received,
            });
        }
    }

    for after in b.trust_lines() {
        let Some(before) = a.trust_line(after.from.as_str(), after.to.as_str()) else {
            continue;
        };
        let subject = format!("{} -> {}", after.from, after.to);
        if before.capacity != after.capacity {
            changes.push(Change {
                subject: subject.clone(),
                field: "capacity",
                before: Some(before.capacity),
                after: Some(after.capacity),
            });
        }
        if before.used != after.used {
            changes.push(Change {
                subject,
                field: "used",
                before: Some(before.used),
                after: Some(after.used),
            });
        }
    }

    changes
}

pub fn run(config: EngineConfig, from_index: usize, to_index: usize) -> anyhow::Result<()> {
    let engine = load_engine(config)?;
    let state_a = state_at(engine.initial(), engine.script(), from_index, engine.config())?;
    let state_b = state_at(engine.initial(), engine.script(), to_index, engine.config())?;
    let hash_a = network_state_hash(&state_a);
    let hash_b = network_state_hash(&state_b);

    let status = if hash_a == hash_b { "IDENTICAL" } else { "DRIFTED" };

    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Property", "Value"]);

    summary.add_row(vec!["From Index", &engine.script().clamp(from_index).to_string()]);
    summary.add_row(vec!["From Hash", &hash_hex(&hash_a)]);
    summary.add_row(vec!["To Index", &engine.script().clamp(to_index).to_string()]);
    summary.add_row(vec!["To Hash", &hash_hex(&hash_b)]);
    summary.add_row(vec!["Status", status]);

    println!("\nState Comparison");
    println!("----------------");
    println!("{summary}\n");

    let changes = compare(&state_a, &state_b);
    if changes.is_empty() {
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Subject", "Field", "Before", "After", "Delta"]);

    for change in &changes {
        let show = |v: Option<Amount>| v.map(format_amount).unwrap_or_else(|| "-".to_string());
        let delta = change.delta().map(format_amount).unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            change.subject.clone(),
            change.field.to_string(),
            show(change.before),
            show(change.after),
            delta,
        ]);
    }

    println!("Ledger Changes");
    println!("--------------");
    println!("{table}\n");

    Ok(())
}
