use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use trustnet_kernel::replay::timeline;
use trustnet_kernel::state::effect::{Delta, Effect};
use trustnet_kernel::types::format_amount;
use trustnet_kernel::verify::{hash_hex, network_state_hash};
use trustnet_kernel::EngineConfig;

use crate::load_engine;

pub fn run(config: EngineConfig) -> anyhow::Result<()> {
    let engine = load_engine(config)?;
    let states = timeline(engine.initial(), engine.script(), engine.config())?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "Effect", "State Hash"]);

    for (i, (step, state)) in engine.script().steps().iter().zip(&states).enumerate() {
        let effect = step.effect.as_ref().map(summarize).unwrap_or_else(|| "-".to_string());
        let hash = hash_hex(&network_state_hash(state));
        table.add_row(vec![i.to_string(), step.title.clone(), effect, hash[..16].to_string()]);
    }

    println!("\nScenario Timeline\n");
    println!("{table}\n");

    Ok(())
}

/// One-line description of an effect, e.g. `عباس -40M; عباس->سعید +50M`.
pub fn summarize(effect: &Effect) -> String {
    let mut parts = Vec::new();
    for update in &effect.capacity_updates {
        parts.push(format!(
            "{}->{} cap={}",
            update.from,
            update.to,
            format_amount(update.new_capacity)
        ));
    }
    for change in &effect.balance_deltas {
        match change.delta {
            Delta::Add(amount) => parts.push(format!("{} {}", change.participant, signed(amount))),
            Delta::SetField(field, value) => parts.push(format!(
                "{}.{}={}",
                change.participant,
                field.as_str(),
                format_amount(value)
            )),
        }
    }
    if let Some(usage) = &effect.usage_delta {
        parts.push(format!("{}->{} {}", usage.from, usage.to, signed(usage.used_delta)));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join("; ")
    }
}

fn signed(amount: i64) -> String {
    if amount >= 0 {
        format!("+{}", format_amount(amount))
    } else {
        format_amount(amount)
    }
}
