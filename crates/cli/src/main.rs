use clap::{Parser, Subcommand};
use trustnet_cli::commands::walk::Move;
use trustnet_cli::commands::{diff, inspect, timeline, verify, walk};
use trustnet_cli::{engine_config, telemetry};

#[derive(Parser)]
#[command(name = "trustnet")]
#[command(about = "Replay the mutual-credit settlement walk-through step by step", long_about = None)]
struct Cli {
    /// Validate balances and trust-line usage after every step
    #[arg(long, global = true, conflicts_with = "lenient")]
    strict: bool,

    /// Skip post-step validation (default in release builds)
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every step with its effect and resulting state hash
    Timeline,
    /// Show participants and trust lines at a step
    Inspect {
        /// Step index (clamped to the script)
        #[arg(long, short, default_value_t = 0)]
        at: usize,

        /// Print the renderer JSON frame instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Compare the ledger at two steps
    Diff {
        /// From step index
        #[arg(long)]
        from: usize,

        /// To step index
        #[arg(long)]
        to: usize,
    },
    /// Replay the whole script and check invariants, determinism and settlements.
    /// Always replays leniently and rejects --strict/--lenient.
    Verify,
    /// Navigate with a sequence of moves (next, prev, goto:N) and show the result
    Walk {
        #[arg(required = true)]
        moves: Vec<Move>,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let cli = Cli::parse();
    let config = engine_config(cli.strict, cli.lenient);

    match cli.command {
        Commands::Timeline => timeline::run(config),
        Commands::Inspect { at, json } => inspect::run(config, at, json),
        Commands::Diff { from, to } => diff::run(config, from, to),
        Commands::Verify => verify::run(cli.strict, cli.lenient),
        Commands::Walk { moves } => walk::run(config, &moves),
    }
}
