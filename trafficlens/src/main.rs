use clap::{Parser, Subcommand};
use trafficlens_core::cli;
use trafficlens_core::cli::analyze::{AnalyzeArgs, run_analyze};
use trafficlens_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "trafficlens",
    version,
    about = "trafficlens: access log traffic analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a combined-format access log
    Analyze(AnalyzeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let Cli { command } = Cli::parse();

    init_logging();

    let result = match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
