//! `trafficlens analyze`
//!
//! Reads one access log front to back and prints the report:
//!
//! file
//! ingest (parse_line per line)
//! StatsAggregator
//! StatsSnapshot
//! render_text / render_json
//!

mod error;
mod render;
mod run;

pub use error::AnalyzeError;
pub use render::{render_json, render_text};
pub use run::{Analysis, analyze_file, run_analyze};

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Access log in combined format
    pub file: PathBuf,

    /// Directory holding trafficlens.hcl (built-in defaults when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,

    /// Disable colors
    #[arg(long)]
    pub plain: bool,
}
