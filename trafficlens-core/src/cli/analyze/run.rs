use crate::cli::analyze::AnalyzeArgs;
use crate::cli::analyze::error::AnalyzeError;
use crate::cli::analyze::render::{render_json, render_text};
use crate::conf::{TrafficlensConfig, load_config_or_default};
use crate::ingest::{IngestSummary, ingest};
use crate::logging::{OutputMode, default_output_mode};
use crate::stats::{StatsAggregator, StatsSnapshot};
use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Result of analyzing one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub file: PathBuf,
    pub summary: IngestSummary,
    pub stats: StatsSnapshot,
}

pub fn analyze_file(path: &Path, cfg: &TrafficlensConfig) -> Result<Analysis, AnalyzeError> {
    if !path.exists() {
        return Err(AnalyzeError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if path.is_dir() {
        return Err(AnalyzeError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| AnalyzeError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut agg = StatsAggregator::new(cfg.analyzer.clone());
    let summary =
        ingest(BufReader::new(file), &mut agg, &cfg.ingest).map_err(|source| {
            AnalyzeError::Ingest {
                path: path.to_path_buf(),
                source,
            }
        })?;

    tracing::info!(
        file = %path.display(),
        lines = summary.lines,
        accepted = summary.accepted,
        malformed = summary.malformed,
        "analysis finished"
    );

    Ok(Analysis {
        file: path.to_path_buf(),
        summary,
        stats: agg.snapshot(),
    })
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = load_config_or_default(args.config.as_deref())?;
    let analysis = analyze_file(&args.file, &cfg)?;

    let mode = if args.json {
        OutputMode::Json
    } else if args.plain {
        OutputMode::Plain
    } else {
        default_output_mode()
    };

    match mode {
        OutputMode::Json => println!("{}", render_json(&analysis)?),
        OutputMode::Pretty => print!("{}", render_text(&analysis, true)),
        OutputMode::Plain => print!("{}", render_text(&analysis, false)),
    }

    Ok(())
}
