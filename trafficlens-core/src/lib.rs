pub mod access_log;
pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod ingest;
pub mod logging;
pub mod stats;
