use integration_tests::harness::fixture_path;
use std::fs;
use std::path::PathBuf;

pub const ACCESS_LOG: &str = "access.log";

pub fn access_log() -> PathBuf {
    fixture_path(ACCESS_LOG)
}

#[allow(dead_code)]
pub fn access_log_lines() -> Vec<String> {
    fs::read_to_string(access_log())
        .expect("failed to read access.log fixture")
        .lines()
        .map(str::to_string)
        .collect()
}
