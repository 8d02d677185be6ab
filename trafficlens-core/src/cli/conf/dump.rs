use crate::conf::load_config_or_default;
use serde::Serialize;
use std::path::Path;

/// JSON unless `yaml` is set.
pub fn dump(path: Option<&Path>, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config_or_default(path)?;

    if yaml {
        dump_yaml(&cfg)?;
    } else {
        dump_json(&cfg)?;
    }

    Ok(())
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

fn dump_yaml<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_yaml::to_string(value)?;
    println!("{s}");
    Ok(())
}
