use crate::conf::types::CONFIG_FILE_NAME;
use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: &Path) -> Result<()> {
    // Refuse to overwrite an existing non-empty directory
    if path.exists() {
        if path.is_file() {
            bail!("{} exists and is not a directory", path.display());
        }

        let is_empty = fs::read_dir(path)?.next().is_none();
        if !is_empty {
            bail!(
                "config directory '{}' already exists and is not empty",
                path.display()
            );
        }
    }

    fs::create_dir_all(path)?;
    write_file(&path.join(CONFIG_FILE_NAME), &template(CONFIG_FILE_NAME)?)?;

    println!("✔ Initialized trafficlens config in {}", path.display());
    println!("✔ Created:");
    println!("  - {CONFIG_FILE_NAME}");
    println!();
    println!("Next steps:");
    println!("  trafficlens config check {}", path.display());
    println!(
        "  trafficlens analyze --config {} access.log",
        path.display()
    );

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
pub(crate) fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name)
        .with_context(|| format!("missing embedded config template: {name}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())?;
    Ok(())
}
