use crate::conf::{ConfigError, load_config};
use std::path::Path;

pub fn check(path: &Path) -> anyhow::Result<()> {
    match load_config(path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ default domain: {}", cfg.analyzer.default_domain);
            println!("✔ url scheme: {}", cfg.analyzer.url_scheme);
            println!(
                "✔ {} tracked crawlers",
                cfg.analyzer.tracked_crawlers.len()
            );
            println!("✔ max line length: {}", cfg.ingest.max_line_length);
            Ok(())
        }
        Err(err) => {
            let hint = config_error_hint(&err);
            let mut msg = err.to_string();
            if let Some(hint) = hint {
                msg.push_str("\n\n");
                msg.push_str(hint);
            }
            Err(anyhow::anyhow!(msg))
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create one with:\n\
             \n\
             trafficlens config init <DIR>",
        ),

        ConfigError::Parse { .. } => Some(
            "Settings are HCL attributes.\n\
             \n\
             Example:\n\
             \n\
             analyzer = {\n\
             \x20 default_domain = \"example.com\"\n\
             }",
        ),

        ConfigError::Invalid { field, .. } => match *field {
            "analyzer.default_domain" => Some(
                "Use a bare host name such as `example.com`, without scheme or path.",
            ),
            "analyzer.url_scheme" => Some("Supported schemes are `http` and `https`."),
            _ => None,
        },
    }
}
