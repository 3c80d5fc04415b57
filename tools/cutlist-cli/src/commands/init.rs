//! Write a default config file.

use cutlist_common::config::{config_file_path, AppConfig};

pub fn run(force: bool) -> anyhow::Result<()> {
    let path = config_file_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = AppConfig::default();
    config
        .save()
        .map_err(|e| anyhow::anyhow!("Failed to write config: {e}"))?;

    println!("Wrote default config to {}", path.display());
    println!("  Title: {}", config.report.title);
    println!("  Acts:  {}", config.report.acts.len());

    Ok(())
}
