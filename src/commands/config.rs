use crate::core::{config::OverlayConfig, error::Result, output::muted};

/// Print the effective configuration as JSON, with its source path
pub fn execute_config(config: &OverlayConfig) -> Result<()> {
    let path = OverlayConfig::config_path()?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", muted(&format!("# {source}")));
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
