//! Start-up checks for the SSR binary.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use vanmitra_common::{config, DashboardConfig, Dataset};

/// Environment variable naming a dashboard TOML file to validate at start.
pub const CONFIG_ENV: &str = "VANMITRA_CONFIG";

/// Decode the bundled datasets and log any claim-total mismatches.
pub fn check_datasets() -> Result<&'static Dataset> {
    let dataset = Dataset::bundled().map_err(|e| anyhow!("{e}"))?;
    let mismatches = dataset.consistency_report();
    if mismatches.is_empty() {
        info!(
            villages = dataset.map.villages.len(),
            insights = dataset.insights.insights().len(),
            "Bundled datasets loaded"
        );
    } else {
        warn!(count = mismatches.len(), "Bundled datasets loaded with inconsistent claim totals");
    }
    Ok(dataset)
}

/// Validate the file named by [`CONFIG_ENV`], if set. The page itself always
/// renders with the bundled config so server and client agree.
pub fn check_config_override() -> Result<Option<DashboardConfig>> {
    let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    let config = config::load(&path)?;
    if config != DashboardConfig::bundled() {
        warn!(
            "{} differs from the bundled dashboard.toml; rebuild to apply it",
            path.display()
        );
    }
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_datasets_pass_startup_check() {
        let ds = check_datasets().unwrap();
        assert_eq!(ds.map.villages.len(), 9);
    }
}
