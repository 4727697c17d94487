/// Common test utilities and fixtures
use cadenza_cli::AppConfig;
use std::path::Path;
use tempfile::TempDir;

/// Config pointing at a fresh temp data directory
///
/// The double-click window is short so tests can wait it out quickly.
pub fn test_config() -> (AppConfig, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_for(dir.path());
    (config, dir)
}

/// Config using `data_dir` as the data directory
pub fn config_for(data_dir: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.storage.data_dir = data_dir.join("data");
    config.queue.double_click_ms = 50;
    config
}
