use std::path::Path;

use crate::paths;

const LOCAL_CONFIG_FILE: &str = ".techshop.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for:
/// 1. `.techshop.toml` in the current working directory
/// 2. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_if_present(Path::new(LOCAL_CONFIG_FILE)) {
        return Some(content);
    }

    match paths::app_config_path() {
        Ok(path) => read_if_present(&path),
        Err(e) => {
            log::debug!("No config directory available: {}", e);
            None
        }
    }
}

fn read_if_present(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
