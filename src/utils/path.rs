use std::path::{Path, PathBuf};

/// Environment variable that moves the config directory (used by tests and packaging)
pub const CONFIG_DIR_ENV: &str = "HAPPYVISIT_CONFIG_DIR";

/// Get the home directory, with fallback to "/"
pub fn get_home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

/// Get the config directory path (~/.config/happyvisit regardless of OS,
/// unless `HAPPYVISIT_CONFIG_DIR` is set)
pub fn get_config_dir() -> PathBuf {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_home_dir().join(".config").join("happyvisit"),
    }
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Directory holding the log file and the cookie jar
pub fn get_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(get_home_dir)
        .join("happyvisit")
}

pub fn get_log_path() -> PathBuf {
    get_cache_dir().join("happyvisit.log")
}

pub fn get_cookie_path() -> PathBuf {
    get_cache_dir().join("cookies.toml")
}

/// Format a path for display (show ~ for home)
pub fn format_path_for_display(path: &Path) -> String {
    let home_dir = get_home_dir();

    if let Ok(relative) = path.strip_prefix(&home_dir) {
        if relative.as_os_str().is_empty() {
            "~".to_string()
        } else {
            format!("~/{}", relative.to_string_lossy())
        }
    } else {
        path.to_string_lossy().to_string()
    }
}
