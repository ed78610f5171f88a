//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "rosterview";
const APPLICATION: &str = "rosterview";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, which holds the log file.
///
/// - Linux: `$XDG_CACHE_HOME/rosterview` or `~/.cache/rosterview`
/// - macOS: `~/Library/Caches/dev.rosterview.rosterview`
/// - Windows: `C:\Users\<User>\AppData\Local\rosterview\rosterview\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/rosterview` or `~/.config/rosterview`
/// - macOS: `~/Library/Application Support/dev.rosterview.rosterview`
/// - Windows: `C:\Users\<User>\AppData\Roaming\rosterview\rosterview\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the log file, truncated on every run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Get the path of the fallback view config, if one has been written.
pub fn default_view_config() -> Option<PathBuf> {
    config_dir()
        .map(|dir| dir.join("view.json"))
        .filter(|path| path.is_file())
}
