//! Filesystem locations for the settings file and logs.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the XDG config base.
const APP_DIR: &str = "moviestream";

/// Determine the settings file path, searching in priority order.
///
/// `$XDG_CONFIG_HOME/moviestream/settings.conf` wins over
/// `$HOME/.config/moviestream/settings.conf`. Only existing files are returned.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(xdg) = xdg_config.as_deref().filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(xdg).join(APP_DIR).join("settings.conf"));
    }
    if let Some(h) = home.as_deref() {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join(APP_DIR)
                .join("settings.conf"),
        );
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for the client (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Config and logs directories follow `XDG_CONFIG_HOME` and are created.
    ///
    /// Inputs:
    /// - `XDG_CONFIG_HOME` pointed at a temporary directory
    /// - A settings file written under it
    ///
    /// Output:
    /// - `config_dir`/`logs_dir` live under the temp dir and exist
    /// - The settings file is resolved
    fn paths_follow_xdg_config_home() {
        let _guard = crate::config::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let tmp = tempfile::tempdir().expect("tempdir");
        let orig = env::var_os("XDG_CONFIG_HOME");
        unsafe {
            env::set_var("XDG_CONFIG_HOME", tmp.path());
        }

        let cfg = config_dir();
        let logs = logs_dir();
        assert_eq!(cfg, tmp.path().join(APP_DIR));
        assert!(cfg.is_dir());
        assert!(logs.is_dir());

        std::fs::write(cfg.join("settings.conf"), "api_base = /v1\n").expect("write");
        assert_eq!(
            resolve_settings_config_path(),
            Some(cfg.join("settings.conf"))
        );

        unsafe {
            match orig {
                Some(v) => env::set_var("XDG_CONFIG_HOME", v),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
