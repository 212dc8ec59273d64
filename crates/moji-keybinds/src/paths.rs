//! Registry file location per OS family

use std::path::PathBuf;

/// OS family discriminator for registry path resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and any OS family without a dedicated location.
    Other,
}

impl Platform {
    /// Detect the family of the running process. Unknown OS identifiers
    /// resolve to [`Platform::Other`] rather than failing.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

/// Environment values the path resolver consumes.
///
/// A missing value degrades to an empty path segment; any I/O error that
/// results from the odd path surfaces at load time instead of here.
#[derive(Debug, Clone, Default)]
pub struct Env {
    pub app_data: Option<String>,
    pub home: Option<String>,
}

impl Env {
    /// Capture the relevant values from the current process environment.
    pub fn capture() -> Self {
        Env {
            app_data: std::env::var("APPDATA").ok(),
            home: dirs::home_dir()
                .map(|home| home.to_string_lossy().into_owned())
                .or_else(|| std::env::var("HOME").ok()),
        }
    }
}

/// Build the canonical `keybindings.json` path for `platform`.
///
/// Pure string construction: no filesystem access, always produces a path,
/// and is deterministic for a fixed platform and environment.
pub fn registry_path(platform: Platform, env: &Env) -> PathBuf {
    let base = match platform {
        Platform::Windows => PathBuf::from(env.app_data.as_deref().unwrap_or("")),
        Platform::MacOs => PathBuf::from(env.home.as_deref().unwrap_or(""))
            .join("Library")
            .join("Application Support"),
        Platform::Other => PathBuf::from(env.home.as_deref().unwrap_or("")).join(".config"),
    };
    base.join("Code").join("User").join("keybindings.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(app_data: Option<&str>, home: Option<&str>) -> Env {
        Env {
            app_data: app_data.map(String::from),
            home: home.map(String::from),
        }
    }

    #[test]
    fn windows_uses_app_data() {
        let path = registry_path(Platform::Windows, &env(Some("C:\\Users\\me\\AppData\\Roaming"), None));
        assert_eq!(
            path,
            PathBuf::from("C:\\Users\\me\\AppData\\Roaming")
                .join("Code")
                .join("User")
                .join("keybindings.json")
        );
    }

    #[test]
    fn macos_uses_application_support() {
        let path = registry_path(Platform::MacOs, &env(None, Some("/Users/me")));
        assert_eq!(
            path,
            PathBuf::from("/Users/me/Library/Application Support/Code/User/keybindings.json")
        );
    }

    #[test]
    fn other_uses_dot_config() {
        let path = registry_path(Platform::Other, &env(None, Some("/home/me")));
        assert_eq!(
            path,
            PathBuf::from("/home/me/.config/Code/User/keybindings.json")
        );
    }

    #[test]
    fn missing_environment_degrades_to_empty_segment() {
        let path = registry_path(Platform::Other, &env(None, None));
        assert_eq!(path, PathBuf::from(".config/Code/User/keybindings.json"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let e = env(Some("C:\\AppData"), Some("/home/me"));
        for platform in [Platform::Windows, Platform::MacOs, Platform::Other] {
            assert_eq!(registry_path(platform, &e), registry_path(platform, &e));
        }
    }
}
