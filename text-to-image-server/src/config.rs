//! Environment configuration.
//!
//! All settings are read once at startup into an immutable [`Config`] that is
//! passed to the router as shared state. Nothing re-reads the environment
//! after that.

use std::path::PathBuf;

/// Default listen port.
const DEFAULT_PORT: u16 = 8080;

/// Default font size in pixels.
const DEFAULT_FONT_SIZE: f32 = 24.0;

/// Default font file path, relative to the working directory.
///
/// The repository does not bundle a font; deployments must place one at this
/// path or point `FONT_PATH` elsewhere. Requests fail with a 500 until a
/// loadable font is configured.
const DEFAULT_FONT_PATH: &str = "./fonts/LiberationSans-Regular.ttf";

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`).
    pub port: u16,
    /// Font size in pixels (`FONT_SIZE` or `FONTSIZE`).
    pub font_size: f32,
    /// Path to the font file (`FONT_PATH` or `FONTPATH`), tilde-expanded.
    pub font_path: PathBuf,
    /// Whether path-separator characters in the text are replaced with `_`
    /// before rendering (`SANITIZE_TEXT`).
    pub sanitize_text: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            font_size: DEFAULT_FONT_SIZE,
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            sanitize_text: true,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// Unparsable values fall back to the default with a logged warning.
    /// Where two spellings are accepted, the first takes precedence.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                log::warn!("ignoring unparsable PORT value {:?}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let font_size = match lookup("FONT_SIZE").or_else(|| lookup("FONTSIZE")) {
            Some(raw) => match raw.parse::<f32>() {
                Ok(size) if size.is_finite() && size > 0.0 => size,
                _ => {
                    log::warn!("ignoring unparsable FONT_SIZE value {:?}", raw);
                    defaults.font_size
                }
            },
            None => defaults.font_size,
        };

        let font_path = match lookup("FONT_PATH").or_else(|| lookup("FONTPATH")) {
            Some(raw) => PathBuf::from(shellexpand::tilde(&raw).into_owned()),
            None => defaults.font_path,
        };

        let sanitize_text = match lookup("SANITIZE_TEXT") {
            Some(raw) => match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    log::warn!("ignoring unparsable SANITIZE_TEXT value {:?}", raw);
                    defaults.sanitize_text
                }
            },
            None => defaults.sanitize_text,
        };

        Config {
            port,
            font_size,
            font_path,
            sanitize_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.port, 8080);
        assert_eq!(config.font_size, 24.0);
        assert_eq!(config.font_path, PathBuf::from(DEFAULT_FONT_PATH));
        assert!(config.sanitize_text);
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("FONT_SIZE", "36.5"),
            ("FONT_PATH", "/tmp/test.ttf"),
            ("SANITIZE_TEXT", "false"),
        ]));
        assert_eq!(config.port, 9090);
        assert_eq!(config.font_size, 36.5);
        assert_eq!(config.font_path, PathBuf::from("/tmp/test.ttf"));
        assert!(!config.sanitize_text);
    }

    #[test]
    fn alternate_spellings_are_accepted() {
        let config = Config::from_lookup(lookup_from(&[
            ("FONTSIZE", "18"),
            ("FONTPATH", "/tmp/alt.ttf"),
        ]));
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.font_path, PathBuf::from("/tmp/alt.ttf"));
    }

    #[test]
    fn primary_spelling_takes_precedence() {
        let config = Config::from_lookup(lookup_from(&[
            ("FONT_SIZE", "30"),
            ("FONTSIZE", "12"),
        ]));
        assert_eq!(config.font_size, 30.0);
    }

    #[rstest::rstest]
    #[case("PORT", "not-a-port")]
    #[case("FONT_SIZE", "huge")]
    #[case("FONT_SIZE", "-5")]
    #[case("FONT_SIZE", "0")]
    #[case("SANITIZE_TEXT", "maybe")]
    fn unparsable_values_fall_back_to_defaults(#[case] key: &'static str, #[case] value: &'static str) {
        let config = Config::from_lookup(lookup_from(&[(key, value)]));
        let defaults = Config::default();
        assert_eq!(config.port, defaults.port);
        assert_eq!(config.font_size, defaults.font_size);
        assert_eq!(config.sanitize_text, defaults.sanitize_text);
    }

    #[test]
    fn font_path_is_tilde_expanded() {
        let config = Config::from_lookup(lookup_from(&[("FONT_PATH", "~/fonts/test.ttf")]));
        // Expansion depends on a home dir being known; the suffix always survives.
        assert!(config.font_path.to_string_lossy().ends_with("fonts/test.ttf"));
    }
}
