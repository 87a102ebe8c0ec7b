//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        CUSTOM_TOML
            .get()
            .and_then(|s| parse_settings_toml(s).ok())
            .unwrap_or_else(Settings::builtin)
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub session: SessionSettings,
    pub candidates: CandidateSettings,
    pub learning: LearningSettings,
}

impl Settings {
    /// Settings parsed from the embedded defaults.
    ///
    /// `build.rs` validates the file's syntax and the `parse_default_toml`
    /// test pins its values, so the hard-coded fallback only exists to keep
    /// this path panic-free.
    pub fn builtin() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap_or(Self {
            session: SessionSettings {
                multitap_window_ms: 800,
                max_word_length: 48,
            },
            candidates: CandidateSettings {
                max_results: 5,
                max_expansions: 4096,
                prefix_scan_limit: 16,
            },
            learning: LearningSettings { auto_learn: true },
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub multitap_window_ms: u64,
    pub max_word_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    pub max_results: usize,
    pub max_expansions: usize,
    pub prefix_scan_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LearningSettings {
    pub auto_learn: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(session.multitap_window_ms);
    check_positive!(session.max_word_length);
    check_positive!(candidates.max_results);
    check_positive!(candidates.max_expansions);
    check_positive!(candidates.prefix_scan_limit);

    if s.session.max_word_length < crate::dict::MIN_WORD_LENGTH {
        return Err(SettingsError::InvalidValue {
            field: "session.max_word_length".to_string(),
            reason: format!("must be at least {}", crate::dict::MIN_WORD_LENGTH),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.session.multitap_window_ms, 800);
        assert_eq!(s.session.max_word_length, 48);
        assert_eq!(s.candidates.max_results, 5);
        assert_eq!(s.candidates.max_expansions, 4096);
        assert_eq!(s.candidates.prefix_scan_limit, 16);
        assert!(s.learning.auto_learn);
    }

    #[test]
    fn builtin_matches_default_toml() {
        let s = Settings::builtin();
        assert_eq!(s.session.multitap_window_ms, 800);
        assert_eq!(s.candidates.max_results, 5);
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[session]
multitap_window_ms = 450
max_word_length = 32

[candidates]
max_results = 4
max_expansions = 1024
prefix_scan_limit = 8

[learning]
auto_learn = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.session.multitap_window_ms, 450);
        assert_eq!(s.candidates.max_results, 4);
        assert!(!s.learning.auto_learn);
    }

    #[test]
    fn error_zero_window() {
        let toml = r#"
[session]
multitap_window_ms = 0
max_word_length = 32

[candidates]
max_results = 4
max_expansions = 1024
prefix_scan_limit = 8

[learning]
auto_learn = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("session.multitap_window_ms"));
    }

    #[test]
    fn error_zero_expansions() {
        let toml = r#"
[session]
multitap_window_ms = 800
max_word_length = 32

[candidates]
max_results = 4
max_expansions = 0
prefix_scan_limit = 8

[learning]
auto_learn = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("candidates.max_expansions"));
    }

    #[test]
    fn error_word_length_below_minimum() {
        let toml = r#"
[session]
multitap_window_ms = 800
max_word_length = 1

[candidates]
max_results = 4
max_expansions = 1024
prefix_scan_limit = 8

[learning]
auto_learn = true
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("session.max_word_length"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[session]
multitap_window_ms = 800
max_word_length = 32
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
