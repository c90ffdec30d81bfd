//! # Kiosk Configuration
//!
//! Shell settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VITRINE_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no locking is needed.

/// Kiosk shell configuration.
#[derive(Debug, Clone, Default)]
pub struct KioskConfig {
    /// Echo full snapshot JSON on every republish instead of a summary line.
    pub echo_json: bool,
}

impl KioskConfig {
    /// Creates a KioskConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VITRINE_KIOSK_JSON`: "1"/"true"/"yes" switches the panel echo to
    ///   raw snapshot JSON
    pub fn from_env() -> Self {
        let mut config = KioskConfig::default();

        if let Ok(value) = std::env::var("VITRINE_KIOSK_JSON") {
            config.echo_json = parse_flag(&value);
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_summary_echo() {
        assert!(!KioskConfig::default().echo_json);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }
}
