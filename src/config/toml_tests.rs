//! Tests for TOML configuration parsing.

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r"
            [status]
            interval = 30
        ";

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(config.status.interval, Some(30));
        assert!(!config.status.pretty);
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.status.interval.is_none());
    }

    #[test]
    fn parse_pretty_flag() {
        let toml = r"
            [status]
            pretty = true
        ";

        let config = TomlConfig::parse(toml).unwrap();
        assert!(config.status.pretty);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml = r"
            [status]
            intreval = 30
        ";

        let error = TomlConfig::parse(toml).unwrap_err();
        assert!(matches!(error, ConfigError::TomlParse(_)));
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let toml = r"
            [monitor]
            interval = 30
        ";

        assert!(TomlConfig::parse(toml).is_err());
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[status]\ninterval = 45").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.status.interval, Some(45));
    }

    #[test]
    fn load_missing_file_is_file_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let error = TomlConfig::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::FileRead { .. }));
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();
        assert_eq!(config.status.interval, Some(60));
    }
}
