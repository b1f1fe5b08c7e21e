//! Tests for TOML configuration parsing.

use std::io::Write;

use super::ConfigError;
use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.filter.include.is_none());
        assert!(config.filter.exclude.is_none());
        assert!(config.filter.exclude_down.is_none());
        assert!(config.output.format.is_none());
        assert!(!config.output.json);
    }

    #[test]
    fn parse_filter_section() {
        let toml = r#"
            [filter]
            exclude = ["docker", "lo"]
            exclude_down = false
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(
            config.filter.exclude,
            Some(vec!["docker".to_string(), "lo".to_string()])
        );
        assert_eq!(config.filter.exclude_down, Some(false));
    }

    #[test]
    fn parse_explicit_empty_exclude() {
        let config = TomlConfig::parse("[filter]\nexclude = []").unwrap();

        assert_eq!(config.filter.exclude, Some(vec![]));
    }

    #[test]
    fn parse_output_and_log_sections() {
        let toml = r#"
            [output]
            format = "map"
            json = true

            [log]
            summary_level = "debug"
            decision_level = "info"
            log_warning = false
            log_error = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.output.format.as_deref(), Some("map"));
        assert!(config.output.json);
        assert_eq!(config.log.summary_level.as_deref(), Some("debug"));
        assert_eq!(config.log.decision_level.as_deref(), Some("info"));
        assert_eq!(config.log.log_warning, Some(false));
        assert_eq!(config.log.log_error, Some(true));
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_field_rejected() {
        let result = TomlConfig::parse("[filter]\nregex = true");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn unknown_section_rejected() {
        let result = TomlConfig::parse("[server]\nport = 80");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn wrong_type_rejected() {
        let result = TomlConfig::parse("[filter]\nexclude = \"lo\"");

        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/iflist.toml"));

        match result {
            Err(ConfigError::FileRead { path, .. }) => {
                assert!(path.ends_with("iflist.toml"));
            }
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[filter]\ninclude = [\"eth\"]").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();

        assert_eq!(config.filter.include, Some(vec!["eth".to_string()]));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert_eq!(config.output.format.as_deref(), Some("interfaces"));
        assert!(config.filter.include.is_none());
        assert!(config.filter.exclude.is_none());
    }

    #[test]
    fn template_documents_every_section() {
        let template = default_config_template();

        assert!(template.contains("[filter]"));
        assert!(template.contains("[output]"));
        assert!(template.contains("[log]"));
    }
}
