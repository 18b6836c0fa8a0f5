//! Tests for the logger module

use crate::logger::config::*;
use crate::logger::writer::LogFileWriter;
use std::path::PathBuf;

mod config_tests {
    use super::*;
    use crate::logger::init_logger;

    #[test]
    fn test_default_config_creation() {
        let config = LoggerConfig::default();
        assert!(config.console.enabled);
        assert!(config.console.colored);
        assert!(!config.file.enabled);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("pretty".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default(), LogFormat::Full);
    }

    #[test]
    fn test_init_without_outputs_fails() {
        let mut config = LoggerConfig::default();
        config.console.enabled = false;
        assert!(init_logger(config).is_err());
    }
}

mod property_tests {
    use crate::config::settings::LoggerSettings;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn property_known_levels_convert(
            level in prop::sample::select(vec!["trace", "debug", "info", "warn", "error", "WARN"]),
            colored in any::<bool>(),
        ) {
            let mut settings = LoggerSettings {
                level: level.to_string(),
                ..LoggerSettings::default()
            };
            settings.console.colored = colored;

            let config = settings.into_logger_config().unwrap();
            prop_assert_eq!(config.level, level.to_lowercase());
            prop_assert_eq!(config.console.colored, colored);
        }

        #[test]
        fn property_unknown_levels_rejected(level in "[a-z]{6,12}") {
            prop_assume!(!["trace", "debug", "info", "warn", "error"].contains(&level.as_str()));
            let settings = LoggerSettings {
                level,
                ..LoggerSettings::default()
            };
            prop_assert!(settings.into_logger_config().is_err());
        }
    }
}

mod writer_tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use tracing_subscriber::fmt::MakeWriter;

    fn file_config(path: PathBuf, append: bool) -> FileConfig {
        FileConfig {
            enabled: true,
            path,
            append,
            format: LogFormat::Full,
        }
    }

    #[test]
    fn test_writer_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("siren.log");

        let writer = LogFileWriter::new(&file_config(path.clone(), true)).unwrap();
        writer.make_writer().write_all(b"hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
        assert!(!writer.is_in_fallback_mode());
    }

    #[test]
    fn test_append_mode_keeps_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("siren.log");
        std::fs::write(&path, "first\n").unwrap();

        let writer = LogFileWriter::new(&file_config(path.clone(), true)).unwrap();
        writer.make_writer().write_all(b"second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_truncate_mode_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("siren.log");
        std::fs::write(&path, "stale\n").unwrap();

        let writer = LogFileWriter::new(&file_config(path.clone(), false)).unwrap();
        writer.make_writer().write_all(b"fresh\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_unwritable_location_is_reported() {
        let dir = tempdir().unwrap();
        // A regular file where a directory is expected
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = LogFileWriter::new(&file_config(blocker.join("siren.log"), true));
        assert!(result.is_err());
    }
}
