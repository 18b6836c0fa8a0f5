//! CLI argument validation functions
//!
//! Custom value parsers for arguments clap cannot check on its own.

use std::fs;
use std::path::PathBuf;

use crate::config::validation::parse_status_url;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate the poll interval is a positive number of seconds
pub fn validate_interval(interval_str: &str) -> Result<u64, String> {
    let secs: u64 = interval_str.parse().map_err(|_| {
        format!(
            "Interval must be a positive number of seconds, got: '{}'",
            interval_str
        )
    })?;

    if secs == 0 {
        return Err("Interval must be greater than 0".to_string());
    }

    Ok(secs)
}

/// Validate a status endpoint URL (http or https with a host)
pub fn validate_url(url_str: &str) -> Result<String, String> {
    parse_status_url(url_str).map(|_| url_str.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_interval_valid() {
        assert_eq!(validate_interval("1"), Ok(1));
        assert_eq!(validate_interval("10"), Ok(10));
        assert_eq!(validate_interval("3600"), Ok(3600));
    }

    #[test]
    fn test_validate_interval_invalid() {
        assert!(validate_interval("0").is_err());
        assert!(validate_interval("-5").is_err());
        assert!(validate_interval("ten").is_err());
        assert!(validate_interval("").is_err());
    }

    #[test]
    fn test_validate_url_valid() {
        assert_eq!(
            validate_url("https://sirens.in.ua/api/v1/"),
            Ok("https://sirens.in.ua/api/v1/".to_string())
        );
        assert_eq!(
            validate_url("  http://127.0.0.1:8080  "),
            Ok("http://127.0.0.1:8080".to_string())
        );
    }

    #[test]
    fn test_validate_url_invalid() {
        assert!(validate_url("").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("sirens.in.ua/api").is_err());
        assert!(validate_url("http://").is_err());
        assert!(validate_url("http://exa mple.com").is_err());
        assert!(validate_url("http://localhost:99999/").is_err());
        assert!(validate_url("http://exa[mple/").is_err());
    }

    #[test]
    fn test_validate_config_file_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[poll]\ninterval_secs = 5").unwrap();

        let path_str = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path_str), Ok(file.path().to_path_buf()));

        assert!(validate_config_file_path("/nonexistent/siren.toml").is_err());

        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
    }
}
