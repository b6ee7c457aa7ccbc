//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HeritageConfig;
use crate::domain::errors::HeritageError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HeritageConfig
/// 4. Applies environment variable overrides (HERITAGE_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use heritage::config::loader::load_config;
///
/// let config = load_config("heritage.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HeritageConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HeritageError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HeritageError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: HeritageConfig = toml::from_str(&contents)
        .map_err(|e| HeritageError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        HeritageError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Loads the file at `path` when given, otherwise starts from defaults
///
/// Environment overrides and validation apply in both cases.
pub fn load_config_or_default(path: Option<&str>) -> Result<HeritageConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = HeritageConfig::default();
            apply_env_overrides(&mut config);
            config.validate().map_err(|e| {
                HeritageError::Configuration(format!("Configuration validation failed: {}", e))
            })?;
            Ok(config)
        }
    }
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| HeritageError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HeritageError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using HERITAGE_* prefix
///
/// Environment variables follow the pattern: HERITAGE_<SECTION>_<KEY>
/// For example: HERITAGE_OPENDATA_BASE_URL, HERITAGE_LOGGING_LOCAL_ENABLED.
/// Unparsable numeric or boolean values are ignored.
fn apply_env_overrides(config: &mut HeritageConfig) {
    if let Ok(val) = std::env::var("HERITAGE_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("HERITAGE_OPENDATA_BASE_URL") {
        config.opendata.base_url = val;
    }
    if let Ok(val) = std::env::var("HERITAGE_OPENDATA_PAGE_SIZE") {
        if let Ok(size) = val.parse() {
            config.opendata.page_size = size;
        }
    }
    if let Ok(val) = std::env::var("HERITAGE_OPENDATA_LILLE_PAGES") {
        if let Ok(pages) = val.parse() {
            config.opendata.lille_pages = pages;
        }
    }
    if let Ok(val) = std::env::var("HERITAGE_OPENDATA_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.opendata.timeout_seconds = timeout;
        }
    }

    if let Ok(val) = std::env::var("HERITAGE_LOGGING_LOCAL_ENABLED") {
        if let Ok(enabled) = val.parse() {
            config.logging.local_enabled = enabled;
        }
    }
    if let Ok(val) = std::env::var("HERITAGE_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("HERITAGE_TEST_SUBST_HOST", "data.example.org");
        let input = "base_url = \"https://${HERITAGE_TEST_SUBST_HOST}/datasets\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("https://data.example.org/datasets"));
        std::env::remove_var("HERITAGE_TEST_SUBST_HOST");
    }

    #[test]
    fn test_substitute_skips_comments() {
        let input = "# base_url = \"${HERITAGE_TEST_NEVER_SET}\"\nlog_level = \"info\"";
        let output = substitute_env_vars(input).unwrap();
        assert!(output.contains("${HERITAGE_TEST_NEVER_SET}"));
    }

    #[test]
    fn test_substitute_reports_missing_vars() {
        let input = "a = \"${HERITAGE_TEST_MISSING_ONE}\"\nb = \"${HERITAGE_TEST_MISSING_ONE}\"";
        let err = substitute_env_vars(input).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("HERITAGE_TEST_MISSING_ONE"));
        assert_eq!(text.matches("HERITAGE_TEST_MISSING_ONE").count(), 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/heritage.toml").unwrap_err();
        assert!(matches!(err, HeritageError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }
}
