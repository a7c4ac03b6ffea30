use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde_json::Value;

use crate::config_manager::main::Config;

/// Read a JSON or YAML configuration file with environment variable
/// substitution. Format is chosen by extension; anything that is not
/// `.json` is parsed as YAML.
pub fn read_config_file(config_path: &Path) -> Result<Value> {
    if !config_path.exists() {
        anyhow::bail!("Configuration file not found: {}", config_path.display());
    }

    let content = load_text_file(config_path)?;
    let content = substitute_env_vars(&content);

    let is_json = config_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let value = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON in {}", config_path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid YAML in {}", config_path.display()))?
    };
    Ok(value)
}

/// Replace `${VAR_NAME}` with the variable's value. Unset variables are
/// left as-is.
pub fn substitute_env_vars(content: &str) -> String {
    let pattern = env_var_pattern();
    pattern
        .replace_all(content, |caps: &Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{(\w+)\}").expect("env var pattern is a valid literal"))
}

/// Validate configuration data against the Config model
pub fn validate_config(config_data: Value) -> Result<Config> {
    let config: Config = serde_json::from_value(config_data)?;
    Ok(config)
}

/// Read a UTF-8 text file, dropping a leading BOM
pub fn load_text_file(file_path: &Path) -> Result<String> {
    let mut buffer = fs::read(file_path)
        .with_context(|| format!("Failed to read configuration file: {}", file_path.display()))?;
    if buffer.starts_with(&[0xEF, 0xBB, 0xBF]) {
        buffer.drain(0..3);
    }
    Ok(String::from_utf8(buffer)?)
}
