//! Configuration file checks: detect fields absent from the YAML file.

use crate::errors::{AppError, AppResult};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Every key a complete configuration file carries.
pub const EXPECTED_FIELDS: [&str; 5] = [
    "database",
    "export_dir",
    "day_basis",
    "open_links",
    "separator_char",
];

/// Return the expected keys missing from the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    missing_fields_in(&content)
}

pub fn missing_fields_in(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

    let Some(map) = yaml.as_mapping() else {
        return Err(AppError::Config("configuration is not a mapping".into()));
    };

    Ok(EXPECTED_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_absent_keys() {
        let missing = missing_fields_in("database: x\nopen_links: true\n").unwrap();
        assert_eq!(missing, vec!["export_dir", "day_basis", "separator_char"]);
    }

    #[test]
    fn complete_file_has_nothing_missing() {
        let yaml = "database: x\nexport_dir: y\nday_basis: utc\nopen_links: false\nseparator_char: '-'\n";
        assert!(missing_fields_in(yaml).unwrap().is_empty());
    }

    #[test]
    fn scalar_document_is_rejected() {
        assert!(missing_fields_in("42").is_err());
    }
}
