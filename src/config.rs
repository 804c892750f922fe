use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::{Result, UtilErr};

/// What to do with a column whose minimum equals its maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Every value of the column becomes `0.0`.
    #[default]
    Zero,
    /// Fail with `UtilErr::DegenerateColumn` before touching the dataset.
    Reject,
    /// Divide by the zero range anyway, leaving NaN in the column.
    Propagate,
}

/// Settings for reading delimited text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub delimiter: char,
    pub skip_header: bool,
    pub skip_blank_lines: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: false,
            skip_blank_lines: false,
        }
    }
}

/// Settings for min-max feature scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub degenerate: DegeneratePolicy,
    /// Fit and scale columns on the rayon thread pool.
    pub parallel: bool,
}

/// Top level configuration, every section is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub loader: LoaderConfig,
    pub normalize: NormalizeConfig,
}

impl Config {
    /// Parses a `Config` from a JSON document.
    ///
    /// # Errors
    /// Returns `UtilErr::Config` if the document is malformed.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    /// Returns `UtilErr::Resource` if the file can't be read and
    /// `UtilErr::Config` if it is malformed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| UtilErr::Resource {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let cfg = Config::from_json_str("{}").unwrap();

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.loader.delimiter, ',');
        assert_eq!(cfg.normalize.degenerate, DegeneratePolicy::Zero);
        assert!(!cfg.normalize.parallel);
    }

    #[test]
    fn partial_sections() {
        let cfg = Config::from_json_str(
            r#"{
                "loader": { "delimiter": ";", "skip_header": true },
                "normalize": { "degenerate": "reject", "parallel": true }
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.loader.delimiter, ';');
        assert!(cfg.loader.skip_header);
        assert!(!cfg.loader.skip_blank_lines);
        assert_eq!(cfg.normalize.degenerate, DegeneratePolicy::Reject);
        assert!(cfg.normalize.parallel);
    }

    #[test]
    fn policy_names() {
        for (name, policy) in [
            ("zero", DegeneratePolicy::Zero),
            ("reject", DegeneratePolicy::Reject),
            ("propagate", DegeneratePolicy::Propagate),
        ] {
            let json = format!(r#"{{ "normalize": {{ "degenerate": "{name}" }} }}"#);
            let cfg = Config::from_json_str(&json).unwrap();
            assert_eq!(cfg.normalize.degenerate, policy);
        }
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let res = Config::from_json_str(r#"{ "normalize": { "degenerate": "clamp" } }"#);
        assert!(matches!(res, Err(UtilErr::Config(_))));
    }

    #[test]
    fn missing_file_is_a_resource_error() {
        let res = Config::from_json_file("/definitely/not/here.json");
        assert!(matches!(res, Err(UtilErr::Resource { .. })));
    }
}
