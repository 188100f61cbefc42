//! Suite-file decoding.
//!
//! YAML and JSON documents map onto the same suite shape; the format is
//! picked by file extension. The suite name is the file stem.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use attest_domain::Suite;
use thiserror::Error;
use tokio::fs;

/// Errors while loading one suite file. Fatal to that file only; the
/// discovery loop logs and continues.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file extension does not name a supported format.
    #[error("unsupported suite file extension: {0}")]
    UnsupportedExtension(PathBuf),

    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file content did not decode into the suite schema.
    #[error("failed to decode {path}: {message}")]
    Decode {
        /// Path that failed to decode.
        path: PathBuf,
        /// Decoder diagnosis.
        message: String,
    },
}

enum SuiteFormat {
    Yaml,
    Json,
}

impl SuiteFormat {
    fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(LoadError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

/// Decodes suite file contents, naming the suite after the file stem.
///
/// # Errors
///
/// Returns [`LoadError`] on an unsupported extension or malformed content.
pub fn decode_suite(path: &Path, contents: &str) -> Result<Suite, LoadError> {
    let format = SuiteFormat::from_path(path)?;
    let mut suite: Suite = match format {
        SuiteFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
        SuiteFormat::Json => serde_json::from_str(contents).map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?,
    };
    suite.name = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("suite")
        .to_string();
    Ok(suite)
}

/// Reads and decodes one suite file.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be read or decoded.
pub async fn load_suite(path: &Path) -> Result<Suite, LoadError> {
    let contents = fs::read_to_string(path).await.map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode_suite(path, &contents)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const YAML_SUITE: &str = r#"
config:
  baseUrl: http://localhost:8080
  timeout: 3000
tests:
  - group: users
    name: list-users
    url: /users
    method: GET
    headers:
      Accept: application/json
    expected:
      - statusCode: 200
        headers:
          Content-Type: json
  - name: create-user
    url: /users
    method: POST
    body: '{"name": "jo"}'
    expected:
      - statusCode: 201
        body: created
"#;

    #[test]
    fn decodes_full_yaml_document() {
        let suite = decode_suite(Path::new("smoke.yaml"), YAML_SUITE).unwrap();

        assert_eq!(suite.name, "smoke");
        assert_eq!(suite.config.base_url, "http://localhost:8080");
        assert_eq!(suite.config.timeout_ms, 3000);
        assert_eq!(suite.tests.len(), 2);

        let first = &suite.tests[0];
        assert_eq!(first.group, "users");
        assert_eq!(first.method, "GET");
        assert_eq!(first.expectations[0].status_code, 200);
        assert_eq!(
            first.expectations[0].headers.get("Content-Type").map(String::as_str),
            Some("json")
        );

        let second = &suite.tests[1];
        assert_eq!(second.body, r#"{"name": "jo"}"#);
        assert_eq!(second.expectations[0].body, "created");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let contents = "tests:\n  - name: bare\n    url: /\n";
        let suite = decode_suite(Path::new("bare.yml"), contents).unwrap();

        assert_eq!(suite.config.base_url, "");
        assert_eq!(suite.config.timeout_ms, 0);
        let test = &suite.tests[0];
        assert_eq!(test.method, "");
        assert!(test.headers.is_empty());
        assert_eq!(test.body, "");
        assert!(test.expectations.is_empty());
    }

    #[test]
    fn decodes_json_document() {
        let contents = r#"{
            "config": {"baseUrl": "http://localhost", "timeout": 500},
            "tests": [
                {"name": "ping", "url": "/ping", "expected": [{"statusCode": 204}]}
            ]
        }"#;
        let suite = decode_suite(Path::new("ping.json"), contents).unwrap();

        assert_eq!(suite.name, "ping");
        assert_eq!(suite.config.timeout_ms, 500);
        assert_eq!(suite.tests[0].expectations[0].status_code, 204);
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = decode_suite(Path::new("suite.toml"), "");
        assert!(matches!(result, Err(LoadError::UnsupportedExtension(_))));
    }

    #[test]
    fn reports_malformed_content() {
        let result = decode_suite(Path::new("bad.yaml"), "tests: {not: [a, suite");
        assert!(matches!(result, Err(LoadError::Decode { .. })));
    }
}
