use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Serialization format of the export file. `Xml` only changes the file
/// extension; the content is still JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileExt {
    Json,
    Xml,
}

impl FileExt {
    pub fn parse(ext: &str) -> Result<Self> {
        match ext {
            "json" => Ok(FileExt::Json),
            "xml" => Ok(FileExt::Xml),
            other => Err(AppError::Config(format!(
                ".{} extension is not supported (expected json or xml)",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileExt::Json => "json",
            FileExt::Xml => "xml",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub file_name: String,
    pub file_ext: FileExt,
}

impl Config {
    pub fn new(token: Option<String>, file_name: String, file_ext: &str) -> Result<Self> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Config("Spotify OAuth token not provided".into()))?;

        let file_ext = FileExt::parse(file_ext)?;

        Ok(Self {
            token,
            file_name,
            file_ext,
        })
    }

    pub fn destination(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.file_name, self.file_ext.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_a_config_error() {
        let result = Config::new(None, "export".into(), "json");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_empty_token_is_a_config_error() {
        let result = Config::new(Some(String::new()), "export".into(), "json");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = Config::new(Some("token".into()), "export".into(), "csv");
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains(".csv")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_destination_joins_name_and_extension() {
        let config = Config::new(Some("token".into()), "library".into(), "xml").unwrap();
        assert_eq!(config.destination(), PathBuf::from("library.xml"));
    }

    #[test]
    fn test_defaults_produce_export_json() {
        let config = Config::new(Some("token".into()), "export".into(), "json").unwrap();
        assert_eq!(config.destination(), PathBuf::from("export.json"));
        assert_eq!(config.file_ext, FileExt::Json);
    }
}
