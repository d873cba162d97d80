//! Format-agnostic settings loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn detect(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic configuration store.
///
/// The format follows the file extension: `.toml`, `.json`, `.yaml`/`.yml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::detect(path)?;
        let content = io::read_text(path)?;

        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.name().into(),
            message,
        };

        match format {
            Format::Toml => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            Format::Yaml => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Load configuration, or `T::default()` when the file does not exist.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &NormalizedPath) -> Result<T> {
        if path.exists() {
            self.load(path)
        } else {
            Ok(T::default())
        }
    }

    /// Save configuration to a file with an atomic write.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = Format::detect(path)?;

        let serialize_error = |message: String| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.name().into(),
            message,
        };

        let content = match format {
            Format::Toml => toml::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?,
            Format::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(e.to_string()))?
            }
            Format::Yaml => serde_yaml::to_string(value).map_err(|e| serialize_error(e.to_string()))?,
        };

        io::write_atomic(path, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        interval: f64,
    }

    #[test]
    fn roundtrips_every_format() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new();
        let value = Sample {
            name: "bobbin".into(),
            interval: 60.0,
        };

        for file in ["s.toml", "s.json", "s.yaml"] {
            let path = NormalizedPath::new(temp.path().join(file));
            store.save(&path, &value).unwrap();
            let loaded: Sample = store.load(&path).unwrap();
            assert_eq!(loaded, value, "format of {file}");
        }
    }

    #[test]
    fn missing_file_loads_default() {
        let temp = TempDir::new().unwrap();
        let path = NormalizedPath::new(temp.path().join("absent.toml"));
        let loaded: Sample = ConfigStore::new().load_or_default(&path).unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn rejects_unknown_extension() {
        let path = NormalizedPath::new("settings.ini");
        let result: Result<Sample> = ConfigStore::new().load(&path);
        assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    }

    #[test]
    fn reports_parse_errors_with_format() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("broken.toml");
        std::fs::write(&file, "name = [unterminated").unwrap();

        let result: Result<Sample> = ConfigStore::new().load(&NormalizedPath::new(&file));
        match result {
            Err(Error::ConfigParse { format, .. }) => assert_eq!(format, "TOML"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
