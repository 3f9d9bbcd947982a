use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Settings read from a `transfmt.toml` file.
///
/// Every key is optional; command line flags take precedence.
///
/// ```toml
/// dir = "resources/translations"
/// includes = ["Resources_*.properties"]
/// excludes = ["Resources_en.properties"]
/// eol_style = "unix"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
    pub write_if_unchanged: Option<bool>,
    pub eol_style: Option<String>,
    pub fail_on_error: Option<bool>,
}

impl ConfigFile {
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config file: {}", e))
    }

    /// Reads a config file. Relative directories in it are resolved against
    /// the directory containing the file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config file {}: {}", path.display(), e))?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.dir = config.dir.map(|dir| base.join(dir));
            config.output_dir = config.output_dir.map(|dir| base.join(dir));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = ConfigFile::from_toml_str(
            r#"
            dir = "translations"
            output_dir = "formatted"
            includes = ["Resources_*.properties"]
            excludes = ["Resources_en.properties"]
            write_if_unchanged = true
            eol_style = "win"
            fail_on_error = false
            "#,
        )
        .unwrap();
        assert_eq!(config.dir, Some(PathBuf::from("translations")));
        assert_eq!(config.includes, vec!["Resources_*.properties"]);
        assert_eq!(config.eol_style.as_deref(), Some("win"));
        assert_eq!(config.fail_on_error, Some(false));
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(ConfigFile::from_toml_str("").unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = ConfigFile::from_toml_str("eolStyle = \"unix\"");
        assert!(result.unwrap_err().contains("Invalid config file"));
    }

    #[test]
    fn test_load_resolves_relative_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transfmt.toml");
        std::fs::write(&path, "dir = \"translations\"\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.dir, Some(temp_dir.path().join("translations")));
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigFile::load(Path::new("does/not/exist.toml"));
        assert!(result.unwrap_err().contains("Cannot read config file"));
    }
}
