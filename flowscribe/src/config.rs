use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::constants::CONFIG_FILENAME;

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section.
    #[serde(default)]
    pub flowscribe: FlowscribeConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` when running on defaults.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Configuration options for `flowscribe`.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FlowscribeConfig {
    /// Default directory for generated documents when the CLI omits `--out`.
    pub output_root: Option<PathBuf>,
}

/// Loads configuration by walking up from `path` looking for
/// `flowscribe.toml`. A missing or malformed file degrades to defaults.
#[must_use]
pub fn load_from_path(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            if let Ok(content) = fs::read_to_string(&candidate) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(candidate);
                    return config;
                }
            }
        }
        if !current.pop() {
            break;
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_config_in_ancestor_directory() {
        let root = tempdir().expect("tempdir");
        fs::write(
            root.path().join(CONFIG_FILENAME),
            "[flowscribe]\noutput_root = \"Docs/Gen\"\n",
        )
        .expect("write config");
        let nested = root.path().join("src").join("ecu");
        fs::create_dir_all(&nested).expect("mkdirs");
        let file = nested.join("module.c");
        fs::write(&file, "void F(void) {}\n").expect("write source");

        let config = load_from_path(&file);
        assert_eq!(
            config.flowscribe.output_root,
            Some(PathBuf::from("Docs/Gen"))
        );
        assert!(config.config_file_path.is_some());
    }

    #[test]
    fn malformed_config_degrades_to_defaults() {
        let root = tempdir().expect("tempdir");
        fs::write(root.path().join(CONFIG_FILENAME), "not [valid toml").expect("write config");

        let config = load_from_path(root.path());
        assert!(config.flowscribe.output_root.is_none());
        assert!(config.config_file_path.is_none());
    }
}
