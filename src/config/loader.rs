use std::fs;
use std::path::{Path, PathBuf};

use super::core::ComplexityConfig;
use crate::errors::{Error, Result, ResultExt};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".bpcomplexity.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ComplexityConfig> {
    let config = toml::from_str::<ComplexityConfig>(contents)?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file.
///
/// A missing file is an error here: the caller asked for this exact file.
pub fn load_config_from(path: &Path) -> Result<ComplexityConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::ConfigurationMissing {
                path: path.to_path_buf(),
            }
        } else {
            Error::file_system("Failed to read config file", path, e)
        }
    })?;

    let config = parse_and_validate_config(&contents)
        .context(format!("Invalid config {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest config file starting from `start`
pub fn find_config_file(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Discover and load the nearest config file from `start`.
///
/// No config file at all means defaults. A config file that exists but does
/// not parse or validate is an error, never silently replaced by defaults.
pub fn discover_config(start: PathBuf) -> Result<ComplexityConfig> {
    match find_config_file(start) {
        Some(path) => load_config_from(&path),
        None => {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            Ok(ComplexityConfig::default())
        }
    }
}

/// Load configuration for the current process: explicit path first,
/// otherwise discovery from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<ComplexityConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(ComplexityConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_walks_up() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[weights]\nloop_weight = 9\n",
        )
        .unwrap();
        let nested = temp.path().join("Content").join("Blueprints");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested).unwrap();
        assert_eq!(config.weights.loop_weight, 9.0);
    }

    #[test]
    fn test_discover_config_defaults_when_absent() {
        let temp = TempDir::new().unwrap();
        let config = discover_config(temp.path().to_path_buf());
        // An ancestor of the temp dir could carry a config; only assert success.
        assert!(config.is_ok());
    }

    #[test]
    fn test_explicit_missing_config_fails_fast() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = load_config_from(&missing).unwrap_err();
        assert!(matches!(err, Error::ConfigurationMissing { .. }));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[display]\npercent_scale = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("percent_scale"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(matches!(
            parse_and_validate_config("[weights\nbroken"),
            Err(Error::Toml(_))
        ));
    }
}
