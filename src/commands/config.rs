//! Config file commands

use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

use crate::config::Settings;

/// Print an example config file
pub fn example() -> Result<()> {
    print!("{}", Settings::example_config());
    Ok(())
}

/// Where `config init` writes when no path is given
pub fn default_init_path() -> PathBuf {
    Settings::user_config_path().unwrap_or_else(|| PathBuf::from(".tagline.toml"))
}

/// Write a default config file, refusing to clobber an existing one
pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(anyhow!(
            "Config file already exists: {}\nUse --force to overwrite it",
            path.display()
        ));
    }

    Settings::default().save(path)?;
    crate::log_info!("Wrote default config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init(&path, false).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine").unwrap();

        let err = init(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        init(&path, true).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_default_init_path() {
        assert!(default_init_path().to_string_lossy().ends_with(".toml"));
    }
}
