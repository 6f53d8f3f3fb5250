use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base config directory (~/.config/context-migrate/ on Unix, %APPDATA% on Windows)
pub fn config_dir() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("context-migrate"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("context-migrate"))
    }
}

/// Global config.json file path
pub fn config_json() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}
