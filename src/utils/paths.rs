use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_clipbridge_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clipbridge"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_clipbridge_dir()?;
    Ok(dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_clipbridge_dir() {
        let dir = get_clipbridge_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".clipbridge"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".clipbridge"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
