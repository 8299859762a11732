use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use toml::{map::Map, Value};

/// Set to point config lookup somewhere other than the cargo workspace.
pub const WORKSPACE_DIR_VAR: &str = "PORTAL_WORKSPACE_DIR";

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(WORKSPACE_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }

    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = std::str::from_utf8(&output)
        .context("cargo locate-project printed invalid utf-8")?;

    match Path::new(cargo_path.trim()).parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => bail!("failed to locate workspace from {}", cargo_path),
    }
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    load_toml(&workspace_dir()?.join(config_name))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    load_toml(&workspace_dir()?.join("Secrets.toml"))
}

pub fn load_toml(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// String value of a top-level key, e.g. a secret.
pub fn require_str<'a>(
    table: &'a Map<String, Value>,
    key: &str,
) -> anyhow::Result<&'a str> {
    table
        .get(key)
        .and_then(Value::as_str)
        .with_context(|| format!("{} was not found", key))
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_toml() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "PORTAL_USERNAME = \"admin\"\n[portal]\nbase_url = \"http://localhost:8000\""
        )
        .unwrap();

        // Act
        let table = load_toml(file.path()).unwrap();

        // Assert
        assert_eq!(require_str(&table, "PORTAL_USERNAME").unwrap(), "admin");
        assert_eq!(
            table["portal"]["base_url"].as_str(),
            Some("http://localhost:8000")
        );
    }

    #[test]
    fn test_missing_key() {
        let table = Map::new();

        let error = require_str(&table, "SUBLET_PASSWORD").unwrap_err();

        assert_eq!(error.to_string(), "SUBLET_PASSWORD was not found");
    }

    #[test]
    fn test_bad_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("Config.toml");
        std::fs::write(&broken, "[portal").unwrap();

        assert!(load_toml(&dir.path().join("missing.toml")).is_err());
        assert!(load_toml(&broken)
            .unwrap_err()
            .to_string()
            .starts_with("failed to parse"));
    }

    #[test]
    fn test_workspace_dir_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Secrets.toml"), "SUBLET_USERNAME = \"svc\"")
            .unwrap();
        std::env::set_var(WORKSPACE_DIR_VAR, dir.path());

        let env = load_env().unwrap();

        std::env::remove_var(WORKSPACE_DIR_VAR);
        assert_eq!(require_str(&env, "SUBLET_USERNAME").unwrap(), "svc");
    }
}
