//! Registry scaffolding

use anyhow::{Context, Result};
use sage_tokens::{TokenRegistry, CONFIG_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};

const HEADER: &str = "\
# Design-token registry
#
# Everything under [theme.extend] is merged onto the base theme key by key.
# Replacement sections (e.g. [theme.colors]) are rejected.
#
# Check with: sage-tokens check --config .

";

/// Write the sage registry to `<dir>/tokens.toml`
pub fn create_tokens_file(dir: &Path, force: bool) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    let body = TokenRegistry::sage().to_toml()?;
    fs::write(&path, format!("{HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote token registry");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaffolded_registry_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = create_tokens_file(&dir.path().join("theme"), false).unwrap();

        let loaded = TokenRegistry::load_from_dir(path.parent().unwrap()).unwrap();
        assert_eq!(loaded, TokenRegistry::sage());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        create_tokens_file(dir.path(), false).unwrap();

        assert!(create_tokens_file(dir.path(), false).is_err());
        assert!(create_tokens_file(dir.path(), true).is_ok());
    }
}
