//! Subcommand implementations
//!
//! Each command returns its stdout text so it can be tested without
//! spawning the binary.

use anyhow::{Context, Result};
use sage_tokens::{BasePreset, Severity, TokenRegistry};
use std::fmt::Write as _;
use std::path::Path;

use crate::Format;

/// Result of `check`
pub struct CheckReport {
    pub output: String,
    pub failed: bool,
}

/// Load the registry at `config`, or the builtin sage registry
pub fn load_registry(config: Option<&Path>) -> Result<TokenRegistry> {
    match config {
        Some(path) => TokenRegistry::load_from_dir(path)
            .with_context(|| format!("Failed to load token registry from {}", path.display())),
        None => {
            tracing::debug!("no --config given, using builtin sage registry");
            Ok(TokenRegistry::sage())
        }
    }
}

pub fn parse_base(id: &str) -> Result<BasePreset> {
    BasePreset::from_id(id).with_context(|| {
        let known: Vec<&str> = BasePreset::all().iter().map(|p| p.id()).collect();
        format!("Unknown base preset `{id}` (expected one of: {})", known.join(", "))
    })
}

pub fn show(config: Option<&Path>, base: &str, format: Format) -> Result<String> {
    let registry = load_registry(config)?;
    let resolved = registry.resolve(parse_base(base)?);

    let mut output = match format {
        Format::Toml => resolved.to_toml(),
        Format::Json => resolved.to_json(),
    }
    .context("Failed to serialize resolved theme")?;

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

pub fn check(config: Option<&Path>, base: &str, json: bool) -> Result<CheckReport> {
    let registry = load_registry(config)?;
    let resolved = registry.resolve(parse_base(base)?);
    let diagnostics = resolved.diagnostics();

    let count = |severity: Severity| diagnostics.iter().filter(|d| d.severity == severity).count();
    let (errors, warnings) = (count(Severity::Error), count(Severity::Warning));

    let output = if json {
        let entries: Vec<serde_json::Value> = diagnostics
            .iter()
            .map(|d| {
                serde_json::json!({
                    "severity": d.severity.to_string(),
                    "category": d.category,
                    "key": d.key,
                    "message": d.message,
                })
            })
            .collect();
        let mut text = serde_json::to_string_pretty(&serde_json::json!({
            "errors": errors,
            "warnings": warnings,
            "diagnostics": entries,
        }))?;
        text.push('\n');
        text
    } else {
        let mut text = String::new();
        for diagnostic in diagnostics {
            writeln!(text, "{diagnostic}")?;
        }
        writeln!(text, "{errors} error(s), {warnings} warning(s)")?;
        text
    };

    Ok(CheckReport {
        output,
        failed: resolved.has_errors(),
    })
}

pub fn scale(config: Option<&Path>, name: &str) -> Result<String> {
    let registry = load_registry(config)?;
    let scale = registry.scale_extension(name);
    if scale.is_empty() {
        tracing::info!(scale = name, "scale is not extended by this registry");
    }

    let mut output = String::new();
    for (key, value) in scale.iter() {
        writeln!(output, "{key} = {value:?}")?;
    }
    Ok(output)
}

pub fn presets() -> String {
    BasePreset::all()
        .iter()
        .map(|preset| format!("{:<10} {}\n", preset.id(), preset.display_name()))
        .collect()
}
