//! Merge resolver
//!
//! Combines a [`TokenRegistry`] with a base theme into the effective theme a
//! stylesheet generator works from.

use crate::merge::merged;
use crate::presets::BasePreset;
use crate::registry::TokenRegistry;
use crate::theme::{ThemeMode, ThemeSection};
use crate::validate::{validate, Diagnostic, Severity};
use serde::Serialize;

/// Effective theme after merging a registry onto its base
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedTheme {
    content: Vec<String>,
    dark_mode: ThemeMode,
    plugins: Vec<String>,
    theme: ThemeSection,
    #[serde(skip)]
    diagnostics: Vec<Diagnostic>,
}

impl ResolvedTheme {
    pub fn content_globs(&self) -> &[String] {
        &self.content
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.dark_mode
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    pub fn theme(&self) -> &ThemeSection {
        &self.theme
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if any diagnostic is an error
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Check if any diagnostic is a warning
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Log all diagnostics via tracing
    pub fn log_diagnostics(&self) {
        for diagnostic in &self.diagnostics {
            diagnostic.log();
        }
    }

    pub fn to_toml(&self) -> Result<String, crate::ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> Result<String, crate::ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Merge `registry` onto `base`, validate the result, and log findings
pub fn resolve(base: &ThemeSection, registry: &TokenRegistry) -> ResolvedTheme {
    let theme = merged(base, registry.extension());
    tracing::debug!(
        base_colors = base.colors.len(),
        colors = theme.colors.len(),
        animations = theme.animation.len(),
        keyframes = theme.keyframes.len(),
        "merged token registry onto base theme"
    );

    let diagnostics = validate(&theme, base, registry.content_globs());
    let resolved = ResolvedTheme {
        content: registry.content_globs().to_vec(),
        dark_mode: registry.theme_mode(),
        plugins: registry.plugins().to_vec(),
        theme,
        diagnostics,
    };
    resolved.log_diagnostics();
    resolved
}

impl TokenRegistry {
    /// Resolve against one of the built-in base presets.
    pub fn resolve(&self, preset: BasePreset) -> ResolvedTheme {
        resolve(&preset.section(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::*;

    #[test]
    fn bare_resolution_is_the_extension() {
        let registry = TokenRegistry::sage();
        let resolved = registry.resolve(BasePreset::Bare);
        assert_eq!(resolved.theme(), registry.extension());
        assert_eq!(resolved.content_globs(), registry.content_globs());
        assert!(!resolved.has_errors());
        assert!(!resolved.has_warnings());
    }

    #[test]
    fn tailwind_defaults_survive() {
        let resolved = TokenRegistry::sage().resolve(BasePreset::Tailwind);
        let theme = resolved.theme();

        assert_eq!(theme.color("gray-500"), Some("#6b7280"));
        assert_eq!(theme.color("sage-500"), Some("#7fa86d"));
        assert!(theme.font_family.contains_key("mono"));
        assert_eq!(
            theme.font_family["sans"].faces(),
            ["Inter", "system-ui", "sans-serif"]
        );
        assert!(theme.keyframes_for("spin").is_some());
        assert!(theme.keyframes_for("float").is_some());

        let blur = theme.scale(BACKDROP_BLUR).unwrap();
        assert_eq!(blur.get("xs"), Some("2px"));
        assert_eq!(blur.get("md"), Some("12px"));
    }

    #[test]
    fn resolved_theme_serializes_without_diagnostics() {
        let registry = TokenRegistry::builder()
            .animation("float", "float 6s ease-in-out infinite")
            .build();
        let resolved = registry.resolve(BasePreset::Bare);
        assert!(resolved.has_warnings());

        let json = resolved.to_json().unwrap();
        assert!(json.contains("\"dark_mode\": \"media\""));
        assert!(!json.contains("diagnostics"));
    }
}
