//! Token registry document (`tokens.toml`)
//!
//! The registry is the extension layer of a theme plus the inputs a build
//! tool needs alongside it: which files to scan for utility classes and how
//! dark mode is selected. It is loaded once, never mutated, and handed to
//! [`resolve`](crate::resolve::resolve) explicitly.
//!
//! ```toml
//! content = ["./src/**/*.{rs,html,css}"]
//! dark_mode = "media"
//!
//! [theme.extend.colors]
//! spotify-green = "#1DB954"
//!
//! [theme.extend.colors.sage]
//! 500 = "#7fa86d"
//!
//! [theme.extend.animation]
//! float = "float 6s ease-in-out infinite"
//!
//! [theme.extend.keyframes.float]
//! "0%, 100%" = { transform = "translateY(0px)" }
//! "50%" = { transform = "translateY(-10px)" }
//!
//! [theme.extend.backdrop_blur]
//! xs = "2px"
//! ```

use crate::error::ConfigError;
use crate::theme::{ThemeMode, ThemeSection};
use crate::tokens::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// File name looked up by [`TokenRegistry::load_from_dir`]
pub const CONFIG_FILE_NAME: &str = "tokens.toml";

/// Extension-only theme configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRegistry {
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    dark_mode: ThemeMode,
    #[serde(default)]
    plugins: Vec<String>,
    #[serde(default)]
    theme: ThemeConfig,
}

/// The `theme` table. Only `extend` is accepted, so a document can never
/// replace a base category wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeConfig {
    #[serde(default)]
    extend: ThemeSection,
}

impl TokenRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Reopen this registry for edits, producing a new registry on build.
    pub fn into_builder(self) -> RegistryBuilder {
        RegistryBuilder { registry: self }
    }

    /// Load a registry from a directory (looks for `tokens.toml`) or file
    pub fn load_from_dir(path: &Path) -> Result<Self, ConfigError> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE_NAME)
        };

        if !config_path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
            path: config_path.clone(),
            source,
        })?;

        let registry: TokenRegistry =
            toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
                path: config_path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %config_path.display(),
            colors = registry.color_extensions().len(),
            animations = registry.animation_extensions().len(),
            keyframes = registry.keyframe_extensions().len(),
            "loaded token registry"
        );

        Ok(registry)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // ========== Accessors ==========

    /// Glob patterns of the files scanned for utility class usage
    pub fn content_globs(&self) -> &[String] {
        &self.content
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.dark_mode
    }

    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// The whole extension layer
    pub fn extension(&self) -> &ThemeSection {
        &self.theme.extend
    }

    pub fn color_extensions(&self) -> &IndexMap<String, ColorValue> {
        &self.theme.extend.colors
    }

    pub fn font_extensions(&self) -> &IndexMap<String, FontStack> {
        &self.theme.extend.font_family
    }

    pub fn animation_extensions(&self) -> &IndexMap<String, AnimationToken> {
        &self.theme.extend.animation
    }

    pub fn keyframe_extensions(&self) -> &IndexMap<String, Keyframes> {
        &self.theme.extend.keyframes
    }

    /// Entries of one named scale; empty when the scale isn't extended
    pub fn scale_extension(&self, name: &str) -> &Scale {
        static EMPTY: OnceLock<Scale> = OnceLock::new();
        self.theme
            .extend
            .scales
            .get(name)
            .unwrap_or_else(|| EMPTY.get_or_init(Scale::default))
    }

    pub fn scale_names(&self) -> impl Iterator<Item = &str> {
        self.theme.extend.scales.keys().map(String::as_str)
    }
}

/// Programmatic construction of a [`TokenRegistry`]
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    registry: TokenRegistry,
}

impl RegistryBuilder {
    pub fn content(mut self, pattern: impl Into<String>) -> Self {
        self.registry.content.push(pattern.into());
        self
    }

    pub fn dark_mode(mut self, mode: ThemeMode) -> Self {
        self.registry.dark_mode = mode;
        self
    }

    pub fn plugin(mut self, name: impl Into<String>) -> Self {
        self.registry.plugins.push(name.into());
        self
    }

    pub fn color(mut self, name: impl Into<String>, value: impl Into<ColorValue>) -> Self {
        self.extend().colors.insert(name.into(), value.into());
        self
    }

    pub fn font_family(mut self, name: impl Into<String>, stack: FontStack) -> Self {
        self.extend().font_family.insert(name.into(), stack);
        self
    }

    pub fn animation(mut self, name: impl Into<String>, value: impl Into<AnimationToken>) -> Self {
        self.extend().animation.insert(name.into(), value.into());
        self
    }

    pub fn keyframes(mut self, name: impl Into<String>, frames: Keyframes) -> Self {
        self.extend().keyframes.insert(name.into(), frames);
        self
    }

    pub fn scale_entry(
        mut self,
        scale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extend()
            .scales
            .entry(scale.into())
            .or_default()
            .insert(key, value);
        self
    }

    pub fn remove_keyframes(mut self, name: &str) -> Self {
        self.extend().keyframes.shift_remove(name);
        self
    }

    pub fn remove_animation(mut self, name: &str) -> Self {
        self.extend().animation.shift_remove(name);
        self
    }

    pub fn build(self) -> TokenRegistry {
        self.registry
    }

    fn extend(&mut self) -> &mut ThemeSection {
        &mut self.registry.theme.extend
    }
}
