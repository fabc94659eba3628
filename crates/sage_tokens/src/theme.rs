//! Theme sections and dark-mode strategy

use crate::merge::DeepMerge;
use crate::tokens::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How the dark variant of the tokens gets selected
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the system `prefers-color-scheme` media query
    #[default]
    Media,
    /// Toggle explicitly through a `dark` class on an ancestor
    Class,
}

impl ThemeMode {
    pub fn id(self) -> &'static str {
        match self {
            Self::Media => "media",
            Self::Class => "class",
        }
    }

    /// Selector a stylesheet generator wraps dark-variant rules in
    pub fn dark_variant_selector(self) -> &'static str {
        match self {
            Self::Media => "@media (prefers-color-scheme: dark)",
            Self::Class => ".dark",
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// One layer of theme values
///
/// Used both for a base theme and for an extension layered onto it. Any
/// table besides the four named categories is a free-form [`Scale`]
/// (`backdrop_blur`, `animation_delay`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub colors: IndexMap<String, ColorValue>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub font_family: IndexMap<String, FontStack>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub animation: IndexMap<String, AnimationToken>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub keyframes: IndexMap<String, Keyframes>,

    #[serde(flatten)]
    pub scales: IndexMap<String, Scale>,
}

impl ThemeSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.font_family.is_empty()
            && self.animation.is_empty()
            && self.keyframes.is_empty()
            && self.scales.values().all(Scale::is_empty)
    }

    /// Look up a color by utility name: `spotify-green` or `sage-500`
    pub fn color(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.colors.get(name).and_then(ColorValue::as_single) {
            return Some(value);
        }
        let (family, shade) = name.rsplit_once('-')?;
        let shade = shade.parse::<Shade>().ok()?;
        self.colors.get(family)?.shade(shade)
    }

    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    /// Keyframes an animation token refers to, if they exist
    pub fn keyframes_for(&self, animation: &str) -> Option<&Keyframes> {
        let name = self.animation.get(animation)?.keyframes_name()?;
        self.keyframes.get(name)
    }
}

impl DeepMerge for ThemeSection {
    fn deep_merge(&mut self, overlay: &Self) {
        self.colors.deep_merge(&overlay.colors);
        self.font_family.deep_merge(&overlay.font_family);
        self.animation.deep_merge(&overlay.animation);
        self.keyframes.deep_merge(&overlay.keyframes);
        self.scales.deep_merge(&overlay.scales);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> ThemeSection {
        let mut section = ThemeSection::new();
        section
            .colors
            .insert("spotify-green".into(), ColorValue::single("#1DB954"));
        section.colors.insert(
            "sage".into(),
            ColorScale::new().with(Shade::S500, "#7fa86d").into(),
        );
        section
    }

    #[test]
    fn color_lookup_by_utility_name() {
        let section = section();
        assert_eq!(section.color("spotify-green"), Some("#1DB954"));
        assert_eq!(section.color("sage-500"), Some("#7fa86d"));
        assert_eq!(section.color("sage-600"), None);
        assert_eq!(section.color("sage"), None);
        assert_eq!(section.color("moss-500"), None);
    }

    #[test]
    fn theme_mode_defaults_to_media() {
        assert_eq!(ThemeMode::default(), ThemeMode::Media);
        assert_eq!(
            ThemeMode::Media.dark_variant_selector(),
            "@media (prefers-color-scheme: dark)"
        );
        assert_eq!(ThemeMode::Class.dark_variant_selector(), ".dark");
    }

    #[test]
    fn empty_scales_count_as_empty() {
        let mut section = ThemeSection::new();
        section.scales.insert("blur".into(), Scale::new());
        assert!(section.is_empty());
        assert!(!self::section().is_empty());
    }
}
