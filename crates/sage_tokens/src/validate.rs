//! Consumer-side checks on a merged theme
//!
//! Nothing in here fails. Problems are returned as [`Diagnostic`]s so the
//! build can report them and carry on; a dangling animation reference, for
//! example, only means the animation has no visible effect.

use crate::theme::ThemeSection;
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter};

/// Severity level for validation findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The entry cannot be used as declared
    Error,
    /// The entry is usable but will not behave as intended
    Warning,
    /// Informational message
    Info,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single validation finding, located by category and token name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// `colors`, `font_family`, `animation`, `keyframes`, `content`, or a
    /// scale name
    pub category: String,
    pub key: String,
    pub message: String,
}

impl Diagnostic {
    fn new(
        severity: Severity,
        category: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Emit through `tracing` at the matching level.
    pub fn log(&self) {
        match self.severity {
            Severity::Error => tracing::error!(
                category = %self.category,
                key = %self.key,
                "{}",
                self.message
            ),
            Severity::Warning => tracing::warn!(
                category = %self.category,
                key = %self.key,
                "{}",
                self.message
            ),
            Severity::Info => tracing::info!(
                category = %self.category,
                key = %self.key,
                "{}",
                self.message
            ),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}.{}: {}",
            self.severity, self.category, self.key, self.message
        )
    }
}

/// Validate a merged theme
///
/// `base` is the section the extension was merged onto; scales the base
/// does not know are reported as custom extensions. `content` is the
/// registry's glob list.
pub fn validate(merged: &ThemeSection, base: &ThemeSection, content: &[String]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if content.is_empty() {
        diagnostics.push(Diagnostic::new(
            Severity::Warning,
            "content",
            "",
            "no content globs; every utility class will be purged",
        ));
    }

    for (name, value) in &merged.colors {
        let Some(scale) = value.as_scale() else {
            continue;
        };
        let missing = scale.missing_shades();
        if !missing.is_empty() {
            let shades: Vec<String> = missing.iter().map(ToString::to_string).collect();
            diagnostics.push(Diagnostic::new(
                Severity::Warning,
                "colors",
                name,
                format!("scale is missing shades {}", shades.join(", ")),
            ));
        }
    }

    for (name, stack) in &merged.font_family {
        if stack.is_empty() {
            diagnostics.push(Diagnostic::new(
                Severity::Error,
                "font_family",
                name,
                "font stack is empty",
            ));
        } else if !stack.ends_with_generic() {
            diagnostics.push(Diagnostic::new(
                Severity::Info,
                "font_family",
                name,
                "font stack does not end with a generic family",
            ));
        }
    }

    let mut referenced: FxHashSet<&str> = FxHashSet::default();
    for (name, token) in &merged.animation {
        let Some(shorthands) = token.shorthands() else {
            diagnostics.push(Diagnostic::new(
                Severity::Warning,
                "animation",
                name,
                format!("cannot parse animation shorthand `{token}`"),
            ));
            continue;
        };
        for frames in shorthands.iter().filter_map(|parsed| parsed.keyframes) {
            referenced.insert(frames);
            if !merged.keyframes.contains_key(frames) {
                diagnostics.push(Diagnostic::new(
                    Severity::Warning,
                    "animation",
                    name,
                    format!("refers to undefined keyframes `{frames}`; the animation has no effect"),
                ));
            }
        }
    }

    for (name, frames) in &merged.keyframes {
        if frames.is_empty() {
            diagnostics.push(Diagnostic::new(
                Severity::Warning,
                "keyframes",
                name,
                "keyframes define no steps",
            ));
        }
        for selector in frames.invalid_selectors() {
            diagnostics.push(Diagnostic::new(
                Severity::Warning,
                "keyframes",
                name,
                format!("step selector `{selector}` is not a percentage list, `from` or `to`"),
            ));
        }
        if !referenced.contains(name.as_str()) {
            diagnostics.push(Diagnostic::new(
                Severity::Info,
                "keyframes",
                name,
                "not referenced by any animation",
            ));
        }
    }

    for name in merged.scales.keys() {
        if let Some(category) = misspelled_category(name) {
            diagnostics.push(Diagnostic::new(
                Severity::Warning,
                name.as_str(),
                "",
                format!("stored as a scale; did you mean `{category}`?"),
            ));
        } else if !base.scales.contains_key(name) {
            diagnostics.push(Diagnostic::new(
                Severity::Info,
                name.as_str(),
                "",
                "custom scale not present in the base theme; consumers may ignore it",
            ));
        }
    }

    diagnostics
}

/// Section names parsed as typed categories rather than scales
const CATEGORIES: &[&str] = &["colors", "font_family", "animation", "keyframes"];

/// Category that a scale name looks like a typo of
///
/// Matches names one edit away (`color`, `keyframe`) and the hyphenated or
/// camel-cased spellings of `font_family`.
fn misspelled_category(name: &str) -> Option<&'static str> {
    let normalized = name.to_ascii_lowercase().replace('-', "_");
    let normalized = if normalized == "fontfamily" {
        "font_family".to_string()
    } else {
        normalized
    };
    CATEGORIES
        .iter()
        .copied()
        .find(|category| normalized == *category || within_one_edit(&normalized, category))
}

/// True when `a` and `b` differ by at most one insertion, deletion or
/// substitution
fn within_one_edit(a: &str, b: &str) -> bool {
    let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if long.len() - short.len() > 1 {
        return false;
    }

    let prefix = short.iter().zip(&long).take_while(|(x, y)| x == y).count();
    if short.len() == long.len() {
        short[prefix..].iter().skip(1).eq(long[prefix..].iter().skip(1))
    } else {
        short[prefix..] == long[prefix + 1..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::*;

    fn globs() -> Vec<String> {
        vec!["./src/**/*.rs".to_string()]
    }

    #[test]
    fn dangling_animation_is_a_warning() {
        let mut section = ThemeSection::new();
        section
            .animation
            .insert("float".into(), AnimationToken::new("float 6s ease-in-out infinite"));

        let diagnostics = validate(&section, &ThemeSection::new(), &globs());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert_eq!(diagnostics[0].key, "float");
        assert!(diagnostics[0].message.contains("undefined keyframes"));
    }

    #[test]
    fn none_animation_needs_no_keyframes() {
        let mut section = ThemeSection::new();
        section
            .animation
            .insert("none".into(), AnimationToken::new("none"));
        assert!(validate(&section, &ThemeSection::new(), &globs()).is_empty());
    }

    #[test]
    fn incomplete_scale_lists_missing_shades() {
        let mut section = ThemeSection::new();
        let mut partial = ColorScale::new();
        for shade in &Shade::ALL[..10] {
            partial.insert(*shade, "#000");
        }
        section.colors.insert("ink".into(), partial.into());

        let diagnostics = validate(&section, &ThemeSection::new(), &globs());
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.ends_with("950"));
    }

    #[test]
    fn empty_font_stack_is_an_error() {
        let mut section = ThemeSection::new();
        section.font_family.insert("sans".into(), FontStack::default());
        let diagnostics = validate(&section, &ThemeSection::new(), &globs());
        assert_eq!(diagnostics[0].severity, Severity::Error);
    }

    #[test]
    fn every_entry_of_an_animation_list_is_checked() {
        let mut section = ThemeSection::new();
        section.animation.insert(
            "busy".into(),
            AnimationToken::new("spin 1s linear infinite, fade 2s ease-in"),
        );
        section
            .keyframes
            .insert("spin".into(), Keyframes::new().step("to", [("transform", "rotate(360deg)")]));

        let diagnostics = validate(&section, &ThemeSection::new(), &globs());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].key, "busy");
        assert!(diagnostics[0].message.contains("undefined keyframes `fade`"));
    }

    #[test]
    fn empty_animation_list_entry_is_reported() {
        let mut section = ThemeSection::new();
        section
            .animation
            .insert("broken".into(), AnimationToken::new("spin 1s,"));

        let diagnostics = validate(&section, &ThemeSection::new(), &globs());
        assert!(diagnostics[0].message.starts_with("cannot parse animation shorthand"));
    }

    #[test]
    fn category_typos_are_not_silent_scales() {
        let mut section = ThemeSection::new();
        for name in ["color", "keyframe", "font-family", "animations"] {
            section.scales.insert(name.into(), Scale::new().with("x", "y"));
        }
        section.scales.insert("blur".into(), Scale::new());

        let diagnostics = validate(&section, &ThemeSection::new(), &globs());
        let warned: Vec<&str> = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| d.category.as_str())
            .collect();
        assert_eq!(warned, vec!["color", "keyframe", "font-family", "animations"]);
        assert!(diagnostics[0].message.contains("did you mean `colors`"));
        assert_eq!(diagnostics.last().unwrap().severity, Severity::Info);
    }

    #[test]
    fn edit_distance_of_one() {
        assert!(within_one_edit("color", "colors"));
        assert!(within_one_edit("keyframez", "keyframes"));
        assert!(within_one_edit("animaton", "animation"));
        assert!(!within_one_edit("blur", "colors"));
        assert!(!within_one_edit("col", "colors"));
        assert_eq!(misspelled_category("backdrop_blur"), None);
        assert_eq!(misspelled_category("fontFamily"), Some("font_family"));
    }

    #[test]
    fn custom_scale_and_missing_content_are_reported() {
        let mut section = ThemeSection::new();
        section
            .scales
            .insert(ANIMATION_DELAY.into(), Scale::new().with("75", "75ms"));

        let diagnostics = validate(&section, &ThemeSection::new(), &[]);
        let categories: Vec<&str> = diagnostics.iter().map(|d| d.category.as_str()).collect();
        assert_eq!(categories, vec!["content", ANIMATION_DELAY]);
        assert_eq!(diagnostics[1].severity, Severity::Info);
    }
}
