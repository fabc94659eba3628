//! Font family tokens

use crate::merge::DeepMerge;
use serde::{Deserialize, Serialize};

/// An ordered font stack
///
/// The first entry is the primary face, the rest are fallbacks. The last
/// entry is conventionally a generic family keyword (`sans-serif`, `serif`,
/// `monospace`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

/// CSS generic family keywords
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "emoji",
    "math",
    "fangsong",
];

impl FontStack {
    pub fn new<I, S>(faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(faces.into_iter().map(Into::into).collect())
    }

    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn fallbacks(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn faces(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the stack ends in a generic family keyword
    pub fn ends_with_generic(&self) -> bool {
        self.0
            .last()
            .is_some_and(|face| GENERIC_FAMILIES.contains(&face.as_str()))
    }

    /// Comma-joined form used in a `font-family` declaration.
    pub fn to_css(&self) -> String {
        self.0.join(", ")
    }
}

impl DeepMerge for FontStack {
    /// Stacks are sequences; the overlay replaces the whole stack.
    fn deep_merge(&mut self, overlay: &Self) {
        self.0.clone_from(&overlay.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_and_fallbacks() {
        let stack = FontStack::new(["Inter", "system-ui", "sans-serif"]);
        assert_eq!(stack.primary(), Some("Inter"));
        assert_eq!(stack.fallbacks(), ["system-ui", "sans-serif"]);
        assert!(stack.ends_with_generic());
        assert_eq!(stack.to_css(), "Inter, system-ui, sans-serif");
    }

    #[test]
    fn empty_stack_has_no_primary() {
        let stack = FontStack::default();
        assert_eq!(stack.primary(), None);
        assert!(stack.fallbacks().is_empty());
        assert!(!stack.ends_with_generic());
    }

    #[test]
    fn overlay_replaces_stack() {
        let mut stack = FontStack::new(["ui-sans-serif", "system-ui", "sans-serif"]);
        stack.deep_merge(&FontStack::new(["Inter", "sans-serif"]));
        assert_eq!(stack.faces(), ["Inter", "sans-serif"]);
    }
}
