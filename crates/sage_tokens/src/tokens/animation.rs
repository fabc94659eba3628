//! Animation tokens
//!
//! An animation token stores a CSS `animation` shorthand verbatim, e.g.
//! `float 6s ease-in-out infinite`. The registry never interprets it; the
//! parsed view exists so consumers (and validation) can find the keyframes
//! the shorthand refers to. A value may list several animations separated
//! by top-level commas, as CSS allows.

use crate::merge::DeepMerge;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const TIMING_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

const TIMING_FUNCTIONS: &[&str] = &["cubic-bezier(", "steps(", "linear("];

const OTHER_KEYWORDS: &[&str] = &[
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "forwards",
    "backwards",
    "both",
    "running",
    "paused",
];

/// Opaque `animation` shorthand
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimationToken(String);

impl AnimationToken {
    pub fn new(shorthand: impl Into<String>) -> Self {
        Self(shorthand.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse every comma-separated animation in the value
    ///
    /// Returns `None` when the value is blank, has an empty entry or has
    /// unbalanced parentheses.
    pub fn shorthands(&self) -> Option<Vec<AnimationShorthand<'_>>> {
        AnimationShorthand::parse_list(&self.0)
    }

    /// First animation of the value
    pub fn shorthand(&self) -> Option<AnimationShorthand<'_>> {
        self.shorthands()?.into_iter().next()
    }

    /// Name of the keyframes the first animation plays, if any
    pub fn keyframes_name(&self) -> Option<&str> {
        self.shorthand().and_then(|parsed| parsed.keyframes)
    }

    /// Keyframes referenced by every animation in the value
    pub fn keyframes_names(&self) -> Vec<&str> {
        self.shorthands()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|parsed| parsed.keyframes)
            .collect()
    }
}

impl Display for AnimationToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnimationToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl DeepMerge for AnimationToken {
    fn deep_merge(&mut self, overlay: &Self) {
        self.0.clone_from(&overlay.0);
    }
}

/// Components of an `animation` shorthand
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationShorthand<'a> {
    /// Keyframes reference; `None` for `animation: none`
    pub keyframes: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub timing_function: Option<&'a str>,
    pub delay: Option<&'a str>,
    pub iteration_count: Option<&'a str>,
    /// Direction, fill mode and play state keywords
    pub modifiers: Vec<&'a str>,
}

impl<'a> AnimationShorthand<'a> {
    /// Parse a comma-separated animation list
    pub fn parse_list(input: &'a str) -> Option<Vec<Self>> {
        split_list(input)?.into_iter().map(Self::parse).collect()
    }

    /// Parse a single animation; a top-level comma makes this fail
    pub fn parse(input: &'a str) -> Option<Self> {
        let parts = split_components(input)?;
        if parts.is_empty() {
            return None;
        }

        let mut parsed = AnimationShorthand::default();
        if parts == ["none"] {
            return Some(parsed);
        }

        for part in parts {
            if is_time(part) {
                // First time value is the duration, the second the delay.
                if parsed.duration.is_none() {
                    parsed.duration = Some(part);
                } else if parsed.delay.is_none() {
                    parsed.delay = Some(part);
                }
            } else if parsed.timing_function.is_none() && is_timing_function(part) {
                parsed.timing_function = Some(part);
            } else if parsed.iteration_count.is_none()
                && (part == "infinite" || part.parse::<f32>().is_ok())
            {
                parsed.iteration_count = Some(part);
            } else if OTHER_KEYWORDS.contains(&part) {
                parsed.modifiers.push(part);
            } else if parsed.keyframes.is_none() {
                parsed.keyframes = Some(part);
            } else {
                parsed.modifiers.push(part);
            }
        }

        Some(parsed)
    }
}

/// Whitespace split that keeps parenthesised groups together
fn split_components(input: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (idx, ch) in input.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(idx);
            }
            ')' => {
                depth = depth.checked_sub(1)?;
            }
            ',' if depth == 0 => return None,
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    parts.push(&input[begin..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }

    if depth != 0 {
        return None;
    }
    if let Some(begin) = start {
        parts.push(&input[begin..]);
    }
    Some(parts)
}

/// Split on commas outside parentheses
fn split_list(input: &str) -> Option<Vec<&str>> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in input.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                entries.push(&input[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    entries.push(&input[start..]);
    Some(entries)
}

fn is_time(part: &str) -> bool {
    let number = part
        .strip_suffix("ms")
        .or_else(|| part.strip_suffix('s'));
    number.is_some_and(|n| n.parse::<f32>().is_ok())
}

fn is_timing_function(part: &str) -> bool {
    TIMING_KEYWORDS.contains(&part) || TIMING_FUNCTIONS.iter().any(|f| part.starts_with(f))
}
