//! Keyframe tokens
//!
//! A keyframes token is an ordered list of steps. Each step is keyed by a
//! selector (`"50%"`, `"0%, 100%"`, `from`, `to`) and holds the style
//! properties in effect at that point. Steps keep declaration order;
//! consumers evaluate them in that order.

use crate::merge::DeepMerge;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Style properties at one keyframe step
pub type StepProperties = IndexMap<String, String>;

/// Named `@keyframes` definition
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframes(IndexMap<String, StepProperties>);

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append (or extend) the step at `selector`.
    pub fn step<I, K, V>(mut self, selector: impl Into<String>, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let props = self.0.entry(selector.into()).or_default();
        for (name, value) in properties {
            props.insert(name.into(), value.into());
        }
        self
    }

    pub fn get(&self, selector: &str) -> Option<&StepProperties> {
        self.0.get(selector)
    }

    /// Steps in declaration order
    pub fn steps(&self) -> impl Iterator<Item = (&str, &StepProperties)> {
        self.0.iter().map(|(selector, props)| (selector.as_str(), props))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every progress offset the steps cover, in declaration order.
    ///
    /// Selectors that don't parse are skipped; see [`step_offsets`].
    pub fn offsets(&self) -> Vec<f32> {
        self.0
            .keys()
            .filter_map(|selector| step_offsets(selector))
            .flatten()
            .collect()
    }

    /// Selectors that are not a percentage list or `from`/`to`
    pub fn invalid_selectors(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .filter(|selector| step_offsets(selector).is_none())
            .map(String::as_str)
    }
}

impl DeepMerge for Keyframes {
    fn deep_merge(&mut self, overlay: &Self) {
        self.0.deep_merge(&overlay.0);
    }
}

/// Parse a step selector into progress fractions in `[0, 1]`
///
/// ```
/// use sage_tokens::step_offsets;
///
/// assert_eq!(step_offsets("0%, 100%"), Some(vec![0.0, 1.0]));
/// assert_eq!(step_offsets("to"), Some(vec![1.0]));
/// assert_eq!(step_offsets("150%"), None);
/// ```
pub fn step_offsets(selector: &str) -> Option<Vec<f32>> {
    selector
        .split(',')
        .map(|part| match part.trim() {
            "from" => Some(0.0),
            "to" => Some(1.0),
            other => other
                .strip_suffix('%')
                .and_then(|pct| pct.trim().parse::<f32>().ok())
                .filter(|pct| (0.0..=100.0).contains(pct))
                .map(|pct| pct / 100.0),
        })
        .collect()
}
