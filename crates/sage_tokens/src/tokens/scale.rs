//! Free-form value scales (blur radius, animation delay, ...)

use crate::merge::DeepMerge;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scale holding backdrop blur radii
pub const BACKDROP_BLUR: &str = "backdrop_blur";
/// Scale holding blur radii
pub const BLUR: &str = "blur";
/// Scale holding animation delays; not part of the stock base theme
pub const ANIMATION_DELAY: &str = "animation_delay";

/// Key to literal value entries of one named scale
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scale(IndexMap<String, String>);

impl Scale {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Scale {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl DeepMerge for Scale {
    fn deep_merge(&mut self, overlay: &Self) {
        self.0.deep_merge(&overlay.0);
    }
}
