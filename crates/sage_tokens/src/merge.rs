//! Additive theme merging
//!
//! Extensions are layered onto a base theme key by key. A key present in
//! both sides takes the extension's value (recursing into nested maps), a
//! key only in the base is left untouched, and a key only in the extension
//! is added. Nothing here ever replaces a whole category.

use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Recursive, override-by-key merge of `overlay` into `self`
pub trait DeepMerge {
    fn deep_merge(&mut self, overlay: &Self);
}

/// Merge `overlay` onto a copy of `base`.
pub fn merged<T: DeepMerge + Clone>(base: &T, overlay: &T) -> T {
    let mut out = base.clone();
    out.deep_merge(overlay);
    out
}

impl DeepMerge for String {
    fn deep_merge(&mut self, overlay: &Self) {
        self.clone_from(overlay);
    }
}

impl<V: DeepMerge + Clone> DeepMerge for IndexMap<String, V> {
    fn deep_merge(&mut self, overlay: &Self) {
        for (key, value) in overlay {
            match self.get_mut(key) {
                Some(existing) => existing.deep_merge(value),
                None => {
                    self.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

impl<K: Ord + Clone, V: DeepMerge + Clone> DeepMerge for BTreeMap<K, V> {
    fn deep_merge(&mut self, overlay: &Self) {
        for (key, value) in overlay {
            match self.get_mut(key) {
                Some(existing) => existing.deep_merge(value),
                None => {
                    self.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_overlay_is_identity() {
        let base = map(&[("sm", "4px"), ("md", "12px")]);
        assert_eq!(merged(&base, &IndexMap::new()), base);
    }

    #[test]
    fn overlay_wins_on_collision_and_keeps_the_rest() {
        let base = map(&[("sm", "4px"), ("md", "12px")]);
        let ext = map(&[("md", "10px"), ("xs", "2px")]);
        let out = merged(&base, &ext);

        assert_eq!(out["sm"], "4px");
        assert_eq!(out["md"], "10px");
        assert_eq!(out["xs"], "2px");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn nested_maps_recurse() {
        let mut base: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
        base.insert("50%".into(), map(&[("opacity", ".5"), ("color", "red")]));

        let mut ext = IndexMap::new();
        ext.insert("50%".into(), map(&[("opacity", "0.7")]));

        base.deep_merge(&ext);
        assert_eq!(base["50%"]["opacity"], "0.7");
        assert_eq!(base["50%"]["color"], "red");
    }

    #[test]
    fn new_keys_append_in_overlay_order() {
        let base = map(&[("a", "1")]);
        let ext = map(&[("c", "3"), ("b", "2")]);
        let keys: Vec<_> = merged(&base, &ext).into_keys().collect();
        assert_eq!(keys, vec!["a", "c", "b"]);
    }
}
