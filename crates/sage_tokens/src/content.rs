//! Content glob helpers
//!
//! The registry only stores patterns; walking the file system is left to the
//! build tool. These helpers answer what a pattern list covers.

use std::collections::BTreeSet;

/// Expand `{a,b}` alternatives into separate patterns
///
/// ```
/// use sage_tokens::content::expand_braces;
///
/// assert_eq!(
///     expand_braces("./src/**/*.{rs,html}"),
///     vec!["./src/**/*.rs", "./src/**/*.html"],
/// );
/// ```
///
/// Patterns with unbalanced braces come back unchanged.
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = outer_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];
    split_alternatives(&pattern[open + 1..close])
        .into_iter()
        .flat_map(|alt| expand_braces(&format!("{prefix}{alt}{suffix}")))
        .collect()
}

/// File extensions matched by the patterns (`rs`, `html`, ...)
pub fn covered_extensions<S: AsRef<str>>(patterns: &[S]) -> BTreeSet<String> {
    patterns
        .iter()
        .flat_map(|pattern| expand_braces(pattern.as_ref()))
        .filter_map(|pattern| extension_of(&pattern))
        .collect()
}

fn extension_of(pattern: &str) -> Option<String> {
    let file = pattern.rsplit('/').next()?;
    let (_, ext) = file.rsplit_once('.')?;
    if ext.is_empty() || ext.contains(['*', '?', '[', ']']) {
        return None;
    }
    Some(ext.to_string())
}

/// Byte offsets of the first top-level `{ ... }` group
fn outer_group(pattern: &str) -> Option<(usize, usize)> {
    let open = pattern.find('{')?;
    let mut depth = 0usize;
    for (idx, ch) in pattern[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((open, open + idx));
                }
            }
            _ => {}
        }
    }
    None
}

fn split_alternatives(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, ch) in inner.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&inner[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_braces_is_identity() {
        assert_eq!(expand_braces("./dist/**/*.html"), vec!["./dist/**/*.html"]);
    }

    #[test]
    fn nested_and_repeated_groups() {
        assert_eq!(
            expand_braces("{src,lib}/*.{rs,{ht,x}ml}"),
            vec![
                "src/*.rs",
                "src/*.html",
                "src/*.xml",
                "lib/*.rs",
                "lib/*.html",
                "lib/*.xml",
            ]
        );
    }

    #[test]
    fn unbalanced_braces_are_left_alone() {
        assert_eq!(expand_braces("src/*.{rs,html"), vec!["src/*.{rs,html"]);
    }

    #[test]
    fn extensions_of_the_sage_globs() {
        let globs = ["./src/**/*.{rs,html,css}", "./dist/**/*.html", "./assets/**"];
        let exts: Vec<String> = covered_extensions(&globs[..]).into_iter().collect();
        assert_eq!(exts, vec!["css", "html", "rs"]);
    }
}
