//! Color tokens for theming

use crate::error::ConfigError;
use crate::merge::DeepMerge;
use serde::de::{self, Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Shade keys of a color scale, lightest to darkest
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// Every shade in lightness order.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric key as written in documents (`50`, `100`, ...).
    pub fn key(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    pub fn from_key(key: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.key() == key)
    }
}

impl Display for Shade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Shade {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Shade::from_key)
            .ok_or_else(|| ConfigError::UnknownShade(s.to_string()))
    }
}

impl TryFrom<String> for Shade {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shade> for String {
    fn from(shade: Shade) -> Self {
        shade.to_string()
    }
}

/// Lightness variants of one color family
///
/// Keys are unique by construction and iterate lightest to darkest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(BTreeMap<Shade, String>);

impl ColorScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complete scale from eleven values ordered `50..=950`.
    pub fn from_shades(values: [&str; 11]) -> Self {
        Self(
            Shade::ALL
                .into_iter()
                .zip(values)
                .map(|(shade, value)| (shade, value.to_string()))
                .collect(),
        )
    }

    pub fn with(mut self, shade: Shade, value: impl Into<String>) -> Self {
        self.insert(shade, value);
        self
    }

    pub fn insert(&mut self, shade: Shade, value: impl Into<String>) -> Option<String> {
        self.0.insert(shade, value.into())
    }

    pub fn get(&self, shade: Shade) -> Option<&str> {
        self.0.get(&shade).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        self.0.iter().map(|(shade, value)| (*shade, value.as_str()))
    }

    pub fn shades(&self) -> impl Iterator<Item = Shade> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shades a complete scale would declare but this one does not
    pub fn missing_shades(&self) -> Vec<Shade> {
        Shade::ALL
            .into_iter()
            .filter(|shade| !self.0.contains_key(shade))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.0.len() == Shade::ALL.len()
    }
}

impl DeepMerge for ColorScale {
    fn deep_merge(&mut self, overlay: &Self) {
        self.0.deep_merge(&overlay.0);
    }
}

/// A named color: one literal or a full shade scale
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Scale(ColorScale),
}

impl ColorValue {
    pub fn single(value: impl Into<String>) -> Self {
        ColorValue::Single(value.into())
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            ColorValue::Single(value) => Some(value),
            ColorValue::Scale(_) => None,
        }
    }

    pub fn as_scale(&self) -> Option<&ColorScale> {
        match self {
            ColorValue::Scale(scale) => Some(scale),
            ColorValue::Single(_) => None,
        }
    }

    /// Value at `shade`, if this is a scale that declares it
    pub fn shade(&self, shade: Shade) -> Option<&str> {
        self.as_scale().and_then(|scale| scale.get(shade))
    }
}

/// A string is a single color and a table is a scale. Scale keys must
/// parse as a [`Shade`]; a bad key fails with [`ConfigError::UnknownShade`].
impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColorValueVisitor;

        impl<'de> Visitor<'de> for ColorValueVisitor {
            type Value = ColorValue;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a color string or a table of shade keys (50..950)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<ColorValue, E> {
                Ok(ColorValue::single(value))
            }

            fn visit_string<E: de::Error>(self, value: String) -> Result<ColorValue, E> {
                Ok(ColorValue::Single(value))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ColorValue, A::Error> {
                let mut scale = ColorScale::new();
                while let Some(key) = map.next_key::<String>()? {
                    let shade: Shade = key.parse().map_err(A::Error::custom)?;
                    let value: String = map.next_value()?;
                    if scale.insert(shade, value).is_some() {
                        return Err(de::Error::custom(format!("duplicate shade key `{key}`")));
                    }
                }
                Ok(ColorValue::Scale(scale))
            }
        }

        deserializer.deserialize_any(ColorValueVisitor)
    }
}

impl From<ColorScale> for ColorValue {
    fn from(scale: ColorScale) -> Self {
        ColorValue::Scale(scale)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        ColorValue::Single(value.to_string())
    }
}

impl DeepMerge for ColorValue {
    /// Two scales merge shade by shade; any other pairing is replaced
    /// by the overlay.
    fn deep_merge(&mut self, overlay: &Self) {
        match (self, overlay) {
            (ColorValue::Scale(base), ColorValue::Scale(ext)) => base.deep_merge(ext),
            (slot, ext) => *slot = ext.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shade_keys_parse_and_reject() {
        assert_eq!("500".parse::<Shade>().unwrap(), Shade::S500);
        assert_eq!(" 950 ".parse::<Shade>().unwrap(), Shade::S950);
        assert!(matches!(
            "550".parse::<Shade>(),
            Err(ConfigError::UnknownShade(key)) if key == "550"
        ));
        assert!("DEFAULT".parse::<Shade>().is_err());
    }

    #[test]
    fn scale_iterates_lightest_first() {
        let scale = ColorScale::new()
            .with(Shade::S900, "#111111")
            .with(Shade::S50, "#fafafa")
            .with(Shade::S500, "#777777");

        let order: Vec<u16> = scale.shades().map(Shade::key).collect();
        assert_eq!(order, vec![50, 500, 900]);
        assert_eq!(scale.missing_shades().len(), 8);
        assert!(!scale.is_complete());
    }

    #[test]
    fn scales_merge_per_shade() {
        let mut base = ColorValue::from(
            ColorScale::new()
                .with(Shade::S50, "#fff")
                .with(Shade::S500, "#888"),
        );
        base.deep_merge(&ColorValue::from(
            ColorScale::new().with(Shade::S500, "#7fa86d"),
        ));

        assert_eq!(base.shade(Shade::S50), Some("#fff"));
        assert_eq!(base.shade(Shade::S500), Some("#7fa86d"));
    }

    #[test]
    fn bad_shade_key_keeps_its_message() {
        let err = serde_json::from_str::<ColorValue>(r##"{"500": "#888", "550": "#999"}"##)
            .unwrap_err();
        assert!(err.to_string().contains("unknown shade key `550`"));

        let err = serde_json::from_str::<ColorValue>(r##"{"50": "#fff", "50": "#eee"}"##)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate shade key `50`"));
    }

    #[test]
    fn strings_and_tables_pick_the_variant() {
        let single: ColorValue = serde_json::from_str(r##""#1DB954""##).unwrap();
        assert_eq!(single.as_single(), Some("#1DB954"));

        let scale: ColorValue = serde_json::from_str(r##"{"500": "#7fa86d"}"##).unwrap();
        assert_eq!(scale.shade(Shade::S500), Some("#7fa86d"));
        assert!(serde_json::from_str::<ColorValue>("12").is_err());
    }

    #[test]
    fn single_replaces_scale() {
        let mut base = ColorValue::from(ColorScale::from_shades(["#0"; 11]));
        base.deep_merge(&ColorValue::single("#1DB954"));
        assert_eq!(base.as_single(), Some("#1DB954"));
    }
}
