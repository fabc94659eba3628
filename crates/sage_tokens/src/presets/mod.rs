//! Built-in base themes that registries are merged onto.

use crate::theme::ThemeSection;
use crate::tokens::*;
use std::fmt::{Display, Formatter};

/// Built-in base theme catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BasePreset {
    /// Utility-first defaults: keyword colors, stock palettes, font stacks,
    /// spin/ping/pulse/bounce animations and the blur scales.
    #[default]
    Tailwind,
    /// No defaults at all; the resolved theme is exactly the extension.
    Bare,
}

impl BasePreset {
    /// Stable preset id for config/CLI use.
    pub fn id(self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::Bare => "bare",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Tailwind => "Tailwind",
            Self::Bare => "Bare",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [BasePreset] {
        const PRESETS: [BasePreset; 2] = [BasePreset::Tailwind, BasePreset::Bare];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(id))
    }

    /// Build the base theme section for this preset.
    pub fn section(self) -> ThemeSection {
        match self {
            Self::Tailwind => tailwind_section(),
            Self::Bare => ThemeSection::default(),
        }
    }
}

impl Display for BasePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn base_section(preset: BasePreset) -> ThemeSection {
    preset.section()
}

fn tailwind_section() -> ThemeSection {
    let mut section = ThemeSection::default();

    for (name, value) in [
        ("inherit", "inherit"),
        ("current", "currentColor"),
        ("transparent", "transparent"),
        ("black", "#000"),
        ("white", "#fff"),
    ] {
        section.colors.insert(name.into(), ColorValue::single(value));
    }
    for (name, scale) in [
        ("gray", GRAY),
        ("red", RED),
        ("green", GREEN),
        ("blue", BLUE),
    ] {
        section
            .colors
            .insert(name.into(), ColorScale::from_shades(scale).into());
    }

    section.font_family.insert(
        "sans".into(),
        FontStack::new([
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "\"Apple Color Emoji\"",
            "\"Segoe UI Emoji\"",
            "\"Segoe UI Symbol\"",
            "\"Noto Color Emoji\"",
        ]),
    );
    section.font_family.insert(
        "serif".into(),
        FontStack::new([
            "ui-serif",
            "Georgia",
            "Cambria",
            "\"Times New Roman\"",
            "Times",
            "serif",
        ]),
    );
    section.font_family.insert(
        "mono".into(),
        FontStack::new([
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "\"Liberation Mono\"",
            "\"Courier New\"",
            "monospace",
        ]),
    );

    for (name, shorthand) in [
        ("none", "none"),
        ("spin", "spin 1s linear infinite"),
        ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
        ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
        ("bounce", "bounce 1s infinite"),
    ] {
        section
            .animation
            .insert(name.into(), AnimationToken::new(shorthand));
    }

    section.keyframes.insert(
        "spin".into(),
        Keyframes::new().step("to", [("transform", "rotate(360deg)")]),
    );
    section.keyframes.insert(
        "ping".into(),
        Keyframes::new().step("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]),
    );
    section.keyframes.insert(
        "pulse".into(),
        Keyframes::new().step("50%", [("opacity", ".5")]),
    );
    section.keyframes.insert(
        "bounce".into(),
        Keyframes::new()
            .step(
                "0%, 100%",
                [
                    ("transform", "translateY(-25%)"),
                    ("animation-timing-function", "cubic-bezier(0.8, 0, 1, 1)"),
                ],
            )
            .step(
                "50%",
                [
                    ("transform", "none"),
                    ("animation-timing-function", "cubic-bezier(0, 0, 0.2, 1)"),
                ],
            ),
    );

    let blur: Scale = [
        ("0", "0"),
        ("none", ""),
        ("sm", "4px"),
        ("DEFAULT", "8px"),
        ("md", "12px"),
        ("lg", "16px"),
        ("xl", "24px"),
        ("2xl", "40px"),
        ("3xl", "64px"),
    ]
    .into_iter()
    .collect();
    section.scales.insert(BLUR.into(), blur.clone());
    section.scales.insert(BACKDROP_BLUR.into(), blur);

    section
}

const GRAY: [&str; 11] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827", "#030712",
];

const RED: [&str; 11] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d", "#450a0a",
];

const GREEN: [&str; 11] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#052e16",
];

const BLUE: [&str; 11] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a", "#172554",
];
