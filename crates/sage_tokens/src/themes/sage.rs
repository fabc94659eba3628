//! The shipped sage registry
//!
//! A muted green palette plus the Spotify brand green, an Inter font stack,
//! and three ambient animations (float, pulse-sage, sparkle).

use crate::registry::TokenRegistry;
use crate::theme::ThemeMode;
use crate::tokens::*;

/// Sage palette, 50 (lightest) to 950 (darkest)
pub mod palette {
    pub const SAGE_50: &str = "#f7f9f5";
    pub const SAGE_100: &str = "#eef3ea";
    pub const SAGE_200: &str = "#dde7d5";
    pub const SAGE_300: &str = "#c1d4b6";
    pub const SAGE_400: &str = "#9fc08e";
    pub const SAGE_500: &str = "#7fa86d";
    pub const SAGE_600: &str = "#648a54";
    pub const SAGE_700: &str = "#4f6d44";
    pub const SAGE_800: &str = "#3d5435";
    pub const SAGE_900: &str = "#2c3e28";
    pub const SAGE_950: &str = "#1a2218";

    pub const SPOTIFY_GREEN: &str = "#1DB954";

    pub const ALL: [&str; 11] = [
        SAGE_50, SAGE_100, SAGE_200, SAGE_300, SAGE_400, SAGE_500, SAGE_600, SAGE_700, SAGE_800,
        SAGE_900, SAGE_950,
    ];
}

pub fn sage_scale() -> ColorScale {
    ColorScale::from_shades(palette::ALL)
}

pub fn float_keyframes() -> Keyframes {
    Keyframes::new()
        .step("0%, 100%", [("transform", "translateY(0px)")])
        .step("50%", [("transform", "translateY(-10px)")])
}

pub fn pulse_sage_keyframes() -> Keyframes {
    Keyframes::new()
        .step(
            "0%, 100%",
            [("opacity", "1"), ("backgroundColor", "rgb(193, 212, 182)")],
        )
        .step(
            "50%",
            [("opacity", "0.7"), ("backgroundColor", "rgb(159, 192, 142)")],
        )
}

pub fn sparkle_keyframes() -> Keyframes {
    Keyframes::new()
        .step(
            "0%, 100%",
            [("transform", "scale(1) rotate(0deg)"), ("opacity", "0.8")],
        )
        .step(
            "25%",
            [("transform", "scale(1.1) rotate(90deg)"), ("opacity", "1")],
        )
        .step(
            "50%",
            [("transform", "scale(1.2) rotate(180deg)"), ("opacity", "0.9")],
        )
        .step(
            "75%",
            [("transform", "scale(1.1) rotate(270deg)"), ("opacity", "1")],
        )
}

/// Build the sage registry.
pub fn registry() -> TokenRegistry {
    TokenRegistry::builder()
        .content("./src/**/*.{rs,html,css}")
        .content("./dist/**/*.html")
        .dark_mode(ThemeMode::Media)
        .color("spotify-green", palette::SPOTIFY_GREEN)
        .color("sage", sage_scale())
        .font_family("sans", FontStack::new(["Inter", "system-ui", "sans-serif"]))
        .animation("float", "float 6s ease-in-out infinite")
        .animation(
            "pulse-sage",
            "pulse-sage 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
        )
        .animation("sparkle", "sparkle 2s ease-in-out infinite")
        .keyframes("float", float_keyframes())
        .keyframes("pulse-sage", pulse_sage_keyframes())
        .keyframes("sparkle", sparkle_keyframes())
        .scale_entry(BACKDROP_BLUR, "xs", "2px")
        .scale_entry(ANIMATION_DELAY, "75", "75ms")
        .scale_entry(ANIMATION_DELAY, "150", "150ms")
        .build()
}

impl TokenRegistry {
    /// The shipped sage registry
    pub fn sage() -> Self {
        registry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_animation_has_keyframes() {
        let registry = registry();
        for (name, token) in registry.animation_extensions() {
            let frames = token.keyframes_name().unwrap();
            assert!(
                registry.keyframe_extensions().contains_key(frames),
                "animation {name} refers to missing keyframes {frames}"
            );
        }
    }

    #[test]
    fn step_property_names_are_kept_as_written() {
        let frames = pulse_sage_keyframes();
        let first = frames.get("0%, 100%").unwrap();
        let names: Vec<&str> = first.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["opacity", "backgroundColor"]);
        assert_eq!(frames.get("50%").unwrap()["backgroundColor"], "rgb(159, 192, 142)");
    }

    #[test]
    fn sparkle_steps_stay_in_declaration_order() {
        let offsets = sparkle_keyframes().offsets();
        assert_eq!(offsets, vec![0.0, 1.0, 0.25, 0.5, 0.75]);
    }
}
