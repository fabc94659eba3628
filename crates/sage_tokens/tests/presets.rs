use sage_tokens::{BasePreset, Shade, BACKDROP_BLUR, BLUR};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = BasePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["bare", "tailwind"]);
}

#[test]
fn preset_ids_round_trip() {
    for preset in BasePreset::all() {
        assert_eq!(BasePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(BasePreset::from_id("TAILWIND"), Some(BasePreset::Tailwind));
    assert_eq!(BasePreset::from_id("catppuccin"), None);
}

#[test]
fn bare_preset_is_empty() {
    assert!(BasePreset::Bare.section().is_empty());
}

#[test]
fn tailwind_palettes_are_complete() {
    let section = BasePreset::Tailwind.section();
    for name in ["gray", "red", "green", "blue"] {
        let scale = section.colors[name]
            .as_scale()
            .unwrap_or_else(|| panic!("{name} should be a scale"));
        assert!(scale.is_complete(), "{name} is missing shades");
        assert_eq!(scale.shades().collect::<Vec<_>>(), Shade::ALL);
    }
}

#[test]
fn tailwind_animations_resolve_except_none() {
    let section = BasePreset::Tailwind.section();
    for name in section.animation.keys() {
        let resolved = section.keyframes_for(name).is_some();
        assert_eq!(resolved, name != "none", "animation={name}");
    }
}

#[test]
fn tailwind_blur_scales_match() {
    let section = BasePreset::Tailwind.section();
    assert_eq!(section.scale(BLUR), section.scale(BACKDROP_BLUR));
    assert_eq!(section.scale(BLUR).and_then(|s| s.get("DEFAULT")), Some("8px"));
}
