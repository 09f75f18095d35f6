//! Resolution presets and frame-rate parsing.

/// Named resolution preset with the label embedded in generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResPreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

pub const RES_PRESETS: &[ResPreset] = &[
    ResPreset { name: "HD 1920x1080", width: 1920, height: 1080, label: "HD_1080" },
    ResPreset { name: "UHD_4K 3840x2160", width: 3840, height: 2160, label: "UHD_4K" },
    ResPreset { name: "4K_Super_35 4096x3112", width: 4096, height: 3112, label: "4K_Super_35" },
    ResPreset { name: "4K_DCP 4096x2160", width: 4096, height: 2160, label: "4K_DCP" },
    ResPreset { name: "4K_square 4096x4096", width: 4096, height: 4096, label: "4K_square" },
    ResPreset { name: "4K_Sphere 4000x4000", width: 4000, height: 4000, label: "4K_Sphere" },
    ResPreset { name: "8K_Sphere 8000x8000", width: 8000, height: 8000, label: "8K_Sphere" },
    ResPreset { name: "10K_Sphere 10000x10000", width: 10000, height: 10000, label: "10K_Sphere" },
    ResPreset { name: "12K_Sphere 12000x12000", width: 12000, height: 12000, label: "12K_Sphere" },
];

/// Frame rates offered by the UI.
pub const KNOWN_FPS: &[&str] = &[
    "23.976", "24", "25", "29.97", "30", "50", "59.94", "60", "120",
];

/// Parse an fps string from the UI; malformed input falls back to 24.0.
pub fn parse_fps(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(24.0)
}

/// Script label for a resolution: preset label when width/height match one,
/// `Custom_<w>x<h>` otherwise.
pub fn resolution_label(width: u32, height: u32) -> String {
    RES_PRESETS
        .iter()
        .find(|p| p.width == width && p.height == height)
        .map(|p| p.label.to_string())
        .unwrap_or_else(|| format!("Custom_{width}x{height}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_parses_known_values() {
        assert_eq!(parse_fps("23.976"), 23.976);
        assert_eq!(parse_fps("24"), 24.0);
        assert_eq!(parse_fps(" 29.97 "), 29.97);
    }

    #[test]
    fn fps_defaults_on_garbage() {
        assert_eq!(parse_fps(""), 24.0);
        assert_eq!(parse_fps("abc"), 24.0);
    }

    #[test]
    fn label_matches_preset_or_falls_back() {
        assert_eq!(resolution_label(1920, 1080), "HD_1080");
        assert_eq!(resolution_label(4096, 2160), "4K_DCP");
        assert_eq!(resolution_label(1234, 567), "Custom_1234x567");
    }
}
