//! Folder-name configuration for the fixed show layout.
//!
//! The key set is fixed; every entry always has a value. Initialized with
//! canonical defaults at startup, mutated only through the Folder Names tab,
//! read by the planner at plan-build time.

use serde::{Deserialize, Serialize};

/// User-overridable names for every folder of the fixed layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderConfig {
    pub plates: String,
    pub plates_aspera: String,
    pub plates_manifest: String,

    pub support: String,
    pub support_luts: String,
    pub support_luts_camera: String,
    pub support_luts_show: String,
    pub support_edl_xml: String,
    pub support_guides: String,
    pub support_camera_data: String,

    pub references: String,
    pub references_client_brief: String,
    pub references_artwork: String,
    pub references_style_guides: String,

    pub vfx: String,
    pub comp: String,

    pub mograph: String,
    pub mograph_projects: String,
    pub mograph_render: String,

    pub shared: String,
    pub shared_stock_footage: String,
    pub shared_graphics: String,
    pub shared_fonts: String,
    pub shared_templates: String,

    pub output: String,
    pub output_date: String,
    pub output_full_res: String,
    pub output_proxy: String,
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            plates: "01_plates".into(),
            plates_aspera: "Aspera".into(),
            plates_manifest: "plate_manifest.txt".into(),

            support: "02_support".into(),
            support_luts: "luts".into(),
            support_luts_camera: "camera".into(),
            support_luts_show: "show".into(),
            support_edl_xml: "edl_xml".into(),
            support_guides: "guides".into(),
            support_camera_data: "camera_data".into(),

            references: "03_references".into(),
            references_client_brief: "client_brief".into(),
            references_artwork: "artwork".into(),
            references_style_guides: "style_guides".into(),

            vfx: "04_vfx".into(),
            comp: "05_comp".into(),

            mograph: "06_mograph".into(),
            mograph_projects: "projects".into(),
            mograph_render: "render".into(),

            shared: "07_shared".into(),
            shared_stock_footage: "stock_footage".into(),
            shared_graphics: "graphics".into(),
            shared_fonts: "fonts".into(),
            shared_templates: "templates".into(),

            output: "08_output".into(),
            output_date: "[date]".into(),
            output_full_res: "full_res".into(),
            output_proxy: "proxy".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_canonical() {
        let cfg = FolderConfig::default();
        assert_eq!(cfg.plates, "01_plates");
        assert_eq!(cfg.comp, "05_comp");
        assert_eq!(cfg.output_date, "[date]");
    }

    #[test]
    fn partial_json_fills_missing_keys_with_defaults() {
        let cfg: FolderConfig = serde_json::from_str(r#"{"comp":"050_comp"}"#).unwrap();
        assert_eq!(cfg.comp, "050_comp");
        assert_eq!(cfg.plates, "01_plates");
    }
}
