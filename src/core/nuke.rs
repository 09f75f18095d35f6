//! Nuke comp script templater.
//!
//! Pure text generation, no I/O. The fixed blocks are reproduced verbatim so
//! generated scripts stay byte-identical run to run; fps is formatted at two
//! decimals in the Root header and eight decimals in the Viewer block.

use crate::core::entities::{comp_script_name, RenderSettings};

const WINDOW_LAYOUT: &str = r#"define_window_layout_xml {<?xml version="1.0" encoding="UTF-8"?>
<layout version="1.0">
    <window x="-1" y="-8" w="2560" h="1369" maximized="1" screen="0">
        <splitter orientation="1">
            <split size="53"/>
            <dock id="" hideTitles="1" activePageId="Toolbar.1">
                <page id="Toolbar.1"/>
            </dock>
            <split size="1895"/>
            <splitter orientation="2">
                <split size="1328"/>
                <dock id="" activePageId="DAG.1" focus="true">
                    <page id="Curve Editor.1"/>
                    <page id="DopeSheet.1"/>
                    <page id="DAG.1"/>
                </dock>
            </splitter>
            <split size="604"/>
            <splitter orientation="2">
                <split size="1127"/>
                <dock id="" activePageId="Properties.1">
                    <page id="Properties.1"/>
                </dock>
                <split size="197"/>
                <dock id="" activePageId="Progress.1">
                    <page id="Progress.1"/>
                    <page id="Pixel Analyzer.1"/>
                </dock>
            </splitter>
        </splitter>
    </window>
    <window x="2560" y="-8" w="2560" h="1417" maximized="1" screen="1">
        <splitter orientation="2">
            <split size="1417"/>
            <dock id="" activePageId="Viewer.1">
                <page id="Viewer.1"/>
            </dock>
        </splitter>
    </window>
</layout>
}"#;

const PROXY_ON: &str = " proxy_format \"4000 4000 0 0 4000 4000 1 4K Proxy LL180 Sphere\"\n proxySetting always";

// The trailing space after the closing quote is part of the original block.
const PROXY_OFF: &str = " proxy_type scale\n proxy_format \"1024 778 0 0 1024 778 1 1K_Super_35(full-ap)\" ";

const COLOR_ACES: &str = r#" colorManagement OCIO
 OCIO_config aces_1.2
 defaultViewerLUT "OCIO LUTs"
 workingSpaceLUT scene_linear
 monitorLut "OCIO LUTs"
 monitorOutLUT "OCIO LUTs"
 int8Lut matte_paint
 int16Lut texture_paint
 logLut compositing_log
 floatLut scene_linear"#;

const COLOR_NUKE: &str = r#" colorManagement Nuke
 workingSpaceLUT linear
 monitorLut sRGB
 monitorOutLUT rec709
 int8Lut sRGB
 int16Lut sRGB
 logLut Cineon
 floatLut linear"#;

/// Render the full comp script text for one shot.
pub fn render_script(sequence: &str, shot: &str, s: &RenderSettings) -> String {
    let root_start = format!(
        "Root {{\n inputs 0\n name {name}\n fps {fps:.2}\n format \"{w} {h} 0 0 {w} {h} 1 {label}\"\n",
        name = comp_script_name(sequence, shot),
        fps = s.fps,
        w = s.width,
        h = s.height,
        label = s.resolution_label,
    );

    let proxy_lines = if s.use_proxy { PROXY_ON } else { PROXY_OFF };
    let color_lines = if s.use_aces { COLOR_ACES } else { COLOR_NUKE };

    let root_block = format!("{root_start}{proxy_lines}\n{color_lines}\n}}\n");

    let viewer_block = format!(
        "Viewer {{\n inputs 0\n frame 1\n frame_range 1-100\n fps {:.8}\n name Viewer1\n xpos -40\n ypos -9\n}}",
        s.fps
    );

    format!(
        "#! C:/Program Files/Nuke15.1v5/nuke-15.1.5.dll -nx\nversion 15.1 v5\n{WINDOW_LAYOUT}\n{root_block}\n{viewer_block}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> RenderSettings {
        RenderSettings::default()
    }

    #[test]
    fn generation_is_pure() {
        let a = render_script("SEQ01", "SH010", &settings());
        let b = render_script("SEQ01", "SH010", &settings());
        assert_eq!(a, b);
    }

    #[test]
    fn header_embeds_name_fps_and_format() {
        let text = render_script("SEQ01", "SH010", &settings());
        assert!(text.contains("name SEQ01_SH010_comp_v001.nk"));
        assert!(text.contains("fps 24.00\n"));
        assert!(text.contains("format \"1920 1080 0 0 1920 1080 1 HD_1080\""));
    }

    #[test]
    fn viewer_fps_is_high_precision() {
        let text = render_script("SEQ01", "SH010", &settings());
        assert!(text.contains("fps 24.00000000\n"));

        let mut ntsc = settings();
        ntsc.fps = 23.976;
        let text = render_script("SEQ01", "SH010", &ntsc);
        assert!(text.contains("fps 23.98\n"));
        assert!(text.contains("fps 23.97600000\n"));
    }

    #[test]
    fn proxy_sections_are_exclusive() {
        let mut s = settings();
        s.use_proxy = true;
        let on = render_script("SEQ01", "SH010", &s);
        assert!(on.contains("proxySetting always"));
        assert!(!on.contains("proxy_type scale"));

        s.use_proxy = false;
        let off = render_script("SEQ01", "SH010", &s);
        assert!(off.contains("proxy_type scale"));
        assert!(!off.contains("proxySetting always"));
    }

    #[test]
    fn color_sections_are_exclusive() {
        let mut s = settings();
        s.use_aces = true;
        let aces = render_script("SEQ01", "SH010", &s);
        assert!(aces.contains("colorManagement OCIO"));
        assert!(!aces.contains("colorManagement Nuke"));

        s.use_aces = false;
        let nuke = render_script("SEQ01", "SH010", &s);
        assert!(nuke.contains("colorManagement Nuke"));
        assert!(!nuke.contains("colorManagement OCIO"));
    }

    #[test]
    fn layout_preamble_is_constant() {
        let a = render_script("A", "1", &settings());
        let b = render_script("B", "2", &settings());
        assert!(a.contains("define_window_layout_xml"));
        assert!(b.contains("define_window_layout_xml"));
        assert!(a.starts_with("#! C:/Program Files/Nuke15.1v5/nuke-15.1.5.dll -nx\nversion 15.1 v5\n"));
    }
}
