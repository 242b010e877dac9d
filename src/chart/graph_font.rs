use egui::{FontFamily, FontId};

/// Font choices offered in the "Graph font" menu.
///
/// Only egui's bundled fonts are available, so each choice maps to the
/// proportional or the monospace family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum GraphFont {
    #[default]
    DejaVuSans,
    TimesNewRoman,
    CourierNew,
    Arial,
    Calibri,
}

impl GraphFont {
    pub const ALL: [GraphFont; 5] = [
        GraphFont::DejaVuSans,
        GraphFont::TimesNewRoman,
        GraphFont::CourierNew,
        GraphFont::Arial,
        GraphFont::Calibri,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphFont::DejaVuSans => "DejaVu Sans",
            GraphFont::TimesNewRoman => "Times New Roman",
            GraphFont::CourierNew => "Courier New",
            GraphFont::Arial => "Arial",
            GraphFont::Calibri => "Calibri",
        }
    }

    pub fn family(self) -> FontFamily {
        match self {
            GraphFont::CourierNew => FontFamily::Monospace,
            _ => FontFamily::Proportional,
        }
    }

    pub fn font_id(self, size: f32) -> FontId {
        FontId::new(size, self.family())
    }
}
