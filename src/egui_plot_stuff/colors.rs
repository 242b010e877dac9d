use egui::Color32;

/// Line color palette. Line `n` of a chart gets entry `n` by default.
pub const COLOR_OPTIONS: &[(Color32, &str)] = &[
    (Color32::from_rgb(0, 0, 255), "blue"),
    (Color32::from_rgb(255, 165, 0), "orange"),
    (Color32::from_rgb(0, 128, 0), "green"),
    (Color32::from_rgb(0, 255, 255), "cyan"),
    (Color32::from_rgb(255, 0, 255), "magenta"),
    (Color32::from_rgb(255, 255, 0), "yellow"),
    (Color32::from_rgb(0, 0, 0), "black"),
    (Color32::from_rgb(128, 128, 128), "grey"),
    (Color32::from_rgb(255, 255, 255), "white"),
    (Color32::from_rgb(75, 0, 130), "indigo"),
    (Color32::from_rgb(0, 0, 128), "navy"),
    (Color32::from_rgb(106, 90, 205), "slateblue"),
    (Color32::from_rgb(165, 42, 42), "brown"),
    (Color32::from_rgb(205, 133, 63), "peru"),
    (Color32::from_rgb(255, 215, 0), "gold"),
    (Color32::from_rgb(0, 255, 127), "springgreen"),
    (Color32::from_rgb(0, 128, 128), "teal"),
    (Color32::from_rgb(210, 105, 30), "chocolate"),
    (Color32::from_rgb(245, 222, 179), "wheat"),
    (Color32::from_rgb(70, 130, 180), "steelblue"),
    (Color32::from_rgb(255, 105, 180), "hotpink"),
    (Color32::from_rgb(218, 112, 214), "orchid"),
    (Color32::from_rgb(124, 252, 0), "lawngreen"),
    (Color32::from_rgb(128, 128, 0), "olive"),
];

pub fn color_names() -> Vec<&'static str> {
    COLOR_OPTIONS.iter().map(|&(_, name)| name).collect()
}

pub fn color_by_name(name: &str) -> Option<Color32> {
    COLOR_OPTIONS
        .iter()
        .find(|&&(_, n)| n == name)
        .map(|&(color, _)| color)
}

/// Default color name for the line at `index`, wrapping around the palette.
pub fn default_color_name(index: usize) -> &'static str {
    COLOR_OPTIONS[index % COLOR_OPTIONS.len()].1
}
