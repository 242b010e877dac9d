use egui::Color32;
use egui_plot::{Line, LineStyle, PlotPoint, PlotPoints, PlotUi};

use super::axis_scale::AxisScale;
use super::colors::color_by_name;

pub const DEFAULT_WIDTH: f32 = 1.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum LineStyleKind {
    #[default]
    Solid,
    Dashed,
    DashDot,
    Dotted,
    None,
}

impl LineStyleKind {
    pub const ALL: [LineStyleKind; 5] = [
        LineStyleKind::Solid,
        LineStyleKind::Dashed,
        LineStyleKind::DashDot,
        LineStyleKind::Dotted,
        LineStyleKind::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LineStyleKind::Solid => "solid",
            LineStyleKind::Dashed => "dashed",
            LineStyleKind::DashDot => "dashdot",
            LineStyleKind::Dotted => "dotted",
            LineStyleKind::None => "none",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.name() == name)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|style| style.name()).collect()
    }

    /// egui_plot has no dash-dot pattern; it is drawn with short dashes.
    fn egui_style(self) -> Option<LineStyle> {
        match self {
            LineStyleKind::Solid => Some(LineStyle::Solid),
            LineStyleKind::Dashed => Some(LineStyle::Dashed { length: 10.0 }),
            LineStyleKind::DashDot => Some(LineStyle::Dashed { length: 4.0 }),
            LineStyleKind::Dotted => Some(LineStyle::Dotted { spacing: 5.0 }),
            LineStyleKind::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct LineProperties {
    pub label: String,
    /// Name from the color palette.
    pub color: String,
    pub width: f32,
    pub style: LineStyleKind,
}

impl LineProperties {
    pub fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_owned(),
            color: color.to_owned(),
            width: DEFAULT_WIDTH,
            style: LineStyleKind::Solid,
        }
    }

    pub fn color32(&self) -> Color32 {
        color_by_name(&self.color).unwrap_or(Color32::LIGHT_BLUE)
    }
}

/// One data series of a chart and how it is drawn.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EguiLine {
    pub properties: LineProperties,
    pub points: Vec<[f64; 2]>,
}

impl EguiLine {
    pub fn new(properties: LineProperties, points: Vec<[f64; 2]>) -> Self {
        Self { properties, points }
    }

    /// Points in plot space; values outside a scale's domain are dropped.
    pub fn scaled_points(&self, x_scale: AxisScale, y_scale: AxisScale) -> Vec<PlotPoint> {
        self.points
            .iter()
            .filter_map(|&[x, y]| {
                let x = x_scale.forward(x)?;
                let y = y_scale.forward(y)?;
                Some(PlotPoint::new(x, y))
            })
            .collect()
    }

    pub fn draw(&self, plot_ui: &mut PlotUi<'_>, x_scale: AxisScale, y_scale: AxisScale) {
        let Some(style) = self.properties.style.egui_style() else {
            return;
        };

        let line = Line::new(
            self.properties.label.clone(),
            PlotPoints::Owned(self.scaled_points(x_scale, y_scale)),
        )
        .width(self.properties.width)
        .color(self.properties.color32())
        .style(style);

        plot_ui.line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(
            LineStyleKind::names(),
            vec!["solid", "dashed", "dashdot", "dotted", "none"]
        );
        assert_eq!(LineStyleKind::from_name("dashdot"), Some(LineStyleKind::DashDot));
        assert_eq!(LineStyleKind::from_name("-."), None);
    }

    #[test]
    fn test_defaults() {
        let props = LineProperties::new("P1", "orange");
        assert_eq!(props.width, 1.5);
        assert_eq!(props.style, LineStyleKind::Solid);
        assert_eq!(props.color32(), Color32::from_rgb(255, 165, 0));
    }

    #[test]
    fn test_scaled_points_drop_out_of_domain() {
        let line = EguiLine::new(
            LineProperties::new("P1", "blue"),
            vec![[0.0, 1.0], [1.0, 10.0], [2.0, -5.0], [10.0, 100.0]],
        );

        let linear = line.scaled_points(AxisScale::Linear, AxisScale::Linear);
        assert_eq!(linear.len(), 4);

        let log = line.scaled_points(AxisScale::Log, AxisScale::Log);
        let log: Vec<[f64; 2]> = log.iter().map(|p| [p.x, p.y]).collect();
        assert_eq!(log, vec![[0.0, 1.0], [1.0, 2.0]]);
    }
}
