use super::axis_scale::{AxisScale, format_tick};

/// Whole-chart settings applied to the egui plot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EguiPlotSettings {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend: bool,
    pub show_grid: bool,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
    /// Last bounds applied from the graph form, in data coordinates.
    pub x_bounds: Option<(f64, f64)>,
    pub y_bounds: Option<(f64, f64)>,

    #[serde(skip)]
    pub bounds_dirty: bool,
    #[serde(skip)]
    pub reset_axis: bool,
}

impl Default for EguiPlotSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            legend: false,
            show_grid: true,
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            x_bounds: None,
            y_bounds: None,
            bounds_dirty: false,
            reset_axis: false,
        }
    }
}

/// `Some((min, max))` when the pair describes a usable axis range.
pub fn valid_bounds(min: f64, max: f64) -> Option<(f64, f64)> {
    (max > min).then_some((min, max))
}

impl EguiPlotSettings {
    /// Requests new x bounds. Ignored unless `max > min`; returns whether they were taken.
    pub fn set_x_bounds(&mut self, min: f64, max: f64) -> bool {
        match valid_bounds(min, max) {
            Some(bounds) => {
                self.x_bounds = Some(bounds);
                self.bounds_dirty = true;
                true
            }
            None => false,
        }
    }

    pub fn set_y_bounds(&mut self, min: f64, max: f64) -> bool {
        match valid_bounds(min, max) {
            Some(bounds) => {
                self.y_bounds = Some(bounds);
                self.bounds_dirty = true;
                true
            }
            None => false,
        }
    }

    /// Setting the same state twice is a no-op.
    pub fn set_legend(&mut self, legend: bool) {
        self.legend = legend;
    }

    pub fn set_scales(&mut self, x_scale: AxisScale, y_scale: AxisScale) {
        if self.x_scale != x_scale || self.y_scale != y_scale {
            self.x_scale = x_scale;
            self.y_scale = y_scale;
            // bounds are stored in data space, re-apply them in the new plot space
            self.bounds_dirty = self.x_bounds.is_some() || self.y_bounds.is_some();
            self.reset_axis = true;
        }
    }

    pub fn apply_to_plot<'a>(&self, plot: egui_plot::Plot<'a>) -> egui_plot::Plot<'a> {
        let x_scale = self.x_scale;
        let y_scale = self.y_scale;

        let plot = plot
            .show_grid(self.show_grid)
            .x_axis_label(self.x_label.clone())
            .y_axis_label(self.y_label.clone())
            .label_formatter(move |name, value| {
                let x = format_tick(x_scale.inverse(value.x));
                let y = format_tick(y_scale.inverse(value.y));
                if !name.is_empty() {
                    format!("{name}: {x}, {y}")
                } else {
                    format!("{x}, {y}")
                }
            });

        let plot = if self.legend {
            plot.legend(egui_plot::Legend::default())
        } else {
            plot
        };

        let plot = match x_scale {
            AxisScale::Linear => plot,
            AxisScale::Log => plot
                .x_grid_spacer(log_axis_spacer)
                .x_axis_formatter(move |gm, _bounds| format_tick(x_scale.inverse(gm.value))),
            AxisScale::SymLog | AxisScale::Logit => plot
                .x_axis_formatter(move |gm, _bounds| format_tick(x_scale.inverse(gm.value))),
        };

        match y_scale {
            AxisScale::Linear => plot,
            AxisScale::Log => plot
                .y_grid_spacer(log_axis_spacer)
                .y_axis_formatter(move |gm, _bounds| format_tick(y_scale.inverse(gm.value))),
            AxisScale::SymLog | AxisScale::Logit => plot
                .y_axis_formatter(move |gm, _bounds| format_tick(y_scale.inverse(gm.value))),
        }
    }

    /// Applies pending axis changes inside the plot closure.
    pub fn apply_bounds(&mut self, plot_ui: &mut egui_plot::PlotUi<'_>) {
        if self.reset_axis {
            self.reset_axis = false;
            plot_ui.set_auto_bounds(egui::Vec2b::new(true, true));
        }

        if !self.bounds_dirty {
            return;
        }
        self.bounds_dirty = false;

        if let Some(range) = self.x_bounds.and_then(|b| plot_range(self.x_scale, b)) {
            plot_ui.set_plot_bounds_x(range);
        }
        if let Some(range) = self.y_bounds.and_then(|b| plot_range(self.y_scale, b)) {
            plot_ui.set_plot_bounds_y(range);
        }
    }
}

/// Data-space bounds mapped into plot space for `scale`.
fn plot_range(scale: AxisScale, (min, max): (f64, f64)) -> Option<std::ops::RangeInclusive<f64>> {
    let min = scale.forward(min)?;
    let max = scale.forward(max)?;
    Some(min..=max)
}

#[expect(clippy::needless_pass_by_value)]
fn log_axis_spacer(input: egui_plot::GridInput) -> Vec<egui_plot::GridMark> {
    let (min, max) = input.bounds;
    let mut marks = vec![];
    for i in min.floor() as i32..=max.ceil() as i32 {
        marks.extend(
            (10..100)
                .map(|j| {
                    let value = i as f64 + (j as f64).log10() - 1.0;
                    let step_size = if j == 10 {
                        1.0
                    } else if j % 10 == 0 {
                        0.1
                    } else {
                        0.01
                    };
                    egui_plot::GridMark { value, step_size }
                })
                .filter(|gm| (min..=max).contains(&gm.value)),
        );
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_applied_only_when_max_exceeds_min() {
        let mut settings = EguiPlotSettings::default();
        assert!(settings.set_x_bounds(0.0, 10.0));
        assert_eq!(settings.x_bounds, Some((0.0, 10.0)));

        settings.bounds_dirty = false;
        assert!(!settings.set_x_bounds(5.0, 5.0));
        assert!(!settings.set_x_bounds(7.0, 3.0));
        assert_eq!(settings.x_bounds, Some((0.0, 10.0)));
        assert!(!settings.bounds_dirty);
    }

    #[test]
    fn test_initial_bounds_are_automatic() {
        let mut settings = EguiPlotSettings::default();
        assert!(!settings.set_y_bounds(0.0, 0.0));
        assert_eq!(settings.y_bounds, None);
        assert!(settings.set_y_bounds(-1.0, 1.0));
        assert_eq!(settings.y_bounds, Some((-1.0, 1.0)));
    }

    #[test]
    fn test_legend_toggle_is_idempotent() {
        let mut settings = EguiPlotSettings::default();
        settings.set_legend(false);
        settings.set_legend(false);
        assert!(!settings.legend);
        settings.set_legend(true);
        settings.set_legend(true);
        assert!(settings.legend);
    }

    #[test]
    fn test_scale_change_resets_axis() {
        let mut settings = EguiPlotSettings::default();
        settings.set_scales(AxisScale::Linear, AxisScale::Linear);
        assert!(!settings.reset_axis);

        settings.set_scales(AxisScale::Linear, AxisScale::Log);
        assert!(settings.reset_axis);
        assert!(!settings.bounds_dirty);
    }

    #[test]
    fn test_plot_range_respects_scale_domain() {
        assert_eq!(plot_range(AxisScale::Log, (1.0, 100.0)), Some(0.0..=2.0));
        assert_eq!(plot_range(AxisScale::Log, (0.0, 100.0)), None);
        assert_eq!(plot_range(AxisScale::Linear, (-2.0, 2.0)), Some(-2.0..=2.0));
    }
}
