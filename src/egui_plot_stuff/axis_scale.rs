//! Axis scales. egui_plot only draws linear axes, so non-linear scales map data
//! into plot space before drawing and map grid marks back for the tick labels.

// Matplotlib's symlog defaults: base 10, linear region |v| <= 1, linscale 1.
const SYMLOG_BASE: f64 = 10.0;
const SYMLOG_LINTHRESH: f64 = 1.0;
const SYMLOG_LINSCALE: f64 = 1.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
    SymLog,
    Logit,
}

impl AxisScale {
    pub const ALL: [AxisScale; 4] = [
        AxisScale::Linear,
        AxisScale::Log,
        AxisScale::SymLog,
        AxisScale::Logit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
            AxisScale::SymLog => "symlog",
            AxisScale::Logit => "logit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.name() == name)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|scale| scale.name()).collect()
    }

    /// Data value to plot coordinate. `None` when the value has no place on
    /// this scale (non-positive on log, outside (0, 1) on logit).
    pub fn forward(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            AxisScale::Linear => Some(value),
            AxisScale::Log => (value > 0.0).then(|| value.log10()),
            AxisScale::SymLog => Some(symlog(value)),
            AxisScale::Logit => {
                (value > 0.0 && value < 1.0).then(|| (value / (1.0 - value)).log10())
            }
        }
    }

    /// Plot coordinate back to a data value.
    pub fn inverse(self, value: f64) -> f64 {
        match self {
            AxisScale::Linear => value,
            AxisScale::Log => 10.0f64.powf(value),
            AxisScale::SymLog => symlog_inverse(value),
            AxisScale::Logit => 1.0 / (1.0 + 10.0f64.powf(-value)),
        }
    }

    pub fn is_linear(self) -> bool {
        self == AxisScale::Linear
    }
}

fn linscale_adj() -> f64 {
    SYMLOG_LINSCALE / (1.0 - 1.0 / SYMLOG_BASE)
}

fn symlog(value: f64) -> f64 {
    let abs = value.abs();
    if abs <= SYMLOG_LINTHRESH {
        value * linscale_adj()
    } else {
        value.signum()
            * SYMLOG_LINTHRESH
            * (linscale_adj() + (abs / SYMLOG_LINTHRESH).log(SYMLOG_BASE))
    }
}

fn symlog_inverse(value: f64) -> f64 {
    let abs = value.abs();
    let inv_linthresh = SYMLOG_LINTHRESH * linscale_adj();
    if abs <= inv_linthresh {
        value / linscale_adj()
    } else {
        value.signum()
            * SYMLOG_LINTHRESH
            * SYMLOG_BASE.powf(abs / SYMLOG_LINTHRESH - linscale_adj())
    }
}

/// Tick label for a data value.
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs == 0.0 {
        "0".to_owned()
    } else if !(1e-3..1e4).contains(&abs) {
        format!("{value:.1e}")
    } else {
        let text = format!("{value:.4}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_names_round_trip() {
        for scale in AxisScale::ALL {
            assert_eq!(AxisScale::from_name(scale.name()), Some(scale));
        }
        assert_eq!(AxisScale::from_name("cubic"), None);
        assert_eq!(AxisScale::names(), vec!["linear", "log", "symlog", "logit"]);
    }

    #[test]
    fn test_log_drops_non_positive() {
        assert_eq!(AxisScale::Log.forward(100.0), Some(2.0));
        assert_eq!(AxisScale::Log.forward(0.0), None);
        assert_eq!(AxisScale::Log.forward(-1.0), None);
        assert!(close(AxisScale::Log.inverse(2.0), 100.0));
    }

    #[test]
    fn test_logit_domain() {
        assert_eq!(AxisScale::Logit.forward(0.5), Some(0.0));
        assert_eq!(AxisScale::Logit.forward(0.0), None);
        assert_eq!(AxisScale::Logit.forward(1.0), None);
        let y = AxisScale::Logit.forward(0.9).unwrap();
        assert!(close(AxisScale::Logit.inverse(y), 0.9));
    }

    #[test]
    fn test_symlog_is_odd_and_invertible() {
        for v in [-250.0, -1.0, -0.3, 0.0, 0.3, 1.0, 5.0, 1e6] {
            let y = AxisScale::SymLog.forward(v).unwrap();
            assert!(close(AxisScale::SymLog.inverse(y), v), "round trip of {v}");
            assert!(close(AxisScale::SymLog.forward(-v).unwrap(), -y));
        }
        // continuous at the threshold
        let inside = AxisScale::SymLog.forward(1.0).unwrap();
        let outside = AxisScale::SymLog.forward(1.0 + 1e-12).unwrap();
        assert!((inside - outside).abs() < 1e-9);
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        assert_eq!(AxisScale::Linear.forward(f64::NAN), None);
        assert_eq!(AxisScale::SymLog.forward(f64::INFINITY), None);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(100.0), "100");
        assert_eq!(format_tick(1e6), "1.0e6");
        assert_eq!(format_tick(0.0001), "1.0e-4");
    }
}
