//! Secondary y-axis mapping.
//! egui_plot has a single y scale, so the secondary series is mapped onto the
//! primary range and the right-hand axis prints the inverse-mapped values.

/// Affine map `primary = secondary * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondaryAxis {
    scale: f64,
    offset: f64,
}

impl Default for SecondaryAxis {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl SecondaryAxis {
    /// Fit the secondary value range onto the primary value range.
    pub fn fit(
        primary: impl IntoIterator<Item = f64>,
        secondary: impl IntoIterator<Item = f64>,
    ) -> Self {
        let (p_min, p_max) = value_range(primary);
        let (s_min, s_max) = value_range(secondary);

        let scale = (p_max - p_min) / (s_max - s_min);
        Self {
            scale,
            offset: p_min - s_min * scale,
        }
    }

    pub fn to_primary(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    pub fn from_primary(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }
}

/// Min and max of the values, widened to a unit span when degenerate.
fn value_range(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min.is_infinite() {
        (0.0, 1.0)
    } else if max - min <= f64::EPSILON * max.abs().max(1.0) {
        (min - 0.5, min + 0.5)
    } else {
        (min, max)
    }
}
