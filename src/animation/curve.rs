use kurbo::ParamCurve;

use crate::foundation::{
    core::FrameIndex,
    error::{KeylineError, KeylineResult},
};

/// One keyframe: a value pinned at a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPoint {
    pub frame: FrameIndex,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
    Bezier,
}

/// A scalar keyframe curve: control points sorted by frame plus an
/// interpolation mode applied between them.
///
/// Evaluation outside the keyed range holds the nearest boundary value, and an
/// empty curve evaluates to 0.0. `Bezier` interpolates through the control
/// points with finite-difference tangents, so the curve is smooth across
/// segments and still hits every keyed value exactly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Curve {
    pub points: Vec<ControlPoint>, // sorted by frame
    pub mode: InterpMode,
}

impl Curve {
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![ControlPoint {
                frame: FrameIndex(0),
                value,
            }],
            mode: InterpMode::Linear,
        }
    }

    pub fn from_pairs(pairs: &[(u64, f64)], mode: InterpMode) -> Self {
        Self {
            points: pairs
                .iter()
                .map(|&(frame, value)| ControlPoint {
                    frame: FrameIndex(frame),
                    value,
                })
                .collect(),
            mode,
        }
    }

    /// More than one control point means the value changes over time.
    pub fn is_animated(&self) -> bool {
        self.points.len() > 1
    }

    pub fn validate(&self) -> KeylineResult<()> {
        if !self.points.windows(2).all(|w| w[0].frame.0 <= w[1].frame.0) {
            return Err(KeylineError::animation(
                "curve points must be sorted by frame",
            ));
        }
        if let Some(p) = self.points.iter().find(|p| !p.value.is_finite()) {
            return Err(KeylineError::animation(format!(
                "curve value at frame {} must be finite",
                p.frame.0
            )));
        }
        Ok(())
    }

    /// Evaluate the curve at `frame`. Pure and deterministic for a given
    /// curve state.
    pub fn value(&self, frame: FrameIndex) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }

        let f = frame.0;
        let idx = self.points.partition_point(|p| p.frame.0 <= f);

        if idx == 0 {
            return self.points[0].value;
        }
        if idx >= self.points.len() {
            return self.points[self.points.len() - 1].value;
        }

        let a = &self.points[idx - 1];
        let b = &self.points[idx];
        let denom = b.frame.0.saturating_sub(a.frame.0);
        if denom == 0 {
            return a.value;
        }

        let t = ((f - a.frame.0) as f64) / (denom as f64);
        match self.mode {
            InterpMode::Hold => a.value,
            InterpMode::Linear => a.value + (b.value - a.value) * t,
            InterpMode::Bezier => self.bezier_segment(idx - 1).eval(t).y,
        }
    }

    // Cubic segment from point `i` to `i + 1`. X handles sit at a third of
    // the frame gap, which keeps x(t) linear so `t` maps directly to the
    // frame fraction with no root finding.
    fn bezier_segment(&self, i: usize) -> kurbo::CubicBez {
        let a = self.points[i];
        let b = self.points[i + 1];
        let x1 = a.frame.0 as f64;
        let x2 = b.frame.0 as f64;
        let dx = x2 - x1;
        let m1 = self.slope_at(i);
        let m2 = self.slope_at(i + 1);
        kurbo::CubicBez::new(
            kurbo::Point::new(x1, a.value),
            kurbo::Point::new(x1 + dx / 3.0, a.value + m1 * dx / 3.0),
            kurbo::Point::new(x2 - dx / 3.0, b.value - m2 * dx / 3.0),
            kurbo::Point::new(x2, b.value),
        )
    }

    // Finite-difference tangent at point `i`, one-sided at the ends.
    fn slope_at(&self, i: usize) -> f64 {
        let pts = &self.points;
        let last = pts.len() - 1;
        let slope = |a: usize, b: usize| -> f64 {
            let dx = pts[b].frame.0 as f64 - pts[a].frame.0 as f64;
            if dx <= 0.0 {
                0.0
            } else {
                (pts[b].value - pts[a].value) / dx
            }
        };

        if last == 0 {
            0.0
        } else if i == 0 {
            slope(0, 1)
        } else if i == last {
            slope(last - 1, last)
        } else {
            slope(i - 1, i + 1)
        }
    }
}
