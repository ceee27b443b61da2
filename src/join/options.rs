use serde::{Deserialize, Serialize};

use crate::interpolate::InterpolationKind;

/// Default half-window, in samples
pub const DEFAULT_WINDOW: usize = 50;

/// Parameters for [`join_spectra`](super::join_spectra)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinOptions {
    /// Number of samples left/right of the overlap center used to determine
    /// the scale factor and, with `average`, the blending range.
    /// Must be less than half of the overlapping samples.
    pub r: usize,

    /// Scale each later spectrum to the intensity of the preceding one
    pub scale: bool,

    /// Grade the two signals continuously over the window instead of
    /// switching at the center
    pub average: bool,

    /// Interpolation used to evaluate one spectrum on the other's grid
    pub kind: InterpolationKind,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            r: DEFAULT_WINDOW,
            scale: true,
            average: false,
            kind: InterpolationKind::Slinear,
        }
    }
}

impl JoinOptions {
    /// Default options with half-window `r`
    pub fn with_window(r: usize) -> Self {
        Self {
            r,
            ..Self::default()
        }
    }

    /// Enable blending over the window
    pub fn averaged(mut self) -> Self {
        self.average = true;
        self
    }

    /// Disable intensity scaling
    pub fn unscaled(mut self) -> Self {
        self.scale = false;
        self
    }

    /// Use a different interpolation scheme
    pub fn with_kind(mut self, kind: InterpolationKind) -> Self {
        self.kind = kind;
        self
    }
}
