// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Easing functions over the unit interval.

use serde::{Deserialize, Serialize};

use super::{saturate, PI};

/// Maps a parameter in `[0, 1]` onto `[0, 1]`.
///
/// Inputs outside the unit range are clamped first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolator {
    /// `t`
    #[default]
    Linear,
    /// Hermite smooth step, `t²(3 − 2t)`.
    Smooth,
    /// Half a cosine wave, `(1 − cos(πt)) / 2`.
    Cosine,
}

impl Interpolator {
    /// Applies the easing function to `t`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = saturate(t);
        match self {
            Interpolator::Linear => t,
            Interpolator::Smooth => t * t * (3.0 - 2.0 * t),
            Interpolator::Cosine => (1.0 - (t * PI).cos()) * 0.5,
        }
    }

    /// Creates an interpolator over `[start, end]` using this easing.
    pub fn range(self, start: f32, end: f32) -> RangeInterpolator {
        RangeInterpolator {
            start,
            end,
            interpolator: self,
        }
    }
}

/// Interpolates between two values with a given easing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeInterpolator {
    /// Value at `t = 0`.
    pub start: f32,
    /// Value at `t = 1`.
    pub end: f32,
    /// Easing applied to `t`.
    pub interpolator: Interpolator,
}

impl RangeInterpolator {
    /// Returns the eased value at `t`.
    pub fn interpolate(&self, t: f32) -> f32 {
        self.start + (self.end - self.start) * self.interpolator.apply(t)
    }
}
