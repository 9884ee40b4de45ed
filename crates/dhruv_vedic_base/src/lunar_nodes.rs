//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node as a linear function of days since J2000.0:
//! `Ω = 125.04452° − 0.0529538083° × days`. Ketu is always Rahu + 180°.

use dhruv_time::{J2000_JD, Moment};

use crate::util::normalize_360;

/// Mean node longitude at J2000.0, degrees.
pub const MEAN_NODE_J2000_DEG: f64 = 125.044_52;

/// Mean retrograde motion of the node, degrees per day.
pub const MEAN_NODE_DAILY_MOTION_DEG: f64 = 0.052_953_808_3;

/// Linear mean-node model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanNodeModel {
    pub base_deg: f64,
    pub daily_motion_deg: f64,
}

impl Default for MeanNodeModel {
    fn default() -> Self {
        Self {
            base_deg: MEAN_NODE_J2000_DEG,
            daily_motion_deg: MEAN_NODE_DAILY_MOTION_DEG,
        }
    }
}

impl MeanNodeModel {
    /// Tropical longitude of the mean ascending node at a JD(UT), [0, 360).
    pub fn rahu_tropical_at_jd(&self, jd_ut: f64) -> f64 {
        normalize_360(self.base_deg - self.daily_motion_deg * (jd_ut - J2000_JD))
    }

    pub fn rahu_tropical(&self, moment: &Moment) -> f64 {
        self.rahu_tropical_at_jd(moment.jd_ut())
    }
}

/// Ketu from Rahu: the opposite point.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Mean Rahu tropical longitude with the default model.
pub fn mean_rahu_deg(moment: &Moment) -> f64 {
    MeanNodeModel::default().rahu_tropical(moment)
}
