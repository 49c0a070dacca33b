//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position in world units. x grows rightward, y grows downward
/// (screen-space convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking. The simulation is frame-stepped: one frame
/// per engine step, no wall-clock coupling.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each step).
    pub frame: u64,
}

/// Cursor state sampled by the session once per frame.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    /// Whether a click was registered this frame.
    pub clicked: bool,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point. Range checks compare squared
    /// values against squared radii, so the hot path never takes a root.
    pub fn squared_distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Bearing from `self` toward `other`, in radians.
    ///
    /// This is not `atan2`: the vertical cases pin to `π/2` (below) and
    /// `3π/2` (above or co-located), and the left half-plane adds `π` to
    /// the arctangent of the inverted slope. Firing orientation depends on
    /// these exact branches; do not substitute a generic two-argument
    /// arctangent.
    pub fn angle_to(&self, other: &Point) -> f64 {
        if other.x > self.x {
            ((self.y - other.y) / (self.x - other.x)).atan()
        } else if other.x < self.x {
            std::f64::consts::PI + ((self.y - other.y) / (self.x - other.x)).atan()
        } else if other.y > self.y {
            std::f64::consts::FRAC_PI_2
        } else {
            3.0 * std::f64::consts::FRAC_PI_2
        }
    }
}

impl SimTime {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}
