//! Draw-geometry contract.
//!
//! Rendering itself is external; the core only supplies primitive lists
//! (geometry and color) per tower kind. Each kind's turret silhouette is a
//! pair of arrows plus the body circle.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::constants::TOWER_SIZE;
use crate::enums::{HighlightColor, LineCap, TowerKind};
use crate::types::Point;

/// A single primitive for the external renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DrawCommand {
    /// Stroked arrow from `at` along `theta`.
    Arrow {
        at: Point,
        theta: f64,
        length: f64,
        /// Arrowhead size; zero draws a bare line.
        head: f64,
        width: f64,
        color: HighlightColor,
        cap: LineCap,
        head_cap: LineCap,
    },
    /// Stroked circle centered on `at`.
    StrokeCircle {
        at: Point,
        radius: f64,
        width: f64,
        color: HighlightColor,
    },
}

/// Turret silhouette for a tower body: a forward arrow, a rear arrow, and
/// the body circle. Parameters vary per kind.
pub fn tower_body(kind: TowerKind, at: Point, theta: f64, color: HighlightColor) -> Vec<DrawCommand> {
    let (forward, rear) = match kind {
        TowerKind::Shoot => (
            arrow(at, theta, 8.0, 3.0, 3.0, color, LineCap::Square, LineCap::Butt),
            arrow(at, theta + PI, 8.0, 0.0, 3.0, color, LineCap::Butt, LineCap::Butt),
        ),
        TowerKind::Monkey => (
            arrow(at, theta, 6.0, 3.0, 3.0, color, LineCap::Square, LineCap::Butt),
            arrow(at, theta + PI, 6.0, 3.0, 3.0, color, LineCap::Square, LineCap::Butt),
        ),
        TowerKind::Laser => (
            arrow(at, theta, 8.0, 0.0, 3.0, color, LineCap::Square, LineCap::Butt),
            arrow(at, theta + PI, 8.0, 0.0, 3.0, color, LineCap::Butt, LineCap::Butt),
        ),
        TowerKind::Sniper => (
            arrow(at, theta, 12.0, 0.0, 3.0, color, LineCap::Square, LineCap::Butt),
            arrow(at, theta + PI, 12.0, 0.0, 3.0, color, LineCap::Butt, LineCap::Butt),
        ),
        TowerKind::Bomb => (
            arrow(at, theta, 7.0, 0.0, 3.0, color, LineCap::Square, LineCap::Butt),
            arrow(at, theta + PI, 7.0, 2.0, 5.0, color, LineCap::Square, LineCap::Round),
        ),
        TowerKind::Missile => (
            arrow(at, theta, 10.0, 0.0, 3.0, color, LineCap::Square, LineCap::Butt),
            arrow(at, theta + PI, 10.0, 2.0, 5.0, color, LineCap::Square, LineCap::Round),
        ),
    };

    vec![
        forward,
        rear,
        DrawCommand::StrokeCircle {
            at,
            radius: TOWER_SIZE / 2.0,
            width: 1.0,
            color,
        },
    ]
}

/// Range indicator drawn while a tower is selected or being placed.
pub fn range_ring(at: Point, range: f64) -> DrawCommand {
    DrawCommand::StrokeCircle {
        at,
        radius: range,
        width: 1.0,
        color: HighlightColor::UltraBright,
    }
}

#[allow(clippy::too_many_arguments)]
fn arrow(
    at: Point,
    theta: f64,
    length: f64,
    head: f64,
    width: f64,
    color: HighlightColor,
    cap: LineCap,
    head_cap: LineCap,
) -> DrawCommand {
    DrawCommand::Arrow {
        at,
        theta,
        length,
        head,
        width,
        color,
        cap,
        head_cap,
    }
}
