//! World-space geometry for scene placements.
//!
//! Positions use `f32` (single-precision) components — the host simulator's
//! native unit is centimetres, so f32 gives sub-millimetre precision across
//! any plausible scene extent while keeping placement tables compact.

/// A world-space position stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Straight-line (Euclidean) distance to `other`.
    pub fn distance(self, other: WorldPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// Position + facing of a scene placement.
///
/// Pedestrians navigate on a ground plane, so a single yaw angle (degrees,
/// about the vertical axis) is enough orientation for spawn placements.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub location: WorldPoint,
    pub yaw_deg:  f32,
}

impl Transform {
    #[inline]
    pub fn new(location: WorldPoint, yaw_deg: f32) -> Self {
        Self { location, yaw_deg }
    }

    /// A transform at `location` with default (zero-yaw) facing.
    #[inline]
    pub fn at(location: WorldPoint) -> Self {
        Self { location, yaw_deg: 0.0 }
    }
}
