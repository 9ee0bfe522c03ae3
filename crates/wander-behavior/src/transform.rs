//! Position + heading, the per-frame change to them, and the host-side sink
//! they are written to.

use wander_core::Vec3;
use wander_core::geom::wrap_angle;

/// Where the agent stands and which way it faces.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
    /// Heading around +Y, radians.  Zero faces +Z.
    pub yaw: f32,
}

impl Transform {
    #[inline]
    pub fn new(position: Vec3, yaw: f32) -> Self {
        Self { position, yaw }
    }

    /// Apply `delta` in place.  The resulting yaw is wrapped into
    /// `(-PI, PI]` whenever the delta turns the agent.
    pub fn apply(&mut self, delta: &TransformDelta) {
        self.position += delta.translation;
        if delta.yaw_change != 0.0 {
            self.yaw = wrap_angle(self.yaw + delta.yaw_change);
        }
    }
}

/// Change produced by one `advance` call.
///
/// `translation.y` is always zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformDelta {
    pub translation: Vec3,
    /// Signed turn, radians.
    pub yaw_change: f32,
}

impl TransformDelta {
    pub const IDENTITY: TransformDelta = TransformDelta {
        translation: Vec3::ZERO,
        yaw_change:  0.0,
    };

    /// `true` when applying the delta changes nothing.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.translation == Vec3::ZERO && self.yaw_change == 0.0
    }
}

impl Default for TransformDelta {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Host-owned renderable transform the controller writes into.
///
/// Only the horizontal position and the yaw are ever written; the host
/// keeps ownership of the object and its vertical placement.
pub trait TransformSink {
    fn set_position_xz(&mut self, x: f32, z: f32);
    fn set_yaw(&mut self, yaw: f32);
}

impl TransformSink for Transform {
    fn set_position_xz(&mut self, x: f32, z: f32) {
        self.position.x = x;
        self.position.z = z;
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }
}
