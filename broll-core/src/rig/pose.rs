//! Fixed joint-offset tables, one per [`Pose`].

use crate::config::model::Pose;
use crate::foundation::core::{Transform3D, Vec3};
use crate::foundation::math::{deg, deg3};
use crate::rig::body::{BodyPart, PartShape};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Offset of one part from its rest placement.
pub struct JointOffset {
    /// XYZ Euler rotation in degrees.
    pub rotation_deg: [f64; 3],
    /// Added to [`BodyPart::rest_position`].
    pub translation: [f64; 3],
}

impl JointOffset {
    /// No offset.
    pub const REST: Self = Self {
        rotation_deg: [0.0; 3],
        translation: [0.0; 3],
    };

    const fn rot(x: f64, y: f64, z: f64) -> Self {
        Self {
            rotation_deg: [x, y, z],
            translation: [0.0; 3],
        }
    }

    const fn shift(x: f64, y: f64, z: f64) -> Self {
        Self {
            rotation_deg: [0.0; 3],
            translation: [x, y, z],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Whole-body posture: a root yaw plus one offset per part, indexed by [`BodyPart::index`].
pub struct PoseTable {
    /// Rotation of the whole figure about +Y, in degrees.
    pub root_yaw_deg: f64,
    /// Per-part offsets.
    pub joints: [JointOffset; BodyPart::COUNT],
}

impl PoseTable {
    /// Offset for `part`.
    pub fn joint(&self, part: BodyPart) -> JointOffset {
        self.joints[part.index()]
    }
}

const R: JointOffset = JointOffset::REST;

// Column order follows `BodyPart::ALL`:
// head, torso, pelvis, l/r upper arm, l/r forearm, l/r thigh, l/r shin.

static STANDING: PoseTable = PoseTable {
    root_yaw_deg: 0.0,
    joints: [
        R,
        R,
        R,
        JointOffset::rot(-10.0, 0.0, -6.0),
        JointOffset::rot(-8.0, 0.0, 6.0),
        JointOffset::rot(-12.0, 0.0, -4.0),
        JointOffset::rot(-14.0, 0.0, 4.0),
        JointOffset::rot(2.0, 0.0, -2.0),
        JointOffset::rot(0.0, 0.0, 2.0),
        R,
        R,
    ],
};

static PROFILE: PoseTable = PoseTable {
    root_yaw_deg: 90.0,
    joints: [
        R,
        R,
        R,
        JointOffset::rot(-15.0, 0.0, -2.0),
        JointOffset::rot(-10.0, 0.0, 2.0),
        R,
        R,
        R,
        R,
        R,
        R,
    ],
};

static LOOKING_DOWN: PoseTable = PoseTable {
    root_yaw_deg: 0.0,
    joints: [
        JointOffset::rot(18.0, 0.0, 0.0),
        R,
        R,
        JointOffset::rot(-18.0, 0.0, -8.0),
        JointOffset::rot(-20.0, 0.0, 8.0),
        R,
        R,
        R,
        R,
        R,
        R,
    ],
};

static SEATED: PoseTable = PoseTable {
    root_yaw_deg: 0.0,
    joints: [
        R,
        JointOffset::shift(0.0, -0.1, 0.0),
        R,
        R,
        R,
        R,
        R,
        JointOffset::rot(70.0, 0.0, 0.0),
        JointOffset::rot(70.0, 0.0, 0.0),
        JointOffset::rot(-70.0, 0.0, 0.0),
        JointOffset::rot(-70.0, 0.0, 0.0),
    ],
};

/// Joint table for `pose`.
pub fn pose_table(pose: Pose) -> &'static PoseTable {
    match pose {
        Pose::Standing => &STANDING,
        Pose::Profile => &PROFILE,
        Pose::LookingDown => &LOOKING_DOWN,
        Pose::Seated => &SEATED,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Placement of one mesh relative to the figure root.
pub struct PartTransform {
    /// Which part.
    pub part: BodyPart,
    /// Its primitive geometry.
    pub shape: PartShape,
    /// Local transform under the root.
    pub transform: Transform3D,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Posed mannequin: a root transform and every part under it.
pub struct PosedBody {
    /// Figure root; carries the pose's yaw.
    pub root: Transform3D,
    /// One entry per [`BodyPart`], in [`BodyPart::ALL`] order.
    pub parts: Vec<PartTransform>,
}

impl PosedBody {
    /// Transform entry for `part`.
    pub fn part(&self, part: BodyPart) -> &PartTransform {
        &self.parts[part.index()]
    }
}

/// Resolve `pose` into concrete part transforms.
pub fn pose_body(pose: Pose) -> PosedBody {
    let table = pose_table(pose);
    let root = Transform3D {
        position: Vec3::ZERO,
        rotation: Vec3::new(0.0, deg(table.root_yaw_deg), 0.0),
    };
    let parts = BodyPart::ALL
        .iter()
        .map(|&part| {
            let j = table.joint(part);
            PartTransform {
                part,
                shape: part.shape(),
                transform: Transform3D {
                    position: part.rest_position() + Vec3::from_array(j.translation),
                    rotation: deg3(j.rotation_deg),
                },
            }
        })
        .collect();
    PosedBody { root, parts }
}

#[cfg(test)]
#[path = "../../tests/unit/rig/pose.rs"]
mod tests;
