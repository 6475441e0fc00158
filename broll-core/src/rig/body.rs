use crate::foundation::core::Vec3;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Mesh of the mannequin. "Left" is the figure's left, on the negative x side.
pub enum BodyPart {
    /// Head sphere.
    Head,
    /// Chest capsule.
    Torso,
    /// Hip capsule.
    Pelvis,
    /// Left upper arm.
    LeftUpperArm,
    /// Right upper arm.
    RightUpperArm,
    /// Left forearm.
    LeftForearm,
    /// Right forearm.
    RightForearm,
    /// Left thigh.
    LeftThigh,
    /// Right thigh.
    RightThigh,
    /// Left shin.
    LeftShin,
    /// Right shin.
    RightShin,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Primitive geometry used for a part. Capsules are Y-aligned.
pub enum PartShape {
    /// Sphere centered on the part origin.
    Sphere {
        /// Radius.
        radius: f64,
    },
    /// Capsule centered on the part origin; `length` excludes the end caps.
    Capsule {
        /// Radius.
        radius: f64,
        /// Length of the cylindrical section.
        length: f64,
    },
}

const ARM: PartShape = PartShape::Capsule {
    radius: 0.07,
    length: 0.36,
};
const LEG: PartShape = PartShape::Capsule {
    radius: 0.09,
    length: 0.56,
};

impl BodyPart {
    /// Number of parts.
    pub const COUNT: usize = 11;

    /// All parts, in table order.
    pub const ALL: [BodyPart; Self::COUNT] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::Pelvis,
        BodyPart::LeftUpperArm,
        BodyPart::RightUpperArm,
        BodyPart::LeftForearm,
        BodyPart::RightForearm,
        BodyPart::LeftThigh,
        BodyPart::RightThigh,
        BodyPart::LeftShin,
        BodyPart::RightShin,
    ];

    /// Position in [`BodyPart::ALL`] and in every pose table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Geometry of the part.
    pub const fn shape(self) -> PartShape {
        match self {
            Self::Head => PartShape::Sphere { radius: 0.15 },
            Self::Torso => PartShape::Capsule {
                radius: 0.22,
                length: 0.6,
            },
            Self::Pelvis => PartShape::Capsule {
                radius: 0.2,
                length: 0.12,
            },
            Self::LeftUpperArm | Self::RightUpperArm | Self::LeftForearm | Self::RightForearm => {
                ARM
            }
            Self::LeftThigh | Self::RightThigh | Self::LeftShin | Self::RightShin => LEG,
        }
    }

    /// Neutral position of the part origin, feet near the ground plane.
    pub const fn rest_position(self) -> Vec3 {
        match self {
            Self::Head => Vec3::new(0.0, 1.6, 0.0),
            Self::Torso => Vec3::new(0.0, 1.2, 0.0),
            Self::Pelvis => Vec3::new(0.0, 0.8, 0.0),
            Self::LeftUpperArm => Vec3::new(-0.38, 1.25, 0.0),
            Self::RightUpperArm => Vec3::new(0.38, 1.25, 0.0),
            Self::LeftForearm => Vec3::new(-0.38, 0.85, 0.0),
            Self::RightForearm => Vec3::new(0.38, 0.85, 0.0),
            Self::LeftThigh => Vec3::new(-0.16, 0.4, 0.0),
            Self::RightThigh => Vec3::new(0.16, 0.4, 0.0),
            Self::LeftShin => Vec3::new(-0.16, -0.1, 0.0),
            Self::RightShin => Vec3::new(0.16, -0.1, 0.0),
        }
    }
}
