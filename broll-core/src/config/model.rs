use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BrollError, BrollResult};

/// Narrowest vertical field of view accepted, in degrees.
pub const MIN_FOV_DEG: f64 = 15.0;
/// Widest vertical field of view accepted, in degrees.
pub const MAX_FOV_DEG: f64 = 90.0;
/// Upper bound for key and rim light intensities.
pub const MAX_LIGHT_INTENSITY: f64 = 10.0;

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical snake_case name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = BrollError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let names: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        BrollError::validation(format!(
                            "unknown {} \"{s}\" (expected one of: {})",
                            stringify!($name).to_ascii_lowercase(),
                            names.join(", ")
                        ))
                    })
            }
        }
    };
}

named_enum! {
    /// Overall grading of the scene; drives background, rim color and post fx.
    Mood {
        /// Dark stage, cool rim.
        #[default]
        Moody => "moody",
        /// Bright white studio.
        Clinical => "clinical",
        /// Dark stage with stronger bloom.
        Dramatic => "dramatic",
    }
}

named_enum! {
    /// Mannequin posture.
    Pose {
        /// Relaxed standing.
        #[default]
        Standing => "standing",
        /// Standing, turned 90 degrees to camera.
        Profile => "profile",
        /// Standing with the head pitched down.
        LookingDown => "looking_down",
        /// Seated with knees bent.
        Seated => "seated",
    }
}

named_enum! {
    /// Camera trajectory over elapsed time.
    CameraPath {
        /// Circle around the subject.
        #[default]
        Orbit => "orbit",
        /// Ease toward a close framing.
        DollyIn => "dolly_in",
        /// Sinusoidal sideways sweep.
        Pan => "pan",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything a render needs to know about the scene.
///
/// A configuration is immutable; changes produce a new value (see [`SceneConfig::with_overrides`]).
/// Missing fields fall back to [`SceneConfig::default`] when deserializing.
pub struct SceneConfig {
    /// Grading preset.
    pub mood: Mood,
    /// Mannequin posture.
    pub pose: Pose,
    /// Camera trajectory.
    pub camera_path: CameraPath,
    /// Key light color.
    pub light_color: Rgb8,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    /// Key light intensity (non-negative).
    pub key_intensity: f64,
    /// Rim light intensity (non-negative).
    pub rim_intensity: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mood: Mood::Moody,
            pose: Pose::Standing,
            camera_path: CameraPath::Orbit,
            light_color: Rgb8::new(0xd8, 0xde, 0xe9),
            fov_deg: 35.0,
            key_intensity: 2.0,
            rim_intensity: 1.2,
        }
    }
}

impl SceneConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> BrollResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BrollError::serde(format!("parse scene config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> BrollResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BrollError::validation(format!("open scene config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check numeric ranges. Enum membership is guaranteed by the type.
    pub fn validate(&self) -> BrollResult<()> {
        if !self.fov_deg.is_finite() || !(MIN_FOV_DEG..=MAX_FOV_DEG).contains(&self.fov_deg) {
            return Err(BrollError::validation(format!(
                "fov_deg must be within [{MIN_FOV_DEG}, {MAX_FOV_DEG}], got {}",
                self.fov_deg
            )));
        }
        for (name, value) in [
            ("key_intensity", self.key_intensity),
            ("rim_intensity", self.rim_intensity),
        ] {
            if !value.is_finite() || !(0.0..=MAX_LIGHT_INTENSITY).contains(&value) {
                return Err(BrollError::validation(format!(
                    "{name} must be finite and within [0, {MAX_LIGHT_INTENSITY}], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Return a copy with every `Some` field of `overrides` replacing the current value.
    pub fn with_overrides(&self, overrides: &SceneOverrides) -> BrollResult<Self> {
        let next = Self {
            mood: overrides.mood.unwrap_or(self.mood),
            pose: overrides.pose.unwrap_or(self.pose),
            camera_path: overrides.camera_path.unwrap_or(self.camera_path),
            light_color: overrides.light_color.unwrap_or(self.light_color),
            fov_deg: overrides.fov_deg.unwrap_or(self.fov_deg),
            key_intensity: overrides.key_intensity.unwrap_or(self.key_intensity),
            rim_intensity: overrides.rim_intensity.unwrap_or(self.rim_intensity),
        };
        next.validate()?;
        Ok(next)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Partial update of a [`SceneConfig`]; `None` keeps the base value.
pub struct SceneOverrides {
    /// Replacement mood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    /// Replacement pose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
    /// Replacement camera path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_path: Option<CameraPath>,
    /// Replacement key light color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_color: Option<Rgb8>,
    /// Replacement field of view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fov_deg: Option<f64>,
    /// Replacement key intensity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_intensity: Option<f64>,
    /// Replacement rim intensity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rim_intensity: Option<f64>,
}

impl SceneOverrides {
    /// `true` when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
