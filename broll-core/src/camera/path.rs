//! Closed-form camera trajectories.
//!
//! Every path is a pure function of elapsed seconds; nothing is carried between calls.

use std::f64::consts::TAU;

use crate::config::model::CameraPath;
use crate::foundation::core::Vec3;
use crate::foundation::math::{approach, sanitize_secs};

/// Point every path aims at (mannequin chest height).
pub const LOOK_AT: Vec3 = Vec3::new(0.0, 1.1, 0.0);
/// Camera placement at `t = 0` before any path moves it.
pub const HOME_POSITION: Vec3 = Vec3::new(2.2, 1.4, 2.2);

const ORBIT_RADIUS: f64 = 2.2;
const ORBIT_HEIGHT: f64 = 1.4;
const ORBIT_SPEED_PREVIEW: f64 = 0.15;
const ORBIT_SPEED_RECORDING: f64 = 0.35;

const PAN_CENTER_X: f64 = 1.6;
const PAN_AMPLITUDE: f64 = 0.6;
const PAN_SPEED: f64 = 0.25;
const PAN_HEIGHT: f64 = 1.3;
const PAN_DEPTH: f64 = 1.8;

const DOLLY_TARGET: Vec3 = Vec3::new(0.4, 1.25, 2.2);
/// Fraction of the remaining distance covered per reference tick.
const DOLLY_RATE: f64 = 0.03;
const DOLLY_REFERENCE_HZ: f64 = 60.0;
const DOLLY_RECORD_Z: f64 = 1.6;
const DOLLY_RECORD_SWAY: f64 = 0.1;
const DOLLY_RECORD_SPEED: f64 = 0.2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Speed profile of the camera.
pub struct CameraMotion {
    /// Use the faster recording profile (clip export) instead of interactive preview.
    pub recording: bool,
}

impl CameraMotion {
    /// Interactive preview profile.
    pub const PREVIEW: Self = Self { recording: false };
    /// Clip export profile.
    pub const RECORDING: Self = Self { recording: true };
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Camera placement for one frame.
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
}

impl CameraPose {
    /// Right-handed world-to-view matrix with +Y up.
    pub fn view_matrix(&self) -> glam::DMat4 {
        glam::DMat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    /// Unit vector from the eye toward the target.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }
}

/// Eye position along `path` after `elapsed_secs`.
///
/// Negative and non-finite times are treated as `0`.
pub fn camera_position(path: CameraPath, elapsed_secs: f64, motion: CameraMotion) -> Vec3 {
    let t = sanitize_secs(elapsed_secs);
    match path {
        CameraPath::Orbit => {
            let speed = if motion.recording {
                ORBIT_SPEED_RECORDING
            } else {
                ORBIT_SPEED_PREVIEW
            };
            let a = (t * speed) % TAU;
            Vec3::new(a.cos() * ORBIT_RADIUS, ORBIT_HEIGHT, a.sin() * ORBIT_RADIUS)
        }
        CameraPath::Pan => Vec3::new(
            PAN_CENTER_X + ((t * PAN_SPEED) % TAU).sin() * PAN_AMPLITUDE,
            PAN_HEIGHT,
            PAN_DEPTH,
        ),
        CameraPath::DollyIn => {
            let mut p = approach(
                HOME_POSITION,
                DOLLY_TARGET,
                DOLLY_RATE,
                t * DOLLY_REFERENCE_HZ,
            );
            if motion.recording {
                p.z = DOLLY_RECORD_Z + (t * DOLLY_RECORD_SPEED).cos() * DOLLY_RECORD_SWAY;
            }
            p
        }
    }
}

/// Full camera pose along `path` after `elapsed_secs`.
pub fn camera_pose(
    path: CameraPath,
    fov_deg: f64,
    elapsed_secs: f64,
    motion: CameraMotion,
) -> CameraPose {
    CameraPose {
        position: camera_position(path, elapsed_secs, motion),
        look_at: LOOK_AT,
        fov_deg,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/camera/path.rs"]
mod tests;
