use crate::{
    camera::path::{CameraMotion, CameraPose, camera_pose},
    config::model::SceneConfig,
    foundation::core::Transform3D,
    rig::body::BodyPart,
    rig::pose::{PartTransform, pose_body},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything that changes per frame: mesh placements and the camera.
pub struct ComposedFrame {
    /// Time the frame was composed for, after sanitizing.
    pub elapsed_secs: f64,
    /// Figure root transform.
    pub root: Transform3D,
    /// Part transforms relative to the root, in [`BodyPart::ALL`] order.
    pub parts: Vec<PartTransform>,
    /// Camera for this frame.
    pub camera: CameraPose,
}

impl ComposedFrame {
    /// Entry for `part`.
    pub fn part(&self, part: BodyPart) -> &PartTransform {
        &self.parts[part.index()]
    }

    /// World matrix of `part`: root transform applied after the part's local transform.
    pub fn world_matrix(&self, part: BodyPart) -> glam::DMat4 {
        self.root.to_mat4() * self.part(part).transform.to_mat4()
    }
}

/// Stateless composer from configuration and time to a frame.
pub struct Composer;

impl Composer {
    /// Compose a frame with the interactive preview camera speed.
    pub fn compose(config: &SceneConfig, elapsed_secs: f64) -> ComposedFrame {
        Self::compose_with_motion(config, elapsed_secs, CameraMotion::PREVIEW)
    }

    /// Compose a frame with an explicit camera speed profile.
    #[tracing::instrument(level = "trace", skip(config))]
    pub fn compose_with_motion(
        config: &SceneConfig,
        elapsed_secs: f64,
        motion: CameraMotion,
    ) -> ComposedFrame {
        let body = pose_body(config.pose);
        let camera = camera_pose(config.camera_path, config.fov_deg, elapsed_secs, motion);
        ComposedFrame {
            elapsed_secs: crate::foundation::math::sanitize_secs(elapsed_secs),
            root: body.root,
            parts: body.parts,
            camera,
        }
    }
}

/// Compose the scene for `config` at `elapsed_secs` (preview camera speed). Never fails.
pub fn compose_scene(config: &SceneConfig, elapsed_secs: f64) -> ComposedFrame {
    Composer::compose(config, elapsed_secs)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
