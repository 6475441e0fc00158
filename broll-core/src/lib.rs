//! broll turns short scene descriptions into posed mannequin shots.
//!
//! It is the logic behind a b-roll generator that renders a featureless humanoid on a minimal
//! stage. Rendering and encoding are left to an external renderer; this crate produces what
//! the renderer needs.
//!
//! # Pipeline overview
//!
//! 1. **Map**: `&str -> SceneConfig` through an ordered keyword table ([`map_prompt_to_params`])
//! 2. **Override** (optional): apply per-field UI selections ([`SceneConfig::with_overrides`])
//! 3. **Compose**: `SceneConfig + seconds -> ComposedFrame` (mesh transforms and camera pose)
//! 4. **Stage**: `SceneConfig -> StageLook` (lights, fog, ground, post fx, material)
//! 5. **Bake** (optional): every frame of a fixed-length clip ([`bake_clip`])
//!
//! Mapping and composing are pure and infallible. Errors only arise at the boundaries:
//! loading configurations, baking clips and sampling reference photos.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod camera;
mod compose;
mod config;
mod foundation;
mod look;
mod palette;
mod prompt;
mod rig;
mod timeline;

pub use camera::path::{
    CameraMotion, CameraPose, HOME_POSITION, LOOK_AT, camera_pose, camera_position,
};
pub use compose::composer::{ComposedFrame, Composer, compose_scene};
pub use config::model::{
    CameraPath, MAX_FOV_DEG, MAX_LIGHT_INTENSITY, MIN_FOV_DEG, Mood, Pose, SceneConfig,
    SceneOverrides,
};
pub use foundation::core::{Fps, FrameIndex, FrameRange, Rgb8, Transform3D, Vec3};
pub use foundation::error::{BrollError, BrollResult};
pub use look::stage::{
    Atmosphere, EnvironmentPreset, LightRig, MannequinMaterial, PostFx, SpotLight, StageLook,
};
pub use palette::sample::{SAMPLE_EDGE, average_color, sample_light_color};
pub use prompt::mapper::{
    DEFAULT_PROMPT, PromptMapper, PromptMapping, RuleMatch, explain_prompt, map_prompt_to_params,
};
pub use prompt::vocab::{Assign, PromptRule, VOCABULARY};
pub use rig::body::{BodyPart, PartShape};
pub use rig::pose::{JointOffset, PartTransform, PoseTable, PosedBody, pose_body, pose_table};
pub use timeline::bake::{BakeThreading, BakedClip, ClipSpec, MAX_CLIP_FRAMES, bake_clip};
