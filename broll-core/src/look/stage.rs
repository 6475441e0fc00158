//! Lighting, atmosphere, post-processing and material settings derived from a configuration.

use crate::config::model::{Mood, SceneConfig};
use crate::foundation::core::{Rgb8, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Shadow-casting spot light.
pub struct SpotLight {
    /// Light color.
    pub color: Rgb8,
    /// Intensity in renderer units.
    pub intensity: f64,
    /// World position; the light aims at the origin.
    pub position: Vec3,
    /// Cone half-angle in radians.
    pub angle_rad: f64,
    /// Soft edge fraction in `[0, 1]`.
    pub penumbra: f64,
    /// Whether the light casts shadows.
    pub cast_shadow: bool,
    /// Depth bias applied to shadow lookups.
    pub shadow_bias: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Three-point-style rig minus the fill: ambient, key and rim.
pub struct LightRig {
    /// Uniform ambient term.
    pub ambient_intensity: f64,
    /// Front key light, tinted by the configuration.
    pub key: SpotLight,
    /// Rear rim light.
    pub rim: SpotLight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Image-based lighting preset for reflections.
pub enum EnvironmentPreset {
    /// Bright urban HDRI.
    City,
    /// Dark night HDRI.
    Night,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Background, fog and ground plane.
pub struct Atmosphere {
    /// Clear color.
    pub background: Rgb8,
    /// Linear fog color.
    pub fog_color: Rgb8,
    /// Distance where fog starts.
    pub fog_near: f64,
    /// Distance where fog is opaque.
    pub fog_far: f64,
    /// Ground plane color.
    pub ground_color: Rgb8,
    /// Ground plane roughness.
    pub ground_roughness: f64,
    /// Edge length of the square ground plane.
    pub ground_size: f64,
    /// Reflection environment.
    pub environment: EnvironmentPreset,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Screen-space effects stack.
pub struct PostFx {
    /// Bloom strength.
    pub bloom_intensity: f64,
    /// Luminance threshold where bloom starts.
    pub bloom_threshold: f64,
    /// Bloom threshold smoothing.
    pub bloom_smoothing: f64,
    /// Vignette offset.
    pub vignette_offset: f64,
    /// Vignette darkness.
    pub vignette_darkness: f64,
    /// Film grain opacity.
    pub noise_opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Physically based material shared by every mannequin part.
pub struct MannequinMaterial {
    /// Albedo.
    pub base_color: Rgb8,
    /// Surface roughness.
    pub roughness: f64,
    /// Metalness.
    pub metalness: f64,
    /// Clear-coat layer strength.
    pub clearcoat: f64,
    /// Clear-coat roughness.
    pub clearcoat_roughness: f64,
    /// Environment reflection strength.
    pub env_map_intensity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Everything about the stage that does not move.
pub struct StageLook {
    /// Lights.
    pub lights: LightRig,
    /// Background, fog and ground.
    pub atmosphere: Atmosphere,
    /// Post-processing.
    pub post_fx: PostFx,
    /// Mannequin material.
    pub material: MannequinMaterial,
}

const CLINICAL_BACKDROP: Rgb8 = Rgb8::new(0xf7, 0xf7, 0xf8);
const DARK_BACKDROP: Rgb8 = Rgb8::new(0x0b, 0x0b, 0x0c);
const CLINICAL_GROUND: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);
const DARK_GROUND: Rgb8 = Rgb8::new(0x0e, 0x0f, 0x12);
const CLINICAL_RIM: Rgb8 = Rgb8::new(0xa3, 0xa6, 0xad);
const DARK_RIM: Rgb8 = Rgb8::new(0x22, 0x22, 0x33);
const SHADOW_BIAS: f64 = -0.0002;

impl StageLook {
    /// Derive the stage for `cfg`. Only mood and the light fields matter.
    pub fn for_config(cfg: &SceneConfig) -> Self {
        let clinical = cfg.mood == Mood::Clinical;
        let backdrop = if clinical {
            CLINICAL_BACKDROP
        } else {
            DARK_BACKDROP
        };

        let lights = LightRig {
            ambient_intensity: 0.25,
            key: SpotLight {
                color: cfg.light_color,
                intensity: cfg.key_intensity,
                position: Vec3::new(1.6, 2.2, 1.2),
                angle_rad: 0.5,
                penumbra: 0.6,
                cast_shadow: true,
                shadow_bias: SHADOW_BIAS,
            },
            rim: SpotLight {
                color: if clinical { CLINICAL_RIM } else { DARK_RIM },
                intensity: cfg.rim_intensity,
                position: Vec3::new(-1.6, 1.8, -1.2),
                angle_rad: 0.8,
                penumbra: 0.8,
                cast_shadow: true,
                shadow_bias: SHADOW_BIAS,
            },
        };

        let atmosphere = Atmosphere {
            background: backdrop,
            fog_color: backdrop,
            fog_near: 4.0,
            fog_far: 14.0,
            ground_color: if clinical {
                CLINICAL_GROUND
            } else {
                DARK_GROUND
            },
            ground_roughness: 0.8,
            ground_size: 30.0,
            environment: if clinical {
                EnvironmentPreset::City
            } else {
                EnvironmentPreset::Night
            },
        };

        let post_fx = PostFx {
            bloom_intensity: if cfg.mood == Mood::Dramatic { 1.2 } else { 0.6 },
            bloom_threshold: 0.8,
            bloom_smoothing: 0.2,
            vignette_offset: 0.2,
            vignette_darkness: if clinical { 0.2 } else { 0.6 },
            noise_opacity: 0.03,
        };

        Self {
            lights,
            atmosphere,
            post_fx,
            material: MannequinMaterial::default(),
        }
    }
}

impl Default for MannequinMaterial {
    fn default() -> Self {
        Self {
            base_color: Rgb8::new(0xe6, 0xe7, 0xea),
            roughness: 0.3,
            metalness: 0.0,
            clearcoat: 0.6,
            clearcoat_roughness: 0.25,
            env_map_intensity: 0.6,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/look/stage.rs"]
mod tests;
