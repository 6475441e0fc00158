//! Built-in prompt vocabulary.
//!
//! Rules are evaluated top to bottom and every matching rule applies its assignments, so for
//! each field the last matching rule wins. Groups are ordered mood, pose, camera, lens, light
//! quality, light color: a named color always beats a mood tint, and `dolly` (last camera rule)
//! beats `orbit` and `pan`.

use crate::config::model::{CameraPath, Mood, Pose};
use crate::foundation::core::Rgb8;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Single field assignment performed by a matching rule.
pub enum Assign {
    /// Set [`crate::SceneConfig::mood`].
    Mood(Mood),
    /// Set [`crate::SceneConfig::pose`].
    Pose(Pose),
    /// Set [`crate::SceneConfig::camera_path`].
    Camera(CameraPath),
    /// Set [`crate::SceneConfig::light_color`].
    LightColor(Rgb8),
    /// Set [`crate::SceneConfig::fov_deg`].
    Fov(f64),
    /// Set [`crate::SceneConfig::key_intensity`].
    KeyIntensity(f64),
    /// Set [`crate::SceneConfig::rim_intensity`].
    RimIntensity(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Keyword rule: if any keyword matches, apply every assignment.
pub struct PromptRule {
    /// Stable rule name, reported by [`crate::explain_prompt`].
    pub name: &'static str,
    /// Lowercase, space-separated keywords matched as whole words; a trailing `*` matches any
    /// word the stem starts.
    pub keywords: &'static [&'static str],
    /// Assignments applied in order.
    pub assigns: &'static [Assign],
}

const CLINICAL_WHITE: Rgb8 = Rgb8::new(0xf4, 0xf6, 0xfa);
const DRAMATIC_AMBER: Rgb8 = Rgb8::new(0xff, 0xd8, 0xb0);
const MOODY_STEEL: Rgb8 = Rgb8::new(0x9f, 0xb0, 0xc8);
const FOG_GREY_BLUE: Rgb8 = Rgb8::new(0x8a, 0x9b, 0xb4);
const HARD_TOP_WHITE: Rgb8 = Rgb8::new(0xff, 0xf4, 0xe6);

const WARM: Rgb8 = Rgb8::new(0xff, 0xb3, 0x6b);
const COOL: Rgb8 = Rgb8::new(0x7f, 0xa7, 0xd9);
const RED: Rgb8 = Rgb8::new(0xff, 0x4d, 0x4d);
const ORANGE: Rgb8 = Rgb8::new(0xff, 0x8c, 0x3a);
const YELLOW: Rgb8 = Rgb8::new(0xff, 0xd6, 0x5a);
const GREEN: Rgb8 = Rgb8::new(0x5f, 0xd3, 0x8d);
const TEAL: Rgb8 = Rgb8::new(0x3f, 0xc1, 0xc0);
const BLUE: Rgb8 = Rgb8::new(0x4d, 0x7c, 0xff);
const PURPLE: Rgb8 = Rgb8::new(0x9b, 0x6b, 0xff);
const PINK: Rgb8 = Rgb8::new(0xff, 0x8f, 0xb8);
const WHITE: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);

/// The default rule table used by [`crate::map_prompt_to_params`].
pub static VOCABULARY: &[PromptRule] = &[
    // mood
    PromptRule {
        name: "mood.clinical",
        keywords: &["clinical", "sterile", "white studio", "laboratory", "high key"],
        assigns: &[
            Assign::Mood(Mood::Clinical),
            Assign::LightColor(CLINICAL_WHITE),
            Assign::KeyIntensity(2.6),
            Assign::RimIntensity(1.0),
        ],
    },
    PromptRule {
        name: "mood.moody",
        keywords: &[
            "moody",
            "melancholy",
            "somber",
            "sombre",
            "brooding",
            "gloomy",
            "dark",
            "darkness",
        ],
        assigns: &[
            Assign::Mood(Mood::Moody),
            Assign::LightColor(MOODY_STEEL),
            Assign::KeyIntensity(1.4),
            Assign::RimIntensity(1.8),
        ],
    },
    PromptRule {
        name: "mood.dramatic",
        keywords: &[
            "dramatic",
            "high contrast",
            "chiaroscuro",
            "intense",
            "noir",
        ],
        assigns: &[
            Assign::Mood(Mood::Dramatic),
            Assign::LightColor(DRAMATIC_AMBER),
            Assign::KeyIntensity(3.2),
            Assign::RimIntensity(2.4),
        ],
    },
    // pose
    PromptRule {
        name: "pose.standing",
        keywords: &["standing", "stands", "upright"],
        assigns: &[Assign::Pose(Pose::Standing)],
    },
    PromptRule {
        name: "pose.seated",
        keywords: &["seated", "sitting", "sits", "chair", "bench"],
        assigns: &[Assign::Pose(Pose::Seated)],
    },
    PromptRule {
        name: "pose.looking_down",
        keywords: &["looking down", "look down", "head down", "bowed", "downcast", "contemplat*"],
        assigns: &[Assign::Pose(Pose::LookingDown)],
    },
    PromptRule {
        name: "pose.profile",
        keywords: &["profile", "side view", "side on", "sideways"],
        assigns: &[Assign::Pose(Pose::Profile)],
    },
    // camera
    PromptRule {
        name: "camera.orbit",
        keywords: &["orbit", "orbiting", "orbits", "circling", "turntable", "360"],
        assigns: &[Assign::Camera(CameraPath::Orbit)],
    },
    PromptRule {
        name: "camera.pan",
        keywords: &["pan", "pans", "panning", "panned", "tracking shot", "slider"],
        assigns: &[Assign::Camera(CameraPath::Pan)],
    },
    PromptRule {
        name: "camera.dolly",
        keywords: &["dolly", "dollying", "dollies", "push in", "pushing in", "zoom in"],
        assigns: &[Assign::Camera(CameraPath::DollyIn)],
    },
    // lens
    PromptRule {
        name: "lens.wide",
        keywords: &["wide", "establishing"],
        assigns: &[Assign::Fov(55.0)],
    },
    PromptRule {
        name: "lens.telephoto",
        keywords: &["telephoto", "long lens", "compressed"],
        assigns: &[Assign::Fov(22.0)],
    },
    PromptRule {
        name: "lens.close",
        keywords: &["close up", "closeup", "portrait", "tight"],
        assigns: &[Assign::Fov(28.0)],
    },
    // light quality
    PromptRule {
        name: "light.soft",
        keywords: &["soft", "softly", "softened", "diffuse", "diffused", "gentle"],
        assigns: &[Assign::KeyIntensity(1.6)],
    },
    PromptRule {
        name: "light.hard_top",
        keywords: &["top light", "overhead", "hard light", "hard top"],
        assigns: &[
            Assign::LightColor(HARD_TOP_WHITE),
            Assign::KeyIntensity(3.0),
        ],
    },
    PromptRule {
        name: "light.fog",
        keywords: &["fog", "mist", "haze", "hazy", "smoke", "smoky", "foggy", "misty"],
        assigns: &[
            Assign::LightColor(FOG_GREY_BLUE),
            Assign::KeyIntensity(1.2),
        ],
    },
    PromptRule {
        name: "light.backlit",
        keywords: &["backlit", "back light", "backlight", "silhouette", "rim light"],
        assigns: &[Assign::KeyIntensity(0.9), Assign::RimIntensity(2.6)],
    },
    // light color
    PromptRule {
        name: "color.warm",
        keywords: &["warm", "golden", "amber", "sunset", "tungsten"],
        assigns: &[Assign::LightColor(WARM)],
    },
    PromptRule {
        name: "color.cool",
        keywords: &["cool", "cold", "icy", "moonlight"],
        assigns: &[Assign::LightColor(COOL)],
    },
    PromptRule {
        name: "color.red",
        keywords: &["red", "reddish", "crimson", "scarlet"],
        assigns: &[Assign::LightColor(RED)],
    },
    PromptRule {
        name: "color.orange",
        keywords: &["orange"],
        assigns: &[Assign::LightColor(ORANGE)],
    },
    PromptRule {
        name: "color.yellow",
        keywords: &["yellow"],
        assigns: &[Assign::LightColor(YELLOW)],
    },
    PromptRule {
        name: "color.green",
        keywords: &["green", "greenish", "emerald"],
        assigns: &[Assign::LightColor(GREEN)],
    },
    PromptRule {
        name: "color.teal",
        keywords: &["teal", "cyan", "turquoise"],
        assigns: &[Assign::LightColor(TEAL)],
    },
    PromptRule {
        name: "color.blue",
        keywords: &["blue", "bluish", "azure"],
        assigns: &[Assign::LightColor(BLUE)],
    },
    PromptRule {
        name: "color.purple",
        keywords: &["purple", "violet", "magenta"],
        assigns: &[Assign::LightColor(PURPLE)],
    },
    PromptRule {
        name: "color.pink",
        keywords: &["pink", "pinkish", "rose"],
        assigns: &[Assign::LightColor(PINK)],
    },
    PromptRule {
        name: "color.white",
        keywords: &["white light", "neutral light", "daylight"],
        assigns: &[Assign::LightColor(WHITE)],
    },
];
