use super::*;
use crate::config::model::{CameraPath, Mood, Pose};
use crate::foundation::core::Rgb8;

#[test]
fn empty_prompt_yields_defaults() {
    assert_eq!(map_prompt_to_params(""), SceneConfig::default());
    assert_eq!(map_prompt_to_params("   \n\t"), SceneConfig::default());
    assert!(explain_prompt("xyzzy").matches.is_empty());
}

#[test]
fn backlit_fog_moody_is_cool_and_dim() {
    let cfg = map_prompt_to_params("backlit silhouette in fog, moody");
    let defaults = SceneConfig::default();
    assert_eq!(cfg.mood, Mood::Moody);
    assert_eq!(cfg.camera_path, CameraPath::Orbit);
    assert_eq!(cfg.pose, Pose::Standing);
    assert!(cfg.light_color.b > cfg.light_color.r);
    assert!(cfg.light_color.luminance() < defaults.light_color.luminance());
    assert!(cfg.key_intensity < defaults.key_intensity);
    assert!(cfg.rim_intensity > cfg.key_intensity);
}

#[test]
fn dolly_wins_over_other_camera_keywords() {
    for text in [
        "dolly",
        "slow orbit then dolly in",
        "pan across, dolly, orbit again",
        "DOLLY_IN on a seated figure",
        "dollying toward the subject while panning",
    ] {
        assert_eq!(
            map_prompt_to_params(text).camera_path,
            CameraPath::DollyIn,
            "{text}"
        );
    }
}

#[test]
fn camera_keywords_without_dolly() {
    assert_eq!(
        map_prompt_to_params("slow panning shot").camera_path,
        CameraPath::Pan
    );
    assert_eq!(
        map_prompt_to_params("turntable orbit").camera_path,
        CameraPath::Orbit
    );
}

#[test]
fn keywords_match_only_at_word_starts() {
    assert_eq!(
        map_prompt_to_params("centered figure").light_color,
        SceneConfig::default().light_color
    );
    assert_eq!(
        map_prompt_to_params("a reddish glow").light_color,
        Rgb8::new(0xff, 0x4d, 0x4d)
    );
    assert_eq!(
        map_prompt_to_params("made in japan").camera_path,
        CameraPath::Orbit
    );
}

#[test]
fn keywords_do_not_match_longer_words() {
    let defaults = SceneConfig::default();
    let cfg = map_prompt_to_params("reduced key light, moody");
    assert_eq!(cfg.mood, Mood::Moody);
    assert_ne!(cfg.light_color, Rgb8::new(0xff, 0x4d, 0x4d));
    assert!(explain_prompt("reduced key light").matches.is_empty());

    assert_eq!(
        map_prompt_to_params("a panel of light").camera_path,
        defaults.camera_path
    );
    assert_eq!(map_prompt_to_params("benchmark scene").pose, defaults.pose);
    assert!(explain_prompt("software render").matches.is_empty());
}

#[test]
fn star_keywords_match_word_stems() {
    assert_eq!(
        map_prompt_to_params("a contemplative figure").pose,
        Pose::LookingDown
    );
    assert_eq!(
        explain_prompt("contemplating").matches[0].keyword,
        "contemplat*"
    );
    // Stems still have to start a word.
    assert_eq!(
        map_prompt_to_params("noncontemplative").pose,
        Pose::Standing
    );
}

#[test]
fn pose_keywords() {
    assert_eq!(map_prompt_to_params("in profile").pose, Pose::Profile);
    assert_eq!(map_prompt_to_params("Looking-Down").pose, Pose::LookingDown);
    assert_eq!(map_prompt_to_params("sitting on a bench").pose, Pose::Seated);
    assert_eq!(map_prompt_to_params("upright").pose, Pose::Standing);
}

#[test]
fn table_order_decides_ties_not_prompt_order() {
    let a = map_prompt_to_params("clinical yet dramatic");
    let b = map_prompt_to_params("dramatic yet clinical");
    assert_eq!(a, b);
    assert_eq!(a.mood, Mood::Dramatic);

    // Named colors come after mood tints.
    let cfg = map_prompt_to_params("clinical, warm light");
    assert_eq!(cfg.mood, Mood::Clinical);
    assert_eq!(cfg.light_color, Rgb8::new(0xff, 0xb3, 0x6b));
}

#[test]
fn explain_lists_rules_in_application_order() {
    let m = explain_prompt("Minimal backlit silhouette in fog, moody, soft rim light");
    let names: Vec<&str> = m.matches.iter().map(|r| r.rule).collect();
    assert_eq!(
        names,
        ["mood.moody", "light.soft", "light.fog", "light.backlit"]
    );
    assert_eq!(m.matches[3].keyword, "backlit");
    assert_eq!(m.config.key_intensity, 0.9);
}

#[test]
fn lens_keywords_set_fov() {
    assert_eq!(map_prompt_to_params("wide establishing shot").fov_deg, 55.0);
    assert_eq!(map_prompt_to_params("telephoto").fov_deg, 22.0);
    assert_eq!(map_prompt_to_params("close-up portrait").fov_deg, 28.0);
}

#[test]
fn mapping_is_idempotent_and_always_valid() {
    let long = "a very long prompt ".repeat(200);
    let samples = [
        "",
        "moody",
        "backlit silhouette in fog, moody",
        "hard top light, high contrast",
        "clinical white studio, seated, dolly in, telephoto, teal",
        "ÉCLAIRAGE DRAMATIQUE — dramatic noir ✨",
        "___---___",
        "360 orbit wide warm cool red green blue purple pink white light",
        long.as_str(),
    ];
    for text in samples {
        let a = map_prompt_to_params(text);
        let b = map_prompt_to_params(text);
        assert_eq!(a, b);
        a.validate().unwrap();
    }
}

#[test]
fn builtin_table_passes_custom_validation() {
    let mapper = PromptMapper::new(VOCABULARY, SceneConfig::default()).unwrap();
    assert_eq!(mapper.rules().len(), VOCABULARY.len());
    assert_eq!(mapper.defaults(), &SceneConfig::default());
}

#[test]
fn custom_tables_are_validated() {
    static BAD_FOV: &[PromptRule] = &[PromptRule {
        name: "lens.fisheye",
        keywords: &["fisheye"],
        assigns: &[Assign::Fov(170.0)],
    }];
    assert!(PromptMapper::new(BAD_FOV, SceneConfig::default()).is_err());

    static BAD_KEYWORD: &[PromptRule] = &[PromptRule {
        name: "camera.crane",
        keywords: &["Crane-Up"],
        assigns: &[Assign::Camera(CameraPath::Pan)],
    }];
    assert!(PromptMapper::new(BAD_KEYWORD, SceneConfig::default()).is_err());

    static BAD_STAR: &[PromptRule] = &[PromptRule {
        name: "camera.crane",
        keywords: &["cr*ne"],
        assigns: &[Assign::Camera(CameraPath::Pan)],
    }];
    assert!(PromptMapper::new(BAD_STAR, SceneConfig::default()).is_err());

    static CRANE: &[PromptRule] = &[PromptRule {
        name: "camera.crane",
        keywords: &["crane"],
        assigns: &[Assign::Camera(CameraPath::Pan)],
    }];
    let defaults = SceneConfig {
        pose: Pose::Seated,
        ..SceneConfig::default()
    };
    let mapper = PromptMapper::new(CRANE, defaults).unwrap();
    let cfg = mapper.map("crane shot");
    assert_eq!(cfg.camera_path, CameraPath::Pan);
    assert_eq!(cfg.pose, Pose::Seated);
}

#[test]
fn normalize_collapses_separators() {
    assert_eq!(normalize("  Close-Up\t\tLOOKING_down "), "close up looking down");
}
