use super::*;

#[test]
fn every_pose_defines_every_part() {
    for &pose in Pose::ALL {
        let body = pose_body(pose);
        assert_eq!(body.parts.len(), BodyPart::COUNT);
        for (i, (pt, part)) in body.parts.iter().zip(BodyPart::ALL).enumerate() {
            assert_eq!(pt.part, part);
            assert_eq!(part.index(), i);
            assert!(pt.transform.position.is_finite(), "{pose} {part:?}");
            assert!(pt.transform.rotation.is_finite(), "{pose} {part:?}");
        }
    }
}

#[test]
fn profile_turns_the_whole_figure() {
    let body = pose_body(Pose::Profile);
    assert!((body.root.rotation.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert_eq!(pose_body(Pose::Standing).root, Transform3D::default());
}

#[test]
fn looking_down_pitches_the_head() {
    let head = *pose_body(Pose::LookingDown).part(BodyPart::Head);
    assert!((head.transform.rotation.x - 18f64.to_radians()).abs() < 1e-12);
    assert_eq!(head.transform.position, BodyPart::Head.rest_position());
}

#[test]
fn seated_lowers_torso_and_bends_legs() {
    let body = pose_body(Pose::Seated);
    let torso = body.part(BodyPart::Torso);
    assert!((torso.transform.position.y - 1.1).abs() < 1e-12);
    let thigh = body.part(BodyPart::LeftThigh);
    let shin = body.part(BodyPart::RightShin);
    assert!((thigh.transform.rotation.x - 70f64.to_radians()).abs() < 1e-12);
    assert!((shin.transform.rotation.x + 70f64.to_radians()).abs() < 1e-12);
}

#[test]
fn arms_are_mirrored_in_standing_pose() {
    let t = pose_table(Pose::Standing);
    let l = t.joint(BodyPart::LeftUpperArm);
    let r = t.joint(BodyPart::RightUpperArm);
    assert!(l.rotation_deg[2] < 0.0 && r.rotation_deg[2] > 0.0);
    assert_eq!(
        BodyPart::LeftUpperArm.rest_position().x,
        -BodyPart::RightUpperArm.rest_position().x
    );
}

#[test]
fn shapes_match_part_kind() {
    assert!(matches!(BodyPart::Head.shape(), PartShape::Sphere { .. }));
    assert_eq!(BodyPart::LeftForearm.shape(), BodyPart::RightUpperArm.shape());
    assert_eq!(BodyPart::LeftShin.shape(), BodyPart::RightThigh.shape());
}

#[test]
fn pose_tables_are_distinct() {
    for (i, &a) in Pose::ALL.iter().enumerate() {
        for &b in &Pose::ALL[i + 1..] {
            assert_ne!(pose_table(a), pose_table(b), "{a} vs {b}");
        }
    }
}
