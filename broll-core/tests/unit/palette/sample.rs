use super::*;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

#[test]
fn solid_image_averages_to_itself() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 120, Rgb([200, 100, 50])));
    assert_eq!(average_color(&img).unwrap(), Rgb8::new(200, 100, 50));
}

#[test]
fn split_image_averages_halves() {
    let img = RgbImage::from_fn(64, 64, |x, _| {
        if x < 32 {
            Rgb([0, 0, 0])
        } else {
            Rgb([255, 255, 255])
        }
    });
    let c = average_color(&DynamicImage::ImageRgb8(img)).unwrap();
    for ch in [c.r, c.g, c.b] {
        assert!((125..=130).contains(&ch), "{c}");
    }
}

#[test]
fn transparent_pixels_count_as_black() {
    let img = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 0]));
    let c = average_color(&DynamicImage::ImageRgba8(img)).unwrap();
    assert_eq!(c, Rgb8::new(0, 0, 0));
}

#[test]
fn hidden_color_under_transparency_does_not_bleed() {
    // The boundary column mixes both halves in the downsample.
    let img = RgbaImage::from_fn(128, 64, |x, _| {
        if x < 64 {
            Rgba([255, 0, 0, 0])
        } else {
            Rgba([0, 0, 0, 255])
        }
    });
    let c = average_color(&DynamicImage::ImageRgba8(img)).unwrap();
    assert_eq!(c, Rgb8::new(0, 0, 0));
}

#[test]
fn partial_alpha_is_composited_over_black() {
    let img = RgbaImage::from_pixel(8, 8, Rgba([200, 100, 0, 128]));
    let c = average_color(&DynamicImage::ImageRgba8(img)).unwrap();
    assert_eq!(c, Rgb8::new(100, 50, 0));
}

#[test]
fn empty_image_is_an_error() {
    let err = average_color(&DynamicImage::new_rgb8(0, 0)).unwrap_err();
    assert!(matches!(err, BrollError::Sampling(_)));
}

#[test]
fn sample_from_disk() {
    let dir = std::env::temp_dir().join("broll_palette_sample");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("ref.png");
    RgbImage::from_pixel(10, 10, Rgb([20, 40, 220]))
        .save(&path)
        .unwrap();
    assert_eq!(sample_light_color(&path).unwrap(), Rgb8::new(20, 40, 220));

    let err = sample_light_color(dir.join("missing.png")).unwrap_err();
    assert!(err.to_string().contains("missing.png"));
}
