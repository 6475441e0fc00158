//! Average-color sampling of a reference photo, used to tint the key light.

use std::path::Path;

use image::imageops::{self, FilterType};

use crate::foundation::core::Rgb8;
use crate::foundation::error::{BrollError, BrollResult};

/// Edge length of the thumbnail the average is taken over.
pub const SAMPLE_EDGE: u32 = 64;

/// Average RGB of `img` after a bilinear downsample to [`SAMPLE_EDGE`] squared.
///
/// Pixels are composited over black first, so fully transparent pixels count as black and the
/// color hidden under them never bleeds into neighbouring samples.
pub fn average_color(img: &image::DynamicImage) -> BrollResult<Rgb8> {
    if img.width() == 0 || img.height() == 0 {
        return Err(BrollError::sampling("cannot sample an empty image"));
    }
    let mut premul = img.to_rgba8();
    for px in premul.pixels_mut() {
        let [r, g, b, a] = px.0;
        px.0 = [premul_channel(r, a), premul_channel(g, a), premul_channel(b, a), a];
    }
    let thumb = imageops::resize(&premul, SAMPLE_EDGE, SAMPLE_EDGE, FilterType::Triangle);

    let mut sum = [0u64; 3];
    let mut n = 0u64;
    for px in thumb.pixels() {
        let [r, g, b, _] = px.0;
        sum[0] += u64::from(r);
        sum[1] += u64::from(g);
        sum[2] += u64::from(b);
        n += 1;
    }

    let avg = |s: u64| ((s as f64) / (n as f64)).round().clamp(0.0, 255.0) as u8;
    Ok(Rgb8::new(avg(sum[0]), avg(sum[1]), avg(sum[2])))
}

fn premul_channel(c: u8, a: u8) -> u8 {
    let c = u16::from(c);
    let a = u16::from(a);
    (((c * a) + 127) / 255) as u8
}

/// Decode the photo at `path` and return its average color.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn sample_light_color(path: impl AsRef<Path>) -> BrollResult<Rgb8> {
    let path = path.as_ref();
    let img = image::open(path)
        .map_err(|e| BrollError::sampling(format!("decode image '{}': {e}", path.display())))?;
    let color = average_color(&img)?;
    tracing::debug!(color = %color, "sampled light color");
    Ok(color)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/sample.rs"]
mod tests;
