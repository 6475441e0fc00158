use rayon::prelude::*;

use crate::{
    camera::path::CameraMotion,
    compose::composer::{ComposedFrame, Composer},
    config::model::SceneConfig,
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{BrollError, BrollResult},
};

/// Longest clip [`bake_clip`] accepts: one hour at 60 fps.
pub const MAX_CLIP_FRAMES: u64 = 216_000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Length, rate and camera profile of an exported clip.
pub struct ClipSpec {
    /// Output frame rate.
    pub fps: Fps,
    /// Clip length in seconds.
    pub duration_secs: f64,
    /// Camera speed profile.
    pub motion: CameraMotion,
}

impl Default for ClipSpec {
    /// Six seconds at 60 fps with the recording camera, like the b-roll export.
    fn default() -> Self {
        Self {
            fps: Fps { num: 60, den: 1 },
            duration_secs: 6.0,
            motion: CameraMotion::RECORDING,
        }
    }
}

impl ClipSpec {
    /// Check rate and duration.
    pub fn validate(&self) -> BrollResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(BrollError::validation("fps must have num>0 and den>0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(BrollError::validation(
                "clip duration_secs must be finite and > 0",
            ));
        }
        let frames = self.frame_count();
        if frames > MAX_CLIP_FRAMES {
            return Err(BrollError::validation(format!(
                "clip needs {frames} frames, more than the maximum of {MAX_CLIP_FRAMES}"
            )));
        }
        if self.range()?.is_empty() {
            return Err(BrollError::validation("clip must contain at least one frame"));
        }
        Ok(())
    }

    /// Frames needed to cover the duration, partial frames rounded up.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames_ceil(self.duration_secs)
    }

    /// Frame range `[0, frame_count)`.
    pub fn range(&self) -> BrollResult<FrameRange> {
        FrameRange::new(FrameIndex(0), FrameIndex(self.frame_count()))
    }
}

#[derive(Clone, Debug)]
/// Threading controls for clip baking.
pub struct BakeThreading {
    /// Compose frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Minimum frames handed to one worker at a time.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for BakeThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every frame of a clip, ready for an external renderer.
pub struct BakedClip {
    /// Configuration the clip was baked from.
    pub config: SceneConfig,
    /// Frame rate.
    pub fps: Fps,
    /// Covered frames.
    pub range: FrameRange,
    /// One composed frame per index in `range`.
    pub frames: Vec<ComposedFrame>,
}

impl BakedClip {
    /// Composed frame at `f`, if the clip covers it.
    pub fn frame(&self, f: FrameIndex) -> Option<&ComposedFrame> {
        if !self.range.contains(f) {
            return None;
        }
        self.frames.get((f.0 - self.range.start.0) as usize)
    }
}

/// Compose every frame of `clip` for `config`.
///
/// Parallel and serial baking produce identical frames.
#[tracing::instrument(skip(config, threading), fields(frames = clip.frame_count()))]
pub fn bake_clip(
    config: &SceneConfig,
    clip: &ClipSpec,
    threading: &BakeThreading,
) -> BrollResult<BakedClip> {
    config.validate()?;
    clip.validate()?;
    let range = clip.range()?;

    let frame_at = |f: u64| {
        Composer::compose_with_motion(config, clip.fps.frames_to_secs(f), clip.motion)
    };

    let frames: Vec<ComposedFrame> = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let min_len = normalized_chunk_size(threading.chunk_size);
        let len = usize::try_from(range.len_frames())
            .map_err(|_| BrollError::validation("clip has too many frames for this platform"))?;
        pool.install(|| {
            (0..len)
                .into_par_iter()
                .with_min_len(min_len)
                .map(|i| frame_at(range.start.0 + i as u64))
                .collect()
        })
    } else {
        (range.start.0..range.end.0).map(frame_at).collect()
    };

    tracing::debug!(
        frames = frames.len(),
        parallel = threading.parallel,
        "clip baked"
    );

    Ok(BakedClip {
        config: *config,
        fps: clip.fps,
        range,
        frames,
    })
}

fn build_thread_pool(threads: Option<usize>) -> BrollResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BrollError::validation(
            "bake threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| BrollError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/bake.rs"]
mod tests;
