use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{FrameSampler, FrameSamplerError, SampledFrame};

/// Samples frames by shelling out to `ffprobe` (frame rate) and `ffmpeg`
/// (frame extraction into a scratch directory).
///
/// Source frame `n` is kept when `n % step == 0`, where
/// `step = max(1, floor(fps / frames_per_second))`.
pub struct FfmpegFrameSampler {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
    frames_per_second: f64,
}

impl FfmpegFrameSampler {
    pub fn new(
        ffmpeg: impl Into<PathBuf>,
        ffprobe: impl Into<PathBuf>,
        frames_per_second: f64,
    ) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
            frames_per_second,
        }
    }

    async fn probe_frame_rate(&self, video_path: &Path) -> Result<f64, FrameSamplerError> {
        let output = Command::new(&self.ffprobe)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=r_frame_rate",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(video_path)
            .output()
            .await?;

        if !output.status.success() {
            return Err(FrameSamplerError::OpenFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        parse_frame_rate(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses ffprobe's rational (`30000/1001`) or decimal frame rate.
pub fn parse_frame_rate(raw: &str) -> Result<f64, FrameSamplerError> {
    let trimmed = raw.lines().next().unwrap_or_default().trim();
    let invalid = || FrameSamplerError::FrameRate(format!("unparseable frame rate {:?}", trimmed));

    let fps = match trimmed.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().map_err(|_| invalid())?;
            let den: f64 = den.trim().parse().map_err(|_| invalid())?;
            if den == 0.0 {
                return Err(invalid());
            }
            num / den
        }
        None => trimmed.parse().map_err(|_| invalid())?,
    };

    if !fps.is_finite() || fps <= 0.0 {
        return Err(invalid());
    }
    Ok(fps)
}

pub fn sampling_step(fps: f64, frames_per_second: f64) -> u64 {
    if frames_per_second <= 0.0 {
        return 1;
    }
    ((fps / frames_per_second).floor() as u64).max(1)
}

#[async_trait]
impl FrameSampler for FfmpegFrameSampler {
    #[tracing::instrument(skip(self), fields(path = %video_path.display()))]
    async fn sample(&self, video_path: &Path) -> Result<Vec<SampledFrame>, FrameSamplerError> {
        let fps = self.probe_frame_rate(video_path).await?;
        let step = sampling_step(fps, self.frames_per_second);
        tracing::debug!(fps, step, "Sampling video frames");

        let scratch = tempfile::TempDir::new()?;
        let pattern = scratch.path().join("frame_%08d.jpg");
        let select = format!("select=not(mod(n\\,{}))", step);

        let output = Command::new(&self.ffmpeg)
            .args(["-v", "error", "-i"])
            .arg(video_path)
            .args([
                "-vf",
                select.as_str(),
                "-vsync",
                "vfr",
                "-q:v",
                "2",
            ])
            .arg(&pattern)
            .output()
            .await?;

        if !output.status.success() {
            return Err(FrameSamplerError::ExtractionFailed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(scratch.path()).await?;
        while let Some(entry) = entries.next_entry().await? {
            files.push(entry.path());
        }
        files.sort();

        let mut frames = Vec::with_capacity(files.len());
        for (position, file) in files.iter().enumerate() {
            frames.push(SampledFrame {
                index: position as u64 * step,
                image: tokio::fs::read(file).await?,
            });
        }

        Ok(frames)
    }
}
