//! Render sinks and animated GIF capture of a run in progress

use crate::algorithm::executor::{AdvanceReport, RunPhase};
use crate::io::configuration::{FINAL_FRAME_HOLD, GIF_FRAME_DELAY_MS, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{MondriantError, Result};
use crate::io::image::rgba_image;
use image::{Delay, Frame, RgbaImage};
use std::path::{Path, PathBuf};

/// Receives a read-only snapshot of the canvas after every advance call
pub trait RenderSink {
    /// Display or record the current canvas
    fn present(&mut self, pixels: &[u8], width: usize, height: usize);
}

/// Ignores every frame
impl RenderSink for () {
    fn present(&mut self, _: &[u8], _: usize, _: usize) {}
}

impl<T: RenderSink> RenderSink for Option<T> {
    fn present(&mut self, pixels: &[u8], width: usize, height: usize) {
        if let Some(sink) = self {
            sink.present(pixels, width, height);
        }
    }
}

/// Records every `stride`-th presented frame for export as an animation
///
/// Frames accumulate until [`export_gif`](FrameCapture::export_gif) or
/// [`clear`](FrameCapture::clear). A driver running several runs hands every
/// advance report to [`track_run`](FrameCapture::track_run), which keeps one
/// animation per run.
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
    stride: usize,
    presented: usize,
}

impl FrameCapture {
    /// Capture one frame out of every `stride` (at least one)
    pub fn new(stride: usize) -> Self {
        Self {
            frames: Vec::new(),
            stride: stride.max(1),
            presented: 0,
        }
    }

    /// Number of frames held
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Drop all captured frames and restart the stride count
    pub fn clear(&mut self) {
        self.frames.clear();
        self.presented = 0;
    }

    /// Apply one advance report to the capture
    ///
    /// When the report carries an emitted image, the frames of the finished run
    /// are written to `{index}.gif` under `output_dir` and dropped. Frames
    /// presented while the finished image is held are discarded, so the next
    /// animation starts at the freshly seeded canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the animation cannot be exported
    pub fn track_run(
        &mut self,
        report: &AdvanceReport,
        output_dir: &Path,
    ) -> Result<Option<PathBuf>> {
        if let Some(index) = report.emitted {
            let gif_path = output_dir.join(format!("{index}.gif"));
            self.export_gif(&gif_path, GIF_FRAME_DELAY_MS)?;
            self.clear();
            return Ok(Some(gif_path));
        }
        if report.phase == RunPhase::Paused {
            self.clear();
        }
        Ok(None)
    }

    /// Export the captured frames as a GIF with automatic frame skipping
    ///
    /// If the requested delay is shorter than viewers reliably support, frames
    /// are skipped so the animation keeps its apparent speed. The final frame
    /// is held longer so the finished image stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        let Some(last) = self.frames.last() else {
            return Err(MondriantError::EmptyCapture {
                path: output_path.to_path_buf(),
            });
        };

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };

        let delay = Delay::from_numer_denom_ms(effective_delay_ms, 1);
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .step_by(skip_factor)
            .map(|img| Frame::from_parts(img.clone(), 0, 0, delay))
            .collect();
        frames.push(Frame::from_parts(
            last.clone(),
            0,
            0,
            Delay::from_numer_denom_ms(effective_delay_ms * FINAL_FRAME_HOLD, 1),
        ));

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MondriantError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| MondriantError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| MondriantError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}

impl RenderSink for FrameCapture {
    fn present(&mut self, pixels: &[u8], width: usize, height: usize) {
        if self.presented % self.stride == 0 {
            // A mismatched buffer cannot come from a canvas; skip rather than abort
            if let Ok(img) = rgba_image(pixels, width, height) {
                self.frames.push(img);
            }
        }
        self.presented += 1;
    }
}
