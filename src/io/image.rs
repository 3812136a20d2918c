//! PNG export of finished runs

use crate::io::error::{MondriantError, Result, invalid_parameter};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Receives the canvas once per settled run
pub trait ImageSink {
    /// Accept a finished image
    ///
    /// `pixels` holds `width * height` row-major RGBA8 pixels. `run_index`
    /// cycles, so sinks that name files after it overwrite older runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be persisted
    fn emit(
        &mut self,
        pixels: &[u8],
        width: usize,
        height: usize,
        run_index: usize,
    ) -> Result<()>;
}

/// Discards every image
impl ImageSink for () {
    fn emit(&mut self, _: &[u8], _: usize, _: usize, _: usize) -> Result<()> {
        Ok(())
    }
}

/// Writes each finished run to `<directory>/<run_index>.png`
#[derive(Debug, Clone)]
pub struct PngSink {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl PngSink {
    /// Create a sink writing into `directory`, created on first use
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            written: Vec::new(),
        }
    }

    /// Output directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Paths written so far, one entry per emitted image
    ///
    /// Run indices wrap, so after ten emissions paths repeat and the earlier
    /// files on disk have been overwritten.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path used for a given run index
    pub fn path_for(&self, run_index: usize) -> PathBuf {
        self.directory.join(format!("{run_index}.png"))
    }
}

impl ImageSink for PngSink {
    fn emit(
        &mut self,
        pixels: &[u8],
        width: usize,
        height: usize,
        run_index: usize,
    ) -> Result<()> {
        let path = self.path_for(run_index);
        export_rgba_png(pixels, width, height, &path)?;
        self.written.push(path);
        Ok(())
    }
}

/// Encode a row-major RGBA8 buffer as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The dimensions do not fit an image or do not match the buffer length
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_rgba_png(pixels: &[u8], width: usize, height: usize, path: &Path) -> Result<()> {
    let img = rgba_image(pixels, width, height)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MondriantError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(path).map_err(|e| MondriantError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Wrap a row-major RGBA8 buffer in an image
///
/// # Errors
///
/// Returns an error if the dimensions overflow `u32` or the buffer length is
/// not `width * height * 4`
pub fn rgba_image(pixels: &[u8], width: usize, height: usize) -> Result<RgbaImage> {
    let w = u32::try_from(width).map_err(|e| invalid_parameter("width", &width, &e))?;
    let h = u32::try_from(height).map_err(|e| invalid_parameter("height", &height, &e))?;

    RgbaImage::from_raw(w, h, pixels.to_vec()).ok_or_else(|| {
        invalid_parameter(
            "pixels",
            &pixels.len(),
            &format!("buffer does not hold {width}x{height} RGBA pixels"),
        )
    })
}
