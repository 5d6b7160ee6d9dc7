//! Share-card export
//!
//! A share card is exported in three steps:
//! 1. `RenderTarget::capture` snapshots the cells the card occupied on the last frame
//! 2. a [`Rasterizer`] turns the snapshot into PNG bytes
//! 3. `save_png` writes the bytes into the download directory
//!
//! The runtime drives these from a background task (see `services::export`).

pub mod png;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use png::PngRasterizer;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("share card is not on screen")]
    NotMounted,
    #[error("no usable font found for image export (set font_path in config.yaml)")]
    FontUnavailable,
    #[error("not a usable font file: {0}")]
    InvalidFont(String),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("export worker failed: {0}")]
    Worker(String),
}

/// One captured terminal cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCell {
    pub symbol: String,
    pub fg: Color,
    pub bg: Color,
}

/// Snapshot of a rectangular region of a rendered frame
///
/// This is what gets rasterized; it is the terminal counterpart of an
/// on-screen element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub width: u16,
    pub height: u16,
    cells: Vec<TargetCell>,
}

impl RenderTarget {
    /// Copy the cells of `area` out of `buffer`
    ///
    /// Returns None if `area` is empty or not fully inside the buffer.
    pub fn capture(buffer: &Buffer, area: Rect) -> Option<Self> {
        if area.is_empty() || buffer.area.intersection(area) != area {
            return None;
        }

        let mut cells = Vec::with_capacity(area.area() as usize);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = buffer.cell((x, y))?;
                cells.push(TargetCell {
                    symbol: cell.symbol().to_string(),
                    fg: cell.fg,
                    bg: cell.bg,
                });
            }
        }

        Some(Self {
            width: area.width,
            height: area.height,
            cells,
        })
    }

    /// Cell at column `x`, row `y` relative to the captured area
    pub fn cell(&self, x: u16, y: u16) -> Option<&TargetCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y as usize * self.width as usize + x as usize)
    }

    /// Captured text, one line per row, trailing blanks trimmed
    ///
    /// Cells hidden behind a wide symbol are skipped.
    pub fn text_lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                let mut line = String::new();
                let mut hidden = 0usize;
                for x in 0..self.width {
                    let Some(cell) = self.cell(x, y) else { continue };
                    if hidden > 0 {
                        hidden -= 1;
                        continue;
                    }
                    line.push_str(&cell.symbol);
                    hidden = crate::logic::format::display_width(&cell.symbol).saturating_sub(1);
                }
                line.trim_end().to_string()
            })
            .collect()
    }
}

/// Narrow capability: turn a captured render target into image bytes
///
/// The gallery only depends on this trait, never on a concrete engine.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, target: &RenderTarget) -> Result<Vec<u8>, ExportError>;
}

/// Write `bytes` to `dir/filename`, creating `dir` if needed
pub fn save_png(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let path = dir.join(filename);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(path)
}

/// Rasterize `target` and save it as `dir/filename`
///
/// A missing target (the card was not drawn) produces no file.
pub fn export_card(
    rasterizer: &dyn Rasterizer,
    target: Option<&RenderTarget>,
    filename: &str,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let target = target.ok_or(ExportError::NotMounted)?;
    let bytes = rasterizer.rasterize(target)?;
    save_png(dir, filename, &bytes)
}
