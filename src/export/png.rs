//! PNG rasterizer for captured share cards
//!
//! Every terminal cell becomes a `CELL_WIDTH` x `CELL_HEIGHT` pixel block:
//! the block is filled with the cell background, then the cell symbol is
//! drawn with swash from a TrueType/OpenType font (collections supported).

use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use ratatui::style::Color;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;
use swash::FontRef;

use super::{ExportError, Rasterizer, RenderTarget};
use crate::logic::format::display_width;

/// Pixel width of one terminal cell
pub const CELL_WIDTH: u32 = 12;

/// Pixel height of one terminal cell
pub const CELL_HEIGHT: u32 = 24;

const FONT_SIZE: f32 = CELL_HEIGHT as f32 * 0.8;

/// Background used for cells with no explicit background (card paper)
const PAPER: Rgba<u8> = Rgba([0xfc, 0xfa, 0xf7, 0xff]);

/// Foreground used for cells with no explicit foreground
const INK: Rgba<u8> = Rgba([0x1f, 0x29, 0x37, 0xff]);

/// Fonts tried, in order, when no font is configured. CJK-capable first.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/opentype/noto/NotoSerifCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-zenhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-zenhei/wqy-zenhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simsun.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// Rasterizer producing PNG bytes from a captured card
pub struct PngRasterizer {
    font: Option<Vec<u8>>,
}

impl PngRasterizer {
    /// Use the given font data (must parse as a font)
    pub fn new(font_data: Vec<u8>) -> Result<Self, ExportError> {
        if FontRef::from_index(&font_data, 0).is_none() {
            return Err(ExportError::InvalidFont("<memory>".to_string()));
        }
        Ok(Self {
            font: Some(font_data),
        })
    }

    /// A rasterizer with no font; every rasterize call fails
    pub fn without_font() -> Self {
        Self { font: None }
    }

    pub fn from_font_path(path: &Path) -> Result<Self, ExportError> {
        let data = std::fs::read(path).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::new(data).map_err(|_| ExportError::InvalidFont(path.display().to_string()))
    }

    /// Load the configured font, or the first usable system font
    ///
    /// Never fails: without any usable font the rasterizer is still built and
    /// reports `FontUnavailable` when used.
    pub fn discover(configured: Option<&Path>) -> Self {
        if let Some(path) = configured {
            match Self::from_font_path(path) {
                Ok(r) => {
                    tracing::debug!("Export font: {}", path.display());
                    return r;
                }
                Err(e) => tracing::warn!("Configured font unusable: {}", e),
            }
        }

        for candidate in FONT_CANDIDATES {
            let path = PathBuf::from(candidate);
            if !path.exists() {
                continue;
            }
            if let Ok(r) = Self::from_font_path(&path) {
                tracing::debug!("Export font (discovered): {}", path.display());
                return r;
            }
        }

        tracing::warn!("No export font found; share-card download is unavailable");
        Self::without_font()
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Paint `target` into an RGBA image
    pub fn render_image(&self, target: &RenderTarget) -> Result<RgbaImage, ExportError> {
        let font_data = self.font.as_deref().ok_or(ExportError::FontUnavailable)?;
        let font = FontRef::from_index(font_data, 0).ok_or(ExportError::FontUnavailable)?;

        let width = target.width as u32 * CELL_WIDTH;
        let height = target.height as u32 * CELL_HEIGHT;
        let mut img: RgbaImage = ImageBuffer::from_pixel(width, height, PAPER);

        let metrics = font.metrics(&[]).scale(FONT_SIZE);
        let baseline_offset =
            ((CELL_HEIGHT as f32 - (metrics.ascent + metrics.descent)) / 2.0 + metrics.ascent) as i32;

        let mut scale_context = ScaleContext::new();
        let mut scaler = scale_context.builder(font).size(FONT_SIZE).hint(true).build();
        let charmap = font.charmap();

        for y in 0..target.height {
            let mut hidden = 0usize;
            for x in 0..target.width {
                let Some(cell) = target.cell(x, y) else { continue };
                let left = x as u32 * CELL_WIDTH;
                let top = y as u32 * CELL_HEIGHT;

                let bg = to_rgba(cell.bg, PAPER);
                if bg != PAPER {
                    draw_filled_rect_mut(
                        &mut img,
                        Rect::at(left as i32, top as i32).of_size(CELL_WIDTH, CELL_HEIGHT),
                        bg,
                    );
                }

                // Cells covered by the previous wide symbol carry no glyph
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                hidden = display_width(&cell.symbol).saturating_sub(1);

                if cell.symbol.trim().is_empty() {
                    continue;
                }

                let fg = to_rgba(cell.fg, INK);
                let mut pen_x = left as f32;
                let baseline = top as i32 + baseline_offset;

                for ch in cell.symbol.chars() {
                    let glyph_id = charmap.map(ch);
                    if glyph_id == 0 {
                        pen_x += display_width(&ch.to_string()) as f32 * CELL_WIDTH as f32;
                        continue;
                    }

                    let rendered = Render::new(&[
                        Source::ColorOutline(0),
                        Source::ColorBitmap(StrikeWith::BestFit),
                        Source::Outline,
                    ])
                    .format(Format::Alpha)
                    .render(&mut scaler, glyph_id);

                    if let Some(glyph) = rendered {
                        // Center the glyph in the columns it occupies
                        let columns = display_width(&ch.to_string()).max(1) as f32;
                        let slot = columns * CELL_WIDTH as f32;
                        let inset = ((slot - glyph.placement.width as f32) / 2.0).max(0.0);
                        let gx = (pen_x + inset) as i32;
                        let gy = baseline - glyph.placement.top;
                        blend_glyph(
                            &mut img,
                            &glyph.data,
                            glyph.content,
                            glyph.placement.width,
                            glyph.placement.height,
                            gx,
                            gy,
                            fg,
                        );
                    }

                    pen_x += display_width(&ch.to_string()).max(1) as f32 * CELL_WIDTH as f32;
                }
            }
        }

        Ok(img)
    }
}

impl Rasterizer for PngRasterizer {
    fn rasterize(&self, target: &RenderTarget) -> Result<Vec<u8>, ExportError> {
        let img = self.render_image(target)?;
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }
}

/// Alpha-blend a rendered glyph onto `img` at (`x`, `y`)
#[allow(clippy::too_many_arguments)]
fn blend_glyph(
    img: &mut RgbaImage,
    data: &[u8],
    content: Content,
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    color: Rgba<u8>,
) {
    for py in 0..height {
        for px in 0..width {
            let dest_x = x + px as i32;
            let dest_y = y + py as i32;
            if dest_x < 0 || dest_y < 0 || dest_x as u32 >= img.width() || dest_y as u32 >= img.height() {
                continue;
            }

            let idx = (py * width + px) as usize;
            let (src, alpha) = match content {
                Content::Color => {
                    let base = idx * 4;
                    if base + 3 >= data.len() {
                        continue;
                    }
                    ([data[base], data[base + 1], data[base + 2]], data[base + 3])
                }
                Content::SubpixelMask => {
                    let base = idx * 4;
                    if base + 3 >= data.len() {
                        continue;
                    }
                    ([color[0], color[1], color[2]], data[base + 3])
                }
                Content::Mask => match data.get(idx) {
                    Some(a) => ([color[0], color[1], color[2]], *a),
                    None => continue,
                },
            };
            if alpha == 0 {
                continue;
            }

            let dest = img.get_pixel_mut(dest_x as u32, dest_y as u32);
            let a = alpha as f32 / 255.0;
            let inv_a = 1.0 - a;
            dest[0] = (src[0] as f32 * a + dest[0] as f32 * inv_a) as u8;
            dest[1] = (src[1] as f32 * a + dest[1] as f32 * inv_a) as u8;
            dest[2] = (src[2] as f32 * a + dest[2] as f32 * inv_a) as u8;
            dest[3] = 255;
        }
    }
}

/// Convert a terminal color to RGBA; `Reset` maps to `default`
pub fn to_rgba(color: Color, default: Rgba<u8>) -> Rgba<u8> {
    let (r, g, b) = match color {
        Color::Reset => return default,
        Color::Black => (0x00, 0x00, 0x00),
        Color::Red => (0xcd, 0x00, 0x00),
        Color::Green => (0x00, 0xcd, 0x00),
        Color::Yellow => (0xcd, 0xcd, 0x00),
        Color::Blue => (0x00, 0x00, 0xee),
        Color::Magenta => (0xcd, 0x00, 0xcd),
        Color::Cyan => (0x00, 0xcd, 0xcd),
        Color::Gray => (0xe5, 0xe5, 0xe5),
        Color::DarkGray => (0x7f, 0x7f, 0x7f),
        Color::LightRed => (0xff, 0x00, 0x00),
        Color::LightGreen => (0x00, 0xff, 0x00),
        Color::LightYellow => (0xff, 0xff, 0x00),
        Color::LightBlue => (0x5c, 0x5c, 0xff),
        Color::LightMagenta => (0xff, 0x00, 0xff),
        Color::LightCyan => (0x00, 0xff, 0xff),
        Color::White => (0xff, 0xff, 0xff),
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(i) => indexed_rgb(i),
    };
    Rgba([r, g, b, 0xff])
}

/// xterm 256-color palette
fn indexed_rgb(index: u8) -> (u8, u8, u8) {
    const BASIC: [(u8, u8, u8); 16] = [
        (0x00, 0x00, 0x00),
        (0xcd, 0x00, 0x00),
        (0x00, 0xcd, 0x00),
        (0xcd, 0xcd, 0x00),
        (0x00, 0x00, 0xee),
        (0xcd, 0x00, 0xcd),
        (0x00, 0xcd, 0xcd),
        (0xe5, 0xe5, 0xe5),
        (0x7f, 0x7f, 0x7f),
        (0xff, 0x00, 0x00),
        (0x00, 0xff, 0x00),
        (0xff, 0xff, 0x00),
        (0x5c, 0x5c, 0xff),
        (0xff, 0x00, 0xff),
        (0x00, 0xff, 0xff),
        (0xff, 0xff, 0xff),
    ];

    match index {
        0..=15 => BASIC[index as usize],
        16..=231 => {
            let i = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        _ => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect as TermRect;
    use ratatui::style::Style;

    fn sample_target() -> RenderTarget {
        let mut buffer = Buffer::empty(TermRect::new(0, 0, 8, 2));
        buffer.set_string(0, 0, "语录 A", Style::default().fg(Color::Red));
        buffer.set_style(TermRect::new(0, 1, 8, 1), Style::default().bg(Color::Rgb(200, 16, 46)));
        RenderTarget::capture(&buffer, buffer.area).unwrap()
    }

    #[test]
    fn test_without_font_fails() {
        let r = PngRasterizer::without_font();
        assert!(matches!(r.rasterize(&sample_target()), Err(ExportError::FontUnavailable)));
    }

    #[test]
    fn test_invalid_font_rejected() {
        assert!(matches!(
            PngRasterizer::new(b"not a font".to_vec()),
            Err(ExportError::InvalidFont(_))
        ));
    }

    #[test]
    fn test_png_dimensions_when_font_available() {
        let r = PngRasterizer::discover(None);
        if !r.has_font() {
            // No system font on this machine; covered by test_without_font_fails
            return;
        }

        let bytes = r.rasterize(&sample_target()).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.width(), 8 * CELL_WIDTH);
        assert_eq!(decoded.height(), 2 * CELL_HEIGHT);

        // Second row carries the explicit background
        let px = decoded.get_pixel(8 * CELL_WIDTH - 2, CELL_HEIGHT + CELL_HEIGHT / 2);
        assert_eq!(*px, Rgba([200, 16, 46, 255]));
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_rgba(Color::Reset, PAPER), PAPER);
        assert_eq!(to_rgba(Color::Rgb(1, 2, 3), PAPER), Rgba([1, 2, 3, 255]));
        assert_eq!(to_rgba(Color::Indexed(16), PAPER), Rgba([0, 0, 0, 255]));
        assert_eq!(to_rgba(Color::Indexed(231), PAPER), Rgba([255, 255, 255, 255]));
        assert_eq!(to_rgba(Color::Indexed(232), PAPER), Rgba([8, 8, 8, 255]));
    }
}
