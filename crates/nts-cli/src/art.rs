//! Cover art as terminal cells.
//!
//! With color, each cell is an upper half block: foreground = upper pixel,
//! background = lower pixel, so `height` pixels take `height / 2` rows.
//! Without color, each cell is an ASCII glyph picked by luminance.

use image::{imageops::FilterType, RgbImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const HALF_BLOCK: &str = "▀";
const LUMA_RAMP: &[u8] = b" .:-=+*#%@";

pub struct CoverArt {
    pixels: RgbImage,
}

impl CoverArt {
    /// Decode `bytes` and resize to exactly `width` × `height` pixels.
    pub fn decode(bytes: &[u8], width: u16, height: u16) -> Result<Self, image::ImageError> {
        let img = image::load_from_memory(bytes)?;
        let pixels = img
            .resize_exact(
                u32::from(width.max(1)),
                u32::from(height.max(1)),
                FilterType::Triangle,
            )
            .to_rgb8();
        Ok(Self { pixels })
    }

    /// Size in terminal cells (columns, rows).
    pub fn cell_size(&self) -> (u16, u16) {
        let cols = self.pixels.width().min(u32::from(u16::MAX)) as u16;
        let rows = self.pixels.height().div_ceil(2).min(u32::from(u16::MAX)) as u16;
        (cols, rows)
    }

    pub fn widget(&self, color: bool) -> ArtWidget<'_> {
        ArtWidget { art: self, color }
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        (x < self.pixels.width() && y < self.pixels.height()).then(|| self.pixels.get_pixel(x, y).0)
    }
}

pub struct ArtWidget<'a> {
    art: &'a CoverArt,
    color: bool,
}

impl Widget for ArtWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (cols, rows) = self.art.cell_size();
        for row in 0..rows.min(area.height) {
            for col in 0..cols.min(area.width) {
                let x = u32::from(col);
                let upper = self.art.pixel(x, u32::from(row) * 2);
                let lower = self.art.pixel(x, u32::from(row) * 2 + 1);
                let cell = &mut buf[(area.x + col, area.y + row)];
                if self.color {
                    let [r, g, b] = upper.unwrap_or_default();
                    cell.set_symbol(HALF_BLOCK).set_fg(Color::Rgb(r, g, b));
                    if let Some([r, g, b]) = lower {
                        cell.set_bg(Color::Rgb(r, g, b));
                    }
                } else {
                    let glyph = ramp_glyph(upper, lower);
                    cell.set_char(glyph);
                }
            }
        }
    }
}

fn luma([r, g, b]: [u8; 3]) -> f32 {
    0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)
}

fn ramp_glyph(upper: Option<[u8; 3]>, lower: Option<[u8; 3]>) -> char {
    let samples: Vec<f32> = [upper, lower].into_iter().flatten().map(luma).collect();
    if samples.is_empty() {
        return ' ';
    }
    let mean = samples.iter().sum::<f32>() / samples.len() as f32;
    let idx = ((mean / 256.0) * LUMA_RAMP.len() as f32) as usize;
    char::from(LUMA_RAMP[idx.min(LUMA_RAMP.len() - 1)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb};
    use std::io::Cursor;

    /// Left half black, right half white.
    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn two_pixel_rows_per_cell() {
        let art = CoverArt::decode(&png(16, 16), 8, 6).unwrap();
        assert_eq!(art.cell_size(), (8, 3));
        let art = CoverArt::decode(&png(16, 16), 8, 5).unwrap();
        assert_eq!(art.cell_size(), (8, 3));
    }

    #[test]
    fn color_render_uses_half_blocks() {
        let art = CoverArt::decode(&png(4, 4), 4, 4).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        art.widget(true).render(buf.area, &mut buf);
        let cell = &buf[(3, 0)];
        assert_eq!(cell.symbol(), HALF_BLOCK);
        assert_eq!(cell.fg, Color::Rgb(255, 255, 255));
        assert_eq!(cell.bg, Color::Rgb(255, 255, 255));
        assert_eq!(buf[(0, 1)].fg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn plain_render_uses_luminance_ramp() {
        let art = CoverArt::decode(&png(4, 4), 4, 4).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        art.widget(false).render(buf.area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(3, 0)].symbol(), "@");
        assert_eq!(buf[(3, 0)].fg, Color::Reset);
    }

    #[test]
    fn render_clips_to_area() {
        let art = CoverArt::decode(&png(4, 4), 10, 10).unwrap();
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 2));
        art.widget(true).render(buf.area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), HALF_BLOCK);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(CoverArt::decode(b"definitely not an image", 8, 8).is_err());
    }
}
