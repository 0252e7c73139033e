use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

use super::QR;
use crate::common::{QRError, QRResult};

// Render options
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    width: u32,
    height: u32,
    dark: Rgb<u8>,
    light: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 256, height: 256, dark: Rgb([0, 0, 0]), light: Rgb([255, 255, 255]) }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&mut self, width: u32, height: u32) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn dark(&mut self, dark: Rgb<u8>) -> &mut Self {
        self.dark = dark;
        self
    }

    pub fn light(&mut self, light: Rgb<u8>) -> &mut Self {
        self.light = light;
        self
    }

    pub fn dark_hex(&mut self, hex: &str) -> QRResult<&mut Self> {
        self.dark = parse_hex_color(hex)?;
        Ok(self)
    }

    pub fn light_hex(&mut self, hex: &str) -> QRResult<&mut Self> {
        self.light = parse_hex_color(hex)?;
        Ok(self)
    }
}

/// Parses `#rgb` or `#rrggbb`.
pub fn parse_hex_color(hex: &str) -> QRResult<Rgb<u8>> {
    let digits = hex.strip_prefix('#').ok_or(QRError::InvalidColor)?;
    if !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(QRError::InvalidColor);
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| QRError::InvalidColor);
    let mut rgb = [0; 3];
    match digits.len() {
        3 => {
            for (i, ch) in rgb.iter_mut().enumerate() {
                *ch = channel(&digits[i..i + 1])? * 17;
            }
        }
        6 => {
            for (i, ch) in rgb.iter_mut().enumerate() {
                *ch = channel(&digits[i * 2..i * 2 + 2])?;
            }
        }
        _ => return Err(QRError::InvalidColor),
    }
    Ok(Rgb(rgb))
}

fn to_hex(clr: Rgb<u8>) -> String {
    let Rgb([r, g, b]) = clr;
    format!("#{r:02x}{g:02x}{b:02x}")
}


// Render
//------------------------------------------------------------------------------

impl QR {
    /// Rasterizes the symbol onto a `width x height` canvas. Each module covers
    /// the pixel span its edges fall on, so modules may differ by a pixel when
    /// the canvas size is not a multiple of the symbol width.
    pub fn to_image(&self, opts: &RenderOptions) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(opts.width, opts.height, opts.light);
        let w = self.width() as u64;
        let span = |i: u64, len: u32| ((i * len as u64 / w) as u32, ((i + 1) * len as u64 / w) as u32);

        for r in 0..w {
            for c in 0..w {
                if !self.is_dark(r as usize, c as usize) {
                    continue;
                }
                let (x0, x1) = span(c, opts.width);
                let (y0, y1) = span(r, opts.height);
                if x1 <= x0 || y1 <= y0 {
                    continue;
                }
                let rect = Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0, y1 - y0);
                draw_filled_rect_mut(&mut canvas, rect, opts.dark);
            }
        }

        canvas
    }

    pub fn to_svg(&self, opts: &RenderOptions) -> String {
        let w = self.width();
        let (dark, light) = (to_hex(opts.dark), to_hex(opts.light));

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {w}\" width=\"{}\" height=\"{}\" fill=\"{light}\">\n",
            opts.width, opts.height
        );
        svg.push_str(&format!("<rect width=\"100%\" height=\"100%\" fill=\"{light}\"/>\n"));
        for r in 0..w {
            for c in 0..w {
                if self.is_dark(r, c) {
                    svg.push_str(&format!(
                        "<rect x=\"{c}\" y=\"{r}\" width=\"1\" height=\"1\" fill=\"{dark}\"/>\n"
                    ));
                }
            }
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub fn to_str(&self, module_sz: usize) -> String {
        let qr_sz = self.width() * module_sz;

        let mut canvas = String::with_capacity(qr_sz * (qr_sz + 1));
        for i in 0..qr_sz {
            for j in 0..qr_sz {
                let (r, c) = ((i / module_sz) as i16, (j / module_sz) as i16);
                canvas.push(self.get(r, c).select('█', ' '));
            }
            canvas.push('\n');
        }

        canvas
    }
}
