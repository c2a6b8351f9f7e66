//! In-memory 1-bpp display
//!
//! Stands in for the panel driver on the host. Text is not rasterised; each
//! string is kept as a label with fixed-width glyph metrics.

use glam::IVec2;

use super::display::{Bitmap, Display};
use crate::Error;

pub const GLYPH_WIDTH: i32 = 6;
pub const GLYPH_HEIGHT: i32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub origin: IVec2,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
struct Frame {
    pixels: Vec<bool>,
    labels: Vec<Label>,
}

#[derive(Debug, Clone)]
pub struct FrameBuffer {
    size: IVec2,
    back: Frame,
    front: Frame,
    frames: u64,
}

impl FrameBuffer {
    pub fn new(width: i32, height: i32) -> Result<Self, Error> {
        if width <= 0 || height <= 0 {
            return Err(Error::DisplayInit(format!(
                "invalid panel size {}x{}",
                width, height
            )));
        }
        let blank = Frame {
            pixels: vec![false; (width * height) as usize],
            labels: Vec::new(),
        };
        Ok(Self {
            size: IVec2::new(width, height),
            back: blank.clone(),
            front: blank,
            frames: 0,
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        Some((y * self.size.x + x) as usize)
    }

    fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.back.pixels[i] = true;
        }
    }

    /// Presented pixel; off-panel reads are unlit
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.front.pixels[i])
    }

    /// Labels of the presented frame
    pub fn labels(&self) -> &[Label] {
        &self.front.labels
    }

    pub fn has_label(&self, text: &str) -> bool {
        self.labels().iter().any(|l| l.text == text)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    /// Presented frame as `#`/`.` rows followed by its labels
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.size.x + 1) * self.size.y) as usize);
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                out.push(if self.pixel(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        for label in &self.front.labels {
            out.push_str(&format!("({}, {}) {}\n", label.origin.x, label.origin.y, label.text));
        }
        out
    }
}

impl Display for FrameBuffer {
    fn size(&self) -> IVec2 {
        self.size
    }

    fn clear(&mut self) {
        self.back.pixels.fill(false);
        self.back.labels.clear();
    }

    fn fill_rect(&mut self, origin: IVec2, size: IVec2) {
        let lo = origin.max(IVec2::ZERO);
        let hi = (origin + size).min(self.size);
        for y in lo.y..hi.y {
            for x in lo.x..hi.x {
                self.set(x, y);
            }
        }
    }

    fn blit(&mut self, origin: IVec2, bitmap: &Bitmap) {
        for y in 0..bitmap.height {
            for x in 0..bitmap.width {
                if bitmap.pixel(x, y) {
                    self.set(origin.x + x, origin.y + y);
                }
            }
        }
    }

    fn text_size(&self, text: &str) -> IVec2 {
        IVec2::new(text.chars().count() as i32 * GLYPH_WIDTH, GLYPH_HEIGHT)
    }

    fn draw_text(&mut self, origin: IVec2, text: &str) {
        self.back.labels.push(Label {
            origin,
            text: text.to_string(),
        });
    }

    fn present(&mut self) -> Result<(), Error> {
        self.front.clone_from(&self.back);
        self.frames += 1;
        Ok(())
    }
}
