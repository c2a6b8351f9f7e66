//! Display collaborator interface

use glam::IVec2;

use crate::Error;

/// A monochrome display driven in pixel coordinates
///
/// Drawing sets pixels; anything outside the panel is clipped by the
/// implementation. Nothing is visible until `present`.
pub trait Display {
    /// Panel size in pixels
    fn size(&self) -> IVec2;
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: IVec2, size: IVec2);
    fn blit(&mut self, origin: IVec2, bitmap: &Bitmap);
    /// Bounds `text` would occupy if drawn
    fn text_size(&self, text: &str) -> IVec2;
    fn draw_text(&mut self, origin: IVec2, text: &str);
    fn present(&mut self) -> Result<(), Error>;
}

/// 1-bpp image, rows packed MSB first
#[derive(Debug, Clone, Copy)]
pub struct Bitmap {
    pub width: i32,
    pub height: i32,
    pub data: &'static [u8],
}

impl Bitmap {
    pub fn bytes_per_row(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.bytes_per_row() + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

pub const ACTOR_SPRITE: Bitmap = Bitmap {
    width: 8,
    height: 8,
    data: &[
        0b0011_1100,
        0b0100_0110,
        0b1000_0101,
        0b1111_0001,
        0b1000_1111,
        0b1000_0110,
        0b0100_0100,
        0b0011_1000,
    ],
};
