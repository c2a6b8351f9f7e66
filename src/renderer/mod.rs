//! Rendering seam
//!
//! The simulation works in scaled units; everything here converts to whole
//! pixels with `Fixed::to_pixels` before touching a `Display`.

pub mod display;
pub mod framebuffer;
pub mod scene;

pub use display::{ACTOR_SPRITE, Bitmap, Display};
pub use framebuffer::FrameBuffer;
pub use scene::draw_world;
