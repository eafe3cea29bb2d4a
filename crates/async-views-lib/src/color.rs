//! Random opaque colors for row cells

use rand::Rng;

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as `0xAARRGGBB` with a fully opaque alpha channel
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Generate a color whose channels are sampled independently and uniformly from `0..=255`
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    Rgb {
        r: rng.r#gen(),
        g: rng.r#gen(),
        b: rng.r#gen(),
    }
}
