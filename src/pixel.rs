/// One decoded color sample.
///
/// Channels hold 8-bit values as stored in the file. `a` is fixed to 0 for
/// pixels decoded from 24-bit data, which carries no alpha channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[cfg(feature = "rgb")]
impl From<Pixel> for rgb::RGBA8 {
    fn from(p: Pixel) -> Self {
        rgb::RGBA8 {
            r: p.r,
            g: p.g,
            b: p.b,
            a: p.a,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGBA8> for Pixel {
    fn from(p: rgb::RGBA8) -> Self {
        Self {
            r: p.r,
            g: p.g,
            b: p.b,
            a: p.a,
        }
    }
}
