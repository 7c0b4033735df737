use super::*;

/// A virtual source obtained by mirroring the real source across a
/// sequence of walls.
///
/// Its straight-line distance to the receiver equals the length of the
/// reflected path it stands for, which is the whole point of the
/// image-source construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    pub pos: Point,
    walls: Vec<Wall>,
}

impl ImageSource {
    /// The bounce sequence that produced this image, in mirroring order.
    ///
    /// Any ordering a consumer needs can be derived from this tag rather
    /// than from the image's position in a list.
    #[inline]
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Number of wall bounces the image stands for. The real source is
    /// order 0.
    #[inline]
    #[must_use]
    pub fn order(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    fn direct(pos: Point) -> Self {
        Self {
            pos,
            walls: Vec::new(),
        }
    }

    fn mirrored(&self, wall: Wall, room: &Room) -> Self {
        let mut walls = Vec::with_capacity(self.walls.len() + 1);
        walls.extend_from_slice(&self.walls);
        walls.push(wall);
        Self {
            pos: wall.mirror(room, self.pos),
            walls,
        }
    }
}

/// Iterator over successive generations of image sources.
///
/// The k-th yielded item is the complete order-k generation: one image
/// for k = 0 (the real source itself), `4^k` images for k ≥ 1. Each
/// generation is derived from the previous one by mirroring every image
/// across the four walls in [`Wall::ALL`] order, so the growth is held in
/// a flat buffer instead of a recursion tree. The iterator never ends;
/// callers bound it.
///
/// Distinct bounce sequences may land on the same position. They are kept
/// as separate images on purpose: each one attenuates and sums into the
/// impulse response independently. Nor is there any check that the bounce
/// points fall on the finite wall segments, so some higher-order images
/// stand for paths a real room would not produce; the model knowingly
/// includes them.
pub struct ImageExpansion<'a> {
    room: &'a Room,
    generation: Vec<ImageSource>,
}

impl<'a> ImageExpansion<'a> {
    #[inline]
    #[must_use]
    pub fn new(room: &'a Room) -> Self {
        Self {
            room,
            generation: vec![ImageSource::direct(room.source)],
        }
    }
}

impl Iterator for ImageExpansion<'_> {
    type Item = Vec<ImageSource>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self
            .generation
            .iter()
            .flat_map(|image| Wall::ALL.map(|wall| image.mirrored(wall, self.room)))
            .collect();

        Some(core::mem::replace(&mut self.generation, next))
    }
}

impl Room {
    /// Lazily iterate over image-source generations, starting at order 0.
    #[inline]
    pub fn image_expansion(&self) -> ImageExpansion<'_> {
        ImageExpansion::new(self)
    }

    /// All image sources of exactly the given reflection order.
    #[must_use]
    pub fn image_sources(&self, order: usize) -> Vec<ImageSource> {
        self.image_expansion()
            .nth(order)
            .expect("the image expansion is endless")
    }
}
