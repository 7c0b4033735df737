use super::*;

/// One of the four axis-aligned walls of a rectangular room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    /// `x = 0`, vertical.
    Left,
    /// `y = 0`, horizontal.
    Bottom,
    /// `x = width`, vertical.
    Right,
    /// `y = height`, horizontal.
    Top,
}

impl Wall {
    /// All four walls, in generation order.
    ///
    /// Downstream consumers index into path lists positionally, so this
    /// order (left, bottom, right, top) is part of the API.
    pub const ALL: [Self; 4] = [Self::Left, Self::Bottom, Self::Right, Self::Top];

    /// Mirror `p` across this wall of `room`.
    ///
    /// Pure and total: `p` may lie anywhere in the plane, including
    /// outside the room. Mirroring twice across the same wall returns
    /// the original point. All higher-order image generation routes
    /// through this method; the reflection arithmetic lives nowhere else.
    #[inline]
    #[must_use]
    pub fn mirror(self, room: &Room, p: Point) -> Point {
        let (x, y) = (p[0], p[1]);
        match self {
            Self::Left => Point::new(-x, y),
            Self::Bottom => Point::new(x, -y),
            Self::Right => Point::new(2.0 * room.width - x, y),
            Self::Top => Point::new(x, 2.0 * room.height - y),
        }
    }
}

/// A rectangular room spanning `[0, width] × [0, height]`, with one point
/// source and one point receiver.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    pub width: Float,
    pub height: Float,
    pub source: Point,
    pub receiver: Point,
}

impl Room {
    /// Returns an error if either dimension is not a positive finite
    /// number.
    ///
    /// Source and receiver positions are not checked: the model stays
    /// well-defined for points outside the rectangle, and whether such a
    /// setup makes acoustic sense is the caller's call (see
    /// [`Self::contains`]).
    pub fn new(
        width: Float,
        height: Float,
        source: Point,
        receiver: Point,
    ) -> Result<Self, ConfigError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidWidth(width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidHeight(height));
        }
        Ok(Self {
            width,
            height,
            source,
            receiver,
        })
    }

    /// Whether `p` lies inside the room (walls included).
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.width).contains(&p[0]) && (0.0..=self.height).contains(&p[1])
    }
}
