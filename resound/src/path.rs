use super::*;

/// Physical constants for the delay/gain model.
///
/// `speed_of_sound` must be expressed in the room's length unit per
/// second; the defaults assume feet (1125 ft/s). `reflection_coefficient`
/// is the linear amplitude kept per bounce, expected in `(0, 1]` but not
/// enforced. `eps` only keeps the gain finite when an image lands exactly
/// on the receiver; it should be negligible next to any realistic room
/// dimension.
#[derive(Clone, Debug, PartialEq)]
pub struct AcousticParams {
    pub speed_of_sound: Float,
    pub reflection_coefficient: Float,
    pub eps: Float,
}

impl Default for AcousticParams {
    #[inline]
    fn default() -> Self {
        Self {
            speed_of_sound: 1125.0,
            reflection_coefficient: 0.7,
            eps: 1e-6,
        }
    }
}

/// One arrival at the receiver: a delay in seconds and a linear gain,
/// tagged with the reflection order it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Path {
    pub delay: Float,
    pub gain: Float,
    pub order: usize,
}

impl ImageSource {
    /// Evaluate the arrival this image stands for.
    ///
    /// `delay = distance / speed_of_sound` and
    /// `gain = reflection_coefficient^order / (distance + eps)`. At order
    /// 0 the reflection term is exactly 1, leaving pure inverse-distance
    /// decay. Total over all finite inputs.
    #[must_use]
    pub fn path(&self, receiver: Point, params: &AcousticParams) -> Path {
        let distance = (receiver - self.pos).norm();
        let order = self.order();

        Path {
            delay: distance / params.speed_of_sound,
            gain: params.reflection_coefficient.powi(order as i32) / (distance + params.eps),
            order,
        }
    }
}

/// Every arrival up to `max_order` bounces, flattened into one list.
///
/// The direct path comes first, then each order's images in generation
/// order, so indices 1..=4 are always the left, bottom, right and top
/// first-order reflections. Diagnostic tooling indexes into this list
/// positionally; the ordering is part of the API. The result holds
/// `1 + Σ_{k=1..=max_order} 4^k` paths, and no plausibility filtering is
/// applied (see [`ImageExpansion`]).
#[must_use]
pub fn reflection_paths(room: &Room, max_order: usize, params: &AcousticParams) -> Vec<Path> {
    let mut paths = Vec::new();
    for generation in room.image_expansion().take(max_order + 1) {
        paths.extend(generation.iter().map(|image| image.path(room.receiver, params)));
    }
    paths
}
