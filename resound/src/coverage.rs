use super::*;

/// Fixed atmospheric absorption term, in dB.
const AIR_ABSORPTION_DB: Float = 0.68;

/// Distances below this clamp count as this, keeping the level finite
/// when the probe point sits on the source.
const MIN_DISTANCE: Float = 1e-6;

/// Sound pressure level in dB at `p`, for a point source at `source`
/// radiating `power_db`.
///
/// Free-field coverage model, separate from the reflection pipeline: the
/// level falls off with `20 log10` of the distance (in the room's length
/// unit) and loses a fixed absorption term. Pure and total over the
/// plane.
#[inline]
#[must_use]
pub fn level_db_at(source: Point, power_db: Float, p: Point) -> Float {
    let distance = (p - source).norm().max(MIN_DISTANCE);
    power_db - 20.0 * distance.log10() - AIR_ABSORPTION_DB
}
