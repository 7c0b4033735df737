//! End-to-end checks of the feet-unit scenario: a 10 ft × 6 ft room,
//! source at (2, 2), receiver at (8, 4), default acoustic constants
//! (1125 ft/s, reflection coefficient 0.7, eps 1e-6).

use assert_approx_eq::assert_approx_eq;
use resound::{build_rir, reflection_paths, AcousticParams, Point, Room};

fn scenario(receiver: Point) -> (Room, AcousticParams) {
    let room = Room::new(10.0, 6.0, Point::new(2.0, 2.0), receiver).unwrap();
    (room, AcousticParams::default())
}

#[test]
fn first_order_paths_match_the_formulas() {
    let (room, params) = scenario(Point::new(8.0, 4.0));

    let paths = reflection_paths(&room, 1, &params);
    assert_eq!(paths.len(), 5);

    // direct: sqrt(40), left: sqrt(104), bottom: sqrt(72),
    // right: sqrt(104), top: sqrt(72)
    let expected = [
        (0.0056218, 0.158114),
        (0.0090649, 0.068640),
        (0.0075425, 0.082496),
        (0.0090649, 0.068640),
        (0.0075425, 0.082496),
    ];

    for (path, (delay, gain)) in paths.iter().zip(expected) {
        assert_approx_eq!(path.delay, delay, 1e-7);
        assert_approx_eq!(path.gain, gain, 1e-6);
    }
}

#[test]
fn rir_sums_the_equidistant_pairs() {
    let (room, params) = scenario(Point::new(8.0, 4.0));

    let paths = reflection_paths(&room, 1, &params);
    let rir = build_rir(&paths, 48000, 0.5).unwrap();

    assert_eq!(rir.len(), 24000);

    // With source and receiver coordinates summing to the room
    // dimensions, the left/right and bottom/top images are exactly
    // equidistant from the receiver, so five paths land on three
    // sample indices and the pairs accumulate.
    let nonzero: Vec<usize> = (0..rir.len()).filter(|&i| rir.samples()[i] != 0.0).collect();
    assert_eq!(nonzero, [270, 362, 435]);

    assert_approx_eq!(rir.samples()[270], 0.158114, 1e-6);
    assert_approx_eq!(rir.samples()[362], 2.0 * (0.7 / 72f64.sqrt()), 1e-7);
    assert_approx_eq!(rir.samples()[435], 2.0 * (0.7 / 104f64.sqrt()), 1e-7);
}

#[test]
fn rir_with_five_distinct_spikes() {
    // Receiver moved off the symmetry diagonals: all five first-order
    // delays quantize to distinct indices.
    let (room, params) = scenario(Point::new(7.0, 3.0));

    let paths = reflection_paths(&room, 1, &params);
    let rir = build_rir(&paths, 48000, 0.5).unwrap();

    let nonzero: Vec<usize> = (0..rir.len()).filter(|&i| rir.samples()[i] != 0.0).collect();
    assert_eq!(nonzero, [218, 302, 367, 386, 471]);

    // direct: sqrt(26) ft at sample round(0.0045325 * 48000) = 218
    assert_approx_eq!(rir.samples()[218], 0.196116, 1e-6);
    // bottom: sqrt(50) ft
    assert_approx_eq!(rir.samples()[302], 0.098995, 1e-6);
    // top: sqrt(74) ft
    assert_approx_eq!(rir.samples()[367], 0.081373, 1e-6);
    // left: sqrt(82) ft
    assert_approx_eq!(rir.samples()[386], 0.077302, 1e-6);
    // right: sqrt(122) ft
    assert_approx_eq!(rir.samples()[471], 0.063375, 1e-6);
}

#[test]
fn normalization_is_explicit_and_ratio_preserving() {
    let (room, params) = scenario(Point::new(7.0, 3.0));

    let paths = reflection_paths(&room, 1, &params);
    let mut rir = build_rir(&paths, 48000, 0.5).unwrap();

    let before = rir.samples().to_vec();
    rir.normalize();

    let peak = before.iter().fold(0.0, |m: f64, s| m.max(s.abs()));
    assert_eq!(peak, before[218]);

    for (normalized, original) in rir.samples().iter().zip(&before) {
        assert_approx_eq!(*normalized, original / peak, 1e-12);
    }
    assert_eq!(rir.samples()[218], 1.0);
}
