use resound::{AcousticParams, Float, Point, Room};

pub use rand;

pub trait Random: Sized {
    /// Generate a randomized value using the provided `rng`
    ///
    /// This method must not fail. If creating a value is faillible, keep trying until success
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self;
}

impl Random for AcousticParams {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        Self {
            speed_of_sound: rng.gen_range(300.0..1500.0),
            // (0, 1]: a full absorber would zero out every reflection
            reflection_coefficient: 1.0 - rng.gen::<Float>(),
            eps: 1e-6,
        }
    }
}

/// A point strictly inside `room`, away from the walls by a small margin
/// so that mirroring strictly moves it.
pub fn rand_point_in(rng: &mut (impl rand::Rng + ?Sized), room: &Room) -> Point {
    let margin = 1e-3;
    Point::new(
        rng.gen_range(room.width * margin..room.width * (1.0 - margin)),
        rng.gen_range(room.height * margin..room.height * (1.0 - margin)),
    )
}

/// A room with positive dimensions and an interior source and receiver.
pub fn random_room(rng: &mut (impl rand::Rng + ?Sized)) -> Room {
    let width = rng.gen_range(1.0..50.0);
    let height = rng.gen_range(1.0..50.0);

    let mut shell = Room::new(width, height, Point::zeros(), Point::zeros())
        .expect("dimensions are drawn positive");

    shell.source = rand_point_in(rng, &shell);
    shell.receiver = rand_point_in(rng, &shell);
    shell
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use resound::{reflection_paths, Wall};

    const ROUNDS: usize = 64;

    #[test]
    fn random_rooms_are_valid() {
        let mut rng = rand::thread_rng();

        for _ in 0..ROUNDS {
            let room = random_room(&mut rng);
            assert!(room.contains(room.source));
            assert!(room.contains(room.receiver));
        }
    }

    #[test]
    fn mirror_involution_on_random_rooms() {
        let mut rng = rand::thread_rng();

        for _ in 0..ROUNDS {
            let room = random_room(&mut rng);
            let p = rand_point_in(&mut rng, &room);

            for wall in Wall::ALL {
                let back = wall.mirror(&room, wall.mirror(&room, p));
                assert_approx_eq!(back[0], p[0], 1e-9);
                assert_approx_eq!(back[1], p[1], 1e-9);
            }
        }
    }

    #[test]
    fn image_counts_on_random_rooms() {
        let mut rng = rand::thread_rng();

        for _ in 0..ROUNDS {
            let room = random_room(&mut rng);

            assert_eq!(room.image_sources(0).len(), 1);
            assert_eq!(room.image_sources(1).len(), 4);
            assert_eq!(room.image_sources(3).len(), 64);
        }
    }

    #[test]
    fn direct_path_dominates_on_random_rooms() {
        let mut rng = rand::thread_rng();

        for _ in 0..ROUNDS {
            let room = random_room(&mut rng);
            let mut params = AcousticParams::random(&mut rng);
            // strict gain dominance needs a strictly lossy wall: a
            // same-wall double bounce puts its image back on the source
            params.reflection_coefficient = params.reflection_coefficient.min(0.95);

            let paths = reflection_paths(&room, 2, &params);
            assert_eq!(paths.len(), 21);

            let direct = paths[0];
            for path in &paths[1..] {
                // interior positions: every first-order image is strictly
                // farther than the source, higher orders at least as far.
                // A same-wall double bounce reconstructs the source only
                // up to roundoff, hence the slack on the weak bound.
                if path.order == 1 {
                    assert!(direct.delay < path.delay);
                } else {
                    assert!(direct.delay <= path.delay + 1e-12);
                }
                assert!(direct.gain > path.gain);
            }
        }
    }
}
