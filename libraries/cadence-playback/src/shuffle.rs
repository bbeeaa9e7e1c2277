//! Shuffle selection
//!
//! Picks the next track uniformly among all tracks except the current one.
//! Samples directly from the `len - 1` other positions and remaps past the
//! current index, so a single draw always suffices and a seeded RNG gives
//! reproducible sequences.

use rand::Rng;

/// Pick a random library index that differs from `current`
///
/// - `len == 0`: nothing to pick
/// - `len == 1`: the only track (replays it)
/// - `current` is `None` or out of range: any index
pub fn pick_next_index<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    current: Option<usize>,
) -> Option<usize> {
    match (len, current) {
        (0, _) => None,
        (1, _) => Some(0),
        (_, Some(current)) if current < len => {
            let pick = rng.gen_range(0..len - 1);
            Some(if pick >= current { pick + 1 } else { pick })
        }
        _ => Some(rng.gen_range(0..len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_library_has_no_pick() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_next_index(&mut rng, 0, None), None);
    }

    #[test]
    fn single_track_replays() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_next_index(&mut rng, 1, Some(0)), Some(0));
    }

    #[test]
    fn never_picks_current() {
        let mut rng = StdRng::seed_from_u64(7);
        for current in 0..5 {
            for _ in 0..200 {
                let pick = pick_next_index(&mut rng, 5, Some(current)).unwrap();
                assert_ne!(pick, current);
                assert!(pick < 5);
            }
        }
    }

    #[test]
    fn two_tracks_alternate() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_next_index(&mut rng, 2, Some(0)), Some(1));
        assert_eq!(pick_next_index(&mut rng, 2, Some(1)), Some(0));
    }

    #[test]
    fn covers_every_other_index() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [0usize; 6];

        for _ in 0..3000 {
            let pick = pick_next_index(&mut rng, 6, Some(2)).unwrap();
            seen[pick] += 1;
        }

        assert_eq!(seen[2], 0);
        // 600 expected per bucket
        for (index, count) in seen.iter().enumerate() {
            if index != 2 {
                assert!(*count > 450, "index {} picked {} times", index, count);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        let first: Vec<_> = (0..20).map(|_| pick_next_index(&mut a, 10, Some(4))).collect();
        let second: Vec<_> = (0..20).map(|_| pick_next_index(&mut b, 10, Some(4))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_current_picks_anything() {
        let mut rng = StdRng::seed_from_u64(5);
        let pick = pick_next_index(&mut rng, 3, Some(10)).unwrap();
        assert!(pick < 3);
    }
}
