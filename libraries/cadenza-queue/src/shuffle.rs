//! Shuffle helpers for queue randomization
//!
//! Both helpers use Fisher-Yates (`SliceRandom::shuffle`) so every ordering
//! of the shuffled part is equally likely.

use cadenza_core::Track;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle the whole list, moving the track at `idx` to the front
///
/// ```text
/// [A, B, C, D, E]   idx = 2
///        ^
/// [C, <shuffled A B D E>]
/// ```
pub fn shuffle_from_current<R: Rng + ?Sized>(list: &mut Vec<Track>, idx: usize, rng: &mut R) {
    if list.is_empty() {
        return;
    }
    let current = list.remove(idx.min(list.len() - 1));
    list.shuffle(rng);
    list.insert(0, current);
}

/// Mix `incoming` into the upcoming part of a shuffled list
///
/// Everything up to and including `idx` stays in place; the tail after it
/// and the incoming tracks are shuffled together and appended. Returns the
/// position `incoming[0]` landed at, or `None` when `incoming` is empty.
pub fn scatter_upcoming<R: Rng + ?Sized>(
    list: &mut Vec<Track>,
    idx: usize,
    incoming: &[Track],
    rng: &mut R,
) -> Option<usize> {
    let split = (idx + 1).min(list.len());
    let mut pool = list.split_off(split);
    let first_incoming = pool.len();
    pool.extend_from_slice(incoming);

    // order[pos] is the pool slot that lands at split + pos
    let mut order: Vec<usize> = (0..pool.len()).collect();
    order.shuffle(rng);
    let landed = order
        .iter()
        .position(|&slot| slot == first_incoming)
        .filter(|_| !incoming.is_empty())
        .map(|pos| split + pos);

    let mut slots: Vec<Option<Track>> = pool.into_iter().map(Some).collect();
    list.extend(order.into_iter().filter_map(|slot| slots[slot].take()));
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadenza_core::TrackId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn create_test_tracks(ids: &[i64]) -> Vec<Track> {
        ids.iter().map(|&id| Track::from(TrackId::new(id))).collect()
    }

    fn ids(tracks: &[Track]) -> Vec<i64> {
        tracks.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn current_track_moves_to_front() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tracks = create_test_tracks(&[1, 2, 3, 4, 5]);

        shuffle_from_current(&mut tracks, 2, &mut rng);

        assert_eq!(tracks[0].id, TrackId::new(3));
        let all: HashSet<i64> = ids(&tracks).into_iter().collect();
        assert_eq!(all, [1, 2, 3, 4, 5].into_iter().collect());
    }

    #[test]
    fn shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let original = create_test_tracks(&(1..=20).collect::<Vec<_>>());
        let mut tracks = original.clone();

        shuffle_from_current(&mut tracks, 0, &mut rng);

        // seeded, so this is deterministic
        assert_ne!(ids(&original), ids(&tracks));
        assert_eq!(tracks[0].id, TrackId::new(1));
    }

    #[test]
    fn shuffle_empty_list() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut tracks: Vec<Track> = Vec::new();
        shuffle_from_current(&mut tracks, 0, &mut rng);
        assert!(tracks.is_empty());
    }

    #[test]
    fn scatter_keeps_played_prefix() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tracks = create_test_tracks(&[1, 2, 3, 4]);
        let incoming = create_test_tracks(&[5, 6]);

        let landed = scatter_upcoming(&mut tracks, 1, &incoming, &mut rng).unwrap();

        assert_eq!(tracks[landed].id, TrackId::new(5));
        assert!(landed >= 2);
        assert_eq!(&ids(&tracks)[..2], &[1, 2]);
        let mut tail = ids(&tracks)[2..].to_vec();
        tail.sort_unstable();
        assert_eq!(tail, vec![3, 4, 5, 6]);
    }

    #[test]
    fn scatter_into_empty_list_starts_at_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut tracks: Vec<Track> = Vec::new();
        let incoming = create_test_tracks(&[1, 2, 3]);

        let landed = scatter_upcoming(&mut tracks, 0, &incoming, &mut rng).unwrap();

        assert_eq!(tracks[landed].id, TrackId::new(1));
        let mut all = ids(&tracks);
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3]);
    }

    #[test]
    fn scatter_reports_the_incoming_copy_not_an_older_one() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut tracks = create_test_tracks(&[1, 7, 7, 2]);
            tracks[1] = tracks[1].clone().with_title("old");
            tracks[2] = tracks[2].clone().with_title("old");
            let incoming = vec![Track::from(TrackId::new(7)).with_title("new"), tracks[3].clone()];

            let landed = scatter_upcoming(&mut tracks, 0, &incoming, &mut rng).unwrap();

            assert_eq!(tracks[landed].title(), Some("new"), "seed {seed}");
            assert_eq!(tracks.len(), 6);
        }
    }

    #[test]
    fn scatter_nothing_lands_nowhere() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut tracks = create_test_tracks(&[1, 2, 3]);
        assert_eq!(scatter_upcoming(&mut tracks, 0, &[], &mut rng), None);
        assert_eq!(tracks[0].id, TrackId::new(1));
        assert_eq!(tracks.len(), 3);
    }
}
