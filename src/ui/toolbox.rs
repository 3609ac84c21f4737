use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Uniform float in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Uniform float in `[-0.5, 0.5)`.
pub fn centered_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    unit(rng) - 0.5
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    unit(rng) < 0.5
}

pub fn random_item<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// Fisher–Yates permutation of `items`, returned by value.
pub fn shuffled<T, R: Rng + ?Sized>(rng: &mut R, mut items: Vec<T>) -> Vec<T> {
    items.shuffle(rng);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unit_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let value = unit(&mut rng);
            assert!((0.0..1.0).contains(&value));
            let centered = centered_unit(&mut rng);
            assert!((-0.5..0.5).contains(&centered));
        }
    }

    #[test]
    fn random_item_on_empty_slice_is_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty: [u8; 0] = [];
        assert!(random_item(&mut rng, &empty).is_none());
        assert_eq!(random_item(&mut rng, &[9]), Some(&9));
    }

    #[test]
    fn random_item_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = ["a", "b", "c", "d"];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let picked = random_item(&mut rng, &items).copied();
            let idx = items.iter().position(|item| Some(*item) == picked);
            if let Some(idx) = idx {
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    proptest! {
        #[test]
        fn shuffled_is_a_permutation(
            seed in any::<u64>(),
            values in prop::collection::vec(any::<u16>(), 0..64),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut before = values.clone();
            let mut after = shuffled(&mut rng, values);
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }
}
