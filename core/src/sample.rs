use alloc::vec::Vec;
use rand::Rng;
use rand::RngExt;

use crate::*;

/// Draws `count` distinct items from `pool`, uniformly and in random order.
pub fn sample<T: Clone>(pool: &[T], count: usize, rng: &mut impl Rng) -> Result<Vec<T>> {
    if count > pool.len() {
        return Err(GameError::SampleExceedsPool {
            requested: count,
            available: pool.len(),
        });
    }

    let mut drawn = pool.to_vec();
    for i in (1..drawn.len()).rev() {
        let j = rng.random_range(0..=i);
        drawn.swap(i, j);
    }
    drawn.truncate(count);
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn pool(len: usize) -> Vec<u64> {
        (0..len as u64).collect()
    }

    #[test]
    fn sampled_items_are_distinct_pool_members() {
        let pool = pool(100);
        let mut rng = SmallRng::seed_from_u64(7);

        let drawn = sample(&pool, 6, &mut rng).unwrap();

        assert_eq!(drawn.len(), 6);
        let distinct: BTreeSet<u64> = drawn.iter().copied().collect();
        assert_eq!(distinct.len(), 6);
        assert!(drawn.iter().all(|item| pool.contains(item)));
    }

    #[test]
    fn oversized_request_is_rejected() {
        let pool = pool(4);
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(
            sample(&pool, 6, &mut rng),
            Err(GameError::SampleExceedsPool {
                requested: 6,
                available: 4,
            })
        );
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let pool = pool(10);
        let mut rng = SmallRng::seed_from_u64(3);

        let drawn = sample(&pool, 10, &mut rng).unwrap();

        let distinct: BTreeSet<u64> = drawn.iter().copied().collect();
        assert_eq!(distinct, pool.iter().copied().collect());
    }

    #[test]
    fn same_seed_draws_the_same_items() {
        let pool = pool(50);

        let first = sample(&pool, 6, &mut SmallRng::seed_from_u64(42)).unwrap();
        let second = sample(&pool, 6, &mut SmallRng::seed_from_u64(42)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn empty_request_from_empty_pool_is_fine() {
        let pool: Vec<u64> = Vec::new();
        let mut rng = SmallRng::seed_from_u64(7);

        assert_eq!(sample(&pool, 0, &mut rng).unwrap(), Vec::new());
    }
}
