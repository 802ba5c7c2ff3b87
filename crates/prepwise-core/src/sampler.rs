//! Question sampler: uniform draw without replacement from a static pool.

use rand::seq::SliceRandom;

/// Draws `k` items uniformly without replacement: Fisher–Yates shuffle over a
/// copy of the pool, then take the first `k`.
///
/// When `k >= pool.len()` the whole shuffled pool is returned. Callers are
/// expected to ask for at most the pool size; this is not an error.
pub fn sample<T: Clone>(pool: &[T], k: usize) -> Vec<T> {
    let mut copy: Vec<T> = pool.to_vec();
    copy.shuffle(&mut rand::thread_rng());
    copy.truncate(k);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_returns_exactly_k() {
        let pool: Vec<u32> = (1..=5).collect();
        let drawn = sample(&pool, 3);
        assert_eq!(drawn.len(), 3);
        assert!(drawn.iter().all(|x| pool.contains(x)));
    }

    #[test]
    fn sample_has_no_duplicates() {
        let pool: Vec<u32> = (0..50).collect();
        for _ in 0..20 {
            let mut drawn = sample(&pool, 10);
            drawn.sort_unstable();
            drawn.dedup();
            assert_eq!(drawn.len(), 10);
        }
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let pool: Vec<u32> = (0..30).collect();
        let mut drawn = sample(&pool, 30);
        drawn.sort_unstable();
        assert_eq!(drawn, pool);
    }

    #[test]
    fn oversized_k_returns_whole_pool() {
        let pool = vec!["a", "b", "c"];
        let drawn = sample(&pool, 10);
        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn successive_samples_eventually_differ() {
        // Probabilistic: over 50 trials of 5-from-100, at least one draw must
        // differ from the first. Chance of all being identical is negligible.
        let pool: Vec<u32> = (0..100).collect();
        let first = sample(&pool, 5);
        let differs = (0..50).any(|_| sample(&pool, 5) != first);
        assert!(differs);
    }
}
