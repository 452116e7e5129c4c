//! Random assignment of prize numbers.
//!
//! Numbers are drawn uniformly without replacement from a closed
//! [`NumberRange`]. The random source is always supplied by the caller so a
//! draw can be replayed from a seed.

use rand::Rng;
use rand::seq::index;
use tracing::debug;

use raffle_model::{NumberRange, Prize, RaffleError, Result};

/// Draws `count` distinct numbers from `range`.
///
/// # Errors
///
/// Returns [`RaffleError::NotEnoughNumbers`] when `count` exceeds the size of
/// the range.
pub fn draw_numbers<R: Rng + ?Sized>(
    count: usize,
    range: NumberRange,
    rng: &mut R,
) -> Result<Vec<i64>> {
    let available = range.size();
    if count as u64 > available {
        return Err(RaffleError::NotEnoughNumbers {
            requested: count,
            available,
        });
    }
    let length = usize::try_from(available).unwrap_or(usize::MAX);
    let numbers: Vec<i64> = index::sample(rng, length, count)
        .into_iter()
        .map(|offset| range.low.wrapping_add_unsigned(offset as u64))
        .collect();
    debug!(count, low = range.low, high = range.high, "drew prize numbers");
    Ok(numbers)
}

/// Pairs each prize name with a freshly drawn number, keeping name order.
///
/// # Errors
///
/// Returns [`RaffleError::NotEnoughNumbers`] when there are more names than
/// numbers in `range`.
pub fn assign_numbers<R: Rng + ?Sized>(
    names: &[String],
    range: NumberRange,
    rng: &mut R,
) -> Result<Vec<Prize>> {
    let numbers = draw_numbers(names.len(), range, rng)?;
    Ok(names
        .iter()
        .zip(numbers)
        .map(|(name, number)| Prize::new(name.clone(), number))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn draws_whole_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut numbers = draw_numbers(100, NumberRange::default(), &mut rng).unwrap();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn rejects_oversized_request() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let err = draw_numbers(101, NumberRange::default(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            RaffleError::NotEnoughNumbers {
                requested: 101,
                available: 100
            }
        ));
    }

    #[test]
    fn inverted_range_has_no_numbers() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let inverted = NumberRange::new(5, 1);
        assert!(draw_numbers(0, inverted, &mut rng).unwrap().is_empty());
        assert!(draw_numbers(1, inverted, &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_draw() {
        let names: Vec<String> = ["Mug", "Hat", "Poster"].map(String::from).to_vec();
        let range = NumberRange::default();
        let first = assign_numbers(&names, range, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let second = assign_numbers(&names, range, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        let order: Vec<&str> = first.iter().map(|prize| prize.name.as_str()).collect();
        assert_eq!(order, vec!["Mug", "Hat", "Poster"]);
    }

    #[test]
    fn negative_range_offsets() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let range = NumberRange::new(-3, -1);
        let mut numbers = draw_numbers(3, range, &mut rng).unwrap();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![-3, -2, -1]);
    }
}
