use rand::prelude::*;

/// Deterministic shuffled train/test partition. The same `(len, fraction,
/// seed)` always produces the same split; train and test together cover
/// every row exactly once.
pub fn train_test_split<T: Clone>(rows: &[T], test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    assert!(
        test_fraction > 0.0 && test_fraction < 1.0,
        "test_fraction must be within (0, 1)"
    );

    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    let test_size = ((rows.len() as f64) * test_fraction).round() as usize;
    let (test_indices, train_indices) = indices.split_at(test_size.min(rows.len()));

    let train = train_indices.iter().map(|&i| rows[i].clone()).collect();
    let test = test_indices.iter().map(|&i| rows[i].clone()).collect();

    (train, test)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn same_seed_yields_same_partition() {
        let rows: Vec<usize> = (0..50).collect();

        let (first_train, first_test) = train_test_split(&rows, 0.3, 42);
        let (second_train, second_test) = train_test_split(&rows, 0.3, 42);

        assert_eq!(first_train, second_train);
        assert_eq!(first_test, second_test);
    }

    #[test]
    fn partition_is_disjoint_and_exhaustive() {
        let rows: Vec<usize> = (0..37).collect();

        let (train, test) = train_test_split(&rows, 0.2, 42);

        let train_set: HashSet<usize> = train.iter().copied().collect();
        let test_set: HashSet<usize> = test.iter().copied().collect();

        assert!(train_set.is_disjoint(&test_set));
        assert_eq!(train_set.len() + test_set.len(), rows.len());
    }

    #[test]
    fn test_size_follows_the_fraction() {
        let rows: Vec<usize> = (0..100).collect();

        let (train, test) = train_test_split(&rows, 0.3, 42);

        assert_eq!(test.len(), 30);
        assert_eq!(train.len(), 70);
    }

    #[test]
    fn two_rows_still_split() {
        let rows = vec![1, 2];

        let (train, test) = train_test_split(&rows, 0.5, 42);

        assert_eq!(train.len(), 1);
        assert_eq!(test.len(), 1);
        assert_ne!(train[0], test[0]);
    }

    #[test]
    #[should_panic(expected = "test_fraction")]
    fn rejects_fraction_of_one() {
        let rows = vec![1, 2, 3];
        let _ = train_test_split(&rows, 1.0, 42);
    }
}
