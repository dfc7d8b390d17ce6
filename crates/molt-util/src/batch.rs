//! Fixed-size batching.

use crate::error::UtilError;

/// Split `items` into consecutive batches of `batch_size`.
///
/// Order is preserved and the final batch holds the remainder, so it
/// may be shorter. An empty input yields no batches.
///
/// # Errors
///
/// [`UtilError::ZeroBatchSize`] when `batch_size` is zero.
///
/// ```
/// use molt_util::partition;
///
/// let batches = partition(2, &[1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn partition<T: Clone>(batch_size: usize, items: &[T]) -> Result<Vec<Vec<T>>, UtilError> {
    if batch_size == 0 {
        return Err(UtilError::ZeroBatchSize);
    }
    Ok(items.chunks(batch_size).map(<[T]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_multiple_has_no_short_batch() {
        let batches = partition(3, &["a", "b", "c", "d", "e", "f"]).unwrap();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 3));
    }

    #[test]
    fn empty_input_yields_no_batches() {
        let empty: [u8; 0] = [];
        assert!(partition(4, &empty).unwrap().is_empty());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        assert_eq!(partition(0, &[1]), Err(UtilError::ZeroBatchSize));
    }

    proptest! {
        #[test]
        fn batches_concatenate_back_to_input(
            items in prop::collection::vec(any::<u16>(), 0..64),
            size in 1usize..10,
        ) {
            let batches = partition(size, &items).unwrap();
            let flat: Vec<u16> = batches.iter().flatten().copied().collect();
            prop_assert_eq!(flat, items.clone());
            prop_assert_eq!(batches.len(), items.len().div_ceil(size));
            if let Some((last, full)) = batches.split_last() {
                prop_assert!(full.iter().all(|b| b.len() == size));
                prop_assert!(!last.is_empty() && last.len() <= size);
            }
        }
    }
}
