use thiserror::Error;

/// InputValueError is used if some demo option or parameter does not fulfill the posed
/// requirements, e.g., by requesting a buffer without capacity.
#[derive(Debug, Clone, Error)]
#[error("Invalid input value")]
pub struct InputValueError;

/// BufferError is returned by the buffer operations that can fail. Both kinds are caused by the
/// caller and are reported before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("Invalid buffer capacity {capacity}, capacity must be at least one")]
    InvalidArgument { capacity: usize },

    #[error("Index {idx} is out of range for a buffer holding {len} elements")]
    IndexOutOfRange { idx: usize, len: usize },
}

/// argmax returns the index of the first occurrence of the maximum value in the array x, or None
/// if x is empty.
pub fn argmax<T: std::cmp::PartialOrd>(x: &[T]) -> Option<usize> {
    let first = x.first()?;
    let (max_idx, _max_val) =
        x.iter()
            .enumerate()
            .skip(1)
            .fold((0, first), |(idx_max, val_max), (idx, val)| {
                if val > val_max {
                    (idx, val)
                } else {
                    (idx_max, val_max)
                }
            });
    Some(max_idx)
}

/// argmin returns the index of the first occurrence of the minimum value in the array x, or None
/// if x is empty.
pub fn argmin<T: std::cmp::PartialOrd>(x: &[T]) -> Option<usize> {
    let first = x.first()?;
    let (min_idx, _min_val) =
        x.iter()
            .enumerate()
            .skip(1)
            .fold((0, first), |(idx_min, val_min), (idx, val)| {
                if val < val_min {
                    (idx, val)
                } else {
                    (idx_min, val_min)
                }
            });
    Some(min_idx)
}

/// max returns the maximum value in the array x.
pub fn max<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> Option<T> {
    argmax(x).map(|idx| x[idx])
}

/// min returns the minimum value in the array x.
pub fn min<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> Option<T> {
    argmin(x).map(|idx| x[idx])
}

/// mean returns the arithmetic mean of the values in the array x.
pub fn mean<T: Into<f64> + std::marker::Copy>(x: &[T]) -> Option<f64> {
    if x.is_empty() {
        return None;
    }

    let mut sum = 0.0;
    for val in x.iter() {
        sum += (*val).into()
    }
    Some(sum / x.len() as f64)
}
