//! Partitioning of page indices into worker batches.

use crate::errors::InvalidConfigError;

/// A contiguous run of 1-based page indices handled by one worker.
pub type Batch = Vec<u32>;

/// Splits pages `1..=total_pages` into consecutive batches of `batch_size`.
///
/// Every batch is full except possibly the last. Yields
/// `ceil(total_pages / batch_size)` batches.
pub fn batch_pages(total_pages: u32, batch_size: usize) -> Result<Vec<Batch>, InvalidConfigError> {
    if batch_size == 0 {
        return Err(InvalidConfigError::new("batch_size", "must be at least 1"));
    }
    if total_pages == 0 {
        return Err(InvalidConfigError::new("total_pages", "listing reports no pages"));
    }

    let pages: Vec<u32> = (1..=total_pages).collect();
    Ok(pages.chunks(batch_size).map(<[u32]>::to_vec).collect())
}
