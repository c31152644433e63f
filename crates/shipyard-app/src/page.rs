// Rust guideline compliant 2026-10-12

//! Fixed-size windowing of ordered results.

use crate::error::{AppError, Result};

/// Page number used when none is given.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;
/// Page size used when none is given.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    page: u64,
    size: u64,
}

impl Window {
    /// Builds a window, applying defaults for absent values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `page` is negative or `size` is not positive.
    pub fn new(page: Option<i64>, size: Option<i64>) -> Result<Self> {
        let page = page.unwrap_or(DEFAULT_PAGE_NUMBER);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);

        let page = u64::try_from(page)
            .map_err(|_| AppError::invalid_field("pageNumber", format!("must be >= 0, got {page}")))?;
        let size = u64::try_from(size)
            .ok()
            .filter(|&size| size > 0)
            .ok_or_else(|| AppError::invalid_field("pageSize", format!("must be > 0, got {size}")))?;

        Ok(Self { page, size })
    }

    /// Zero-based page number.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of items per page.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the items in `[page * size, min((page + 1) * size, len))`.
    ///
    /// A window starting at or past the end yields an empty vector.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        let start = self
            .page
            .checked_mul(self.size)
            .and_then(|start| usize::try_from(start).ok());

        let Some(start) = start.filter(|&start| start < items.len()) else {
            return Vec::new();
        };
        let size = usize::try_from(self.size).unwrap_or(usize::MAX);

        items.into_iter().skip(start).take(size).collect()
    }
}

/// Returns one page of an ordered collection.
///
/// # Arguments
///
/// * `items` - Ordered items
/// * `page` - Zero-based page number, 0 when absent
/// * `size` - Page size, 3 when absent
///
/// # Errors
///
/// Returns `InvalidArgument` if `page` is negative or `size` is not positive.
pub fn paginate<T>(items: Vec<T>, page: Option<i64>, size: Option<i64>) -> Result<Vec<T>> {
    Ok(Window::new(page, size)?.apply(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Vec<u32> {
        (0..7).collect()
    }

    #[test]
    fn test_windows_over_seven_items() {
        assert_eq!(paginate(seven(), Some(0), Some(3)).unwrap(), vec![0, 1, 2]);
        assert_eq!(paginate(seven(), Some(1), Some(3)).unwrap(), vec![3, 4, 5]);
        assert_eq!(paginate(seven(), Some(2), Some(3)).unwrap(), vec![6]);
        assert!(paginate(seven(), Some(3), Some(3)).unwrap().is_empty());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(paginate(seven(), None, None).unwrap(), vec![0, 1, 2]);
        assert_eq!(paginate(seven(), Some(1), None).unwrap(), vec![3, 4, 5]);
        assert_eq!(paginate(seven(), None, Some(5)).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_out_of_domain_arguments() {
        assert!(matches!(
            paginate(seven(), Some(-1), Some(3)),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(matches!(
            paginate(seven(), Some(0), Some(0)),
            Err(AppError::InvalidArgument(_))
        ));
        assert!(paginate(seven(), Some(0), Some(-4)).is_err());
    }

    #[test]
    fn test_huge_page_is_empty_not_overflow() {
        assert!(paginate(seven(), Some(i64::MAX), Some(i64::MAX))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(paginate(Vec::<u32>::new(), None, None).unwrap().is_empty());
    }
}
