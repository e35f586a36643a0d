use log::debug;

use crate::error::{QueryError, QueryResult};

/// Page size used by [`first_page`] when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Generic paging over any element type.
///
/// Applies the optional `filter`, stable-sorts the survivors ascending by
/// the `ordering` key, then returns the window for `page_number` (numbered
/// from 1) of `page_size` elements. Requesting a page past the end yields
/// an empty vector, not an error.
///
/// A zero `page_size` or `page_number` is rejected up front with an
/// invalid-argument error instead of silently computing a bogus offset.
pub fn paging<T, K>(
    elements: &[T],
    ordering: impl Fn(&T) -> K,
    filter: Option<&dyn Fn(&T) -> bool>,
    page_size: usize,
    page_number: usize,
) -> QueryResult<Vec<T>>
where
    T: Clone,
    K: Ord,
{
    if page_size < 1 {
        return Err(QueryError::InvalidPageSize { page_size });
    }
    if page_number < 1 {
        return Err(QueryError::InvalidPageNumber { page_number });
    }

    let mut selected: Vec<T> = match filter {
        Some(pred) => elements.iter().filter(|e| pred(e)).cloned().collect(),
        None => elements.to_vec(),
    };
    // Vec::sort_by_key is stable, so equal keys keep their input order
    selected.sort_by_key(|e| ordering(e));

    let offset = (page_number - 1).saturating_mul(page_size);
    debug!(
        "paging: page {} of size {}, {} elements after filter",
        page_number,
        page_size,
        selected.len()
    );

    Ok(selected.into_iter().skip(offset).take(page_size).collect())
}

/// First page with the default page size and no filter.
pub fn first_page<T, K>(elements: &[T], ordering: impl Fn(&T) -> K) -> Vec<T>
where
    T: Clone,
    K: Ord,
{
    // Arguments are statically valid, so the error arm is unreachable
    paging(elements, ordering, None, DEFAULT_PAGE_SIZE, 1).unwrap_or_default()
}
