//! Fixed-size pagination over an ordered result set.

/// Questions served per page. Fixed; callers never choose a page size.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the 1-based `page` slice of `items`.
///
/// A start index past the end of the sequence yields an empty slice, which
/// is a valid empty page rather than an error. Pure function; callers
/// decide whether an empty page is reportable.
#[must_use]
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let start = (page as usize).saturating_sub(1) * QUESTIONS_PER_PAGE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
