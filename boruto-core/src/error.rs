/// Errors produced by the `boruto-core` crate.
///
/// The `Display` strings of [`CoreError::InvalidInput`] and
/// [`CoreError::NotFound`] are returned to API clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The page token is not an integer literal.
    #[error("Only numbers are allowed!")]
    InvalidInput,

    /// The page token is an integer outside `[1, page_count]`.
    #[error("Page Not Found.")]
    NotFound,

    /// A dataset cannot be split into the requested number of equal pages.
    #[error("cannot split {len} heroes into {pages} equal pages")]
    InvalidPartition { len: usize, pages: usize },
}
