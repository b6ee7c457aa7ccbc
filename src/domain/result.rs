//! Result type alias for Heritage

use super::errors::HeritageError;

/// Result type alias for Heritage operations
///
/// # Examples
///
/// ```
/// use heritage::domain::result::Result;
/// use heritage::domain::errors::HeritageError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HeritageError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HeritageError>;
