//! Result type alias for Plainsight

use super::errors::PlainsightError;

/// Result type alias for Plainsight operations
///
/// # Examples
///
/// ```
/// use plainsight::domain::result::Result;
/// use plainsight::domain::errors::PlainsightError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PlainsightError::Configuration("invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PlainsightError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PlainsightError;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(PlainsightError::Configuration("test".to_string()));
        assert!(result.is_err());
    }
}
