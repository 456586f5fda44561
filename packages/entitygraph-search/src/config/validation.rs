//! Configuration validation

use super::error::ConfigResult;

/// Configuration objects that can check their own invariants
///
/// ```rust,ignore
/// fn build<C: Validatable>(config: C) -> Result<Searcher, ConfigError> {
///     config.validate()?;
///     // ...
/// }
/// ```
pub trait Validatable {
    /// `Ok(())` if valid, otherwise the first violated constraint
    fn validate(&self) -> ConfigResult<()>;
}

/// Check `value` against an inclusive range
pub(crate) fn check_range<T>(field: &str, value: T, min: T, max: T, hint: &str) -> ConfigResult<()>
where
    T: PartialOrd + ToString,
{
    if value < min || value > max {
        return Err(super::error::ConfigError::range_with_hint(
            field, value, min, max, hint,
        ));
    }
    Ok(())
}
