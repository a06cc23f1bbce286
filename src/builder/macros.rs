//! Macros for ergonomic riddle construction.

/// Build a [`Riddle`](crate::builder::Riddle) from `x, y => target`.
///
/// Expands to the builder, so the result is a `Result<Riddle, BuildError>`.
///
/// # Example
///
/// ```
/// use jugsolve::riddle;
///
/// let riddle = riddle!(3, 5 => 4).unwrap();
/// assert_eq!(riddle.target(), 4);
/// assert!(riddle!(3, 3 => 2).is_err());
/// ```
#[macro_export]
macro_rules! riddle {
    ($x:expr, $y:expr => $target:expr $(,)?) => {
        $crate::builder::RiddleBuilder::new()
            .jug_x($x)
            .jug_y($y)
            .target($target)
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::validation::ValidationError;

    #[test]
    fn riddle_macro_builds() {
        let riddle = riddle!(3, 5 => 4).unwrap();
        assert_eq!(riddle.capacity_x(), 3);
        assert_eq!(riddle.capacity_y(), 5);
    }

    #[test]
    fn riddle_macro_accepts_expressions() {
        let base = 2;
        let riddle = riddle!(base + 1, base * 3 => base).unwrap();
        assert_eq!(riddle.capacity_y(), 6);
    }

    #[test]
    fn riddle_macro_surfaces_validation_errors() {
        assert_eq!(
            riddle!(0, 5 => 1),
            Err(BuildError::Invalid(ValidationError::InvalidVolume))
        );
    }
}
