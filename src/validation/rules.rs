//! Validation rules for riddle input.

use crate::validation::violations::ValidationError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ValidationError>>;

fn lift(result: Result<(), ValidationError>) -> Check {
    match result {
        Ok(()) => Validation::success(()),
        Err(error) => Validation::fail(error),
    }
}

fn positive(capacity_x: i64, capacity_y: i64, target: i64) -> Result<(), ValidationError> {
    if capacity_x <= 0 || capacity_y <= 0 || target <= 0 {
        return Err(ValidationError::InvalidVolume);
    }
    Ok(())
}

// Equal jugs are only accepted when the target is their capacity, even
// though 0 and the combined volume are reachable too.
fn distinct(capacity_x: i64, capacity_y: i64, target: i64) -> Result<(), ValidationError> {
    if capacity_x == capacity_y && target != capacity_x {
        return Err(ValidationError::DuplicateJugs);
    }
    Ok(())
}

fn within_capacity(capacity_x: i64, capacity_y: i64, target: i64) -> Result<(), ValidationError> {
    let largest = capacity_x.max(capacity_y);
    if target > largest {
        return Err(ValidationError::TargetExceedsCapacity { target, largest });
    }
    Ok(())
}

/// Check the three input rules in order, stopping at the first failure.
pub fn validate_input(
    capacity_x: i64,
    capacity_y: i64,
    target: i64,
) -> Result<(), ValidationError> {
    positive(capacity_x, capacity_y, target)?;
    distinct(capacity_x, capacity_y, target)?;
    within_capacity(capacity_x, capacity_y, target)
}

/// Check every input rule, accumulating ALL violations.
/// Returns Validation::Success(()) if all rules pass.
pub fn validate_all(capacity_x: i64, capacity_y: i64, target: i64) -> Check {
    let checks: Vec<Check> = vec![
        lift(positive(capacity_x, capacity_y, target)),
        lift(distinct(capacity_x, capacity_y, target)),
        lift(within_capacity(capacity_x, capacity_y, target)),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Exact reachability criterion for two distinct jugs: the target fits in
/// the larger jug and is a multiple of the capacities' gcd.
///
/// Advisory only. The search never consults it.
pub fn is_solvable(capacity_x: i64, capacity_y: i64, target: i64) -> bool {
    if positive(capacity_x, capacity_y, target).is_err() {
        return false;
    }
    let divisor = gcd(capacity_x.unsigned_abs(), capacity_y.unsigned_abs());
    target <= capacity_x.max(capacity_y) && target.unsigned_abs() % divisor == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(validate_input(-1, -1, -1), Err(ValidationError::InvalidVolume));
        assert_eq!(validate_input(0, 5, 2), Err(ValidationError::InvalidVolume));
        assert_eq!(validate_input(3, 5, 0), Err(ValidationError::InvalidVolume));
    }

    #[test]
    fn rejects_same_size_jugs() {
        assert_eq!(validate_input(2, 2, 1), Err(ValidationError::DuplicateJugs));
        assert_eq!(validate_input(3, 3, 2), Err(ValidationError::DuplicateJugs));
    }

    #[test]
    fn accepts_same_size_jugs_with_matching_target() {
        assert_eq!(validate_input(3, 3, 3), Ok(()));
    }

    #[test]
    fn rejects_target_larger_than_both_jugs() {
        assert_eq!(
            validate_input(3, 5, 7),
            Err(ValidationError::TargetExceedsCapacity {
                target: 7,
                largest: 5,
            })
        );
    }

    #[test]
    fn rules_are_checked_in_order() {
        // Equal jugs with an oversized target report the duplicate first.
        assert_eq!(validate_input(3, 3, 9), Err(ValidationError::DuplicateJugs));
        // Non-positive values win over everything else.
        assert_eq!(validate_input(3, 3, -9), Err(ValidationError::InvalidVolume));
    }

    #[test]
    fn accepts_valid_input() {
        assert_eq!(validate_input(3, 5, 2), Ok(()));
        assert_eq!(validate_input(5, 3, 5), Ok(()));
    }

    #[test]
    fn validate_all_accumulates_all_violations() {
        let result = validate_all(3, 3, 9);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::DuplicateJugs)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ValidationError::TargetExceedsCapacity { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_all_succeeds_when_all_rules_pass() {
        assert!(validate_all(3, 5, 4).is_success());
        assert!(validate_all(0, 5, 4).is_failure());
    }

    #[test]
    fn gcd_handles_common_cases() {
        assert_eq!(gcd(3, 5), 1);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(6, 4), 2);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn is_solvable_follows_gcd() {
        assert!(is_solvable(3, 5, 4));
        assert!(is_solvable(4, 6, 2));
        assert!(!is_solvable(2, 6, 5));
        assert!(!is_solvable(3, 5, 7));
        assert!(!is_solvable(0, 5, 1));
    }

    #[test]
    fn is_solvable_handles_extreme_inputs() {
        assert!(!is_solvable(i64::MIN, 5, 1));
        assert!(!is_solvable(3, i64::MIN, i64::MIN));
        assert!(is_solvable(i64::MAX, i64::MAX - 1, 1));
    }
}
