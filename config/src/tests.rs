//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between the predicate thresholds.

use crate::constants::*;

// =============================================================================
// PREDICATE TESTS
// =============================================================================

#[test]
fn test_coplanarity_tolerance_is_positive() {
    assert!(COPLANARITY_TOLERANCE > 0.0, "tolerance must be positive");
}

#[test]
fn test_coplanarity_tolerance_matches_reference_value() {
    assert_eq!(COPLANARITY_TOLERANCE, 1.0e-3);
}

#[test]
fn test_diagonal_ratio_accepts_unit_square() {
    // Squared diagonal of a unit square is 2, squared edge is 1
    assert!(2.0 > DIAGONAL_RATIO * 1.0);
}

#[test]
fn test_diagonal_ratio_rejects_equal_lengths() {
    // A diagonal equal to the longest edge never passes
    assert!(1.0 <= DIAGONAL_RATIO * 1.0);
}

// =============================================================================
// NEIGHBOR SEARCH TESTS
// =============================================================================

#[test]
fn test_grid_threshold_reasonable() {
    assert!(GRID_SEARCH_MIN_POINTS >= 64);
    assert!(GRID_SEARCH_MIN_POINTS <= 100_000);
}

#[test]
fn test_grid_cell_factor_at_least_one() {
    assert!(GRID_CELL_FACTOR >= 1.0);
}
