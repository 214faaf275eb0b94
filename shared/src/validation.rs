//! Seed data validation
//!
//! The dashboard accepts its initial stats and workout list from the host,
//! so everything is checked once before the view state is built.

use crate::errors::SeedError;
use crate::models::{DashboardSeed, WorkoutSummary};
use std::collections::HashSet;

/// Validate weight value (in kg)
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate a single workout card
pub fn validate_workout(workout: &WorkoutSummary) -> Result<(), String> {
    if workout.title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if workout.duration.trim().is_empty() {
        return Err("Duration label cannot be empty".to_string());
    }
    Ok(())
}

/// Validate a full dashboard seed
pub fn validate_seed(seed: &DashboardSeed) -> Result<(), SeedError> {
    if seed.user_name.trim().is_empty() {
        return Err(SeedError::EmptyUserName);
    }

    validate_weight(seed.stats.weight).map_err(SeedError::InvalidWeight)?;

    let mut seen = HashSet::with_capacity(seed.workouts.len());
    for workout in &seed.workouts {
        if !seen.insert(workout.id) {
            return Err(SeedError::DuplicateWorkoutId(workout.id));
        }
        validate_workout(workout).map_err(|reason| SeedError::InvalidWorkout {
            id: workout.id,
            reason,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_demo_seed_is_valid() {
        assert!(validate_seed(&DashboardSeed::demo()).is_ok());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(73.0).is_ok());
        assert!(validate_weight(20.0).is_ok());
        assert!(validate_weight(500.0).is_ok());
        assert!(validate_weight(10.0).is_err());
        assert!(validate_weight(600.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_duplicate_workout_id_rejected() {
        let mut seed = DashboardSeed::demo();
        seed.workouts[2].id = 1;
        assert_eq!(validate_seed(&seed), Err(SeedError::DuplicateWorkoutId(1)));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut seed = DashboardSeed::demo();
        seed.workouts[1].title = "   ".to_string();
        let err = validate_seed(&seed).unwrap_err();
        assert_eq!(
            err,
            SeedError::InvalidWorkout {
                id: 2,
                reason: "Title cannot be empty".to_string()
            }
        );
        assert_eq!(err.to_string(), "Workout 2: Title cannot be empty");
    }

    #[test]
    fn test_empty_user_name_rejected() {
        let mut seed = DashboardSeed::demo();
        seed.user_name = String::new();
        assert_eq!(validate_seed(&seed), Err(SeedError::EmptyUserName));
    }

    #[test]
    fn test_empty_workout_list_is_valid() {
        let mut seed = DashboardSeed::demo();
        seed.workouts.clear();
        assert!(validate_seed(&seed).is_ok());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..20.0) {
            prop_assert!(validate_weight(weight).is_err());
        }

        #[test]
        fn prop_distinct_ids_always_accepted(ids in proptest::collection::hash_set(any::<i64>(), 0..20)) {
            let mut seed = DashboardSeed::demo();
            let template = seed.workouts[0].clone();
            seed.workouts = ids
                .into_iter()
                .map(|id| WorkoutSummary { id, ..template.clone() })
                .collect();
            prop_assert!(validate_seed(&seed).is_ok());
        }
    }
}
