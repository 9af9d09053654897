use periodize_types::{Sex, UserProfile};

/// Scalar modifiers derived once from a static profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileMetrics {
    pub training_age_factor: f64,
    pub recovery_capacity: f64,
}

impl ProfileMetrics {
    /// Upper bound of the training-age factor, reached at 240 months.
    pub const MAX_TRAINING_AGE_FACTOR: f64 = 3.0;

    /// Factors at or above this use the slower experienced progression rate.
    pub const EXPERIENCED_FACTOR: f64 = 1.5;

    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            training_age_factor: training_age_factor(profile),
            recovery_capacity: recovery_capacity_score(profile),
        }
    }

    pub fn is_experienced(&self) -> bool {
        self.training_age_factor >= Self::EXPERIENCED_FACTOR
    }
}

/// `1 + years_trained * 0.1`, saturating at 3.0.
pub fn training_age_factor(profile: &UserProfile) -> f64 {
    (1.0 + (profile.training_months / 12.0) * 0.1).min(ProfileMetrics::MAX_TRAINING_AGE_FACTOR)
}

/// Product of sex, age, sleep and stress modifiers over a base of 1.0.
///
/// Inputs are not validated. Only the caps built into each modifier apply:
/// the age modifier is floored at 0.7 and the sleep modifier capped at 1.2.
pub fn recovery_capacity_score(profile: &UserProfile) -> f64 {
    let sex = match profile.sex {
        Sex::Female => 1.15,
        Sex::Male => 1.0,
    };
    let age = f64::max(0.7, 1.2 - (profile.age - 18.0) * 0.005);
    let sleep = f64::min(1.2, profile.sleep_hours / 8.0);
    let stress = (10.0 - profile.stress_level) / 10.0;

    1.0 * sex * age * sleep * stress
}

#[cfg(test)]
mod tests {
    use super::*;
    use periodize_types::{Goal, TrainingAge};

    fn profile(training_months: f64) -> UserProfile {
        UserProfile {
            age: 18.0,
            sex: Sex::Male,
            training_months,
            sleep_hours: 8.0,
            stress_level: 0.0,
            days_per_week: 4,
            goal: Goal::Hypertrophy,
            training_age: TrainingAge::Novice,
        }
    }

    #[test]
    fn training_age_factor_endpoints() {
        assert_eq!(training_age_factor(&profile(0.0)), 1.0);
        assert_eq!(training_age_factor(&profile(240.0)), 3.0);
        assert_eq!(training_age_factor(&profile(600.0)), 3.0);
        assert!((training_age_factor(&profile(60.0)) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn training_age_factor_is_non_decreasing() {
        let mut last = 0.0;
        for months in 0..=400 {
            let factor = training_age_factor(&profile(f64::from(months)));
            assert!(factor >= last, "factor dropped at {months} months");
            assert!(factor <= ProfileMetrics::MAX_TRAINING_AGE_FACTOR);
            last = factor;
        }
    }

    #[test]
    fn recovery_capacity_baseline() {
        // 18y male, 8h sleep, no stress: 1.0 * 1.2 * 1.0 * 1.0
        let score = recovery_capacity_score(&profile(0.0));
        assert!((score - 1.2).abs() < 1e-12);
    }

    #[test]
    fn recovery_capacity_modifiers() {
        let mut p = profile(0.0);
        p.sex = Sex::Female;
        p.age = 38.0;
        p.sleep_hours = 6.0;
        p.stress_level = 5.0;
        // 1.15 * (1.2 - 0.1) * 0.75 * 0.5
        let expected = 1.15 * 1.1 * 0.75 * 0.5;
        assert!((recovery_capacity_score(&p) - expected).abs() < 1e-12);
    }

    #[test]
    fn age_modifier_floor_and_sleep_cap() {
        let mut p = profile(0.0);
        p.age = 200.0;
        p.sleep_hours = 14.0;
        // age floored at 0.7, sleep capped at 1.2
        assert!((recovery_capacity_score(&p) - 0.7 * 1.2).abs() < 1e-12);
    }

    #[test]
    fn metrics_bundle() {
        let metrics = ProfileMetrics::from_profile(&profile(72.0));
        assert!((metrics.training_age_factor - 1.6).abs() < 1e-12);
        assert!(metrics.is_experienced());
        assert!(!ProfileMetrics::from_profile(&profile(12.0)).is_experienced());
    }
}
