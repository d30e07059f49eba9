/// Tunables of the planner.
///
/// The defaults give the standard behaviour: at most 3 exercises per muscle, 3 sets per
/// exercise, 4 workouts unless 0 to 6 are requested. Other values change these bounds
/// accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSettings {
    /// Upper bound of exercises sampled for a single muscle.
    pub exercises_per_muscle: usize,
    pub sets_per_exercise: u32,
    pub default_workouts: u32,
    pub max_workouts: u32,
}

impl PlanSettings {
    /// Number of workouts per week to plan for.
    ///
    /// Falls back to the default if no value is given or the value lies outside of
    /// `0..=max_workouts`.
    #[must_use]
    pub fn number_of_workouts(&self, desired: Option<i32>) -> u32 {
        desired
            .and_then(|workouts| u32::try_from(workouts).ok())
            .filter(|workouts| *workouts <= self.max_workouts)
            .unwrap_or(self.default_workouts)
    }
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            exercises_per_muscle: 3,
            sets_per_exercise: 3,
            default_workouts: 4,
            max_workouts: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, 4)]
    #[case(Some(-1), 4)]
    #[case(Some(i32::MIN), 4)]
    #[case(Some(7), 4)]
    #[case(Some(6), 6)]
    #[case(Some(3), 3)]
    #[case(Some(0), 0)]
    fn test_number_of_workouts(#[case] desired: Option<i32>, #[case] expected: u32) {
        assert_eq!(PlanSettings::default().number_of_workouts(desired), expected);
    }

    #[test]
    fn test_number_of_workouts_custom_bounds() {
        let settings = PlanSettings {
            default_workouts: 2,
            max_workouts: 3,
            ..PlanSettings::default()
        };
        assert_eq!(settings.number_of_workouts(Some(4)), 2);
        assert_eq!(settings.number_of_workouts(Some(3)), 3);
    }
}
