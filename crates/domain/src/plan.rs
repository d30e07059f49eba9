use std::collections::{BTreeSet, HashMap};

use chrono::Weekday;

use crate::{CancellationSignal, Exercise, Move, MuscleID, PlanError};

#[allow(async_fn_in_trait)]
pub trait WeekPlanService {
    /// Recommends exercises for the targeted muscles of a request.
    ///
    /// All exercises are currently scheduled on Monday. The number of heavy sets and the
    /// number of workouts of the request are not yet taken into account.
    async fn get_week_plan(
        &self,
        request: &WeekPlanRequest,
        cancel: &CancellationSignal,
    ) -> Result<WeekPlan, PlanError>;

    /// Distributes the heavy sets of a request over the requested number of workouts.
    async fn spread_into_workouts(
        &self,
        request: &WeekPlanRequest,
        cancel: &CancellationSignal,
    ) -> Result<WeekPlan, PlanError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPlanRequest {
    /// Targeted muscles, all root muscles if `None` or empty.
    pub muscles: Option<BTreeSet<MuscleID>>,
    pub heavy_sets: Option<u32>,
    pub workouts: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPlan {
    pub days: HashMap<Weekday, Vec<MoveSets>>,
}

impl WeekPlan {
    /// Plan with all exercises on a single day, each with the same number of sets.
    #[must_use]
    pub fn single_day(day: Weekday, exercises: &[Exercise], sets: u32) -> Self {
        Self {
            days: HashMap::from([(
                day,
                exercises
                    .iter()
                    .map(|exercise| MoveSets {
                        exercise: Move::from(exercise),
                        sets,
                    })
                    .collect(),
            )]),
        }
    }

    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&[MoveSets]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.days.values().flatten().map(|m| m.sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSets {
    pub exercise: Move,
    pub sets: u32,
}
