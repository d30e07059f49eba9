use chrono::Weekday;
use log::{Level, log};
use rand::Rng;

use crate::{
    CancellationSignal, ExerciseRepository, ExerciseSelector, MuscleRepository, PlanError,
    PlanSettings, ReadError, StorageError, WeekPlan, WeekPlanRequest, WeekPlanService,
};

pub struct Service<R, G = rand::rngs::StdRng> {
    repository: R,
    selector: ExerciseSelector<G>,
    settings: PlanSettings,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self::with_settings(repository, PlanSettings::default())
    }

    pub fn with_settings(repository: R, settings: PlanSettings) -> Self {
        Self {
            repository,
            selector: ExerciseSelector::new(settings.exercises_per_muscle),
            settings,
        }
    }
}

impl<R, G: Rng> Service<R, G> {
    pub fn with_rng(repository: R, settings: PlanSettings, rng: G) -> Self {
        Self {
            repository,
            selector: ExerciseSelector::with_rng(settings.exercises_per_muscle, rng),
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &PlanSettings {
        &self.settings
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            log!(
                log_level(err),
                "failed to {} {}: {err}",
                $action,
                $entity
            );
        }
        result
    }};
}

/// Expected failures are only of interest while debugging.
fn log_level(err: &PlanError) -> Level {
    match err {
        PlanError::NotImplemented(_)
        | PlanError::Cancelled
        | PlanError::Read(ReadError::Storage(StorageError::NoConnection)) => Level::Debug,
        PlanError::Read(_) => Level::Error,
    }
}

impl<R, G> WeekPlanService for Service<R, G>
where
    R: MuscleRepository + ExerciseRepository,
    G: Rng,
{
    async fn get_week_plan(
        &self,
        request: &WeekPlanRequest,
        cancel: &CancellationSignal,
    ) -> Result<WeekPlan, PlanError> {
        log_on_error!(
            async {
                let exercises = self
                    .selector
                    .select(&self.repository, request.muscles.as_ref(), cancel)
                    .await?;
                Ok::<_, PlanError>(WeekPlan::single_day(
                    Weekday::Mon,
                    &exercises,
                    self.settings.sets_per_exercise,
                ))
            },
            "get",
            "week plan"
        )
    }

    async fn spread_into_workouts(
        &self,
        _request: &WeekPlanRequest,
        _cancel: &CancellationSignal,
    ) -> Result<WeekPlan, PlanError> {
        log_on_error!(
            async {
                Err::<WeekPlan, _>(PlanError::NotImplemented(
                    "spreading sets across workouts",
                ))
            },
            "spread",
            "sets into workouts"
        )
    }
}
