use std::{
    collections::{BTreeMap, BTreeSet},
    sync::{Mutex, PoisonError},
};

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    CancellationSignal, Exercise, ExerciseID, ExerciseRepository, MuscleID, MuscleRepository,
    PlanError,
};

/// Picks a random handful of exercises for each targeted muscle.
pub struct ExerciseSelector<G = StdRng> {
    rng: Mutex<G>,
    exercises_per_muscle: usize,
}

impl ExerciseSelector {
    #[must_use]
    pub fn new(exercises_per_muscle: usize) -> Self {
        Self::with_rng(exercises_per_muscle, StdRng::from_entropy())
    }
}

impl<G: Rng> ExerciseSelector<G> {
    pub fn with_rng(exercises_per_muscle: usize, rng: G) -> Self {
        Self {
            rng: Mutex::new(rng),
            exercises_per_muscle,
        }
    }

    /// Selects exercises for the given muscles, or for all root muscles if no muscles are
    /// given.
    ///
    /// Each muscle contributes at most `exercises_per_muscle` exercises. An exercise that
    /// activates several of the muscles is contained only once. The order of the result is
    /// unspecified.
    pub async fn select<R>(
        &self,
        repository: &R,
        muscle_ids: Option<&BTreeSet<MuscleID>>,
        cancel: &CancellationSignal,
    ) -> Result<Vec<Exercise>, PlanError>
    where
        R: MuscleRepository + ExerciseRepository,
    {
        let muscles = match muscle_ids {
            Some(ids) if !ids.is_empty() => cancel.guard(repository.read_muscles(ids)).await?,
            _ => cancel.guard(repository.read_root_muscles()).await?,
        };

        debug!("selecting exercises for {} muscles", muscles.len());

        let mut exercises = BTreeMap::<ExerciseID, Exercise>::new();

        for muscle in muscles {
            let candidates = cancel
                .guard(repository.read_exercises_activating(muscle.id))
                .await?;
            let sample = self.sample(candidates);

            debug!(
                "selected {} exercises for muscle {}",
                sample.len(),
                muscle.name
            );

            for exercise in sample {
                debug!(
                    "selected {} (stimulus {}) for muscle {}",
                    exercise.name,
                    *exercise.stimulus(muscle.id),
                    muscle.name
                );
                exercises.insert(exercise.id, exercise);
            }
        }

        Ok(exercises.into_values().collect())
    }

    fn sample(&self, mut candidates: Vec<Exercise>) -> Vec<Exercise> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        candidates.shuffle(&mut *rng);
        candidates.truncate(self.exercises_per_muscle);
        candidates
    }
}
