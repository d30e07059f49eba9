use derive_more::Deref;
use uuid::Uuid;

use crate::{MuscleID, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    /// Every exercise with at least one activation record referencing `muscle_id`.
    async fn read_exercises_activating(
        &self,
        muscle_id: MuscleID,
    ) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub activations: Vec<Activation>,
}

impl Exercise {
    #[must_use]
    pub fn activates(&self, muscle_id: MuscleID) -> bool {
        self.activations.iter().any(|a| a.muscle_id == muscle_id)
    }

    #[must_use]
    pub fn stimulus(&self, muscle_id: MuscleID) -> Stimulus {
        self.activations
            .iter()
            .filter(|a| a.muscle_id == muscle_id)
            .map(|a| a.stimulus)
            .max()
            .unwrap_or(Stimulus::NONE)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub muscle_id: MuscleID,
    pub stimulus: Stimulus,
}

#[derive(Deref, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Stimulus(u32);

impl Stimulus {
    pub const PRIMARY: Stimulus = Stimulus(100);
    pub const SECONDARY: Stimulus = Stimulus(50);
    pub const NONE: Stimulus = Stimulus(0);

    pub fn new(value: u32) -> Result<Self, StimulusError> {
        if value > 100 {
            return Err(StimulusError::OutOfRange(value));
        }
        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StimulusError {
    #[error("Stimulus must be 100 or less ({0} > 100)")]
    OutOfRange(u32),
}

/// The part of an exercise that is handed out in a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub id: ExerciseID,
    pub name: Name,
}

impl From<&Exercise> for Move {
    fn from(value: &Exercise) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
        }
    }
}

impl From<Exercise> for Move {
    fn from(value: Exercise) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}
