//! In-memory catalog
//!
//! Muscles and exercises are loaded once from a JSON document and kept in memory for the
//! lifetime of the catalog. The document is validated on load: names must be valid, identifiers
//! unique and every muscle reference must resolve.

use std::{collections::BTreeSet, fs, path::Path};

use log::debug;
use uuid::Uuid;
use weekplan_domain as domain;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    muscles: Vec<domain::Muscle>,
    exercises: Vec<domain::Exercise>,
}

impl Catalog {
    pub fn new(
        muscles: Vec<domain::Muscle>,
        exercises: Vec<domain::Exercise>,
    ) -> Result<Self, CatalogError> {
        let mut muscle_ids = BTreeSet::new();
        for muscle in &muscles {
            if !muscle_ids.insert(muscle.id) {
                return Err(CatalogError::DuplicateMuscle(*muscle.id));
            }
        }

        for parent in muscles.iter().filter_map(|m| m.parent) {
            if !muscle_ids.contains(&parent) {
                return Err(CatalogError::UnknownMuscle(*parent));
            }
        }

        let mut exercise_ids = BTreeSet::new();
        for exercise in &exercises {
            if !exercise_ids.insert(exercise.id) {
                return Err(CatalogError::DuplicateExercise(*exercise.id));
            }
            for activation in &exercise.activations {
                if !muscle_ids.contains(&activation.muscle_id) {
                    return Err(CatalogError::UnknownMuscle(*activation.muscle_id));
                }
            }
        }

        Ok(Self { muscles, exercises })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: Document = serde_json::from_str(json)?;
        Self::try_from(document)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let catalog = Self::from_json(&fs::read_to_string(path)?)?;
        debug!(
            "loaded {} muscles and {} exercises from {}",
            catalog.muscles.len(),
            catalog.exercises.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&Document::from(self))?)
    }

    #[must_use]
    pub fn muscles(&self) -> &[domain::Muscle] {
        &self.muscles
    }

    #[must_use]
    pub fn exercises(&self) -> &[domain::Exercise] {
        &self.exercises
    }
}

impl domain::MuscleRepository for Catalog {
    async fn read_muscles(
        &self,
        ids: &BTreeSet<domain::MuscleID>,
    ) -> Result<Vec<domain::Muscle>, domain::ReadError> {
        Ok(self
            .muscles
            .iter()
            .filter(|m| ids.contains(&m.id))
            .cloned()
            .collect())
    }

    async fn read_root_muscles(&self) -> Result<Vec<domain::Muscle>, domain::ReadError> {
        Ok(self
            .muscles
            .iter()
            .filter(|m| m.is_root())
            .cloned()
            .collect())
    }
}

impl domain::ExerciseRepository for Catalog {
    async fn read_exercises_activating(
        &self,
        muscle_id: domain::MuscleID,
    ) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        Ok(self
            .exercises
            .iter()
            .filter(|e| e.activates(muscle_id))
            .cloned()
            .collect())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidName(#[from] domain::NameError),
    #[error(transparent)]
    InvalidStimulus(#[from] domain::StimulusError),
    #[error("duplicate muscle {0}")]
    DuplicateMuscle(Uuid),
    #[error("duplicate exercise {0}")]
    DuplicateExercise(Uuid),
    #[error("unknown muscle {0}")]
    UnknownMuscle(Uuid),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    #[serde(default)]
    pub muscles: Vec<Muscle>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl From<&Catalog> for Document {
    fn from(value: &Catalog) -> Self {
        Self {
            muscles: value.muscles.iter().map(Muscle::from).collect(),
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Document> for Catalog {
    type Error = CatalogError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        Catalog::new(
            value
                .muscles
                .into_iter()
                .map(domain::Muscle::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        )
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Uuid>,
}

impl From<&domain::Muscle> for Muscle {
    fn from(value: &domain::Muscle) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            parent: value.parent.map(|p| *p),
        }
    }
}

impl TryFrom<Muscle> for domain::Muscle {
    type Error = domain::NameError;

    fn try_from(value: Muscle) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            parent: value.parent.map(domain::MuscleID::from),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub activations: Vec<Activation>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            activations: value.activations.iter().map(Activation::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = CatalogError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            activations: value
                .activations
                .into_iter()
                .map(|a| domain::Activation::try_from(a).map_err(From::from))
                .collect::<Result<Vec<domain::Activation>, CatalogError>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub muscle_id: Uuid,
    #[serde(default = "primary_stimulus")]
    pub stimulus: u32,
}

fn primary_stimulus() -> u32 {
    *domain::Stimulus::PRIMARY
}

impl From<&domain::Activation> for Activation {
    fn from(value: &domain::Activation) -> Self {
        Self {
            muscle_id: *value.muscle_id,
            stimulus: *value.stimulus,
        }
    }
}

impl TryFrom<Activation> for domain::Activation {
    type Error = domain::StimulusError;

    fn try_from(value: Activation) -> Result<Self, Self::Error> {
        Ok(Self {
            muscle_id: value.muscle_id.into(),
            stimulus: domain::Stimulus::new(value.stimulus)?,
        })
    }
}
