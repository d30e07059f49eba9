use std::collections::BTreeSet;

use derive_more::Deref;
use uuid::Uuid;

use crate::{Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait MuscleRepository {
    async fn read_muscles(&self, ids: &BTreeSet<MuscleID>) -> Result<Vec<Muscle>, ReadError>;
    async fn read_root_muscles(&self) -> Result<Vec<Muscle>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Muscle {
    pub id: MuscleID,
    pub name: Name,
    pub parent: Option<MuscleID>,
}

impl Muscle {
    /// Top-level muscles are the default targets when a request names none.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MuscleID(Uuid);

impl MuscleID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
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

impl From<Uuid> for MuscleID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for MuscleID {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}
