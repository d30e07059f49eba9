use derive_more::{AsRef, Display};

const MAX_LEN: usize = 64;

/// Display name of a muscle or an exercise.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(NameError::Empty);
        }

        let len = name.chars().count();

        if len > MAX_LEN {
            return Err(NameError::TooLong(len));
        }

        Ok(Name(name.to_string()))
    }
}

impl TryFrom<&str> for Name {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Name::new(value)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
    #[error("Name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}
