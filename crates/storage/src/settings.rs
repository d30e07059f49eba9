use std::{fs, io, path::Path};

use log::debug;
use weekplan_domain as domain;

/// Plan settings as stored on disk. Missing fields take their default value.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub exercises_per_muscle: usize,
    pub sets_per_exercise: u32,
    pub default_workouts: u32,
    pub max_workouts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(domain::PlanSettings::default())
    }
}

impl From<domain::PlanSettings> for Settings {
    fn from(value: domain::PlanSettings) -> Self {
        Self {
            exercises_per_muscle: value.exercises_per_muscle,
            sets_per_exercise: value.sets_per_exercise,
            default_workouts: value.default_workouts,
            max_workouts: value.max_workouts,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

impl TryFrom<Settings> for domain::PlanSettings {
    type Error = SettingsError;

    fn try_from(value: Settings) -> Result<Self, Self::Error> {
        if value.exercises_per_muscle == 0 {
            return Err(SettingsError::Invalid("exercises_per_muscle must be positive"));
        }
        if value.sets_per_exercise == 0 {
            return Err(SettingsError::Invalid("sets_per_exercise must be positive"));
        }
        if value.default_workouts > value.max_workouts {
            return Err(SettingsError::Invalid(
                "default_workouts must not exceed max_workouts",
            ));
        }
        Ok(Self {
            exercises_per_muscle: value.exercises_per_muscle,
            sets_per_exercise: value.sets_per_exercise,
            default_workouts: value.default_workouts,
            max_workouts: value.max_workouts,
        })
    }
}

/// Reads the plan settings, falling back to the defaults if the file does not exist.
///
/// Settings with no exercises or sets per muscle, or a default number of workouts above the
/// maximum, are rejected.
pub fn read_settings(path: &Path) -> Result<domain::PlanSettings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str::<Settings>(&json)?.try_into(),
        Err(err) => match err.kind() {
            io::ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                Ok(domain::PlanSettings::default())
            }
            _ => Err(err.into()),
        },
    }
}

pub fn write_settings(path: &Path, settings: domain::PlanSettings) -> Result<(), SettingsError> {
    fs::write(path, serde_json::to_string_pretty(&Settings::from(settings))?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_read_settings_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            read_settings(&dir.path().join("settings.json")).unwrap(),
            domain::PlanSettings::default()
        );
    }

    #[rstest]
    #[case("{}", domain::PlanSettings::default())]
    #[case(
        r#"{ "sets_per_exercise": 4 }"#,
        domain::PlanSettings { sets_per_exercise: 4, ..domain::PlanSettings::default() }
    )]
    #[case(
        r#"{ "exercises_per_muscle": 2, "sets_per_exercise": 5, "default_workouts": 3, "max_workouts": 5 }"#,
        domain::PlanSettings {
            exercises_per_muscle: 2,
            sets_per_exercise: 5,
            default_workouts: 3,
            max_workouts: 5,
        }
    )]
    fn test_read_settings(#[case] json: &str, #[case] expected: domain::PlanSettings) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, json).unwrap();

        assert_eq!(read_settings(&path).unwrap(), expected);
    }

    #[test]
    fn test_read_settings_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "sets_per_exercise": -1 }"#).unwrap();

        assert!(matches!(read_settings(&path), Err(SettingsError::Json(_))));
    }

    #[rstest]
    #[case(r#"{ "exercises_per_muscle": 0 }"#)]
    #[case(r#"{ "sets_per_exercise": 0 }"#)]
    #[case(r#"{ "default_workouts": 7 }"#)]
    #[case(r#"{ "default_workouts": 3, "max_workouts": 2 }"#)]
    fn test_read_settings_invalid_values(#[case] json: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, json).unwrap();

        assert!(matches!(read_settings(&path), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_write_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = domain::PlanSettings {
            max_workouts: 5,
            ..domain::PlanSettings::default()
        };

        write_settings(&path, settings).unwrap();

        assert_eq!(read_settings(&path).unwrap(), settings);
    }
}
