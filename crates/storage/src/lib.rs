#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod settings;

pub use catalog::{Catalog, CatalogError};
pub use settings::{SettingsError, read_settings, write_settings};

#[cfg(test)]
mod tests {
    pub mod data;

    use std::collections::BTreeSet;

    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use rstest::rstest;
    use weekplan_domain::{
        CancellationSignal, ExerciseID, PlanError, PlanSettings, Service, WeekPlanRequest,
        WeekPlanService,
    };

    use data::{
        BENCH_PRESS, CHEST, DEADLIFT, GLUTES, HAMSTRINGS, HIP_THRUST, INCLINE_PRESS, LOWER_BACK,
        ROMANIAN_DEADLIFT, UPPER_CHEST, catalog,
    };

    fn service(seed: u64) -> Service<super::Catalog> {
        Service::with_rng(catalog(), PlanSettings::default(), StdRng::seed_from_u64(seed))
    }

    fn monday(plan: &weekplan_domain::WeekPlan) -> Vec<ExerciseID> {
        let mut ids = plan
            .day(Weekday::Mon)
            .unwrap()
            .iter()
            .map(|m| m.exercise.id)
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    #[rstest]
    #[tokio::test]
    async fn test_week_plan_for_root_muscles(#[values(0, 1, 2, 3)] seed: u64) {
        let plan = service(seed)
            .get_week_plan(&WeekPlanRequest::default(), &CancellationSignal::never())
            .await
            .unwrap();

        assert_eq!(
            monday(&plan),
            vec![BENCH_PRESS, DEADLIFT, ROMANIAN_DEADLIFT, HIP_THRUST, INCLINE_PRESS]
        );
        assert!(plan.day(Weekday::Mon).unwrap().iter().all(|m| m.sets == 3));
        assert_eq!(plan.day(Weekday::Tue), None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_week_plan_samples_per_muscle(#[values(0, 1, 2, 3)] seed: u64) {
        let service = Service::with_rng(
            catalog(),
            PlanSettings {
                exercises_per_muscle: 2,
                ..PlanSettings::default()
            },
            StdRng::seed_from_u64(seed),
        );

        let plan = service
            .get_week_plan(
                &WeekPlanRequest {
                    muscles: Some(BTreeSet::from([GLUTES])),
                    ..WeekPlanRequest::default()
                },
                &CancellationSignal::never(),
            )
            .await
            .unwrap();

        let ids = monday(&plan);
        assert_eq!(ids.len(), 2);
        assert!(
            ids.iter()
                .all(|id| [DEADLIFT, ROMANIAN_DEADLIFT, HIP_THRUST].contains(id))
        );
    }

    #[rstest]
    #[case(&[UPPER_CHEST], vec![BENCH_PRESS, INCLINE_PRESS])]
    #[case(&[HAMSTRINGS], vec![DEADLIFT, ROMANIAN_DEADLIFT])]
    #[case(&[HAMSTRINGS, LOWER_BACK], vec![DEADLIFT, ROMANIAN_DEADLIFT])]
    #[case(
        &[CHEST, GLUTES],
        vec![BENCH_PRESS, DEADLIFT, ROMANIAN_DEADLIFT, HIP_THRUST, INCLINE_PRESS]
    )]
    #[tokio::test]
    async fn test_week_plan_for_muscles(
        #[case] muscles: &[weekplan_domain::MuscleID],
        #[case] expected: Vec<ExerciseID>,
    ) {
        let plan = service(0)
            .get_week_plan(
                &WeekPlanRequest {
                    muscles: Some(muscles.iter().copied().collect::<BTreeSet<_>>()),
                    ..WeekPlanRequest::default()
                },
                &CancellationSignal::never(),
            )
            .await
            .unwrap();

        assert_eq!(monday(&plan), expected);
        assert_eq!(plan.total_sets(), 3 * u32::try_from(expected.len()).unwrap());
    }

    #[tokio::test]
    async fn test_spread_into_workouts() {
        assert!(matches!(
            service(0)
                .spread_into_workouts(&WeekPlanRequest::default(), &CancellationSignal::never())
                .await,
            Err(PlanError::NotImplemented(_))
        ));
    }
}
