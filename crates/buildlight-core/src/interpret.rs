//! Status interpretation: maps `(Activity, BuildOutcome)` to one indicator action.

use crate::status::{Activity, BuildOutcome, IndicatorAction};

/// Decide which indicator action a project status calls for.
///
/// Rules:
/// - `Failure` always signals failure and `Exception` always signals a
///   warning, whatever the server is doing right now.
/// - A successful last build signals `InProgress` while `Building`, and
///   `Success` otherwise.
/// - An unrecognized outcome signals a warning.
/// - An unrecognized activity is treated as not building.
///
/// Pure and total: every input pair yields exactly one action.
pub fn interpret(activity: &Activity, outcome: &BuildOutcome) -> IndicatorAction {
    match outcome {
        BuildOutcome::Failure => IndicatorAction::Failure,
        BuildOutcome::Exception | BuildOutcome::Unrecognized(_) => IndicatorAction::Warning,
        BuildOutcome::Success => match activity {
            Activity::Building => IndicatorAction::InProgress,
            Activity::Sleeping
            | Activity::CheckingModifications
            | Activity::Unrecognized(_) => IndicatorAction::Success,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTIVITIES: [Activity; 3] = [
        Activity::Sleeping,
        Activity::CheckingModifications,
        Activity::Building,
    ];

    #[test]
    fn test_decision_table() {
        let table = [
            (Activity::Sleeping, BuildOutcome::Success, IndicatorAction::Success),
            (Activity::Sleeping, BuildOutcome::Failure, IndicatorAction::Failure),
            (Activity::Sleeping, BuildOutcome::Exception, IndicatorAction::Warning),
            (
                Activity::CheckingModifications,
                BuildOutcome::Success,
                IndicatorAction::Success,
            ),
            (
                Activity::CheckingModifications,
                BuildOutcome::Failure,
                IndicatorAction::Failure,
            ),
            (
                Activity::CheckingModifications,
                BuildOutcome::Exception,
                IndicatorAction::Warning,
            ),
            (Activity::Building, BuildOutcome::Success, IndicatorAction::InProgress),
            (Activity::Building, BuildOutcome::Failure, IndicatorAction::Failure),
            (Activity::Building, BuildOutcome::Exception, IndicatorAction::Warning),
        ];

        for (activity, outcome, expected) in table {
            assert_eq!(
                interpret(&activity, &outcome),
                expected,
                "{activity} / {outcome}"
            );
        }
    }

    #[test]
    fn test_failure_and_exception_win_over_activity() {
        for activity in &ACTIVITIES {
            assert_eq!(
                interpret(activity, &BuildOutcome::Failure),
                IndicatorAction::Failure
            );
            assert_eq!(
                interpret(activity, &BuildOutcome::Exception),
                IndicatorAction::Warning
            );
        }
    }

    #[test]
    fn test_in_progress_only_when_building() {
        let outcomes = [
            BuildOutcome::Success,
            BuildOutcome::Failure,
            BuildOutcome::Exception,
            BuildOutcome::Unrecognized("Unknown".to_string()),
        ];
        let activities = [
            Activity::Sleeping,
            Activity::CheckingModifications,
            Activity::Building,
            Activity::Unrecognized("Pending".to_string()),
        ];

        for activity in &activities {
            for outcome in &outcomes {
                let action = interpret(activity, outcome);
                if action == IndicatorAction::InProgress {
                    assert_eq!(activity, &Activity::Building);
                    assert_eq!(outcome, &BuildOutcome::Success);
                }
            }
        }
    }

    #[test]
    fn test_interpret_is_deterministic() {
        for activity in &ACTIVITIES {
            let first = interpret(activity, &BuildOutcome::Success);
            for _ in 0..10 {
                assert_eq!(interpret(activity, &BuildOutcome::Success), first);
            }
        }
    }

    #[test]
    fn test_unrecognized_outcome_warns() {
        let outcome = BuildOutcome::Unrecognized("Unknown".to_string());
        for activity in &ACTIVITIES {
            assert_eq!(interpret(activity, &outcome), IndicatorAction::Warning);
        }
    }

    #[test]
    fn test_unrecognized_activity_uses_idle_rules() {
        let activity = Activity::Unrecognized("Queued".to_string());
        assert_eq!(
            interpret(&activity, &BuildOutcome::Success),
            IndicatorAction::Success
        );
        assert_eq!(
            interpret(&activity, &BuildOutcome::Failure),
            IndicatorAction::Failure
        );
        assert_eq!(
            interpret(&activity, &BuildOutcome::Exception),
            IndicatorAction::Warning
        );
    }
}
