//! Unit tests for the goal set selection state machine.

use chrono::{NaiveDate, NaiveTime};
use goalsets::goals::{GoalSet, GoalSetType};
use goalsets::selection::{
    Completion, Day, DayMeal, PersistenceCall, SelectionContext, SelectionController,
    SelectionOutcome, SelectionTarget,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn diets() -> (GoalSet, GoalSet) {
    (
        GoalSet::new(GoalSetType::Day, "Cutting", "🫃"),
        GoalSet::new(GoalSetType::Day, "Maintenance", "⚖"),
    )
}

#[test]
fn test_selecting_current_deselects() {
    let controller = SelectionController::new();
    let (cutting, _) = diets();
    let context = SelectionContext::for_day(date(), Some(cutting.clone()));

    assert_eq!(
        controller.decide(&cutting, &context),
        SelectionOutcome::Deselect {
            target: SelectionTarget::Day(date()),
        }
    );
}

#[test]
fn test_selecting_different_set_selects_it() {
    let controller = SelectionController::new();
    let (cutting, maintenance) = diets();

    for current in [None, Some(cutting.clone())] {
        let context = SelectionContext::for_day(date(), current);
        match controller.decide(&maintenance, &context) {
            SelectionOutcome::Select { goal_set, target } => {
                assert_eq!(goal_set, maintenance);
                assert_eq!(target, SelectionTarget::Day(date()));
            }
            other => panic!("Expected Select, got {:?}", other),
        }
    }
}

#[test]
fn test_match_is_by_id() {
    let controller = SelectionController::new();
    let (cutting, _) = diets();

    // Same id, edited contents
    let mut renamed = cutting.clone();
    renamed.name = "Cutting v2".to_string();
    let context = SelectionContext::for_day(date(), Some(cutting));

    assert!(matches!(
        controller.decide(&renamed, &context),
        SelectionOutcome::Deselect { .. }
    ));
}

#[test]
fn test_day_without_date_is_always_noop() {
    let controller = SelectionController::new();
    let (cutting, maintenance) = diets();

    for current in [None, Some(cutting.clone())] {
        let context = SelectionContext {
            target_context: GoalSetType::Day,
            date: None,
            meal: None,
            current_selection: current,
        };
        assert_eq!(controller.decide(&cutting, &context), SelectionOutcome::NoOp);
        assert_eq!(controller.decide(&maintenance, &context), SelectionOutcome::NoOp);
        assert_eq!(controller.remove_selection(&context), SelectionOutcome::NoOp);
    }
}

#[test]
fn test_remove_selection() {
    let controller = SelectionController::new();
    let (cutting, _) = diets();

    let context = SelectionContext::for_day(date(), None);
    assert_eq!(controller.remove_selection(&context), SelectionOutcome::NoOp);

    let context = SelectionContext::for_day(date(), Some(cutting.clone()));
    assert_eq!(
        controller.remove_selection(&context),
        controller.decide(&cutting, &context)
    );
}

#[test]
fn test_decide_is_idempotent() {
    let controller = SelectionController::new();
    let (cutting, maintenance) = diets();
    let context = SelectionContext::for_day(date(), Some(cutting));

    let first = controller.decide(&maintenance, &context);
    let second = controller.decide(&maintenance, &context);
    assert_eq!(first, second);
}

#[test]
fn test_day_completion_carries_container() {
    let controller = SelectionController::new();
    let (cutting, _) = diets();
    let context = SelectionContext::for_day(date(), None);
    let outcome = controller.decide(&cutting, &context);

    let mut day = Day::new(date());
    day.goal_set = Some(cutting.clone());

    assert_eq!(
        outcome.completion(Some(day.clone())),
        Some(Completion {
            goal_set: Some(cutting.clone()),
            day: Some(day),
        })
    );
    assert_eq!(
        outcome.persistence_call(),
        Some(PersistenceCall::SetGoalSet {
            goal_set: cutting,
            date: date(),
        })
    );
}

#[test]
fn test_meal_completion_has_no_container() {
    let controller = SelectionController::new();
    let meal = DayMeal::new("Breakfast", NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    let pre_workout = GoalSet::new(GoalSetType::Meal, "Pre-Workout Meal", "🍞");
    let context = SelectionContext::for_meal(Some(meal.clone()), None);

    let outcome = controller.decide(&pre_workout, &context);
    assert_eq!(
        outcome,
        SelectionOutcome::Select {
            goal_set: pre_workout.clone(),
            target: SelectionTarget::Meal(Some(meal)),
        }
    );
    assert!(outcome.persistence_call().is_none());

    // Even if a container is supplied it is not reported for meals
    let completion = outcome.completion(Some(Day::new(date()))).unwrap();
    assert_eq!(completion.goal_set, Some(pre_workout));
    assert!(completion.day.is_none());
}

#[test]
fn test_deselect_completion_is_cleared() {
    let controller = SelectionController::new();
    let (cutting, _) = diets();
    let context = SelectionContext::for_day(date(), Some(cutting.clone()));

    let outcome = controller.decide(&cutting, &context);
    assert_eq!(outcome.completion(None), Some(Completion::cleared()));
    assert_eq!(outcome.resulting_selection(Some(&cutting)), None);
}
