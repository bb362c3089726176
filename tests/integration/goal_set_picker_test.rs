//! Integration tests for the goal set picker.
//!
//! Drives the picker against the in-memory store the way the day and meal
//! screens do.

use chrono::NaiveDate;
use goalsets::goals::{
    BoundRangeFormatter, EnergyGoalType, EnergyUnit, Goal, GoalSet, GoalSetType, GoalType,
};
use goalsets::picker::{GoalSetEvent, GoalSetPicker, NewGoalSet};
use goalsets::selection::GoalSetError;
use goalsets::storage::{BodyProfile, GoalSetGateway, InMemoryGateway};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
}

fn diet(name: &str, kcal: f64) -> GoalSet {
    GoalSet::new(GoalSetType::Day, name, "🍽").with_goal(Goal::new(
        GoalType::Energy(EnergyGoalType::Fixed(EnergyUnit::Kcal)),
        None,
        Some(kcal),
    ))
}

fn setup() -> (InMemoryGateway, GoalSet, GoalSet) {
    let cutting = diet("Cutting", 1800.0);
    let bulking = diet("Bulking", 3000.0);
    let gateway = InMemoryGateway::with_goal_sets(vec![
        cutting.clone(),
        bulking.clone(),
        GoalSet::new(GoalSetType::Meal, "Snack", "🍎"),
    ]);
    (gateway, cutting, bulking)
}

#[test]
fn test_select_then_deselect_day() {
    let (mut gateway, cutting, _) = setup();
    let mut picker = GoalSetPicker::for_day(date(), None);
    picker.load(&gateway).unwrap();
    let events = picker.event_receiver();

    assert_eq!(picker.goal_sets().len(), 2);

    let completion = picker.tap(&cutting, &mut gateway).unwrap().unwrap();
    assert_eq!(completion.goal_set.as_ref().map(|g| g.id), Some(cutting.id));
    let day = completion.day.expect("day container");
    assert_eq!(day.date, date());
    assert_eq!(day.goal_set.map(|g| g.id), Some(cutting.id));
    assert_eq!(picker.selected().map(|g| g.id), Some(cutting.id));

    let completion = picker.tap(&cutting, &mut gateway).unwrap().unwrap();
    assert!(completion.goal_set.is_none());
    assert!(completion.day.is_none());
    assert!(picker.selected().is_none());
    assert!(gateway.day(date()).unwrap().goal_set.is_none());

    let events: Vec<_> = events.try_iter().collect();
    assert_eq!(
        events,
        vec![
            GoalSetEvent::DidUpdateDiet {
                kind: GoalSetType::Day,
                goal_set_id: Some(cutting.id),
            },
            GoalSetEvent::DidUpdateDiet {
                kind: GoalSetType::Day,
                goal_set_id: None,
            },
        ]
    );
}

#[test]
fn test_switching_diets() {
    let (mut gateway, cutting, bulking) = setup();
    let mut picker = GoalSetPicker::for_day(date(), Some(cutting.clone()));
    picker.load(&gateway).unwrap();

    let completion = picker.tap(&bulking, &mut gateway).unwrap().unwrap();
    assert_eq!(completion.goal_set.map(|g| g.id), Some(bulking.id));
    assert_eq!(
        gateway.day(date()).and_then(|d| d.goal_set.as_ref()).map(|g| g.id),
        Some(bulking.id)
    );

    let formatter = BoundRangeFormatter::standard();
    let cells = picker.cells(&formatter);
    assert!(!cells[0].is_selected);
    assert!(cells[1].is_selected);
    assert_eq!(cells[1].cell.rows[0].to_string(), "Energy: below 3000kcal");
}

#[test]
fn test_failed_persistence_reverts_selection() {
    let (mut gateway, cutting, bulking) = setup();
    let mut picker = GoalSetPicker::for_day(date(), Some(cutting.clone()));
    picker.load(&gateway).unwrap();
    let events = picker.event_receiver();

    gateway.set_fail_writes(true);
    let result = picker.tap(&bulking, &mut gateway);

    assert!(matches!(result, Err(GoalSetError::PersistenceFailure(_))));
    assert_eq!(picker.selected().map(|g| g.id), Some(cutting.id));
    assert!(!picker.is_dismissing());
    assert!(picker.shows_remove_button());
    assert!(events.try_recv().is_err());

    let result = picker.remove(&mut gateway);
    assert!(result.is_err());
    assert_eq!(picker.selected().map(|g| g.id), Some(cutting.id));
}

#[test]
fn test_remove_without_selection_is_noop() {
    let (mut gateway, _, _) = setup();
    let mut picker = GoalSetPicker::for_day(date(), None);
    picker.load(&gateway).unwrap();

    assert_eq!(picker.remove(&mut gateway).unwrap(), None);
    assert!(gateway.day(date()).is_none());
    assert!(!picker.is_dismissing());
}

#[test]
fn test_meal_picker_does_not_persist() {
    let (mut gateway, _, _) = setup();
    let mut picker = GoalSetPicker::for_meal(None, None);
    picker.load(&gateway).unwrap();

    assert_eq!(picker.navigation_title(), "Choose a Meal Type");
    assert_eq!(picker.goal_sets().len(), 1);

    let snack = picker.goal_sets()[0].clone();
    let completion = picker.tap(&snack, &mut gateway).unwrap().unwrap();
    assert_eq!(completion.goal_set.map(|g| g.id), Some(snack.id));
    assert!(completion.day.is_none());
    assert!(gateway.day(date()).is_none());

    // Meal selections never touch the store, so failures cannot occur
    gateway.set_fail_writes(true);
    let completion = picker.tap(&snack, &mut gateway).unwrap().unwrap();
    assert!(completion.goal_set.is_none());
}

#[test]
fn test_add_goal_set_selects_it() {
    let mut gateway = InMemoryGateway::new();
    let mut picker = GoalSetPicker::for_day(date(), None);
    picker.load(&gateway).unwrap();
    assert!(picker.is_empty());
    let events = picker.event_receiver();

    let keto = diet("Keto", 2200.0);
    let profile = BodyProfile {
        weight_kg: Some(80.0),
        ..Default::default()
    };
    let completion = picker
        .add_goal_set(NewGoalSet::new(keto.clone()).with_body_profile(profile), &mut gateway)
        .unwrap()
        .unwrap();

    assert_eq!(completion.goal_set.map(|g| g.id), Some(keto.id));
    assert_eq!(picker.goal_sets().len(), 1);
    assert_eq!(gateway.goal_sets(GoalSetType::Day).unwrap().len(), 1);
    assert_eq!(gateway.body_profile().and_then(|p| p.weight_kg), Some(80.0));

    let events: Vec<_> = events.try_iter().collect();
    assert!(matches!(
        events[0],
        GoalSetEvent::GoalSetAdded { goal_set_id, .. } if goal_set_id == keto.id
    ));
    assert!(matches!(events[1], GoalSetEvent::DidUpdateDiet { .. }));
}

#[test]
fn test_add_goal_set_while_browsing() {
    let mut gateway = InMemoryGateway::new();
    let mut picker = GoalSetPicker::browsing(GoalSetType::Day);

    let result = picker
        .add_goal_set(NewGoalSet::new(diet("Keto", 2200.0)), &mut gateway)
        .unwrap();

    assert!(result.is_none());
    assert!(picker.selected().is_none());
    assert_eq!(picker.goal_sets().len(), 1);
}
