//! Integration tests for the goal set list and its delayed refresh.

use chrono::{Duration, Utc};
use goalsets::goals::{BoundRangeFormatter, GoalSet, GoalSetType};
use goalsets::picker::{GoalSetsList, NewGoalSet};
use goalsets::storage::{GoalSetGateway, InMemoryGateway, RefreshSettings};

#[test]
fn test_refresh_after_external_update() {
    let mut gateway = InMemoryGateway::with_goal_sets(vec![GoalSet::new(
        GoalSetType::Day,
        "Cutting",
        "🫃",
    )]);
    let mut list = GoalSetsList::new(GoalSetType::Day, RefreshSettings::default().delay());
    list.load(&gateway).unwrap();
    assert_eq!(list.goal_sets().len(), 1);

    // Another screen saves a diet and announces it
    let bulking = GoalSet::new(GoalSetType::Day, "Bulking", "🐻");
    gateway
        .add_goal_set_and_body_profile(&bulking, None)
        .unwrap();
    let start = Utc::now();
    list.notify_updated(start);

    assert!(!list
        .refresh_if_due(start + Duration::milliseconds(100), &gateway)
        .unwrap());
    assert_eq!(list.goal_sets().len(), 1);

    assert!(list
        .refresh_if_due(start + Duration::milliseconds(500), &gateway)
        .unwrap());
    assert_eq!(list.goal_sets().len(), 2);
    assert!(!list.is_refresh_pending());
}

#[test]
fn test_refresh_hides_deleted_sets() {
    let cutting = GoalSet::new(GoalSetType::Day, "Cutting", "🫃");
    let mut gateway = InMemoryGateway::with_goal_sets(vec![cutting.clone()]);
    let mut list = GoalSetsList::new(GoalSetType::Day, Duration::milliseconds(200));
    list.load(&gateway).unwrap();

    gateway.delete_goal_set(cutting.id).unwrap();
    let start = Utc::now();
    list.notify_updated(start);
    list.refresh_if_due(start + Duration::seconds(1), &gateway)
        .unwrap();

    assert!(list.is_empty());
    assert_eq!(list.empty_message(), "You haven't created any diets");
}

#[test]
fn test_list_cells() {
    let mut gateway = InMemoryGateway::new();
    let mut list = GoalSetsList::new(GoalSetType::Meal, Duration::milliseconds(200));
    list.add_goal_set(
        NewGoalSet::new(GoalSet::new(GoalSetType::Meal, "Snack", "🍎")),
        &mut gateway,
    )
    .unwrap();

    let formatter = BoundRangeFormatter::standard();
    let cells = list.cells(&formatter);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].title(), "🍎 Snack (0 goals)");
    assert_eq!(list.navigation_title(), "Meal Types");
}
