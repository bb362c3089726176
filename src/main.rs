//! GoalSets - Nutrition Goal Set Selection
//!
//! Renders the goal set picker for diets and meal types as text.
//!
//! Usage: `goalsets [GOAL_SETS_JSON]`. Without a file a built-in sample is shown.

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use goalsets::goals::{
    BodyMassType, EnergyGoalType, EnergyUnit, Goal, GoalSet, GoalSetType, GoalType, Macro,
    NutrientGoalType, WeightUnit, WorkoutDurationUnit,
};
use goalsets::storage::{config, InMemoryGateway};
use goalsets::{BoundRangeFormatter, GoalSetPicker};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GoalSets v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("loading configuration")?;
    let formatter = BoundRangeFormatter::new(config.display.value_formatter());

    let goal_sets = match std::env::args().nth(1) {
        Some(path) => {
            let content =
                std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            serde_json::from_str::<Vec<GoalSet>>(&content)
                .with_context(|| format!("parsing goal sets in {}", path))?
        }
        None => sample_goal_sets(),
    };
    let mut gateway = InMemoryGateway::with_goal_sets(goal_sets);

    let today = Utc::now().date_naive();
    let mut day_picker = GoalSetPicker::for_day(today, None);
    day_picker.load(&gateway)?;
    let mut meal_picker = GoalSetPicker::for_meal(None, None);
    meal_picker.load(&gateway)?;

    // Apply the first diet to today so the selection mark shows up
    if let Some(first) = day_picker.goal_sets().first().cloned() {
        if let Some(completion) = day_picker.tap(&first, &mut gateway)? {
            tracing::info!(
                "Today's diet: {}",
                completion
                    .goal_set
                    .map(|goal_set| goal_set.name)
                    .unwrap_or_default()
            );
        }
    }

    for picker in [&day_picker, &meal_picker] {
        println!("{}", picker.navigation_title());
        if picker.is_empty() {
            println!("  {}", picker.empty_message());
        }
        for cell in picker.cells(&formatter) {
            println!("  {}", cell);
        }
        println!();
    }

    Ok(())
}

fn sample_goal_sets() -> Vec<GoalSet> {
    vec![
        GoalSet::new(GoalSetType::Day, "Cutting", "🫃")
            .with_goal(Goal::new(
                GoalType::Energy(EnergyGoalType::Fixed(EnergyUnit::Kcal)),
                Some(1800.0),
                Some(2000.0),
            ))
            .with_goal(Goal::new(
                GoalType::Macro(
                    NutrientGoalType::QuantityPerBodyMass(BodyMassType::Weight, WeightUnit::Kg),
                    Macro::Protein,
                ),
                Some(2.0),
                None,
            )),
        GoalSet::new(GoalSetType::Meal, "Pre-Workout Meal", "🍞")
            .with_goal(Goal::new(
                GoalType::Macro(
                    NutrientGoalType::QuantityPerBodyMass(BodyMassType::Weight, WeightUnit::Kg),
                    Macro::Carb,
                ),
                Some(1.0),
                None,
            ))
            .with_goal(Goal::new(
                GoalType::Energy(EnergyGoalType::Fixed(EnergyUnit::Kcal)),
                None,
                Some(500.0),
            ))
            .with_goal(Goal::new(
                GoalType::Macro(NutrientGoalType::Fixed, Macro::Protein),
                Some(20.0),
                Some(25.0),
            )),
        GoalSet::new(GoalSetType::Meal, "Intra-Workout Snack", "🏋")
            .with_goal(Goal::new(
                GoalType::Macro(
                    NutrientGoalType::QuantityPerWorkoutDuration(WorkoutDurationUnit::Min),
                    Macro::Carb,
                ),
                Some(0.5),
                None,
            )),
    ]
}
