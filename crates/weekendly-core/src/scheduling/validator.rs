//! Day-level schedule validation: hard overlaps plus soft pacing hints.

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::models::{ActivityCategory, DayLabel, Mood, ScheduledActivity};

/// Reason attached to every hard conflict.
pub const OVERLAP_REASON: &str = "Time overlap detected";

/// Hint attached when a meal sits too close to its neighbour.
pub const MEAL_BUFFER_SUGGESTION: &str =
    "Consider adding more time between meals and other activities";

/// Hint attached when a relaxing activity directly follows an energetic one.
pub const ENERGY_BUFFER_SUGGESTION: &str =
    "Consider adding buffer time between high-energy and relaxing activities";

/// Minimum gap around food activities.
const MEAL_BUFFER: SignedDuration = SignedDuration::from_mins(30);

/// Minimum gap between an energetic activity and a relaxed one after it.
const ENERGY_BUFFER: SignedDuration = SignedDuration::from_mins(60);

/// Two activities whose times overlap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conflict {
    /// Name of the earlier activity
    pub activity1: String,
    /// Name of the later activity
    pub activity2: String,
    /// Why the pair conflicts
    pub reason: String,
}

/// Non-blocking hint about schedule quality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Suggestion {
    /// ID of the scheduled activity the hint is about
    pub activity_id: String,
    /// Human-readable hint
    pub suggestion: String,
}

/// Outcome of validating one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// True when there are no hard conflicts
    pub is_valid: bool,
    pub conflicts: Vec<Conflict>,
    pub suggestions: Vec<Suggestion>,
}

/// Validation outcome for one day of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayValidation {
    pub day: DayLabel,
    pub result: ValidationResult,
}

/// Validation outcome for every day of a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanValidation(pub Vec<DayValidation>);

impl PlanValidation {
    /// True when no day has a hard conflict.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|day| day.result.is_valid)
    }

    /// Total number of hard conflicts across days.
    pub fn conflict_count(&self) -> usize {
        self.0.iter().map(|day| day.result.conflicts.len()).sum()
    }

    /// Total number of suggestions across days.
    pub fn suggestion_count(&self) -> usize {
        self.0.iter().map(|day| day.result.suggestions.len()).sum()
    }
}

/// Checks one day's activities for overlaps and pacing problems.
///
/// Activities are compared pairwise in start-time order; the input slice
/// is left untouched. A pair that overlaps yields a [`Conflict`] and makes
/// the result invalid. Suggestions never affect validity:
///
/// - a food activity with less than 30 minutes (but more than zero) before
///   or after its neighbour,
/// - an energetic activity followed by a relaxed one less than an hour
///   later, including when the two already overlap.
///
/// Meal suggestions are listed before energy suggestions.
///
/// # Examples
///
/// ```rust
/// use weekendly_core::scheduling::validate;
///
/// let result = validate(&[]);
/// assert!(result.is_valid);
/// assert!(result.conflicts.is_empty());
/// ```
pub fn validate(activities: &[ScheduledActivity]) -> ValidationResult {
    let mut sorted: Vec<&ScheduledActivity> = activities.iter().collect();
    sorted.sort_by_key(|activity| activity.scheduled_time);

    let mut conflicts = Vec::new();
    let mut suggestions = Vec::new();

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let gap = gap_between(current, next);

        if gap < SignedDuration::ZERO {
            conflicts.push(Conflict {
                activity1: current.name.clone(),
                activity2: next.name.clone(),
                reason: OVERLAP_REASON.to_string(),
            });
        }

        let involves_meal = current.category == ActivityCategory::Food
            || next.category == ActivityCategory::Food;
        if involves_meal && gap > SignedDuration::ZERO && gap < MEAL_BUFFER {
            suggestions.push(Suggestion {
                activity_id: next.id.clone(),
                suggestion: MEAL_BUFFER_SUGGESTION.to_string(),
            });
        }
    }

    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if current.mood == Mood::Energetic
            && next.mood == Mood::Relaxed
            && gap_between(current, next) < ENERGY_BUFFER
        {
            suggestions.push(Suggestion {
                activity_id: next.id.clone(),
                suggestion: ENERGY_BUFFER_SUGGESTION.to_string(),
            });
        }
    }

    ValidationResult {
        is_valid: conflicts.is_empty(),
        conflicts,
        suggestions,
    }
}

/// Time from the end of `current` to the start of `next`; negative when
/// they overlap.
fn gap_between(current: &ScheduledActivity, next: &ScheduledActivity) -> SignedDuration {
    current.end_time().duration_until(next.scheduled_time)
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, DateTime};

    use super::*;
    use crate::models::{Activity, TimeOfDay};

    fn scheduled(
        name: &str,
        category: ActivityCategory,
        mood: Mood,
        start: DateTime,
        duration: u32,
    ) -> ScheduledActivity {
        let template = Activity {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: String::new(),
            category,
            duration,
            time_of_day: vec![TimeOfDay::Morning],
            mood,
            icon: "circle".to_string(),
            color: "bg-gray-500".to_string(),
            tags: vec![],
        };
        ScheduledActivity::from_activity(&template, DayLabel::Saturday, start, 0)
    }

    fn at(hour: i8, minute: i8) -> DateTime {
        date(2025, 6, 7).at(hour, minute, 0, 0)
    }

    #[test]
    fn test_single_and_empty_days_are_valid() {
        assert_eq!(
            validate(&[]),
            ValidationResult {
                is_valid: true,
                ..Default::default()
            }
        );

        let one = scheduled("Hike", ActivityCategory::Outdoor, Mood::Energetic, at(9, 0), 120);
        let result = validate(&[one]);
        assert!(result.is_valid);
        assert!(result.conflicts.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_overlap_reports_one_conflict() {
        let a = scheduled("Museum", ActivityCategory::Culture, Mood::Focused, at(10, 0), 90);
        let b = scheduled("Shopping", ActivityCategory::Shopping, Mood::Social, at(11, 0), 60);

        let result = validate(&[b, a]);
        assert!(!result.is_valid);
        assert_eq!(
            result.conflicts,
            vec![Conflict {
                activity1: "Museum".to_string(),
                activity2: "Shopping".to_string(),
                reason: OVERLAP_REASON.to_string(),
            }]
        );
    }

    #[test]
    fn test_back_to_back_is_not_a_conflict() {
        let a = scheduled("Museum", ActivityCategory::Culture, Mood::Focused, at(10, 0), 60);
        let b = scheduled("Gallery", ActivityCategory::Culture, Mood::Focused, at(11, 0), 60);
        assert!(validate(&[a, b]).is_valid);
    }

    #[test]
    fn test_spaced_activities_pass() {
        let a = scheduled("Yoga", ActivityCategory::Fitness, Mood::Focused, at(9, 0), 60);
        let b = scheduled("Market", ActivityCategory::Shopping, Mood::Social, at(10, 30), 60);

        let result = validate(&[a, b]);
        assert!(result.is_valid);
        assert!(result.conflicts.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_meal_buffer_suggestion() {
        let lunch = scheduled("Lunch", ActivityCategory::Food, Mood::Social, at(11, 0), 60);
        let walk = scheduled("Walk", ActivityCategory::Outdoor, Mood::Social, at(12, 10), 45);
        let walk_id = walk.id.clone();

        let result = validate(&[lunch.clone(), walk]);
        assert!(result.is_valid);
        assert_eq!(
            result.suggestions,
            vec![Suggestion {
                activity_id: walk_id,
                suggestion: MEAL_BUFFER_SUGGESTION.to_string(),
            }]
        );

        let later = scheduled("Walk", ActivityCategory::Outdoor, Mood::Social, at(12, 45), 45);
        let result = validate(&[lunch, later]);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_meal_buffer_applies_when_food_comes_second() {
        let gallery = scheduled("Gallery", ActivityCategory::Culture, Mood::Focused, at(10, 0), 60);
        let brunch = scheduled("Brunch", ActivityCategory::Food, Mood::Social, at(11, 15), 60);
        let brunch_id = brunch.id.clone();

        let result = validate(&[gallery, brunch]);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].activity_id, brunch_id);
    }

    #[test]
    fn test_meal_buffer_skips_touching_and_overlapping_pairs() {
        let lunch = scheduled("Lunch", ActivityCategory::Food, Mood::Social, at(11, 0), 60);
        let touching = scheduled("Walk", ActivityCategory::Outdoor, Mood::Social, at(12, 0), 30);
        let result = validate(&[lunch.clone(), touching]);
        assert!(result.is_valid);
        assert!(result.suggestions.is_empty());

        let overlapping = scheduled("Walk", ActivityCategory::Outdoor, Mood::Social, at(11, 30), 30);
        let result = validate(&[lunch, overlapping]);
        assert!(!result.is_valid);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_energy_transition_suggestion() {
        let run = scheduled("Run", ActivityCategory::Fitness, Mood::Energetic, at(8, 0), 60);
        let spa = scheduled("Spa", ActivityCategory::Relax, Mood::Relaxed, at(9, 30), 120);
        let spa_id = spa.id.clone();

        let result = validate(&[run.clone(), spa]);
        assert!(result.is_valid);
        assert_eq!(
            result.suggestions,
            vec![Suggestion {
                activity_id: spa_id,
                suggestion: ENERGY_BUFFER_SUGGESTION.to_string(),
            }]
        );

        let later_spa = scheduled("Spa", ActivityCategory::Relax, Mood::Relaxed, at(10, 0), 120);
        assert!(validate(&[run, later_spa]).suggestions.is_empty());
    }

    #[test]
    fn test_energy_transition_reported_alongside_conflict() {
        let run = scheduled("Run", ActivityCategory::Fitness, Mood::Energetic, at(8, 0), 90);
        let spa = scheduled("Spa", ActivityCategory::Relax, Mood::Relaxed, at(9, 0), 60);

        let result = validate(&[run, spa]);
        assert!(!result.is_valid);
        assert_eq!(result.conflicts.len(), 1);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].suggestion, ENERGY_BUFFER_SUGGESTION);
    }

    #[test]
    fn test_relaxed_then_energetic_is_fine() {
        let spa = scheduled("Spa", ActivityCategory::Relax, Mood::Relaxed, at(8, 0), 60);
        let run = scheduled("Run", ActivityCategory::Fitness, Mood::Energetic, at(9, 0), 60);
        assert!(validate(&[spa, run]).suggestions.is_empty());
    }

    #[test]
    fn test_meal_suggestions_precede_energy_suggestions() {
        let run = scheduled("Run", ActivityCategory::Fitness, Mood::Energetic, at(8, 0), 60);
        let nap = scheduled("Nap", ActivityCategory::Relax, Mood::Relaxed, at(9, 15), 30);
        let lunch = scheduled("Lunch", ActivityCategory::Food, Mood::Social, at(10, 0), 60);

        let result = validate(&[lunch, nap, run]);
        let texts: Vec<&str> = result
            .suggestions
            .iter()
            .map(|s| s.suggestion.as_str())
            .collect();
        assert_eq!(texts, vec![MEAL_BUFFER_SUGGESTION, ENERGY_BUFFER_SUGGESTION]);
    }

    #[test]
    fn test_validate_is_idempotent_and_leaves_input_alone() {
        let a = scheduled("Late", ActivityCategory::Social, Mood::Social, at(15, 0), 60);
        let b = scheduled("Early", ActivityCategory::Social, Mood::Social, at(9, 0), 420);
        let input = vec![a, b];
        let before = input.clone();

        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        assert_eq!(input, before);
        assert_eq!(first.conflicts[0].activity1, "Early");
    }

    #[test]
    fn test_plan_validation_totals() {
        let invalid = ValidationResult {
            is_valid: false,
            conflicts: vec![Conflict {
                activity1: "A".to_string(),
                activity2: "B".to_string(),
                reason: OVERLAP_REASON.to_string(),
            }],
            suggestions: vec![],
        };
        let plan = PlanValidation(vec![
            DayValidation {
                day: DayLabel::Saturday,
                result: ValidationResult {
                    is_valid: true,
                    ..Default::default()
                },
            },
            DayValidation {
                day: DayLabel::Sunday,
                result: invalid,
            },
        ]);
        assert!(!plan.is_valid());
        assert_eq!(plan.conflict_count(), 1);
        assert_eq!(plan.suggestion_count(), 0);
    }
}
