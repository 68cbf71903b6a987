//! Closed enumerations for activity categories, moods, time-of-day windows
//! and plan days.

use std::str::FromStr;

use jiff::civil::Weekday;
use serde::{Deserialize, Serialize};

/// Category of a catalog activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Food,
    Outdoor,
    Indoor,
    Social,
    Relax,
    Fitness,
    Culture,
    Shopping,
    Entertainment,
}

impl ActivityCategory {
    /// Every category, in declaration order.
    pub const ALL: [ActivityCategory; 9] = [
        ActivityCategory::Food,
        ActivityCategory::Outdoor,
        ActivityCategory::Indoor,
        ActivityCategory::Social,
        ActivityCategory::Relax,
        ActivityCategory::Fitness,
        ActivityCategory::Culture,
        ActivityCategory::Shopping,
        ActivityCategory::Entertainment,
    ];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Food => "food",
            ActivityCategory::Outdoor => "outdoor",
            ActivityCategory::Indoor => "indoor",
            ActivityCategory::Social => "social",
            ActivityCategory::Relax => "relax",
            ActivityCategory::Fitness => "fitness",
            ActivityCategory::Culture => "culture",
            ActivityCategory::Shopping => "shopping",
            ActivityCategory::Entertainment => "entertainment",
        }
    }
}

impl FromStr for ActivityCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid activity category: {s}"))
    }
}

/// Mood tag of a catalog activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Energetic,
    Relaxed,
    Social,
    Focused,
    Adventurous,
    Cozy,
}

impl Mood {
    /// Every mood, in declaration order.
    pub const ALL: [Mood; 6] = [
        Mood::Energetic,
        Mood::Relaxed,
        Mood::Social,
        Mood::Focused,
        Mood::Adventurous,
        Mood::Cozy,
    ];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
            Mood::Social => "social",
            Mood::Focused => "focused",
            Mood::Adventurous => "adventurous",
            Mood::Cozy => "cozy",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str() == s.to_lowercase())
            .ok_or_else(|| format!("Invalid mood: {s}"))
    }
}

/// Coarse daily window an activity prefers to happen in.
///
/// The hours each window covers live in
/// [`crate::scheduling::time_table`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 6-9 AM
    EarlyMorning,
    /// 9 AM-12 PM
    Morning,
    /// 12-5 PM
    Afternoon,
    /// 5-8 PM
    Evening,
    /// 8 PM and later
    Night,
}

impl TimeOfDay {
    /// Every window, earliest first.
    pub const ALL: [TimeOfDay; 5] = [
        TimeOfDay::EarlyMorning,
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::EarlyMorning => "early_morning",
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "early_morning" | "early-morning" | "earlymorning" => Ok(TimeOfDay::EarlyMorning),
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "night" => Ok(TimeOfDay::Night),
            _ => Err(format!("Invalid time of day: {s}")),
        }
    }
}

/// Day bucket a scheduled activity belongs to.
///
/// Saturday and Sunday are always available. Friday and Monday exist only
/// in extended (long weekend) plans.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayLabel {
    Friday,
    Saturday,
    Sunday,
    Monday,
}

impl DayLabel {
    /// Every day in calendar order across a long weekend.
    pub const ALL: [DayLabel; 4] = [
        DayLabel::Friday,
        DayLabel::Saturday,
        DayLabel::Sunday,
        DayLabel::Monday,
    ];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Friday => "friday",
            DayLabel::Saturday => "saturday",
            DayLabel::Sunday => "sunday",
            DayLabel::Monday => "monday",
        }
    }

    /// Calendar weekday this label refers to.
    pub fn weekday(&self) -> Weekday {
        match self {
            DayLabel::Friday => Weekday::Friday,
            DayLabel::Saturday => Weekday::Saturday,
            DayLabel::Sunday => Weekday::Sunday,
            DayLabel::Monday => Weekday::Monday,
        }
    }

    /// Whether this day only exists in extended plans.
    pub fn is_extended(&self) -> bool {
        matches!(self, DayLabel::Friday | DayLabel::Monday)
    }
}

impl FromStr for DayLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "friday" | "fri" => Ok(DayLabel::Friday),
            "saturday" | "sat" => Ok(DayLabel::Saturday),
            "sunday" | "sun" => Ok(DayLabel::Sunday),
            "monday" | "mon" => Ok(DayLabel::Monday),
            _ => Err(format!("Invalid day: {s}")),
        }
    }
}
