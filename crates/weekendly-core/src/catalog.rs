//! Static activity catalog and weekend themes.

use crate::models::{
    Activity, ActivityCategory as C, ActivityFilter, Mood as M, TimeOfDay as T, WeekendTheme,
};

/// Read-only set of activities users can schedule and themes that bundle
/// them.
#[derive(Debug, Clone)]
pub struct Catalog {
    activities: Vec<Activity>,
    themes: Vec<WeekendTheme>,
}

impl Catalog {
    /// Creates a catalog from explicit entries.
    pub fn new(activities: Vec<Activity>, themes: Vec<WeekendTheme>) -> Self {
        Self { activities, themes }
    }

    /// The catalog that ships with the application.
    pub fn builtin() -> Self {
        Self::new(builtin_activities(), builtin_themes())
    }

    /// All activities in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Looks up an activity by ID.
    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Activities passing `filter`, in catalog order.
    pub fn filter(&self, filter: &ActivityFilter) -> Vec<Activity> {
        self.activities
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    /// All themes in catalog order.
    pub fn themes(&self) -> &[WeekendTheme] {
        &self.themes
    }

    /// Looks up a theme by ID.
    pub fn theme(&self, id: &str) -> Option<&WeekendTheme> {
        self.themes.iter().find(|t| t.id == id)
    }

    /// Catalog activities suggested by `theme`, in catalog order.
    ///
    /// Suggestions that name an unknown activity are skipped.
    pub fn suggested_for(&self, theme: &WeekendTheme) -> Vec<&Activity> {
        self.activities
            .iter()
            .filter(|a| theme.suggested_activities.contains(&a.id))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn activity(
    id: &str,
    name: &str,
    description: &str,
    category: C,
    duration: u32,
    time_of_day: &[T],
    mood: M,
    icon: &str,
    color: &str,
    tags: &[&str],
) -> Activity {
    Activity {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        duration,
        time_of_day: time_of_day.to_vec(),
        mood,
        icon: icon.to_string(),
        color: color.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

#[allow(clippy::too_many_lines)]
fn builtin_activities() -> Vec<Activity> {
    vec![
        activity(
            "brunch-cafe",
            "Brunch at a Café",
            "Slow weekend brunch with coffee and pastries",
            C::Food,
            90,
            &[T::Morning],
            M::Social,
            "coffee",
            "bg-orange-500",
            &["brunch", "coffee", "breakfast"],
        ),
        activity(
            "hiking-trail",
            "Hiking Trail",
            "Explore a scenic trail and enjoy the views",
            C::Outdoor,
            180,
            &[T::EarlyMorning, T::Morning],
            M::Adventurous,
            "mountain",
            "bg-green-600",
            &["nature", "exercise", "views"],
        ),
        activity(
            "museum-visit",
            "Museum Visit",
            "Wander through exhibits at a local museum",
            C::Culture,
            120,
            &[T::Morning, T::Afternoon],
            M::Focused,
            "landmark",
            "bg-pink-500",
            &["art", "history", "indoor"],
        ),
        activity(
            "movie-night",
            "Movie Night",
            "Catch a new release or rewatch a favourite",
            C::Entertainment,
            150,
            &[T::Evening, T::Night],
            M::Cozy,
            "film",
            "bg-purple-500",
            &["movies", "popcorn"],
        ),
        activity(
            "spa-day",
            "Spa Day",
            "Massage, sauna and a long unhurried afternoon",
            C::Relax,
            180,
            &[T::Afternoon],
            M::Relaxed,
            "sparkles",
            "bg-teal-500",
            &["wellness", "massage", "self-care"],
        ),
        activity(
            "farmers-market",
            "Farmers Market",
            "Pick up fresh produce and local treats",
            C::Shopping,
            90,
            &[T::EarlyMorning, T::Morning],
            M::Social,
            "shopping-basket",
            "bg-yellow-500",
            &["local", "produce", "food"],
        ),
        activity(
            "beach-day",
            "Beach Day",
            "Sun, sand and a swim",
            C::Outdoor,
            240,
            &[T::Morning, T::Afternoon],
            M::Relaxed,
            "sun",
            "bg-sky-500",
            &["summer", "swimming", "sun"],
        ),
        activity(
            "bbq-picnic",
            "BBQ Picnic",
            "Grill in the park with friends",
            C::Food,
            150,
            &[T::Afternoon],
            M::Social,
            "flame",
            "bg-red-500",
            &["grill", "park", "friends"],
        ),
        activity(
            "sunrise-yoga",
            "Sunrise Yoga",
            "Start the day with a gentle outdoor flow",
            C::Fitness,
            60,
            &[T::EarlyMorning],
            M::Focused,
            "sunrise",
            "bg-amber-400",
            &["yoga", "mindfulness", "stretching"],
        ),
        activity(
            "board-games",
            "Board Game Night",
            "Friendly competition around the table",
            C::Indoor,
            120,
            &[T::Evening],
            M::Social,
            "dice-5",
            "bg-indigo-500",
            &["games", "friends", "indoor"],
        ),
        activity(
            "cooking-class",
            "Cooking Class",
            "Learn a new cuisine from a local chef",
            C::Food,
            120,
            &[T::Afternoon, T::Evening],
            M::Focused,
            "chef-hat",
            "bg-orange-600",
            &["cooking", "learning", "food"],
        ),
        activity(
            "art-gallery",
            "Art Gallery Tour",
            "See what is new at the neighbourhood galleries",
            C::Culture,
            90,
            &[T::Afternoon],
            M::Focused,
            "palette",
            "bg-fuchsia-500",
            &["art", "exhibition"],
        ),
        activity(
            "outdoor-concert",
            "Outdoor Concert",
            "Live music under the open sky",
            C::Entertainment,
            180,
            &[T::Evening, T::Night],
            M::Energetic,
            "music",
            "bg-violet-500",
            &["music", "live", "summer"],
        ),
        activity(
            "cycling-tour",
            "City Cycling Tour",
            "Ride through town and discover new streets",
            C::Fitness,
            120,
            &[T::Morning],
            M::Energetic,
            "bike",
            "bg-lime-500",
            &["bike", "exercise", "city"],
        ),
        activity(
            "rock-climbing",
            "Rock Climbing Gym",
            "Bouldering and top-rope sessions for all levels",
            C::Fitness,
            120,
            &[T::Afternoon],
            M::Energetic,
            "mountain-snow",
            "bg-stone-500",
            &["climbing", "exercise", "indoor"],
        ),
        activity(
            "reading-nook",
            "Reading at Home",
            "A blanket, a book and nowhere to be",
            C::Relax,
            90,
            &[T::Afternoon, T::Evening],
            M::Cozy,
            "book-open",
            "bg-emerald-500",
            &["books", "quiet", "home"],
        ),
        activity(
            "cozy-cafe",
            "Cozy Café Afternoon",
            "Hot drinks and cake somewhere warm",
            C::Food,
            60,
            &[T::Afternoon],
            M::Cozy,
            "cup-soda",
            "bg-amber-600",
            &["coffee", "cake", "cafe"],
        ),
        activity(
            "volunteer-work",
            "Volunteer Work",
            "Give back at a local shelter or food bank",
            C::Social,
            180,
            &[T::Morning],
            M::Social,
            "heart-handshake",
            "bg-rose-500",
            &["community", "giving"],
        ),
        activity(
            "documentary-night",
            "Documentary Night",
            "Learn something new from the couch",
            C::Entertainment,
            120,
            &[T::Night],
            M::Cozy,
            "tv",
            "bg-slate-500",
            &["learning", "movies", "home"],
        ),
        activity(
            "historical-tour",
            "Historical Walking Tour",
            "Follow a guide through the old town",
            C::Culture,
            120,
            &[T::Morning, T::Afternoon],
            M::Adventurous,
            "scroll",
            "bg-yellow-700",
            &["history", "walking", "city"],
        ),
        activity(
            "wine-tasting",
            "Wine Tasting",
            "Sample local wines at a vineyard",
            C::Food,
            120,
            &[T::Afternoon, T::Evening],
            M::Relaxed,
            "wine",
            "bg-red-700",
            &["wine", "vineyard", "tasting"],
        ),
        activity(
            "nature-walk",
            "Nature Walk",
            "An easy stroll through the nearest green space",
            C::Outdoor,
            60,
            &[T::Morning, T::Evening],
            M::Relaxed,
            "trees",
            "bg-green-500",
            &["nature", "walking", "easy"],
        ),
        activity(
            "family-dinner",
            "Family Dinner",
            "A long dinner with the people who matter",
            C::Social,
            120,
            &[T::Evening],
            M::Social,
            "utensils",
            "bg-orange-400",
            &["family", "dinner"],
        ),
        activity(
            "road-trip",
            "Road Trip",
            "Pick a direction and drive",
            C::Outdoor,
            300,
            &[T::EarlyMorning, T::Morning],
            M::Adventurous,
            "car",
            "bg-blue-600",
            &["driving", "explore"],
        ),
        activity(
            "vintage-shopping",
            "Vintage Shopping",
            "Hunt for treasures in thrift and vintage stores",
            C::Shopping,
            120,
            &[T::Afternoon],
            M::Social,
            "shopping-bag",
            "bg-yellow-400",
            &["thrift", "fashion"],
        ),
        activity(
            "romantic-dinner",
            "Romantic Dinner",
            "Candlelit dinner for two",
            C::Food,
            120,
            &[T::Evening],
            M::Relaxed,
            "heart",
            "bg-rose-600",
            &["date", "dinner"],
        ),
    ]
}

fn theme(id: &str, name: &str, description: &str, icon: &str, color: &str, suggested: &[&str]) -> WeekendTheme {
    WeekendTheme {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        suggested_activities: suggested.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_themes() -> Vec<WeekendTheme> {
    vec![
        theme(
            "lazy-weekend",
            "Lazy Weekend",
            "Sleep in, eat well and do as little as possible",
            "sofa",
            "bg-teal-500",
            &["brunch-cafe", "reading-nook", "spa-day", "movie-night", "cozy-cafe"],
        ),
        theme(
            "adventurous-weekend",
            "Adventurous Weekend",
            "Get outside and push your limits",
            "compass",
            "bg-green-600",
            &["hiking-trail", "rock-climbing", "road-trip", "cycling-tour", "outdoor-concert"],
        ),
        theme(
            "family-weekend",
            "Family Weekend",
            "Activities everyone can enjoy together",
            "users",
            "bg-blue-500",
            &["farmers-market", "museum-visit", "bbq-picnic", "board-games", "family-dinner"],
        ),
        theme(
            "cultural-weekend",
            "Cultural Weekend",
            "Museums, galleries and a little history",
            "landmark",
            "bg-pink-500",
            &["museum-visit", "historical-tour", "art-gallery", "documentary-night"],
        ),
        theme(
            "foodie-weekend",
            "Foodie Weekend",
            "Plan the weekend around the next meal",
            "utensils-crossed",
            "bg-orange-500",
            &["brunch-cafe", "farmers-market", "cooking-class", "wine-tasting", "romantic-dinner"],
        ),
    ]
}
