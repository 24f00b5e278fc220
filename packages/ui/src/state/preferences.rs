//! View-model for the travel preferences form.
//!
//! The form only ever holds values present in the option set it was built from:
//! saved values the backend no longer offers are dropped on load, and unknown
//! values passed to the setters are ignored.

use store::{PreferenceOption, PreferenceOptionSet, UserPreferences};

/// Fields rendered as a `<select>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SingleChoice {
    Budget,
    Pace,
    AccommodationStyle,
    Season,
}

impl SingleChoice {
    pub const ALL: [SingleChoice; 4] = [
        SingleChoice::Budget,
        SingleChoice::Pace,
        SingleChoice::AccommodationStyle,
        SingleChoice::Season,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SingleChoice::Budget => "Budget",
            SingleChoice::Pace => "Travel Pace",
            SingleChoice::AccommodationStyle => "Accommodation Style",
            SingleChoice::Season => "Preferred Season",
        }
    }

    /// DOM id / JSON field name.
    pub fn key(self) -> &'static str {
        match self {
            SingleChoice::Budget => "budget",
            SingleChoice::Pace => "pace",
            SingleChoice::AccommodationStyle => "accommodationStyle",
            SingleChoice::Season => "season",
        }
    }

    pub fn options(self, set: &PreferenceOptionSet) -> &[PreferenceOption] {
        match self {
            SingleChoice::Budget => &set.budget,
            SingleChoice::Pace => &set.pace,
            SingleChoice::AccommodationStyle => &set.accommodation_style,
            SingleChoice::Season => &set.season,
        }
    }
}

/// Fields rendered as a checkbox group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MultiChoice {
    Interests,
    Transport,
    FoodPreferences,
}

impl MultiChoice {
    pub const ALL: [MultiChoice; 3] = [
        MultiChoice::Interests,
        MultiChoice::Transport,
        MultiChoice::FoodPreferences,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MultiChoice::Interests => "Interests",
            MultiChoice::Transport => "Preferred Transport",
            MultiChoice::FoodPreferences => "Food Preferences",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MultiChoice::Interests => "interests",
            MultiChoice::Transport => "transport",
            MultiChoice::FoodPreferences => "foodPreferences",
        }
    }

    pub fn options(self, set: &PreferenceOptionSet) -> &[PreferenceOption] {
        match self {
            MultiChoice::Interests => &set.interests,
            MultiChoice::Transport => &set.transport,
            MultiChoice::FoodPreferences => &set.food_preferences,
        }
    }
}

fn offers(options: &[PreferenceOption], value: &str) -> bool {
    options.iter().any(|option| option.value == value)
}

/// Current selections. `""` means nothing picked for a single-choice field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreferencesForm {
    pub options: PreferenceOptionSet,
    budget: String,
    pace: String,
    accommodation_style: String,
    season: String,
    interests: Vec<String>,
    transport: Vec<String>,
    food_preferences: Vec<String>,
}

impl PreferencesForm {
    /// An empty form over `options`, then `saved` applied if there is one.
    pub fn new(options: PreferenceOptionSet, saved: Option<&UserPreferences>) -> Self {
        let mut form = Self {
            options,
            ..Default::default()
        };
        if let Some(saved) = saved {
            form.apply(saved);
        }
        form
    }

    fn apply(&mut self, saved: &UserPreferences) {
        let singles = [
            (SingleChoice::Budget, &saved.budget),
            (SingleChoice::Pace, &saved.pace),
            (SingleChoice::AccommodationStyle, &saved.accommodation_style),
            (SingleChoice::Season, &saved.season),
        ];
        for (field, value) in singles {
            if let Some(value) = value {
                self.set_single(field, value);
            }
        }

        let multis = [
            (MultiChoice::Interests, &saved.interests),
            (MultiChoice::Transport, &saved.transport),
            (MultiChoice::FoodPreferences, &saved.food_preferences),
        ];
        for (field, values) in multis {
            for value in values {
                self.toggle(field, value, true);
            }
        }
    }

    fn single_slot(&mut self, field: SingleChoice) -> &mut String {
        match field {
            SingleChoice::Budget => &mut self.budget,
            SingleChoice::Pace => &mut self.pace,
            SingleChoice::AccommodationStyle => &mut self.accommodation_style,
            SingleChoice::Season => &mut self.season,
        }
    }

    fn multi_slot(&mut self, field: MultiChoice) -> &mut Vec<String> {
        match field {
            MultiChoice::Interests => &mut self.interests,
            MultiChoice::Transport => &mut self.transport,
            MultiChoice::FoodPreferences => &mut self.food_preferences,
        }
    }

    pub fn single(&self, field: SingleChoice) -> &str {
        match field {
            SingleChoice::Budget => &self.budget,
            SingleChoice::Pace => &self.pace,
            SingleChoice::AccommodationStyle => &self.accommodation_style,
            SingleChoice::Season => &self.season,
        }
    }

    /// Pick `value`, or clear the field with `""`.
    pub fn set_single(&mut self, field: SingleChoice, value: &str) {
        if !value.is_empty() && !offers(field.options(&self.options), value) {
            return;
        }
        *self.single_slot(field) = value.to_string();
    }

    pub fn is_checked(&self, field: MultiChoice, value: &str) -> bool {
        let selected = match field {
            MultiChoice::Interests => &self.interests,
            MultiChoice::Transport => &self.transport,
            MultiChoice::FoodPreferences => &self.food_preferences,
        };
        selected.iter().any(|v| v == value)
    }

    pub fn toggle(&mut self, field: MultiChoice, value: &str, checked: bool) {
        if !offers(field.options(&self.options), value) {
            return;
        }
        let already = self.is_checked(field, value);
        let slot = self.multi_slot(field);
        if checked && !already {
            slot.push(value.to_string());
        } else if !checked {
            slot.retain(|v| v != value);
        }
    }

    /// Request body. Empty singles become `None`; checked values keep option order.
    pub fn to_preferences(&self) -> UserPreferences {
        let single = |field: SingleChoice| {
            let value = self.single(field);
            (!value.is_empty()).then(|| value.to_string())
        };
        let multi = |field: MultiChoice| {
            field
                .options(&self.options)
                .iter()
                .filter(|option| self.is_checked(field, &option.value))
                .map(|option| option.value.clone())
                .collect::<Vec<_>>()
        };

        UserPreferences {
            budget: single(SingleChoice::Budget),
            pace: single(SingleChoice::Pace),
            interests: multi(MultiChoice::Interests),
            accommodation_style: single(SingleChoice::AccommodationStyle),
            transport: multi(MultiChoice::Transport),
            food_preferences: multi(MultiChoice::FoodPreferences),
            season: single(SingleChoice::Season),
        }
    }
}
