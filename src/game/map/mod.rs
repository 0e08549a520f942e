use std::collections::HashMap;

use crate::game::catalog::{normalize_id, Country};


pub const UNRESOLVED_ID: &str = "error";

/// A clickable shape on the map, described by the properties of its source geometry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Geography {
    pub properties: HashMap<String, String>,
}

impl Geography {
    pub fn named(name: &str) -> Self {
        let mut properties = HashMap::new();
        properties.insert("name".to_owned(), name.to_owned());
        Geography { properties }
    }

    /// The shape the map layer draws for `country`. Shape names follow catalog ids, not display names.
    pub fn of(country: &Country) -> Self {
        Geography::named(&country.id.replace('_', " "))
    }

    pub fn name(&self) -> Option<&str> {
        self.properties
            .get("NAME")
            .or_else(|| self.properties.get("name"))
            .map(|n| n.as_str())
            .filter(|n| !n.trim().is_empty())
    }

    pub fn country_id(&self) -> Option<String> {
        self.name().map(normalize_id)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MapResolution {
    pub is_correct: bool,
    pub resolved_id: String,
}

impl MapResolution {
    pub fn is_resolved(&self) -> bool {
        self.resolved_id != UNRESOLVED_ID
    }
}

pub fn resolve(geography: &Geography, target: &Country) -> MapResolution {
    match geography.country_id() {
        Some(resolved_id) => MapResolution {
            is_correct: resolved_id == target.id,
            resolved_id,
        },
        None => MapResolution {
            is_correct: false,
            resolved_id: UNRESOLVED_ID.to_owned(),
        },
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Highlight {
    Correct,
    Wrong,
    Selected,
    Default,
}

/// How a shape should be painted while the player looks for `target`.
pub fn highlight(
    geography: &Geography,
    target: &Country,
    selected_id: Option<&str>,
    revealed: bool,
) -> Highlight {
    let id = match geography.country_id() {
        Some(id) => id,
        None => return Highlight::Default,
    };
    let is_selected = selected_id == Some(id.as_str());
    if revealed {
        if id == target.id {
            Highlight::Correct
        } else if is_selected {
            Highlight::Wrong
        } else {
            Highlight::Default
        }
    } else if is_selected {
        Highlight::Selected
    } else {
        Highlight::Default
    }
}
