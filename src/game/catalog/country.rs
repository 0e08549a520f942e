use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use unidecode::unidecode;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
    static ref FORBIDDEN_SEARCH_CHARACTERS_REGEX: Regex = Regex::new("[^a-z0-9 ]").unwrap();
}

/// Turns a display name into a catalog identifier: lower case, whitespace runs become `_`.
pub fn normalize_id(text: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(&text.to_lowercase(), "_")
        .into()
}

pub(super) fn sanitize_search(text: &str) -> String {
    let text = unidecode(text);
    FORBIDDEN_SEARCH_CHARACTERS_REGEX
        .replace_all(&text.to_lowercase(), "")
        .into()
}

fn split_list(list: &str) -> Vec<String> {
    list.split('|')
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_owned())
        .collect()
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    NorthernEurope,
    SouthernEurope,
    WesternEurope,
    EasternEurope,
    CentralEurope,
}

impl Region {
    pub fn all() -> [Region; 5] {
        [
            Region::NorthernEurope,
            Region::SouthernEurope,
            Region::WesternEurope,
            Region::EasternEurope,
            Region::CentralEurope,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::NorthernEurope => "Northern Europe",
            Region::SouthernEurope => "Southern Europe",
            Region::WesternEurope => "Western Europe",
            Region::EasternEurope => "Eastern Europe",
            Region::CentralEurope => "Central Europe",
        };
        write!(f, "{}", label)
    }
}

#[derive(Deserialize)]
pub struct RawCountry {
    pub id: String,
    pub name: String,
    pub capital: String,
    pub region: Region,
    pub flag: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub neighbors: String,
    pub facts: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Country {
    pub id: String,
    pub name: String,
    pub capital: String,
    pub region: Region,
    pub flag: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub neighbors: Vec<String>,
    pub facts: Vec<String>,
}

impl Country {
    pub fn capital_id(&self) -> String {
        normalize_id(&self.capital)
    }

    pub fn matches_search(&self, sanitized_term: &str) -> bool {
        sanitize_search(&self.name).contains(sanitized_term)
            || sanitize_search(&self.capital).contains(sanitized_term)
    }
}

impl From<RawCountry> for Country {
    fn from(raw_country: RawCountry) -> Self {
        Country {
            id: raw_country.id.trim().to_owned(),
            name: raw_country.name,
            capital: raw_country.capital,
            region: raw_country.region,
            flag: raw_country.flag,
            coordinates: Coordinates {
                latitude: raw_country.latitude,
                longitude: raw_country.longitude,
            },
            description: raw_country.description,
            neighbors: split_list(&raw_country.neighbors),
            facts: raw_country
                .facts
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
        }
    }
}
