use anyhow::{Context, Result};
use directories_next::BaseDirs;
use log::{info, warn};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

mod country;

pub use country::{normalize_id, Coordinates, Country, RawCountry, Region};

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
mod tests;

const BUILTIN_CATALOG: &str = include_str!("../../../data/countries.csv");
const CATALOG_FILE_NAME: &str = "countries.csv";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogIssue {
    DuplicateId(String),
    UnknownNeighbor { country_id: String, neighbor_id: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId(id) => write!(f, "Duplicate country id `{}`", id),
            CatalogIssue::UnknownNeighbor {
                country_id,
                neighbor_id,
            } => write!(
                f,
                "Country `{}` lists unknown neighbor `{}`",
                country_id, neighbor_id
            ),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Self {
        let catalog = Catalog { countries };
        for issue in catalog.issues() {
            warn!("{}", issue);
        }
        catalog
    }

    pub fn open(source: &Path) -> Result<Catalog> {
        let file = File::open(source)
            .with_context(|| format!("Could not open catalog `{}`", source.display()))?;
        Catalog::from_reader(file)
            .with_context(|| format!("Could not read catalog `{}`", source.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog> {
        let mut countries = Vec::new();
        let mut csv_reader = csv::Reader::from_reader(reader);
        for country in csv_reader.deserialize() {
            let raw_country: RawCountry = country?;
            countries.push(raw_country.into());
        }
        Ok(Catalog::new(countries))
    }

    pub fn builtin() -> Result<Catalog> {
        Catalog::from_reader(BUILTIN_CATALOG.as_bytes()).context("Built-in catalog is malformed")
    }

    pub fn user_catalog_path() -> Option<PathBuf> {
        let mut path = BaseDirs::new()?.data_dir().to_path_buf();
        path.push("atlas-quiz");
        path.push(CATALOG_FILE_NAME);
        Some(path)
    }

    /// Loads the catalog from an explicit path, the user data directory, or the built-in table, in that order.
    pub fn locate(explicit: Option<&Path>) -> Result<Catalog> {
        if let Some(path) = explicit {
            let catalog = Catalog::open(path)?;
            info!("Loaded {} countries from {}", catalog.len(), path.display());
            return Ok(catalog);
        }
        if let Some(path) = Catalog::user_catalog_path() {
            if path.exists() {
                let catalog = Catalog::open(&path)?;
                info!("Loaded {} countries from {}", catalog.len(), path.display());
                return Ok(catalog);
            }
        }
        let catalog = Catalog::builtin()?;
        info!("Loaded {} countries from built-in catalog", catalog.len());
        Ok(catalog)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Country> {
        let upper_id = id.to_uppercase();
        self.countries
            .iter()
            .find(|c| c.id == id)
            .or_else(|| self.countries.iter().find(|c| c.id == upper_id))
    }

    /// Finds a country by its display name or id, ignoring case, accents and spacing.
    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        let sanitized = country::sanitize_search(name.trim());
        if sanitized.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| country::sanitize_search(&c.name) == sanitized)
            .or_else(|| self.find(&normalize_id(&sanitized)))
    }

    pub fn in_region(&self, region: Region) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|c| c.region == region)
            .collect()
    }

    pub fn search(&self, term: &str) -> Vec<&Country> {
        let term = country::sanitize_search(term.trim());
        if term.is_empty() {
            return self.countries.iter().collect();
        }
        self.countries
            .iter()
            .filter(|c| c.matches_search(&term))
            .collect()
    }

    pub fn neighbors(&self, country: &Country) -> Vec<&Country> {
        country
            .neighbors
            .iter()
            .filter_map(|id| self.find(id))
            .collect()
    }

    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut ids = HashSet::new();
        for country in &self.countries {
            if !ids.insert(country.id.as_str()) {
                issues.push(CatalogIssue::DuplicateId(country.id.clone()));
            }
        }

        for country in &self.countries {
            for neighbor_id in &country.neighbors {
                if !ids.contains(neighbor_id.as_str()) {
                    issues.push(CatalogIssue::UnknownNeighbor {
                        country_id: country.id.clone(),
                        neighbor_id: neighbor_id.clone(),
                    });
                }
            }
        }

        issues
    }
}
