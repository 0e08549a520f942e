use crate::game::catalog::Country;

/// Text lookup supplied by the presentation layer, keyed the same way as its translation files.
pub trait Labels {
    fn lookup(&self, key: &str, fallback: &str) -> String;

    fn country_name(&self, country: &Country) -> String {
        self.lookup(&format!("countryNames.{}", country.id), &country.name)
    }

    fn capital_name(&self, country: &Country) -> String {
        self.lookup(
            &format!("capitalNames.{}", country.capital_id()),
            &country.capital,
        )
    }

    fn prompt(&self, key: &str, fallback: &str, country_name: &str) -> String {
        self.lookup(key, fallback)
            .replace("{{country}}", country_name)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Untranslated;

impl Labels for Untranslated {
    fn lookup(&self, _key: &str, fallback: &str) -> String {
        fallback.to_owned()
    }
}
