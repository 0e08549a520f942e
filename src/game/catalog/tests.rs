use super::*;

const SAMPLE_CSV: &str = "\
id,name,capital,region,flag,latitude,longitude,description,neighbors,facts
france,France,Paris,westernEurope,🇫🇷,46.2276,2.2137,\"France, in Western Europe.\",belgium|spain| ,Has a tower.|Has cheese.
belgium,Belgium,Brussels,westernEurope,🇧🇪,50.5039,4.4699,Small country.,france|narnia,
spain,Spain,Madrid,southernEurope,🇪🇸,40.4637,-3.7492,Sunny.,france,
";

fn sample_catalog() -> Catalog {
    Catalog::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}

#[test]
fn reads_csv_rows() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 3);

    let france = catalog.find("france").unwrap();
    assert_eq!(france.name, "France");
    assert_eq!(france.capital, "Paris");
    assert_eq!(france.region, Region::WesternEurope);
    assert_eq!(france.description, "France, in Western Europe.");
    assert_eq!(france.coordinates.latitude, 46.2276);
    assert_eq!(france.neighbors, vec!["belgium", "spain"]);
    assert_eq!(france.facts, vec!["Has a tower.", "Has cheese."]);

    let spain = catalog.find("spain").unwrap();
    assert!(spain.facts.is_empty());
}

#[test]
fn rejects_unknown_region() {
    let csv = "\
id,name,capital,region,flag,latitude,longitude,description,neighbors,facts
atlantis,Atlantis,Poseidonia,underTheSea,🌊,0,0,Gone.,,
";
    assert!(Catalog::from_reader(csv.as_bytes()).is_err());
}

#[test]
fn builtin_catalog_loads() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.len(), 46);
    for region in Region::all().iter() {
        assert!(!catalog.in_region(*region).is_empty());
    }
    let san_marino = catalog.find("san_marino").unwrap();
    assert_eq!(san_marino.capital, "San Marino");
}

#[test]
fn builtin_catalog_only_references_turkey_outside_itself() {
    let catalog = Catalog::builtin().unwrap();
    for issue in catalog.issues() {
        match issue {
            CatalogIssue::UnknownNeighbor { neighbor_id, .. } => assert_eq!(neighbor_id, "turkey"),
            CatalogIssue::DuplicateId(id) => panic!("Duplicate id {}", id),
        }
    }
}

#[test]
fn find_falls_back_to_upper_case_id() {
    let catalog = Catalog::new(vec![fixtures::country("UK", "United Kingdom", "London")]);
    assert!(catalog.find("uk").is_some());
    assert!(catalog.find("UK").is_some());
    assert!(catalog.find("gb").is_none());
}

#[test]
fn finds_by_display_name_or_id() {
    let catalog = Catalog::builtin().unwrap();
    let bosnia = catalog.find_by_name("Bosnia and Herzegovina").unwrap();
    assert_eq!(bosnia.id, "bosnia_herzegovina");
    assert_eq!(catalog.find_by_name(" bosnia   herzegovina ").unwrap().id, bosnia.id);
    assert_eq!(catalog.find_by_name("SAN MARINO").unwrap().id, "san_marino");
    assert!(catalog.find_by_name("Atlantis").is_none());
    assert!(catalog.find_by_name("  ").is_none());
    for country in catalog.countries() {
        assert_eq!(catalog.find_by_name(&country.name).unwrap().id, country.id);
    }
}

#[test]
fn filters_by_region() {
    let catalog = sample_catalog();
    let western: Vec<&str> = catalog
        .in_region(Region::WesternEurope)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(western, vec!["france", "belgium"]);
    assert!(catalog.in_region(Region::NorthernEurope).is_empty());
}

#[test]
fn search_matches_name_and_capital() {
    let catalog = sample_catalog();
    let ids = |term: &str| -> Vec<String> {
        catalog
            .search(term)
            .iter()
            .map(|c| c.id.clone())
            .collect()
    };
    assert_eq!(ids("fran"), vec!["france"]);
    assert_eq!(ids("MADRID"), vec!["spain"]);
    assert_eq!(ids("  "), vec!["france", "belgium", "spain"]);
    assert!(ids("tokyo").is_empty());
}

#[test]
fn search_ignores_accents() {
    let catalog = Catalog::builtin().unwrap();
    let results = catalog.search("Reykjavík");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "iceland");
}

#[test]
fn neighbors_skip_unknown_ids() {
    let catalog = sample_catalog();
    let belgium = catalog.find("belgium").unwrap();
    let neighbors: Vec<&str> = catalog
        .neighbors(belgium)
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(neighbors, vec!["france"]);
}

#[test]
fn reports_integrity_issues() {
    let mut countries = sample_catalog().countries().to_vec();
    countries.push(fixtures::country("spain", "Spain again", "Madrid"));
    let catalog = Catalog::new(countries);
    let issues = catalog.issues();
    assert!(issues.contains(&CatalogIssue::DuplicateId("spain".to_owned())));
    assert!(issues.contains(&CatalogIssue::UnknownNeighbor {
        country_id: "belgium".to_owned(),
        neighbor_id: "narnia".to_owned(),
    }));
    assert_eq!(issues.len(), 2);
}

#[test]
fn normalizes_display_names() {
    assert_eq!(normalize_id("San Marino"), "san_marino");
    assert_eq!(normalize_id("Bosnia  and\tHerzegovina"), "bosnia_and_herzegovina");
    assert_eq!(normalize_id("Andorra la Vella"), "andorra_la_vella");
}
