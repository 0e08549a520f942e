use super::*;

pub fn country(id: &str, name: &str, capital: &str) -> Country {
    Country {
        id: id.to_owned(),
        name: name.to_owned(),
        capital: capital.to_owned(),
        region: Region::CentralEurope,
        flag: "🏳".to_owned(),
        coordinates: Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        },
        description: format!("{} is a country.", name),
        neighbors: vec![],
        facts: vec![],
    }
}

pub fn catalog(size: usize) -> Catalog {
    let countries = [
        ("austria", "Austria", "Vienna"),
        ("belgium", "Belgium", "Brussels"),
        ("croatia", "Croatia", "Zagreb"),
        ("denmark", "Denmark", "Copenhagen"),
        ("estonia", "Estonia", "Tallinn"),
        ("finland", "Finland", "Helsinki"),
        ("germany", "Germany", "Berlin"),
        ("hungary", "Hungary", "Budapest"),
        ("ireland", "Ireland", "Dublin"),
        ("san_marino", "San Marino", "San Marino"),
        ("latvia", "Latvia", "Riga"),
        ("malta", "Malta", "Valletta"),
    ];
    assert!(size <= countries.len());
    Catalog::new(
        countries
            .iter()
            .take(size)
            .map(|(id, name, capital)| country(id, name, capital))
            .collect(),
    )
}
