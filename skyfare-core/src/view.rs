//! Composition of the derived views.
//!
//! Every view is recomputed from the catalog and the request; nothing is
//! cached between calls.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skyfare_shared::FlightRecord;

use crate::catalog::Catalog;
use crate::filter::{filter_records, FilterSpec};
use crate::group::{group_by, GroupKey};
use crate::map::{self, Destination, MarkerSize, Origin, PriceTier};
use crate::sort::{sort_records, SortMode};
use crate::translate::Translator;
use crate::CoreError;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Country,
    City,
    Map,
}

impl FromStr for ViewMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "list" => Ok(ViewMode::List),
            "country" => Ok(ViewMode::Country),
            "city" => Ok(ViewMode::City),
            "map" => Ok(ViewMode::Map),
            other => Err(CoreError::ValidationError(format!("unknown view: {other}"))),
        }
    }
}

/// What the user is looking at.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    pub mode: ViewMode,
    pub sort: SortMode,
    pub filter: FilterSpec,
    /// List rows to show; `None` means one page
    pub visible: Option<usize>,
    /// Map continent filter; `None`, empty or `"all"` shows everything
    pub continent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub page_size: usize,
    pub origin: Origin,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            origin: Origin::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupView<'a> {
    pub key: String,
    pub label: String,
    pub country: Option<String>,
    pub country_label: Option<String>,
    pub min_price: i64,
    pub count: usize,
    /// Cheapest first
    pub records: Vec<&'a FlightRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerView<'a> {
    #[serde(flatten)]
    pub destination: Destination<'a>,
    pub city_label: String,
    pub country_label: String,
    pub continent_label: String,
    pub tier: PriceTier,
    pub marker: MarkerSize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum View<'a> {
    /// Nothing passed the filter.
    Empty { total: usize },
    List {
        total: usize,
        matched: usize,
        sort: SortMode,
        remaining: usize,
        flights: Vec<&'a FlightRecord>,
    },
    Grouped {
        by: GroupKey,
        total: usize,
        matched: usize,
        groups: Vec<GroupView<'a>>,
    },
    Map {
        total: usize,
        matched: usize,
        origin: Origin,
        continents: Vec<String>,
        destinations: Vec<MarkerView<'a>>,
    },
}

impl View<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, View::Empty { .. })
    }
}

pub fn compose_view<'a, T>(
    catalog: &'a Catalog,
    request: &ViewRequest,
    translator: &T,
    settings: &ViewSettings,
) -> View<'a>
where
    T: Translator + ?Sized,
{
    let total = catalog.flights().len();
    let matched_flights = filter_records(catalog.flights(), &request.filter, translator);
    let matched = matched_flights.len();

    if matched == 0 {
        return View::Empty { total };
    }

    match request.mode {
        ViewMode::List => {
            let visible = request.visible.unwrap_or(settings.page_size);
            let mut flights = sort_records(matched_flights, request.sort);
            flights.truncate(visible);
            View::List {
                total,
                matched,
                sort: request.sort,
                remaining: matched - flights.len(),
                flights,
            }
        }
        ViewMode::Country | ViewMode::City => {
            let by = match request.mode {
                ViewMode::Country => GroupKey::Country,
                _ => GroupKey::City,
            };
            let groups = group_by(matched_flights, by)
                .into_iter()
                .map(|group| GroupView {
                    label: match by {
                        GroupKey::Country => translator.country(&group.key).to_string(),
                        GroupKey::City => translator.city(&group.key).to_string(),
                    },
                    country_label: group
                        .country
                        .as_deref()
                        .map(|c| translator.country(c).to_string()),
                    records: group.records_by_price(),
                    key: group.key,
                    country: group.country,
                    min_price: group.min_price,
                    count: group.count,
                })
                .collect();
            View::Grouped {
                by,
                total,
                matched,
                groups,
            }
        }
        ViewMode::Map => {
            let all = map::destinations(matched_flights, catalog.airports());
            let continents = map::continents(&all);
            let span = map::price_span(&all);
            let continent = request.continent.as_deref().unwrap_or_default();

            let destinations = all
                .into_iter()
                .filter(|d| map::in_continent(d, continent))
                .map(|mut d| {
                    // Flights behind a marker follow the list ordering.
                    d.records = sort_records(d.records, request.sort);
                    MarkerView {
                        city_label: translator.city(&d.city).to_string(),
                        country_label: translator.country(&d.country).to_string(),
                        continent_label: translator.continent(&d.continent).to_string(),
                        tier: span.map_or(PriceTier::Cheap, |s| PriceTier::classify(d.min_price, s)),
                        marker: MarkerSize::for_count(d.count),
                        destination: d,
                    }
                })
                .collect();

            View::Map {
                total,
                matched,
                origin: settings.origin.clone(),
                continents,
                destinations,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::AirportIndex;
    use crate::filter::Bounds;
    use crate::translate::StaticTranslations;
    use skyfare_shared::AirportRecord;

    fn flight(city: &str, country: &str, price: i64, code: &str) -> FlightRecord {
        FlightRecord {
            city: city.to_string(),
            country: country.to_string(),
            price,
            days: 3,
            outbound_date: "2024-06-01".to_string(),
            airport_code: code.to_string(),
            ..Default::default()
        }
    }

    fn airport(code: &str, city: &str, continent: &str) -> AirportRecord {
        AirportRecord {
            code: code.to_string(),
            name: String::new(),
            city: city.to_string(),
            country: String::new(),
            continent: continent.to_string(),
            region: String::new(),
            longitude: 12.0,
            latitude: 41.0,
            rank: 1,
        }
    }

    fn catalog() -> Catalog {
        let mut flights: Vec<FlightRecord> = (0..25)
            .map(|i| flight("Rome", "Italy", 20000 + i * 100, "FCO"))
            .collect();
        flights.push(flight("Vienna", "Austria", 9000, "VIE"));
        flights.push(flight("Dubai", "United Arab Emirates", 80000, "DXB"));
        flights.push(flight("Atlantis", "Nowhere", 5000, "ZZZ"));

        let airports = AirportIndex::from_records(vec![
            airport("FCO", "Rome", "Europe"),
            airport("VIE", "Vienna", "Europe"),
            airport("DXB", "Dubai", "Asia"),
        ]);
        Catalog::new(flights, airports)
    }

    #[test]
    fn test_list_view_pages_sorted_rows() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();
        let view = compose_view(&catalog, &ViewRequest::default(), &hu, &ViewSettings::default());

        match view {
            View::List { total, matched, remaining, flights, sort } => {
                assert_eq!(total, 28);
                assert_eq!(matched, 28);
                assert_eq!(flights.len(), DEFAULT_PAGE_SIZE);
                assert_eq!(remaining, 8);
                assert_eq!(sort, SortMode::PriceAsc);
                assert_eq!(flights[0].city, "Atlantis");
                assert_eq!(flights[1].city, "Vienna");
            }
            other => panic!("expected list view, got {other:?}"),
        }
    }

    #[test]
    fn test_list_view_respects_visible_count() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();
        let request = ViewRequest {
            sort: SortMode::PriceDesc,
            visible: Some(60),
            ..Default::default()
        };

        match compose_view(&catalog, &request, &hu, &ViewSettings::default()) {
            View::List { flights, remaining, .. } => {
                assert_eq!(flights.len(), 28);
                assert_eq!(remaining, 0);
                assert_eq!(flights[0].city, "Dubai");
            }
            other => panic!("expected list view, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_state_for_every_mode() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();

        for mode in [ViewMode::List, ViewMode::Country, ViewMode::City, ViewMode::Map] {
            let request = ViewRequest {
                mode,
                filter: FilterSpec {
                    price: Bounds::new(1, 10),
                    ..Default::default()
                },
                ..Default::default()
            };
            let view = compose_view(&catalog, &request, &hu, &ViewSettings::default());
            assert!(view.is_empty());
        }
    }

    #[test]
    fn test_grouped_view_labels_and_order() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();
        let request = ViewRequest {
            mode: ViewMode::City,
            ..Default::default()
        };

        match compose_view(&catalog, &request, &hu, &ViewSettings::default()) {
            View::Grouped { by, groups, matched, .. } => {
                assert_eq!(by, GroupKey::City);
                assert_eq!(matched, 28);
                let keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
                assert_eq!(keys, vec!["Atlantis", "Vienna", "Rome", "Dubai"]);

                let vienna = &groups[1];
                assert_eq!(vienna.label, "Bécs");
                assert_eq!(vienna.country.as_deref(), Some("Austria"));
                assert_eq!(vienna.country_label.as_deref(), Some("Ausztria"));

                let rome = &groups[2];
                assert_eq!(rome.count, 25);
                assert!(rome.records.windows(2).all(|w| w[0].price <= w[1].price));
            }
            other => panic!("expected grouped view, got {other:?}"),
        }
    }

    #[test]
    fn test_map_view_skips_unknown_airports() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();
        let request = ViewRequest {
            mode: ViewMode::Map,
            ..Default::default()
        };

        match compose_view(&catalog, &request, &hu, &ViewSettings::default()) {
            View::Map { destinations, continents, matched, origin, .. } => {
                assert_eq!(matched, 28);
                assert_eq!(origin.name, "Budapest");
                assert_eq!(continents, vec!["Asia", "Europe"]);

                let codes: Vec<_> = destinations.iter().map(|m| m.destination.code.as_str()).collect();
                assert_eq!(codes, vec!["VIE", "FCO", "DXB"]);

                assert_eq!(destinations[0].tier, PriceTier::Cheap);
                assert_eq!(destinations[0].city_label, "Bécs");
                assert_eq!(destinations[1].marker, MarkerSize::Medium);
                assert_eq!(destinations[2].tier, PriceTier::Expensive);
            }
            other => panic!("expected map view, got {other:?}"),
        }
    }

    #[test]
    fn test_map_continent_filter_keeps_global_tiers() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();
        let request = ViewRequest {
            mode: ViewMode::Map,
            continent: Some("Europe".to_string()),
            ..Default::default()
        };

        match compose_view(&catalog, &request, &hu, &ViewSettings::default()) {
            View::Map { destinations, continents, .. } => {
                assert_eq!(continents.len(), 2);
                assert_eq!(destinations.len(), 2);
                // Rome stays cheap relative to Dubai even though Dubai is hidden.
                assert_eq!(destinations[1].tier, PriceTier::Cheap);
            }
            other => panic!("expected map view, got {other:?}"),
        }
    }

    #[test]
    fn test_map_destination_flights_follow_sort_and_carry_labels() {
        let flights = vec![
            flight("Rome", "Italy", 30000, "FCO"),
            flight("Rome", "Italy", 10000, "FCO"),
            flight("Rome", "Italy", 20000, "FCO"),
        ];
        let mut fco = airport("FCO", "Rome", "Europe");
        fco.country = "Italy".to_string();
        let catalog = Catalog::new(flights, AirportIndex::from_records(vec![fco]));
        let hu = StaticTranslations::hungarian();

        let prices_for = |sort: SortMode| -> Vec<i64> {
            let request = ViewRequest {
                mode: ViewMode::Map,
                sort,
                ..Default::default()
            };
            match compose_view(&catalog, &request, &hu, &ViewSettings::default()) {
                View::Map { destinations, .. } => {
                    destinations[0].destination.records.iter().map(|f| f.price).collect()
                }
                other => panic!("expected map view, got {other:?}"),
            }
        };
        assert_eq!(prices_for(SortMode::PriceAsc), vec![10000, 20000, 30000]);
        assert_eq!(prices_for(SortMode::PriceDesc), vec![30000, 20000, 10000]);

        let request = ViewRequest {
            mode: ViewMode::Map,
            ..Default::default()
        };
        match compose_view(&catalog, &request, &hu, &ViewSettings::default()) {
            View::Map { destinations, .. } => {
                assert_eq!(destinations[0].city_label, "Róma");
                assert_eq!(destinations[0].country_label, "Olaszország");
                assert_eq!(destinations[0].continent_label, "Európa");
            }
            other => panic!("expected map view, got {other:?}"),
        }
    }

    #[test]
    fn test_view_mode_names() {
        assert_eq!("map".parse::<ViewMode>().ok(), Some(ViewMode::Map));
        assert_eq!("country".parse::<ViewMode>().ok(), Some(ViewMode::Country));
        let err = "region".parse::<ViewMode>().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: unknown view: region");
    }

    #[test]
    fn test_view_serializes_with_kind_tag() {
        let catalog = catalog();
        let hu = StaticTranslations::hungarian();
        let request = ViewRequest {
            mode: ViewMode::Map,
            ..Default::default()
        };
        let view = compose_view(&catalog, &request, &hu, &ViewSettings::default());
        let json = serde_json::to_value(&view).expect("Failed to serialize");

        assert_eq!(json["kind"], "map");
        assert_eq!(json["destinations"][0]["code"], "VIE");
        assert_eq!(json["destinations"][0]["tier"], "cheap");
    }
}
