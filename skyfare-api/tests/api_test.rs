use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use skyfare_api::{app, AppState, DataState};
use skyfare_core::{Catalog, StaticTranslations, ViewSettings};
use tower::ServiceExt;

const FLIGHTS: &str = "\
varos,ar,napok,orszag,indulas,indulas_nap,indulas_ido,indulas_napszak,vissza,vissza_nap,vissza_ido,vissza_napszak,atszallas_oda,atszallas_vissza,repter_id,link
Paris,50000,3,France,2024-06-01,Saturday,10:00,reggel,2024-06-04,Tuesday,14:00,este,0,0,CDG,https://x.com?a=1,b=2
Rome,30000,4,Italy,2024-06-07,Friday,06:00,hajnal,2024-06-11,Tuesday,20:00,este,1,0,FCO,https://y.com
Milan,45000,2,Italy,2024-05-20,Monday,12:00,delutan,2024-05-22,Wednesday,09:00,reggel,0,0,MXP,https://z.com
";

const AIRPORTS: &str = "\
id,name,city,country,continent,region,lon,lat,rank
CDG,Charles de Gaulle,Paris,France,Europe,Western Europe,2.55,49.0097,1
FCO,Fiumicino,Rome,Italy,Europe,Southern Europe,12.2389,41.8003,1
";

fn ready_app() -> Router {
    let catalog = Catalog::decode(FLIGHTS, AIRPORTS);
    app(AppState::new(
        DataState::Ready(Arc::new(catalog)),
        StaticTranslations::hungarian(),
        ViewSettings::default(),
    ))
}

fn failed_app() -> Router {
    app(AppState::new(
        DataState::Failed("Failed to load flight data: connection reset".to_string()),
        StaticTranslations::hungarian(),
        ViewSettings::default(),
    ))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).expect("response should be JSON");
    (status, body)
}

#[tokio::test]
async fn test_health_reports_load_state() {
    let (status, body) = get(ready_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = get(failed_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_stats() {
    let (status, body) = get(ready_app(), "/v1/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["countries"], serde_json::json!(["France", "Italy"]));
    assert_eq!(body["price_range"]["min"], 30000);
    assert_eq!(body["price_range"]["max"], 50000);
    assert_eq!(body["days_range"]["min"], 2);
    assert_eq!(body["continents"], serde_json::json!(["Europe"]));
    assert_eq!(
        body["regions"],
        serde_json::json!(["Southern Europe", "Western Europe"])
    );
}

#[tokio::test]
async fn test_default_view_is_price_sorted_list() {
    let (status, body) = get(ready_app(), "/v1/view").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "list");
    assert_eq!(body["filters_active"], false);
    assert_eq!(body["total"], 3);
    assert_eq!(body["matched"], 3);
    assert_eq!(body["remaining"], 0);

    let cities: Vec<_> = body["flights"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["city"].as_str().unwrap())
        .collect();
    assert_eq!(cities, vec!["Rome", "Milan", "Paris"]);
    assert_eq!(body["flights"][2]["link"], "https://x.com?a=1,b=2");
}

#[tokio::test]
async fn test_view_sort_and_paging() {
    let (_, body) = get(ready_app(), "/v1/view?sort=date-asc&visible=1").await;
    assert_eq!(body["sort"], "date-asc");
    assert_eq!(body["remaining"], 2);
    assert_eq!(body["flights"][0]["city"], "Milan");
}

#[tokio::test]
async fn test_search_matches_translated_country() {
    let (_, body) = get(ready_app(), "/v1/view?q=franci").await;
    assert_eq!(body["matched"], 1);
    assert_eq!(body["flights"][0]["city"], "Paris");
}

#[tokio::test]
async fn test_filters_combine() {
    let (_, body) = get(ready_app(), "/v1/view?country=Italy&direct_only=true").await;
    assert_eq!(body["filters_active"], true);
    assert_eq!(body["matched"], 1);
    assert_eq!(body["flights"][0]["city"], "Milan");

    let (_, body) = get(ready_app(), "/v1/view?max_price=40000").await;
    assert_eq!(body["matched"], 1);
    assert_eq!(body["flights"][0]["city"], "Rome");
}

#[tokio::test]
async fn test_no_matches_is_empty_view() {
    let (status, body) = get(ready_app(), "/v1/view?q=atlantis").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "empty");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_grouped_by_country() {
    let (_, body) = get(ready_app(), "/v1/view?view=country").await;
    assert_eq!(body["kind"], "grouped");
    assert_eq!(body["by"], "country");

    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["key"], "Italy");
    assert_eq!(groups[0]["label"], "Olaszország");
    assert_eq!(groups[0]["count"], 2);
    assert_eq!(groups[0]["min_price"], 30000);
    assert_eq!(groups[1]["key"], "France");
}

#[tokio::test]
async fn test_map_skips_unknown_airports() {
    let (_, body) = get(ready_app(), "/v1/view?view=map").await;
    assert_eq!(body["kind"], "map");
    assert_eq!(body["origin"]["name"], "Budapest");

    let destinations = body["destinations"].as_array().unwrap();
    // MXP has no airport row.
    assert_eq!(destinations.len(), 2);
    assert_eq!(destinations[0]["code"], "FCO");
    assert_eq!(destinations[0]["tier"], "cheap");
    assert_eq!(destinations[0]["continent_label"], "Európa");
    assert_eq!(destinations[1]["city_label"], "Párizs");
    assert_eq!(destinations[1]["country_label"], "Franciaország");
    assert_eq!(destinations[1]["tier"], "expensive");
}

#[tokio::test]
async fn test_unknown_view_or_sort_is_rejected() {
    let (status, body) = get(ready_app(), "/v1/view?sort=cheapest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: unknown sort mode: cheapest");

    let (status, body) = get(ready_app(), "/v1/view?view=globe").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation failed: unknown view: globe");
}

#[tokio::test]
async fn test_airport_lookup() {
    let (status, body) = get(ready_app(), "/v1/airports/CDG").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Charles de Gaulle");

    let (status, body) = get(ready_app(), "/v1/airports/MXP").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Airport MXP not found");
}

#[tokio::test]
async fn test_failed_load_is_served_as_unavailable() {
    for uri in ["/v1/stats", "/v1/view", "/v1/airports/CDG"] {
        let (status, body) = get(failed_app(), uri).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "Failed to load flight data: connection reset");
    }
}
