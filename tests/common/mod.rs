//! Shared fixtures for the open-data integration tests

#![allow(dead_code)]

use heritage::config::OpenDataConfig;
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const ARMENTIERES: &str = "monuments-historiques-armentieres";
pub const LILLE: &str = "monuments-historiques-lille";
pub const ROUBAIX: &str = "liste-monuments-historiques-de-roubaix";

/// Catalog configuration pointing at the mock server
pub fn config_for(server: &ServerGuard) -> OpenDataConfig {
    OpenDataConfig {
        base_url: format!("{}/catalog/datasets", server.url()),
        ..Default::default()
    }
}

pub fn records_path(dataset: &str) -> String {
    format!("/catalog/datasets/{dataset}/records")
}

pub fn envelope(results: Value) -> String {
    let count = results.as_array().map(|a| a.len()).unwrap_or(0);
    json!({ "total_count": count, "results": results }).to_string()
}

pub fn armentieres_body() -> String {
    envelope(json!([
        {
            "appellation_courante": "Eglise Saint-Vaast",
            "coordonnees_geographiques": { "lat": 50.6881, "lon": 2.8813 },
            "datation": 1882,
            "commune": "Armentières",
            "photo": { "id": "a1" }
        },
        {
            "appellation_courante": "Hôtel de ville",
            "coordonnees_geographiques": null,
            "datation": "1925",
            "commune": "Armentières",
            "photo": { "id": 42 }
        }
    ]))
}

pub fn roubaix_body() -> String {
    envelope(json!([
        {
            "monum_his_com_id": 7,
            "lat": 0,
            "long": 3.17,
            "appellation_courante": "Usine Motte-Bossut",
            "epoque": 1853,
            "commune": "Roubaix"
        }
    ]))
}

pub fn lille_page(offset: usize) -> String {
    if offset == 0 {
        envelope(json!([
            {
                "id_merimee": "PA00107422",
                "coord_geo": "50.5, 3.1",
                "denomination": "Maison natale du Général de Gaulle",
                "datation_bati_lmcu": "1872",
                "commune": "Lille"
            }
        ]))
    } else {
        envelope(json!([]))
    }
}

pub async fn mock_dataset(server: &mut ServerGuard, dataset: &str, body: String) -> Mock {
    server
        .mock("GET", records_path(dataset).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn mock_lille_page(server: &mut ServerGuard, offset: usize, body: String) -> Mock {
    server
        .mock("GET", records_path(LILLE).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "100".into()),
            Matcher::UrlEncoded("offset".into(), offset.to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Mocks every dataset with the standard fixtures
pub async fn mock_catalog(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = vec![
        mock_dataset(server, ARMENTIERES, armentieres_body()).await,
        mock_dataset(server, ROUBAIX, roubaix_body()).await,
    ];
    for offset in [0, 100, 200, 300] {
        mocks.push(mock_lille_page(server, offset, lille_page(offset)).await);
    }
    mocks
}
