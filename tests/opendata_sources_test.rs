//! Integration tests for the dataset sources against a mock catalog

mod common;

use common::*;
use heritage::adapters::opendata::{
    ArmentieresSource, LilleSource, MonumentSource, OpenDataClient, RoubaixSource,
};
use heritage::domain::FetchError;
use mockito::Server;

#[tokio::test]
async fn test_armentieres_normalization() {
    let mut server = Server::new_async().await;
    let mock = mock_dataset(&mut server, ARMENTIERES, armentieres_body()).await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let monuments = ArmentieresSource::new(client, ARMENTIERES)
        .fetch_monuments()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(monuments.len(), 2);

    assert_eq!(monuments[0].id, "a1");
    assert_eq!(monuments[0].kind, "Eglise");
    assert_eq!(monuments[0].lat, Some(50.6881));
    assert_eq!(monuments[0].long, Some(2.8813));
    assert_eq!(monuments[0].date, Some(1882));
    assert_eq!(monuments[0].ville.as_deref(), Some("Armentières"));

    // Numeric photo id, text datation, no coordinates
    assert_eq!(monuments[1].id, "42");
    assert_eq!(monuments[1].kind, "Hôtel");
    assert_eq!(monuments[1].date, Some(1925));
    assert_eq!(monuments[1].coordinates(), None);
}

#[tokio::test]
async fn test_lille_fetches_every_page() {
    let mut server = Server::new_async().await;
    let mut mocks = Vec::new();
    for offset in [0, 100, 200, 300] {
        mocks.push(mock_lille_page(&mut server, offset, lille_page(offset)).await);
    }

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let monuments = LilleSource::new(client, LILLE, 4)
        .fetch_monuments()
        .await
        .unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }

    assert_eq!(monuments.len(), 1);
    let maison = &monuments[0];
    assert_eq!(maison.id, "PA00107422");
    assert_eq!(maison.kind, "Maison");
    assert_eq!(maison.lat, Some(50.5));
    assert_eq!(maison.long, Some(3.1));
    assert_eq!(maison.date, Some(1872));
}

#[tokio::test]
async fn test_lille_pages_keep_offset_order() {
    let mut server = Server::new_async().await;
    let page = |id: &str| {
        envelope(serde_json::json!([
            { "id_merimee": id, "denomination": "Maison", "commune": "Lille" }
        ]))
    };
    mock_lille_page(&mut server, 0, page("p0")).await;
    mock_lille_page(&mut server, 100, page("p1")).await;
    mock_lille_page(&mut server, 200, page("p2")).await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let monuments = LilleSource::new(client, LILLE, 3)
        .fetch_monuments()
        .await
        .unwrap();

    let ids: Vec<&str> = monuments.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["p0", "p1", "p2"]);
}

#[tokio::test]
async fn test_roubaix_zero_latitude_is_absent() {
    let mut server = Server::new_async().await;
    mock_dataset(&mut server, ROUBAIX, roubaix_body()).await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let monuments = RoubaixSource::new(client, ROUBAIX)
        .fetch_monuments()
        .await
        .unwrap();

    assert_eq!(monuments.len(), 1);
    assert_eq!(monuments[0].id, "7");
    assert_eq!(monuments[0].lat, None);
    assert_eq!(monuments[0].long, Some(3.17));
    assert_eq!(monuments[0].date, Some(1853));
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", records_path(ROUBAIX).as_str())
        .match_query(mockito::Matcher::Any)
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let err = RoubaixSource::new(client, ROUBAIX)
        .fetch_monuments()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::ServerError { status: 503, .. }));
}

#[tokio::test]
async fn test_not_found_is_client_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", records_path(ARMENTIERES).as_str())
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let err = ArmentieresSource::new(client, ARMENTIERES)
        .fetch_monuments()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::ClientError { status: 404, .. }));
}

#[tokio::test]
async fn test_record_without_name_is_invalid_response() {
    let mut server = Server::new_async().await;
    mock_dataset(
        &mut server,
        ROUBAIX,
        envelope(serde_json::json!([{ "monum_his_com_id": 1, "commune": "Roubaix" }])),
    )
    .await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let err = RoubaixSource::new(client, ROUBAIX)
        .fetch_monuments()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_body_without_results_is_invalid_response() {
    let mut server = Server::new_async().await;
    mock_dataset(&mut server, ARMENTIERES, r#"{"error_code": "x"}"#.to_string()).await;

    let client = OpenDataClient::new(&config_for(&server)).unwrap();
    let err = ArmentieresSource::new(client, ARMENTIERES)
        .fetch_monuments()
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::InvalidResponse(_)));
}
