//! End-to-end tests of the monument service over a mock catalog

mod common;

use common::*;
use heritage::core::MonumentService;
use heritage::domain::{HeritageError, MonumentQuery};
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_aggregation_order_and_count() {
    let mut server = Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;

    let service = MonumentService::from_config(&config_for(&server)).unwrap();
    let monuments = service
        .get_all_monuments(&MonumentQuery::new())
        .await
        .unwrap();

    let ids: Vec<&str> = monuments.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "42", "PA00107422", "7"]);
}

#[tokio::test]
async fn test_filters_over_live_sources() {
    let mut server = Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;

    let service = MonumentService::from_config(&config_for(&server)).unwrap();

    let eighteen_eighties = service
        .get_all_monuments(&MonumentQuery::new().with_date("1880"))
        .await
        .unwrap();
    assert_eq!(eighteen_eighties.len(), 1);
    assert_eq!(eighteen_eighties[0].id, "a1");

    let near_saint_vaast = service
        .get_all_monuments(
            &MonumentQuery::new()
                .with_center(50.6881, 2.8813)
                .with_radius(1_000.0),
        )
        .await
        .unwrap();
    assert_eq!(near_saint_vaast.len(), 1);

    let exact = service
        .get_all_monuments(&MonumentQuery::new().with_center(50.5, 3.1))
        .await
        .unwrap();
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].id, "PA00107422");

    let in_armentieres = service
        .get_all_monuments(&MonumentQuery::new().with_ville("ARMENTIÈRES"))
        .await
        .unwrap();
    assert_eq!(in_armentieres.len(), 2);
}

#[tokio::test]
async fn test_favorites_and_types() {
    let mut server = Server::new_async().await;
    let _mocks = mock_catalog(&mut server).await;

    let service = MonumentService::from_config(&config_for(&server)).unwrap();
    service
        .get_all_monuments(&MonumentQuery::new().with_kind("usine"))
        .await
        .unwrap();

    let favorite = service.add_to_favorites("PA00107422").await.unwrap();
    assert_eq!(favorite.kind, "Maison");

    let err = service.add_to_favorites("PA00107422").await.unwrap_err();
    assert!(matches!(err, HeritageError::AlreadyFavorited(_)));
    assert_eq!(err.status_code(), 409);

    let err = service.add_to_favorites("missing").await.unwrap_err();
    assert!(matches!(err, HeritageError::NotFound(_)));
    assert_eq!(err.status_code(), 400);

    let types = service.list_types().await;
    let kinds: Vec<&str> = types.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds, vec!["eglise", "hôtel", "maison", "usine"]);
    let ids: Vec<usize> = types.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_one_failing_dataset_fails_the_request() {
    let mut server = Server::new_async().await;
    mock_dataset(&mut server, ARMENTIERES, armentieres_body()).await;
    mock_dataset(&mut server, ROUBAIX, roubaix_body()).await;
    server
        .mock("GET", records_path(LILLE).as_str())
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let service = MonumentService::from_config(&config_for(&server)).unwrap();
    let err = service
        .get_all_monuments(&MonumentQuery::new())
        .await
        .unwrap_err();

    match &err {
        HeritageError::Aggregation { source_name, .. } => assert_eq!(source_name, "lille"),
        other => panic!("Expected Aggregation error, got {other:?}"),
    }
    assert_eq!(err.status_code(), 502);
    assert_eq!(service.working_set_len().await, 0);
}

#[tokio::test]
async fn test_invalid_query_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = MonumentService::from_config(&config_for(&server)).unwrap();
    let err = service
        .get_all_monuments(&MonumentQuery::new().with_radius(100.0))
        .await
        .unwrap_err();

    assert!(matches!(err, HeritageError::Validation(_)));
    mock.assert_async().await;
}
