//! Integration tests for the Sheets REST client against a mock server

use mockito::Matcher;
use sheetdash::adapters::sheets::{GoogleSheetsApi, SheetsApi, StaticTokenProvider};
use sheetdash::domain::{SheetCoordinates, SheetsError};
use std::sync::Arc;

fn api_for(server: &mockito::ServerGuard) -> GoogleSheetsApi {
    GoogleSheetsApi::new(
        &format!("{}/v4", server.url()),
        5,
        Arc::new(StaticTokenProvider::new("test-token")),
    )
    .unwrap()
}

fn coords(sheet: &str, range: &str) -> SheetCoordinates {
    SheetCoordinates::new("sheet-abc", sheet, range).unwrap()
}

#[tokio::test]
async fn test_get_values_sends_bearer_token_and_parses_grid() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/spreadsheets/sheet-abc/values/Cohort!A1:E100")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "range": "Cohort!A1:E100",
                "majorDimension": "ROWS",
                "values": [
                    ["COHORT", "USERS", "RETENTION_D1"],
                    ["2024-01", "1000", "45%"],
                    ["2024-02", "1200"]
                ]
            }"#,
        )
        .create_async()
        .await;

    let grid = api_for(&server)
        .get_values(&coords("Cohort", "A1:E100"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(grid.len(), 3);
    assert_eq!(grid[0], vec!["COHORT", "USERS", "RETENTION_D1"]);
    assert_eq!(grid[2], vec!["2024-02", "1200"]);
}

#[tokio::test]
async fn test_get_values_without_values_field_is_empty() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v4/spreadsheets/sheet-abc/values/Empty!A1:Z1000")
        .with_status(200)
        .with_body(r#"{"range": "Empty!A1:Z1000", "majorDimension": "ROWS"}"#)
        .create_async()
        .await;

    let grid = api_for(&server)
        .get_values(&coords("Empty", "A1:Z1000"))
        .await
        .unwrap();
    assert!(grid.is_empty());
}

#[tokio::test]
async fn test_quoted_sheet_name_in_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/spreadsheets/sheet-abc/values/'Ad%20Spend'!A1:B2")
        .with_status(200)
        .with_body(r#"{"values": [["DAY", "SPEND"]]}"#)
        .create_async()
        .await;

    let grid = api_for(&server)
        .get_values(&coords("Ad Spend", "A1:B2"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(grid, vec![vec!["DAY", "SPEND"]]);
}

#[tokio::test]
async fn test_error_status_is_remote_fetch_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Regex(r"^/v4/spreadsheets/sheet-abc/values/.*$".to_string()))
        .with_status(403)
        .with_body(
            r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#,
        )
        .create_async()
        .await;

    let err = api_for(&server)
        .get_values(&coords("Cohort", "A1:E100"))
        .await
        .unwrap_err();

    match err {
        SheetsError::RemoteFetchFailed { sheet_name, cause } => {
            assert_eq!(sheet_name, "Cohort");
            assert!(cause.contains("403"));
            assert!(cause.contains("does not have permission"));
        }
        other => panic!("Expected RemoteFetchFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_invalid_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v4/spreadsheets/sheet-abc/values/Cohort!A1:E100")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = api_for(&server)
        .get_values(&coords("Cohort", "A1:E100"))
        .await
        .unwrap_err();
    assert!(matches!(err, SheetsError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_remote_fetch_failure() {
    let api = GoogleSheetsApi::new(
        "http://127.0.0.1:9/v4",
        2,
        Arc::new(StaticTokenProvider::new("t")),
    )
    .unwrap();

    let err = api
        .get_values(&coords("Cohort", "A1:E100"))
        .await
        .unwrap_err();
    assert!(matches!(err, SheetsError::RemoteFetchFailed { .. }));
}

#[tokio::test]
async fn test_get_sheets_parses_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v4/spreadsheets/sheet-abc")
        .match_query(Matcher::UrlEncoded(
            "fields".to_string(),
            "sheets.properties".to_string(),
        ))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(
            r#"{
                "sheets": [
                    {"properties": {"sheetId": 0, "title": "Cohort", "index": 0,
                        "gridProperties": {"rowCount": 100, "columnCount": 5}}},
                    {"properties": {"sheetId": 7, "title": "Monetization", "index": 1,
                        "gridProperties": {"rowCount": 50, "columnCount": 6, "frozenRowCount": 1}}}
                ]
            }"#,
        )
        .create_async()
        .await;

    let sheets = api_for(&server).get_sheets("sheet-abc").await.unwrap();

    mock.assert_async().await;
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[1].name, "Monetization");
    assert_eq!(sheets[1].row_count, 50);
    assert_eq!(sheets[1].column_count, 6);
}

#[tokio::test]
async fn test_get_sheets_failure_names_spreadsheet() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/v4/spreadsheets/sheet-abc")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error": {"code": 404, "message": "Requested entity was not found."}}"#)
        .create_async()
        .await;

    let err = api_for(&server).get_sheets("sheet-abc").await.unwrap_err();
    match err {
        SheetsError::RemoteFetchFailed { sheet_name, cause } => {
            assert_eq!(sheet_name, "spreadsheet sheet-abc");
            assert!(cause.contains("not found"));
        }
        other => panic!("Expected RemoteFetchFailed, got {other:?}"),
    }
}
