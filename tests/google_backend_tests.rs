//! Google backend tests
//!
//! Runs the Drive and Sheets client against a local mockito server, so the
//! request shapes and error mapping are checked without real credentials.

use love_sandwiches::sheets::{Document, GoogleClient, GoogleDocument, Worksheet};
use love_sandwiches::SandwichError;
use mockito::{Matcher, Mock, Server, ServerGuard};
use pretty_assertions::assert_eq;
use reqwest::blocking::Client;
use serde_json::json;

const SPREADSHEET_ID: &str = "sheet-id";
const SHEET_TITLES: &str = r#"{"sheets": [
    {"properties": {"title": "sales"}},
    {"properties": {"title": "surplus"}},
    {"properties": {"title": "stock"}}
]}"#;

fn client(server: &ServerGuard) -> GoogleClient {
    GoogleClient::with_token(Client::new(), "test-token").with_endpoints(
        &format!("{}/drive/v3/files", server.url()),
        &format!("{}/v4/spreadsheets", server.url()),
    )
}

fn drive_list(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", "/drive/v3/files")
        .match_header("authorization", "Bearer test-token")
        .match_query(Matcher::UrlEncoded(
            "q".into(),
            "name = 'love_sandwiches' and mimeType = 'application/vnd.google-apps.spreadsheet' and trashed = false".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

fn sheet_titles(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", format!("/v4/spreadsheets/{SPREADSHEET_ID}").as_str())
        .match_query(Matcher::UrlEncoded(
            "fields".into(),
            "sheets.properties.title".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SHEET_TITLES)
        .create()
}

/// Open `love_sandwiches`, keeping the mocks alive alongside the document
fn open_document(server: &mut ServerGuard) -> (GoogleDocument, Vec<Mock>) {
    let found = drive_list(
        server,
        &format!(r#"{{"files": [{{"id": "{SPREADSHEET_ID}", "name": "love_sandwiches"}}]}}"#),
    );
    let titles = sheet_titles(server);
    let document = client(server).open("love_sandwiches").unwrap();
    (document, vec![found, titles])
}

fn values_path(title: &str, suffix: &str) -> Matcher {
    Matcher::Regex(format!(
        "^/v4/spreadsheets/{SPREADSHEET_ID}/values/(%27|'){title}(%27|'){suffix}$"
    ))
}

// ═══════════════════════════════════════════════════════════════════════════
// OPENING DOCUMENTS AND WORKSHEETS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_open_uses_first_drive_match() {
    let mut server = Server::new();
    let mock = drive_list(
        &mut server,
        r#"{"files": [{"id": "first", "name": "love_sandwiches"}, {"id": "second", "name": "love_sandwiches"}]}"#,
    );

    let document = client(&server).open("love_sandwiches").unwrap();

    assert_eq!(document.id(), "first");
    assert_eq!(document.title(), "love_sandwiches");
    mock.assert();
}

#[test]
fn test_open_empty_drive_list() {
    let mut server = Server::new();
    let mock = drive_list(&mut server, r#"{"files": []}"#);

    let err = client(&server).open("love_sandwiches").unwrap_err();

    assert!(matches!(err, SandwichError::SpreadsheetNotFound(name) if name == "love_sandwiches"));
    mock.assert();
}

#[test]
fn test_worksheet_missing_title() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);

    let err = document.worksheet("inventory").unwrap_err();

    assert!(matches!(err, SandwichError::WorksheetNotFound(name) if name == "inventory"));
}

#[test]
fn test_worksheet_found() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);

    let sheet = document.worksheet("surplus").unwrap();
    assert_eq!(sheet.title(), "surplus");
}

// ═══════════════════════════════════════════════════════════════════════════
// APPEND AND READ
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_append_row_request_shape() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);
    let append = server
        .mock("POST", values_path("sales", ":append"))
        .match_header("authorization", "Bearer test-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("valueInputOption".into(), "RAW".into()),
            Matcher::UrlEncoded("insertDataOption".into(), "INSERT_ROWS".into()),
        ]))
        .match_body(Matcher::Json(json!({ "values": [[10, 20, 30, 40, 50, 60]] })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"spreadsheetId": "sheet-id", "updates": {"updatedRows": 1}}"#)
        .create();

    let mut sheet = document.worksheet("sales").unwrap();
    sheet.append_row(&[10, 20, 30, 40, 50, 60]).unwrap();

    append.assert();
}

#[test]
fn test_get_all_values_pads_and_converts() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);
    let read = server
        .mock("GET", values_path("stock", ""))
        .match_query(Matcher::UrlEncoded(
            "valueRenderOption".into(),
            "UNFORMATTED_VALUE".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"range": "'stock'!A1:F3", "majorDimension": "ROWS", "values": [
                ["cheese", "ham", "egg", "tuna", "chicken", "turkey"],
                [1500, 20, 30.0],
                [-4, "7", true, null, 2.5, 9]
            ]}"#,
        )
        .create();

    let rows = document.worksheet("stock").unwrap().get_all_values().unwrap();

    assert_eq!(
        rows,
        vec![
            vec!["cheese", "ham", "egg", "tuna", "chicken", "turkey"],
            vec!["1500", "20", "30", "", "", ""],
            vec!["-4", "7", "TRUE", "", "2.5", "9"],
        ]
    );
    read.assert();
}

#[test]
fn test_get_all_values_empty_sheet() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);
    let _read = server
        .mock("GET", values_path("surplus", ""))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"range": "'surplus'!A1:Z1000", "majorDimension": "ROWS"}"#)
        .create();

    let rows = document.worksheet("surplus").unwrap().get_all_values().unwrap();
    assert!(rows.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// API ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_append_permission_denied() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);
    let _denied = server
        .mock("POST", values_path("sales", ":append"))
        .match_query(Matcher::Any)
        .with_status(403)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"code": 403, "message": "The caller does not have permission", "status": "PERMISSION_DENIED"}}"#,
        )
        .create();

    let mut sheet = document.worksheet("sales").unwrap();
    let err = sheet.append_row(&[1, 2, 3, 4, 5, 6]).unwrap_err();

    match err {
        SandwichError::Api { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "The caller does not have permission");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_read_quota_exceeded() {
    let mut server = Server::new();
    let (document, _mocks) = open_document(&mut server);
    let _quota = server
        .mock("GET", values_path("stock", ""))
        .match_query(Matcher::Any)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"error": {"code": 429, "message": "Quota exceeded for quota metric 'Read requests'", "status": "RESOURCE_EXHAUSTED"}}"#,
        )
        .create();

    let err = document.worksheet("stock").unwrap().get_all_values().unwrap_err();

    assert!(matches!(
        err,
        SandwichError::Api { status: 429, ref message } if message.starts_with("Quota exceeded")
    ));
}

#[test]
fn test_drive_error_without_json_body() {
    let mut server = Server::new();
    let _down = server
        .mock("GET", "/drive/v3/files")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("Service Unavailable")
        .create();

    let err = client(&server).open("love_sandwiches").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Spreadsheet API error (503): Service Unavailable"
    );
}
