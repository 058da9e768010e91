//! Google Sheets backend
//!
//! Blocking REST client over the Drive v3 and Sheets v4 APIs. Documents are
//! opened by their human-readable name, the way a person finds them in
//! Drive.

use std::path::Path;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::auth::{fetch_access_token, ServiceAccountKey, SCOPES};
use super::{pad_rows, Document, Worksheet};
use crate::error::{SandwichError, SandwichResult};

/// Default Drive v3 files endpoint
pub const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";

/// Default Sheets v4 spreadsheets endpoint
pub const SHEETS_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

/// Authorized client for the Drive and Sheets APIs
#[derive(Debug, Clone)]
pub struct GoogleClient {
    http: Client,
    token: String,
    drive_url: String,
    sheets_url: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GoogleClient {
    /// Authorize with a service-account key and the spreadsheet/drive scopes
    pub fn authorize(key: &ServiceAccountKey) -> SandwichResult<Self> {
        let http = Client::builder().build()?;
        let token = fetch_access_token(&http, key, &SCOPES)?;
        Ok(Self::with_token(http, token))
    }

    /// Load the key file at `path` and authorize with it
    pub fn from_credentials_file(path: &Path) -> SandwichResult<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        Self::authorize(&key)
    }

    /// Client using an already issued bearer token
    pub fn with_token(http: Client, token: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
            drive_url: DRIVE_FILES_URL.to_string(),
            sheets_url: SHEETS_URL.to_string(),
        }
    }

    /// Point the client at different API roots
    #[must_use]
    pub fn with_endpoints(mut self, drive_url: &str, sheets_url: &str) -> Self {
        self.drive_url = drive_url.trim_end_matches('/').to_string();
        self.sheets_url = sheets_url.trim_end_matches('/').to_string();
        self
    }

    /// Open the spreadsheet called `name`. The first match in Drive wins.
    pub fn open(&self, name: &str) -> SandwichResult<GoogleDocument> {
        debug!(spreadsheet = name, "searching drive");
        let response = self
            .http
            .get(&self.drive_url)
            .bearer_auth(&self.token)
            .query(&[
                ("q", drive_query(name).as_str()),
                ("fields", "files(id,name)"),
                ("pageSize", "10"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ])
            .send()?;

        let list: FileList = check(response)?.json()?;
        let file = list
            .files
            .into_iter()
            .next()
            .ok_or_else(|| SandwichError::SpreadsheetNotFound(name.to_string()))?;

        info!(spreadsheet = %file.name, id = %file.id, "opened spreadsheet");
        Ok(GoogleDocument {
            client: self.clone(),
            id: file.id,
            title: file.name,
        })
    }

    fn spreadsheet_url(&self, spreadsheet_id: &str) -> String {
        format!("{}/{}", self.sheets_url, spreadsheet_id)
    }

    fn values_url(&self, spreadsheet_id: &str, title: &str) -> String {
        format!(
            "{}/values/{}",
            self.spreadsheet_url(spreadsheet_id),
            urlencoding::encode(&sheet_range(title))
        )
    }
}

/// A spreadsheet opened through [`GoogleClient::open`]
#[derive(Debug, Clone)]
pub struct GoogleDocument {
    client: GoogleClient,
    id: String,
    title: String,
}

impl GoogleDocument {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Document for GoogleDocument {
    type Sheet = GoogleWorksheet;

    fn title(&self) -> &str {
        &self.title
    }

    fn worksheet(&self, name: &str) -> SandwichResult<GoogleWorksheet> {
        let response = self
            .client
            .http
            .get(self.client.spreadsheet_url(&self.id))
            .bearer_auth(&self.client.token)
            .query(&[("fields", "sheets.properties.title")])
            .send()?;

        let meta: SpreadsheetMeta = check(response)?.json()?;
        if !meta.sheets.iter().any(|s| s.properties.title == name) {
            return Err(SandwichError::WorksheetNotFound(name.to_string()));
        }

        Ok(GoogleWorksheet {
            client: self.client.clone(),
            spreadsheet_id: self.id.clone(),
            title: name.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct GoogleWorksheet {
    client: GoogleClient,
    spreadsheet_id: String,
    title: String,
}

impl Worksheet for GoogleWorksheet {
    fn title(&self) -> &str {
        &self.title
    }

    fn append_row(&mut self, row: &[i64]) -> SandwichResult<()> {
        let url = format!(
            "{}:append",
            self.client.values_url(&self.spreadsheet_id, &self.title)
        );
        debug!(worksheet = %self.title, ?row, "appending row");

        let response = self
            .client
            .http
            .post(url)
            .bearer_auth(&self.client.token)
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": [row] }))
            .send()?;

        check(response)?;
        Ok(())
    }

    fn get_all_values(&self) -> SandwichResult<Vec<Vec<String>>> {
        let response = self
            .client
            .http
            .get(self.client.values_url(&self.spreadsheet_id, &self.title))
            .bearer_auth(&self.client.token)
            .query(&[("valueRenderOption", "UNFORMATTED_VALUE")])
            .send()?;

        let range: ValueRange = check(response)?.json()?;
        let rows = range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_string).collect())
            .collect();
        Ok(pad_rows(rows))
    }
}

/// Raw cell value as text. Whole numbers lose any `.0` so they parse as
/// integers regardless of the sheet's number format.
fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::String(text) => text,
        Value::Number(number) => match (number.as_i64(), number.as_f64()) {
            (Some(int), _) => int.to_string(),
            (None, Some(float)) if float.fract() == 0.0 && float.abs() < 9.0e15 => {
                format!("{}", float as i64)
            }
            _ => number.to_string(),
        },
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A1 range covering a whole sheet, e.g. `'sales'`
fn sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

fn drive_query(name: &str) -> String {
    let escaped = name.replace('\\', "\\\\").replace('\'', "\\'");
    format!("name = '{escaped}' and mimeType = '{SPREADSHEET_MIME}' and trashed = false")
}

/// Turn a non-2xx response into [`SandwichError::Api`]
fn check(response: Response) -> SandwichResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(api_error(status.as_u16(), &body))
}

fn api_error(status: u16, body: &str) -> SandwichError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string());
    SandwichError::Api { status, message }
}
