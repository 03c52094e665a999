use reqwest::Url;
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::{Map, Value};
use std::{fmt, time::Duration};

use crate::cli::types::{Season, SortOrder, TeamCode};
use crate::error::{Result, StatsError};

#[cfg(test)]
mod tests;

/// Default field the API sorts players by.
pub const DEFAULT_SORT_BY: &str = "PlayerName";
/// Default number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Default pause between consecutive requests.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// A single scalar cell of a player record.
///
/// Nested arrays and objects are kept as their compact JSON text so every
/// record stays flat enough for a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Text written into a CSV cell. Null becomes an empty cell.
    pub fn to_cell(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            other => other.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            Value::Number(n) => FieldValue::Number(n),
            Value::String(s) => FieldValue::Text(s),
            nested @ (Value::Array(_) | Value::Object(_)) => FieldValue::Text(nested.to_string()),
        }
    }
}

impl From<&FieldValue> for Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::Number(n) => Value::Number(n.clone()),
            FieldValue::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Value::from(self).serialize(serializer)
    }
}

/// One player entry as returned by the API, fields kept in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn from_object(object: Map<String, Value>) -> Self {
        Self {
            fields: object
                .into_iter()
                .map(|(name, value)| (name, FieldValue::from(value)))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// One decoded page payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    /// Number of entries the endpoint sent, including skipped ones.
    pub size: usize,
    /// Array entries that were not objects and carried no record.
    pub skipped: usize,
}

impl Page {
    /// The page-complete sentinel: the endpoint sent nothing at all.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

/// Split one page payload into records.
///
/// `null`, `[]` and `{}` all mean the page is empty. A single object is one
/// record. Array entries that are not objects are skipped but still count
/// towards the page size. A top-level scalar is not a page at all.
pub fn parse_page(payload: Value) -> Result<Page> {
    match payload {
        Value::Null => Ok(Page::default()),
        Value::Object(object) if object.is_empty() => Ok(Page::default()),
        Value::Object(object) => Ok(Page {
            records: vec![Record::from_object(object)],
            size: 1,
            skipped: 0,
        }),
        Value::Array(items) => {
            let size = items.len();
            let records: Vec<Record> = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(object) => Some(Record::from_object(object)),
                    _ => None,
                })
                .collect();
            Ok(Page {
                skipped: size - records.len(),
                records,
                size,
            })
        }
        other => Err(StatsError::InvalidPayload {
            reason: format!("page is {}, expected an object or array", kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A page request that could not be completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEntry {
    pub team: TeamCode,
    pub page: u32,
    pub error: String,
}

/// Query parameters for one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub season: Season,
    pub team: TeamCode,
    pub sort_by: String,
    pub ascending: bool,
    pub page_number: u32,
    pub page_size: u32,
}

impl PageParams {
    /// Query string pairs in the names the API expects.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("season", self.season.to_string()),
            ("team", self.team.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("ascending", self.ascending.to_string()),
            ("pageNumber", self.page_number.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

/// Immutable description of one fetch run.
///
/// Built once through [`FetchConfig::builder`], which validates the URL,
/// page size and team list.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    api_name: String,
    api_url: Url,
    season: Season,
    sort_by: String,
    order: SortOrder,
    page_size: u32,
    delay: Duration,
    teams: Vec<TeamCode>,
}

impl FetchConfig {
    pub fn builder(api_name: impl Into<String>, api_url: impl Into<String>) -> FetchConfigBuilder {
        FetchConfigBuilder {
            api_name: api_name.into(),
            api_url: api_url.into(),
            season: Season::default(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            order: SortOrder::Asc,
            page_size: DEFAULT_PAGE_SIZE,
            delay: DEFAULT_DELAY,
            teams: TeamCode::all(),
        }
    }

    pub fn api_name(&self) -> &str {
        &self.api_name
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn teams(&self) -> &[TeamCode] {
        &self.teams
    }

    /// Export file name: `{api_name}_{season}.csv`
    pub fn export_file_name(&self) -> String {
        format!("{}_{}.csv", self.api_name, self.season)
    }

    pub fn page_params(&self, team: &TeamCode, page_number: u32) -> PageParams {
        PageParams {
            season: self.season,
            team: team.clone(),
            sort_by: self.sort_by.clone(),
            ascending: self.order.is_ascending(),
            page_number,
            page_size: self.page_size,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfigBuilder {
    api_name: String,
    api_url: String,
    season: Season,
    sort_by: String,
    order: SortOrder,
    page_size: u32,
    delay: Duration,
    teams: Vec<TeamCode>,
}

impl FetchConfigBuilder {
    pub fn season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }

    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn teams(mut self, teams: Vec<TeamCode>) -> Self {
        self.teams = teams;
        self
    }

    pub fn build(self) -> Result<FetchConfig> {
        let api_url = Url::parse(&self.api_url).map_err(|e| StatsError::InvalidUrl {
            url: self.api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(StatsError::InvalidUrl {
                url: self.api_url,
                reason: format!("unsupported scheme '{}'", api_url.scheme()),
            });
        }
        if self.page_size == 0 {
            return Err(StatsError::InvalidPageSize);
        }
        if self.teams.is_empty() {
            return Err(StatsError::NoTeams);
        }

        Ok(FetchConfig {
            api_name: self.api_name,
            api_url,
            season: self.season,
            sort_by: self.sort_by,
            order: self.order,
            page_size: self.page_size,
            delay: self.delay,
            teams: self.teams,
        })
    }
}
