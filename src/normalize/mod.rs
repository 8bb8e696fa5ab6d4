//! Record normalization: raw click events in, the fixed ten-column table out.
//!
//! Every derived column is forward-filled except `time_zone`, which is left
//! untouched for the imputation pass in [`fill`].

pub mod fill;

use serde::Deserialize;

use crate::extract::{convert_timestamp, extract_browser_and_os, shorten_url};

/// One NDJSON click event. Any key may be absent or null; unknown keys are
/// ignored. `ll` stays a [`serde_json::Value`]: only a two-element numeric
/// array counts as a coordinate pair, and anything else (scalar, wrong
/// arity, non-numeric elements) is treated as missing rather than a parse
/// error. Numbers render from the `Value` unchanged (`-74.0`, not `-74`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RawEvent {
    /// User-agent string.
    #[serde(default)]
    pub a: Option<String>,
    /// Referrer URL.
    #[serde(default)]
    pub r: Option<String>,
    /// Destination URL.
    #[serde(default)]
    pub u: Option<String>,
    /// City name.
    #[serde(default)]
    pub cy: Option<String>,
    /// `[latitude, longitude]` pair.
    #[serde(default)]
    pub ll: Option<serde_json::Value>,
    /// Timezone name.
    #[serde(default)]
    pub tz: Option<String>,
    /// Epoch seconds, event start.
    #[serde(default)]
    pub t: Option<i64>,
    /// Epoch seconds, event end.
    #[serde(default)]
    pub hc: Option<i64>,
}

/// Output column names, in header order.
pub const COLUMNS: [&str; 10] = [
    "web_browser",
    "operating_sys",
    "from_url",
    "to_url",
    "city",
    "longitude",
    "latitude",
    "time_zone",
    "time_in",
    "time_out",
];

/// Column-oriented table of normalized events. All vectors share one length
/// and the empty string is the missing-value sentinel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventTable {
    pub web_browser: Vec<String>,
    pub operating_sys: Vec<String>,
    pub from_url: Vec<String>,
    pub to_url: Vec<String>,
    pub city: Vec<String>,
    pub longitude: Vec<String>,
    pub latitude: Vec<String>,
    pub time_zone: Vec<String>,
    pub time_in: Vec<String>,
    pub time_out: Vec<String>,
}

impl EventTable {
    pub fn with_capacity(rows: usize) -> Self {
        Self {
            web_browser: Vec::with_capacity(rows),
            operating_sys: Vec::with_capacity(rows),
            from_url: Vec::with_capacity(rows),
            to_url: Vec::with_capacity(rows),
            city: Vec::with_capacity(rows),
            longitude: Vec::with_capacity(rows),
            latitude: Vec::with_capacity(rows),
            time_zone: Vec::with_capacity(rows),
            time_in: Vec::with_capacity(rows),
            time_out: Vec::with_capacity(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.web_browser.len()
    }

    pub fn is_empty(&self) -> bool {
        self.web_browser.is_empty()
    }

    /// Row `i` as cells in [`COLUMNS`] order.
    pub fn row(&self, i: usize) -> [&str; 10] {
        [
            &self.web_browser[i],
            &self.operating_sys[i],
            &self.from_url[i],
            &self.to_url[i],
            &self.city[i],
            &self.longitude[i],
            &self.latitude[i],
            &self.time_zone[i],
            &self.time_in[i],
            &self.time_out[i],
        ]
    }
}

/// Map raw events to the output schema, then forward-fill every column except
/// `time_zone`. Missing raw keys become empty cells, never errors.
pub fn normalize(events: &[RawEvent], keep_unix: bool) -> EventTable {
    let mut table = EventTable::with_capacity(events.len());

    for event in events {
        let (browser, os) = extract_browser_and_os(event.a.as_deref().unwrap_or(""));
        table.web_browser.push(browser);
        table.operating_sys.push(os);
        table
            .from_url
            .push(shorten_url(event.r.as_deref().unwrap_or("")));
        table
            .to_url
            .push(shorten_url(event.u.as_deref().unwrap_or("")));
        table.city.push(event.cy.clone().unwrap_or_default());

        let (latitude, longitude) = coordinate_cells(event.ll.as_ref());
        table.latitude.push(latitude);
        table.longitude.push(longitude);

        table.time_zone.push(event.tz.clone().unwrap_or_default());
        table.time_in.push(epoch_cell(event.t, keep_unix));
        table.time_out.push(epoch_cell(event.hc, keep_unix));
    }

    fill::forward_fill(&mut table.web_browser);
    fill::forward_fill(&mut table.operating_sys);
    fill::forward_fill(&mut table.from_url);
    fill::forward_fill(&mut table.to_url);
    fill::forward_fill(&mut table.city);
    fill::forward_fill(&mut table.longitude);
    fill::forward_fill(&mut table.latitude);
    fill::forward_fill(&mut table.time_in);
    fill::forward_fill(&mut table.time_out);

    table
}

// only an exact numeric [lat, lon] pair counts; anything else is missing
fn coordinate_cells(ll: Option<&serde_json::Value>) -> (String, String) {
    if let Some(serde_json::Value::Array(pair)) = ll {
        if let [serde_json::Value::Number(lat), serde_json::Value::Number(lon)] = pair.as_slice() {
            return (lat.to_string(), lon.to_string());
        }
    }
    (String::new(), String::new())
}

fn epoch_cell(epoch: Option<i64>, keep_unix: bool) -> String {
    epoch
        .map(|seconds| convert_timestamp(seconds, keep_unix))
        .unwrap_or_default()
}
