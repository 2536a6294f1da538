use std::collections::BTreeMap;
use std::time::Duration;

use super::model::{LoadError, StationRecord, StationTable};

// ---------------------------------------------------------------------------
// Source feed
// ---------------------------------------------------------------------------

/// Consolidated IRVE feed on data.gouv.fr.
pub const DATA_URL: &str =
    "https://www.data.gouv.fr/fr/datasets/r/8d9398ae-3037-48b2-be19-412c24561fbb";

/// Nominal power column, in kW.
pub const POWER_COLUMN: &str = "puissance_nominale";
/// Operator name column.
pub const OPERATOR_COLUMN: &str = "nom_operateur";

/// Source coordinate columns carry a `consolidated_` prefix; every downstream
/// view depends on the canonical names instead.
const COLUMN_RENAMES: [(&str, &str); 2] = [
    ("consolidated_latitude", "latitude"),
    ("consolidated_longitude", "longitude"),
];

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Fetching
// ---------------------------------------------------------------------------

/// Seam between the cache and the network, so tests can substitute a
/// call-counting double.
pub trait Fetch {
    /// Retrieve the raw CSV body at `url`.
    fn fetch_csv(&self, url: &str) -> Result<String, LoadError>;
}

/// Production fetcher: one blocking GET per cache miss.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(HTTP_TIMEOUT)
            .timeout_read(HTTP_TIMEOUT)
            .build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn fetch_csv(&self, url: &str) -> Result<String, LoadError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|err| LoadError::Http(err.to_string()))?;
        response
            .into_string()
            .map_err(|err| LoadError::Http(err.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse the feed body into a [`StationTable`].
///
/// Header names listed in [`COLUMN_RENAMES`] are canonicalised first; the
/// four required columns must then be present or the whole load fails with
/// [`LoadError::MissingColumn`]. Rows whose power or coordinate cells do not
/// parse as numbers are skipped (the feed has no honest typed value for
/// them); the skipped count is logged.
pub fn parse_stations(body: &str) -> Result<StationTable, LoadError> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(canonical_column_name)
        .collect();

    let power_idx = required_column(&columns, POWER_COLUMN)?;
    let operator_idx = required_column(&columns, OPERATOR_COLUMN)?;
    let lat_idx = required_column(&columns, "latitude")?;
    let lon_idx = required_column(&columns, "longitude")?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let row = result?;

        let parsed = (
            parse_f64(row.get(power_idx)),
            parse_f64(row.get(lat_idx)),
            parse_f64(row.get(lon_idx)),
        );
        let (Some(power_kw), Some(latitude), Some(longitude)) = parsed else {
            skipped += 1;
            continue;
        };

        let operator = row.get(operator_idx).unwrap_or("").to_string();

        let mut extra = BTreeMap::new();
        for (idx, cell) in row.iter().enumerate() {
            if idx == power_idx || idx == operator_idx || idx == lat_idx || idx == lon_idx {
                continue;
            }
            if let Some(name) = columns.get(idx) {
                extra.insert(name.clone(), cell.to_string());
            }
        }

        records.push(StationRecord {
            power_kw,
            operator,
            latitude,
            longitude,
            extra,
        });
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} rows with unparseable power or coordinates");
    }

    Ok(StationTable { records, columns })
}

fn canonical_column_name(header: &str) -> String {
    for (source, canonical) in COLUMN_RENAMES {
        if header == source {
            return canonical.to_string();
        }
    }
    header.to_string()
}

fn required_column(columns: &[String], name: &'static str) -> Result<usize, LoadError> {
    columns
        .iter()
        .position(|c| c == name)
        .ok_or(LoadError::MissingColumn(name))
}

fn parse_f64(cell: Option<&str>) -> Option<f64> {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
}
