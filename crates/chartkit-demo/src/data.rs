// File: crates/chartkit-demo/src/data.rs
// Summary: CSV loading into chart data (single, multi or ranged series).

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chartkit_core::{ChartData, DataPoint, MultiSeries, Series};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Load CSV from `path`. See [`load_reader`] for the accepted columns.
pub fn load_csv(path: &Path) -> Result<ChartData> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_reader(file)
}

/// Columns (case-insensitive): `value` (required unless `lower`+`upper` are given),
/// optional `series`, `label`, `date` (YYYY-MM-DD), `lower`, `upper`.
/// Rows are grouped by `series` in order of first appearance.
pub fn load_reader<R: Read>(reader: R) -> Result<ChartData> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    debug!(?headers, "csv headers");
    let idx = |name: &str| headers.iter().position(|h| h == name);

    let (i_series, i_label, i_date, i_value, i_lower, i_upper) =
        (idx("series"), idx("label"), idx("date"), idx("value"), idx("lower"), idx("upper"));
    let ranged = i_lower.is_some() && i_upper.is_some();
    if i_value.is_none() && !ranged {
        anyhow::bail!("CSV needs a `value` column or both `lower` and `upper`");
    }

    let mut series: Vec<Series> = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading CSV row {}", row + 1))?;
        let field = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).filter(|s| !s.is_empty());
        let number = |i: Option<usize>| -> Result<Option<f64>> {
            field(i)
                .map(|s| s.parse::<f64>().with_context(|| format!("row {}: `{}` is not a number", row + 1, s)))
                .transpose()
        };

        let mut point = if ranged {
            match (number(i_lower)?, number(i_upper)?) {
                (Some(lo), Some(hi)) => DataPoint::ranged(lo, hi).with_context(|| format!("row {}", row + 1))?,
                _ => {
                    warn!(row = row + 1, "skipping row without lower/upper");
                    continue;
                }
            }
        } else {
            match number(i_value)? {
                Some(v) => DataPoint::new(v),
                None => {
                    warn!(row = row + 1, "skipping row without value");
                    continue;
                }
            }
        };
        if ranged {
            if let Some(v) = number(i_value)? {
                point.value = v;
            }
        }
        if let Some(label) = field(i_label) {
            point = point.with_label(label);
        }
        if let Some(date) = field(i_date) {
            let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("row {}: bad date `{}`", row + 1, date))?;
            point = point.with_date(d);
        }

        let name = field(i_series).unwrap_or("");
        match series.iter_mut().find(|s| s.label == name) {
            Some(s) => s.push(point),
            None => {
                let mut s = Series::new(name);
                s.push(point);
                series.push(s);
            }
        }
    }

    Ok(match series.len() {
        0 => ChartData::Single(Series::default()),
        1 if ranged => ChartData::Ranged(series.remove(0)),
        1 => ChartData::Single(series.remove(0)),
        _ => ChartData::Multi(MultiSeries::new(series)),
    })
}
