//! Whitespace-delimited numeric tables.
use anyhow::{anyhow, bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

/// A numeric table: one header line followed by data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    pub header: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

impl NumericTable {
    /// Number of fields in each data row, or `None` when there are no rows.
    pub fn width(&self) -> Option<usize> {
        self.rows.first().map(Vec::len)
    }

    /// Column `idx` of the data rows.
    pub fn column(&self, idx: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[idx]).collect()
    }

    /// Header field `idx` read as a non-negative count.
    pub fn header_count(&self, idx: usize) -> Result<usize> {
        let value = *self
            .header
            .get(idx)
            .ok_or_else(|| anyhow!("Header is missing field {}", idx + 1))?;
        if value < 0.0 || value.fract() != 0.0 {
            bail!("Header field {} must be a non-negative integer, got {}", idx + 1, value);
        }
        Ok(value as usize)
    }

    /// First and last data columns, checked against a single-count header.
    pub fn counted_pairs(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        if self.header.len() != 1 {
            bail!(
                "Header must hold the number of observations, found {} fields",
                self.header.len()
            );
        }
        let count = self.header_count(0)?;
        match self.width() {
            None => bail!("No observations found"),
            Some(w) if w < 2 => bail!("Each observation needs two values, found {}", w),
            Some(w) => {
                if self.rows.len() != count {
                    bail!(
                        "Header declares {} observations but {} were found",
                        count,
                        self.rows.len()
                    );
                }
                Ok((self.column(0), self.column(w - 1)))
            }
        }
    }
}

/// Parse whitespace-separated numbers.
///
/// The first non-blank, non-comment line is the header; every later line is
/// a data row and all data rows must have the same number of fields. Lines
/// starting with `#` are comments.
pub fn parse_table(content: &str) -> Result<NumericTable> {
    // csv splits on a single delimiter byte, so fold tabs into spaces and
    // drop the empty fields produced by runs of spaces.
    let normalized = content.replace('\t', " ");
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(normalized.as_bytes());

    let mut header: Option<Vec<f64>> = None;
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for result in reader.records() {
        let record = result.context("Failed to read table record")?;
        let line = record.position().map_or(0, |p| p.line());
        let values = parse_record(&record, line)?;
        if values.is_empty() {
            continue;
        }
        if header.is_none() {
            header = Some(values);
            continue;
        }
        if let Some(expected) = rows.first().map(Vec::len) {
            if values.len() != expected {
                bail!(
                    "Line {}: expected {} fields, found {}",
                    line,
                    expected,
                    values.len()
                );
            }
        }
        rows.push(values);
    }

    let header = header.ok_or_else(|| anyhow!("Input is empty: missing header line"))?;
    Ok(NumericTable { header, rows })
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Vec<f64>> {
    record
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<f64>()
                .with_context(|| format!("Line {}: invalid number '{}'", line, field))
        })
        .collect()
}
