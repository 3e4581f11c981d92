//! Record loader - reads the site listing into ordered records
//!
//! The listing is delimited text with a header row. Each following row
//! becomes a [`Record`] keyed by the header names. Blank lines are skipped,
//! any other malformed row fails the whole load.
//!
//! # Example
//!
//! ```no_run
//! use sitegen::records;
//! use std::path::Path;
//!
//! let rows = records::load(Path::new("websites.csv"))?;
//! for row in rows.iter().filter(|r| !r.is_blank()) {
//!     println!("{}", row.domain());
//! }
//! # Ok::<(), sitegen::error::FatalGenerationError>(())
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::error::FatalGenerationError;

/// Column that names the project and its output directory.
pub const DOMAIN_COLUMN: &str = "domain";

/// One parsed row of the site listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Build a record from `(column, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of a column, untrimmed.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// The trimmed `domain` value, empty when the column is absent.
    pub fn domain(&self) -> &str {
        self.get(DOMAIN_COLUMN).map(str::trim).unwrap_or_default()
    }

    /// True when the record has no usable domain and must be skipped.
    pub fn is_blank(&self) -> bool {
        self.domain().is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn phone(&self) -> Option<&str> {
        self.get("phone")
    }

    pub fn address(&self) -> Option<&str> {
        self.get("address")
    }
}

/// Load every record from the listing at `path`.
///
/// Returns [`FatalGenerationError::InputNotFound`] before touching anything
/// else when the file is missing.
pub fn load(path: &Path) -> Result<Vec<Record>, FatalGenerationError> {
    if !path.exists() {
        return Err(FatalGenerationError::InputNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|e| FatalGenerationError::MalformedInput {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    parse(file, path)
}

/// Parse listing text from any reader. `origin` is only used in errors.
pub fn parse<R: Read>(reader: R, origin: &Path) -> Result<Vec<Record>, FatalGenerationError> {
    let malformed = |source: csv::Error| FatalGenerationError::MalformedInput {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers().map_err(malformed)?.clone();
    if !headers.iter().any(|h| h == DOMAIN_COLUMN) {
        return Err(FatalGenerationError::MissingDomainColumn(
            origin.to_path_buf(),
        ));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(malformed)?;
        records.push(Record::from_pairs(headers.iter().zip(row.iter())));
    }

    tracing::debug!(count = records.len(), path = %origin.display(), "loaded records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse_str(text: &str) -> Result<Vec<Record>, FatalGenerationError> {
        parse(text.as_bytes(), Path::new("websites.csv"))
    }

    #[test]
    fn test_parse_preserves_row_order() {
        let records = parse_str("domain,title\nalpha,A\nbeta,B\ngamma,C\n").unwrap();
        let domains: Vec<_> = records.iter().map(Record::domain).collect();
        assert_eq!(domains, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = parse_str("domain,title\nalpha,A\n\n\nbeta,B\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_domain_is_trimmed() {
        let records = parse_str("domain,title\n  alpha  ,A\n").unwrap();
        assert_eq!(records[0].domain(), "alpha");
        assert_eq!(records[0].get("domain"), Some("  alpha  "));
    }

    #[test]
    fn test_whitespace_domain_is_blank() {
        let records = parse_str("domain,title\n   ,Skip\n,Skip too\n").unwrap();
        assert!(records.iter().all(Record::is_blank));
    }

    #[test]
    fn test_optional_columns_absent() {
        let records = parse_str("domain\nalpha\n").unwrap();
        assert_eq!(records[0].title(), None);
        assert_eq!(records[0].phone(), None);
        assert_eq!(records[0].address(), None);
    }

    #[test]
    fn test_quoted_fields_keep_delimiters() {
        let records = parse_str("domain,address\nalpha,\"1 Main St, Suite 2\"\n").unwrap();
        assert_eq!(records[0].address(), Some("1 Main St, Suite 2"));
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let err = parse_str("domain,title\nalpha,A\nbeta\n").unwrap_err();
        assert!(matches!(err, FatalGenerationError::MalformedInput { .. }));
    }

    #[test]
    fn test_missing_domain_column_is_fatal() {
        let err = parse_str("site,title\nalpha,A\n").unwrap_err();
        assert!(matches!(err, FatalGenerationError::MissingDomainColumn(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load(&tmp.path().join("websites.csv")).unwrap_err();
        assert!(matches!(err, FatalGenerationError::InputNotFound(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("websites.csv");
        std::fs::write(&path, "domain,phone\nalpha,555-1\n").unwrap();

        let records = load(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].phone(), Some("555-1"));
    }
}
