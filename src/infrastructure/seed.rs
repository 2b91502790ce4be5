//! Loading page-view dumps from disk.
//!
//! A dump is the same JSON shape accepted by the chart endpoints:
//! `[{"name", "id"?, "pageViews": [{"week", "year", "count"}]}]`.
//! A literal `null` is read as an empty dump.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::RestaurantPageViews;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and parses a page-view dump.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<RestaurantPageViews>, SeedError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    parse_seed(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a page-view dump from a string.
pub fn parse_seed(raw: &str) -> Result<Vec<RestaurantPageViews>, serde_json::Error> {
    let parsed: Option<Vec<RestaurantPageViews>> = serde_json::from_str(raw)?;
    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WeeklyCount;

    #[test]
    fn test_parse_seed() {
        let raw = r#"[
            {"name": "Wildfire", "id": "4", "pageViews": [{"week": 10, "year": 2020, "count": 2}]},
            {"name": "Poke Doke"}
        ]"#;

        let parsed = parse_seed(raw).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].id.as_deref(), Some("4"));
        assert_eq!(parsed[0].page_views, vec![WeeklyCount::new(10, 2020, 2)]);
        assert!(parsed[1].page_views.is_empty());
    }

    #[test]
    fn test_parse_seed_null_is_empty() {
        assert!(parse_seed("null").unwrap().is_empty());
        assert!(parse_seed("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_seed_rejects_garbage() {
        assert!(parse_seed("{\"name\": 1}").is_err());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_seed_file("/nonexistent/page-views.json")
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/page-views.json"));
    }
}
