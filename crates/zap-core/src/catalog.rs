//! Playlist catalog: countries and the playlists they offer.
//!
//! The catalog is supplied externally as a JSON document and consumed
//! read-only — nothing in the player mutates it.  The document schema is kept
//! on separate serde structs so it can diverge from the in-memory model
//! without breaking either.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A reference to one fetchable playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistRef {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub category: String,
}

/// One country grouping node.  `playlists` keeps the document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "country")]
    pub name: String,
    #[serde(default)]
    pub flag: String,
    #[serde(rename = "channels")]
    pub playlists: Vec<PlaylistRef>,
}

pub fn parse_catalog(content: &str) -> Result<Vec<Country>, CatalogError> {
    Ok(serde_json::from_str(content)?)
}

pub fn load_catalog_from_file(path: &Path) -> Result<Vec<Country>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Narrow the catalog to playlists matching `term`: case-insensitive
/// substring over playlist name, country name, and playlist category.
/// Countries whose playlist list filters to empty are dropped; an empty term
/// returns the catalog unchanged.
pub fn filter_catalog(countries: &[Country], term: &str) -> Vec<Country> {
    if term.trim().is_empty() {
        return countries.to_vec();
    }
    let needle = term.to_lowercase();
    countries
        .iter()
        .filter_map(|country| {
            let country_hit = country.name.to_lowercase().contains(&needle);
            let playlists: Vec<PlaylistRef> = country
                .playlists
                .iter()
                .filter(|p| {
                    country_hit
                        || p.name.to_lowercase().contains(&needle)
                        || p.category.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            if playlists.is_empty() {
                None
            } else {
                Some(Country {
                    playlists,
                    ..country.clone()
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"[
        {
            "country": "United Kingdom",
            "flag": "🇬🇧",
            "channels": [
                { "name": "UK All", "url": "http://lists/uk.m3u", "category": "General" },
                { "name": "UK Sport", "url": "http://lists/uk-sport.m3u", "category": "Sport" }
            ]
        },
        {
            "country": "Japan",
            "flag": "🇯🇵",
            "channels": [
                { "name": "JP News", "url": "http://lists/jp-news.m3u", "category": "News" }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_catalog_document() {
        let catalog = parse_catalog(DOC).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "United Kingdom");
        assert_eq!(catalog[0].playlists[1].category, "Sport");
        assert_eq!(catalog[1].playlists[0].url, "http://lists/jp-news.m3u");
    }

    #[test]
    fn test_category_is_optional_in_document() {
        let catalog = parse_catalog(
            r#"[{ "country": "X", "channels": [{ "name": "A", "url": "http://a" }] }]"#,
        )
        .unwrap();
        assert_eq!(catalog[0].playlists[0].category, "");
        assert_eq!(catalog[0].flag, "");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(parse_catalog("{ not a catalog").is_err());
    }

    #[test]
    fn test_filter_matches_playlist_name_case_insensitively() {
        let catalog = parse_catalog(DOC).unwrap();
        let hits = filter_catalog(&catalog, "SPORT");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].playlists.len(), 1);
        assert_eq!(hits[0].playlists[0].name, "UK Sport");
    }

    #[test]
    fn test_filter_matches_country_name() {
        let catalog = parse_catalog(DOC).unwrap();
        let hits = filter_catalog(&catalog, "japan");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].playlists.len(), 1);
    }

    #[test]
    fn test_filter_hides_countries_with_no_matches() {
        let catalog = parse_catalog(DOC).unwrap();
        let hits = filter_catalog(&catalog, "news");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Japan");
    }

    #[test]
    fn test_empty_term_returns_catalog_unchanged() {
        let catalog = parse_catalog(DOC).unwrap();
        assert_eq!(filter_catalog(&catalog, "  "), catalog);
    }
}
