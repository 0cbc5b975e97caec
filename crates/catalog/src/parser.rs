//! Parser for OMDb response bodies.
//!
//! OMDb answers every request with HTTP 200 and a JSON object whose
//! `"Response"` field is the string `"True"` or `"False"`:
//!
//! - search (`?s=`): `{"Search": [{"Title", "Year", "imdbID", ...}], "Response": "True"}`
//! - details (`?i=`): `{"Title", "Year", "Poster", "imdbRating", ..., "Response": "True"}`
//! - failure: `{"Response": "False", "Error": "Movie not found!"}`
//!
//! The wire structs below mirror that layout and are converted into the
//! domain types from [`crate::types`].

use crate::error::{CatalogError, Result};
use crate::types::{MovieRecord, NOT_AVAILABLE, SearchHit};
use serde::Deserialize;

/// Search listing as sent by the API
#[derive(Debug, Deserialize)]
struct WireSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Search", default)]
    search: Vec<WireSearchHit>,
}

#[derive(Debug, Deserialize)]
struct WireSearchHit {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year")]
    year: Option<String>,
}

/// Detail record as sent by the API.
///
/// Every descriptive field is optional on the wire; absent ones become "N/A".
#[derive(Debug, Deserialize)]
struct WireMovieDetails {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
}

fn is_success(response: &str) -> bool {
    response == "True"
}

fn api_error(error: Option<String>) -> CatalogError {
    CatalogError::Api {
        message: error.unwrap_or_else(|| "unknown error".to_string()),
    }
}

fn or_not_available(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CatalogError::MissingField {
            field: field.to_string(),
        }),
    }
}

/// Parse the body of a title search.
///
/// Returns the hits in the order the API listed them. A `"False"` response
/// (which is also how OMDb says "no matches") becomes [`CatalogError::Api`].
pub fn parse_search_response(body: &str) -> Result<Vec<SearchHit>> {
    let wire: WireSearchResponse = serde_json::from_str(body)?;

    if !is_success(&wire.response) {
        return Err(api_error(wire.error));
    }

    let hits = wire
        .search
        .into_iter()
        .map(|hit| SearchHit {
            id: hit.imdb_id,
            title: hit.title,
            year: hit.year,
        })
        .collect();

    Ok(hits)
}

/// Parse the body of a detail lookup into a [`MovieRecord`].
///
/// `imdbID` and `Title` are required; everything else falls back to "N/A".
pub fn parse_detail_response(body: &str) -> Result<MovieRecord> {
    let wire: WireMovieDetails = serde_json::from_str(body)?;

    if !is_success(&wire.response) {
        return Err(api_error(wire.error));
    }

    Ok(MovieRecord {
        id: required(wire.imdb_id, "imdbID")?,
        title: required(wire.title, "Title")?,
        year: or_not_available(wire.year),
        poster_url: or_not_available(wire.poster),
        rating: or_not_available(wire.imdb_rating),
        genre: or_not_available(wire.genre),
        runtime: or_not_available(wire.runtime),
        director: or_not_available(wire.director),
        actors: or_not_available(wire.actors),
        plot: or_not_available(wire.plot),
    })
}
