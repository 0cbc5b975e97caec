//! Terminal rendering of the view state.
//!
//! Cards show title, year and rating; the details view adds genre,
//! runtime, director, cast and plot.

use std::fmt::Write;

use catalog::MovieRecord;
use colored::Colorize;
use session::ViewState;

/// Shown in place of a missing poster
pub const POSTER_PLACEHOLDER: &str = "https://via.placeholder.com/300x450?text=No+Image";

pub fn poster_or_placeholder(record: &MovieRecord) -> &str {
    record.poster().unwrap_or(POSTER_PLACEHOLDER)
}

/// Rating for cards, with a dash when unknown
pub fn rating_or_dash(record: &MovieRecord) -> &str {
    record.rating().unwrap_or("–")
}

/// The banner lines plus one card per result.
pub fn render_grid(state: &ViewState) -> String {
    let mut out = String::new();

    if let Some(banner) = state.location_banner() {
        let _ = writeln!(out, "{}", banner.cyan());
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "{}", error.red().bold());
    }

    for (index, record) in state.results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({})  ⭐ {}",
            (index + 1).to_string().green(),
            record.title.bold(),
            record.year,
            rating_or_dash(record)
        );
        let _ = writeln!(out, "   {}", poster_or_placeholder(record).dimmed());
    }

    out
}

/// Full details for one record.
pub fn render_details(record: &MovieRecord) -> String {
    let mut out = String::new();
    let label = |name: &str| format!("{}:", name).bold();

    let _ = writeln!(out, "{}", format!("{} ({})", record.title, record.year).blue().bold());
    let _ = writeln!(out, "{} {}", label("IMDb Rating"), record.rating);
    let _ = writeln!(out, "{} {}", label("Genre"), record.genre);
    let _ = writeln!(out, "{} {}", label("Runtime"), record.runtime);
    let _ = writeln!(out, "{} {}", label("Director"), record.director);
    let _ = writeln!(out, "{} {}", label("Actors"), record.actors);
    let _ = writeln!(out, "{} {}", label("Plot"), record.plot);
    let _ = writeln!(out, "{} {}", label("Poster"), poster_or_placeholder(record));

    out
}
