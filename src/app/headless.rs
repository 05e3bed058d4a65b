use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fetch::FixturesSource;
use crate::records::write_listing_csv;
use crate::utils::local_today;
use crate::view::{build_listing, filter_and_sort, render_listing_text, LeagueFilter};

use super::export::download_csv;

/// Fetch once and write the listing for `league` (all when `None`) to `out`.
///
/// Returns the number of fixtures written.
pub async fn list_fixtures<S, W>(
    source: &S,
    league: Option<&str>,
    as_csv: bool,
    mut out: W,
) -> Result<usize>
where
    S: FixturesSource,
    W: Write,
{
    let matches = source.fetch_matches().await?;
    let filter = league.map(LeagueFilter::from_value).unwrap_or_default();

    if as_csv {
        let selected = filter_and_sort(&matches, &filter);
        write_listing_csv(&selected, out)?;
        return Ok(selected.len());
    }

    let view = build_listing(&matches, &filter);
    out.write_all(render_listing_text(&view).as_bytes())?;
    out.flush()?;
    Ok(view.cards().len())
}

/// One CSV download into `dir`, named after today's local date.
pub async fn export_once<S: FixturesSource>(source: &S, dir: &Path) -> Result<PathBuf> {
    download_csv(source, dir, local_today()).await
}
