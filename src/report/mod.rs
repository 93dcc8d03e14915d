pub mod render;
pub mod roster;

use serde::Serialize;
use tracing::info;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use crate::{
    course::CourseTable,
    model::{
        error::PlayerFailure,
        ranker::{Ranker, TierRanking}
    },
    utils::progress_utils::progress_span
};

pub use render::{render_json, render_text};
pub use roster::{default_roster, RosterError, TierRoster};

#[derive(Debug, Serialize)]
pub struct Report {
    /// Label of the course the players were fitted against
    pub course: String,
    pub tiers: Vec<TierRanking>
}

/// Ranks every tier of `roster` against `table`, in roster order.
///
/// Tiers share nothing but the read-only table. A tier that aborts under
/// the fail-fast policy stops the report.
pub fn generate_report(
    course: &str,
    table: &CourseTable,
    roster: &TierRoster,
    ranker: &mut Ranker
) -> Result<Report, PlayerFailure> {
    let span = progress_span(roster.player_count() as u64, "Scoring players");
    let _guard = span.enter();

    let mut tiers = Vec::with_capacity(roster.len());
    for (tier, players) in roster.iter() {
        info!(tier, players = players.len(), "Ranking tier");

        let ranking = ranker.rank_players(players, table, tier)?;
        span.pb_inc(players.len() as u64);

        tiers.push(ranking);
    }

    Ok(Report {
        course: course.to_string(),
        tiers
    })
}
