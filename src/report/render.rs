use super::Report;
use crate::model::ranker::TierRanking;

const PLAYER_HEADER: &str = "player";
const COURSE_HEADER: &str = "course_score";
const OVERALL_HEADER: &str = "overall_score";

/// Renders every tier as an aligned table, scores rounded to three decimals.
pub fn render_text(report: &Report) -> String {
    report
        .tiers
        .iter()
        .map(|ranking| render_tier(ranking, &report.course))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_tier(ranking: &TierRanking, course: &str) -> String {
    let mut lines = vec![format!("Tier {} Rankings ({} fit):", ranking.tier, course)];

    if ranking.records.is_empty() {
        lines.push("  (no ranked players)".to_string());
    } else {
        let width = ranking
            .records
            .iter()
            .map(|r| r.player.chars().count())
            .max()
            .unwrap_or(0)
            .max(PLAYER_HEADER.len());

        lines.push(format!("{:<width$}  {}  {}", PLAYER_HEADER, COURSE_HEADER, OVERALL_HEADER));
        lines.extend(ranking.records.iter().map(|record| {
            format!(
                "{:<width$}  {:>c$.3}  {:>o$.3}",
                record.player,
                record.course_score,
                record.overall_score,
                c = COURSE_HEADER.len(),
                o = OVERALL_HEADER.len()
            )
        }));
    }

    lines.extend(
        ranking
            .failures
            .iter()
            .map(|failure| format!("  flagged: {} ({})", failure.identity, failure.error))
    );

    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
