use std::path::PathBuf;

use clap::Parser;

use crate::{
    course::ColumnNames,
    model::{
        config::ScoringConfig,
        constants::{
            BASELINE_PUTTS, DEFAULT_SEED, DISTANCE_COLUMN, DRIVE_DIVISOR, HANDICAP_COLUMN, NARROW_HANDICAP_THRESHOLD,
            SCORE_COLUMN, WEIGHT_COURSE, WEIGHT_HISTORICAL, WEIGHT_RECENT
        },
        structures::{failure_policy::FailurePolicy, output_format::OutputFormat}
    }
};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "course-fit",
    display_name = "Course Fit",
    long_about = "Ranks tiers of golfers by how well they fit a course's hole-by-hole statistics"
)]
pub struct Args {
    /// CSV with one row per hole. Must contain the distance, average score
    /// and handicap columns (see --distance-column and friends).
    #[arg(short, long, env = "COURSE_FIT_COURSE", help = "Path to the course hole table")]
    pub course: PathBuf,

    /// Label used in report headers. Defaults to the course file name
    /// without its extension.
    #[arg(long, env = "COURSE_FIT_COURSE_NAME")]
    pub course_name: Option<String>,

    #[arg(long, env = "COURSE_FIT_DISTANCE_COLUMN", default_value = DISTANCE_COLUMN)]
    pub distance_column: String,

    #[arg(long, env = "COURSE_FIT_SCORE_COLUMN", default_value = SCORE_COLUMN)]
    pub score_column: String,

    #[arg(long, env = "COURSE_FIT_HANDICAP_COLUMN", default_value = HANDICAP_COLUMN)]
    pub handicap_column: String,

    /// JSON object mapping tier numbers to player lists,
    /// e.g. {"1": ["Scottie Scheffler", "Rory McIlroy"]}.
    /// The built-in six-tier roster is used when omitted.
    #[arg(short, long, env = "COURSE_FIT_ROSTER")]
    pub roster: Option<PathBuf>,

    /// CSV of known player profiles with the columns
    /// player,driving_distance,fairway_accuracy,putting_avg.
    /// Profiles are sampled synthetically when omitted.
    #[arg(short, long, env = "COURSE_FIT_PROFILES")]
    pub profiles: Option<PathBuf>,

    /// Seeds every placeholder random source; the same seed reproduces the same report
    #[arg(short, long, env = "COURSE_FIT_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    #[arg(long, env = "COURSE_FIT_WEIGHT_COURSE", default_value_t = WEIGHT_COURSE)]
    pub weight_course: f64,

    #[arg(long, env = "COURSE_FIT_WEIGHT_RECENT", default_value_t = WEIGHT_RECENT)]
    pub weight_recent: f64,

    #[arg(long, env = "COURSE_FIT_WEIGHT_HISTORICAL", default_value_t = WEIGHT_HISTORICAL)]
    pub weight_historical: f64,

    /// Holes with a handicap at or below this rank count as narrow
    #[arg(long, env = "COURSE_FIT_NARROW_HANDICAP", default_value_t = NARROW_HANDICAP_THRESHOLD)]
    pub narrow_handicap: u32,

    #[arg(long, env = "COURSE_FIT_DRIVE_DIVISOR", default_value_t = DRIVE_DIVISOR)]
    pub drive_divisor: f64,

    #[arg(long, env = "COURSE_FIT_BASELINE_PUTTS", default_value_t = BASELINE_PUTTS)]
    pub baseline_putts: f64,

    /// flag: leave failing players out and list them under the tier.
    /// abort: stop at the first player that cannot be scored.
    #[arg(long, env = "COURSE_FIT_ON_PLAYER_ERROR", default_value_t = FailurePolicy::Flag)]
    pub on_player_error: FailurePolicy,

    #[arg(short, long, env = "COURSE_FIT_FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error) or a full filter
    /// directive such as "course_fit=debug"
    #[arg(short, long, env = "RUST_LOG", default_value = "info", help = "Sets the logging verbosity")]
    pub log_level: String
}

impl Args {
    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            weight_course: self.weight_course,
            weight_recent: self.weight_recent,
            weight_historical: self.weight_historical,
            narrow_handicap: self.narrow_handicap,
            drive_divisor: self.drive_divisor,
            baseline_putts: self.baseline_putts
        }
    }

    pub fn column_names(&self) -> ColumnNames {
        ColumnNames {
            distance: self.distance_column.clone(),
            average_score: self.score_column.clone(),
            handicap: self.handicap_column.clone()
        }
    }

    pub fn course_label(&self) -> String {
        self.course_name.clone().unwrap_or_else(|| {
            self.course
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.course.display().to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["course-fit", "--course", "data/oakmont.csv"]).unwrap();

        assert_eq!(args.scoring_config(), ScoringConfig::default());
        assert_eq!(args.column_names(), ColumnNames::default());
        assert_eq!(args.seed, 42);
        assert_eq!(args.on_player_error, FailurePolicy::Flag);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.course_label(), "oakmont");
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "course-fit",
            "--course",
            "holes.csv",
            "--course-name",
            "Oakmont",
            "--weight-course",
            "0.6",
            "--weight-recent",
            "0.2",
            "--narrow-handicap",
            "4",
            "--on-player-error",
            "abort",
            "--format",
            "json",
            "--seed",
            "7"
        ])
        .unwrap();

        let config = args.scoring_config();
        assert_eq!(config.weight_course, 0.6);
        assert_eq!(config.weight_recent, 0.2);
        assert_eq!(config.weight_historical, 0.2);
        assert_eq!(config.narrow_handicap, 4);
        assert_eq!(args.on_player_error, FailurePolicy::Abort);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.seed, 7);
        assert_eq!(args.course_label(), "Oakmont");
    }

    #[test]
    fn test_course_required() {
        assert!(Args::try_parse_from(["course-fit"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(Args::try_parse_from(["course-fit", "--course", "holes.csv", "--on-player-error", "skip"]).is_err());
    }
}
