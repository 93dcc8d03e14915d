//! The scoring pipeline: profile and form collaborators, the course-fit
//! scorer and the tier ranker.

pub mod config;
pub mod constants;
pub mod course_fit;
pub mod error;
pub mod form;
pub mod profile;
pub mod random;
pub mod ranker;
pub mod structures;

pub use config::{ConfigError, ScoringConfig};
pub use course_fit::{score_course_fit, CourseFitBreakdown};
pub use error::{PlayerFailure, ScoringError};
pub use form::{historical_form, recent_form, stable_hash, FormEstimator, SyntheticForm};
pub use profile::{ProfileSource, StaticProfileSource, SyntheticProfileSource};
pub use random::SeededRandom;
pub use ranker::{Ranker, TierRanking};
