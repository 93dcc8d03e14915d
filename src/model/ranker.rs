use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    course::CourseTable,
    model::{
        config::{ConfigError, ScoringConfig},
        course_fit::score_course_fit,
        error::{PlayerFailure, ScoringError},
        form::{FormEstimator, SyntheticForm},
        profile::{ProfileSource, SyntheticProfileSource},
        random::SeededRandom,
        structures::{failure_policy::FailurePolicy, player_profile::PlayerProfile, player_score_record::PlayerScoreRecord}
    }
};

/// The ranked result for one tier.
#[derive(Debug, Serialize)]
pub struct TierRanking {
    pub tier: u32,
    /// Sorted by `overall_score`, descending. Ties keep roster order.
    pub records: Vec<PlayerScoreRecord>,
    /// Players left out of `records` under [`FailurePolicy::Flag`]
    pub failures: Vec<PlayerFailure>
}

/// Everything drawn from the random-backed collaborators for one player.
#[derive(Debug, Clone)]
struct PlayerSample {
    identity: String,
    profile: PlayerProfile,
    recent_score: f64,
    historical_score: f64
}

pub struct Ranker {
    config: ScoringConfig,
    policy: FailurePolicy,
    profiles: Box<dyn ProfileSource>,
    recent: Box<dyn FormEstimator>,
    historical: Box<dyn FormEstimator>
}

impl Ranker {
    pub fn new(
        config: ScoringConfig,
        policy: FailurePolicy,
        profiles: Box<dyn ProfileSource>,
        recent: Box<dyn FormEstimator>,
        historical: Box<dyn FormEstimator>
    ) -> Result<Ranker, ConfigError> {
        config.validate()?;

        Ok(Ranker {
            config,
            policy,
            profiles,
            recent,
            historical
        })
    }

    /// A ranker wired entirely to the placeholder collaborators, each
    /// with its own handle forked from `random`.
    pub fn synthetic(config: ScoringConfig, policy: FailurePolicy, random: &mut SeededRandom) -> Result<Ranker, ConfigError> {
        let profiles = SyntheticProfileSource::new(random.fork());
        let recent = SyntheticForm::recent(random.fork());
        let historical = SyntheticForm::historical(random.fork());

        Ranker::new(config, policy, Box::new(profiles), Box::new(recent), Box::new(historical))
    }

    /// # Tier ranking
    ///
    /// 1. Sample every player in roster order: profile, recent form, historical form. This is the
    ///     only phase that touches the collaborators, so random handles are consumed in a fixed order.
    /// 2. Score the samples in parallel. Each player's computation reads only its own sample and the
    ///     shared, immutable course table.
    /// 3. Once every record exists, sort descending by overall score.
    ///
    /// A failing player is either flagged and left out, or aborts the tier, depending on the
    /// configured [`FailurePolicy`]. Failures from both phases are handled in roster order, so the
    /// abort names the first failing player and flagged failures keep roster order. An empty
    /// roster yields an empty ranking.
    pub fn rank_players(
        &mut self,
        identities: &[String],
        table: &CourseTable,
        tier: u32
    ) -> Result<TierRanking, PlayerFailure> {
        let mut samples = Vec::with_capacity(identities.len());

        for identity in identities {
            let sample = self.sample(identity).map_err(|e| (identity.clone(), e));
            let stop = sample.is_err() && self.policy == FailurePolicy::Abort;
            samples.push(sample);

            // Nothing past a fatal failure is queried
            if stop {
                break;
            }
        }

        let config = self.config;
        let scored: Vec<Result<PlayerScoreRecord, (String, ScoringError)>> = samples
            .into_par_iter()
            .map(|sample| sample.and_then(|sample| score_sample(&sample, table, &config, tier)))
            .collect();

        let mut records = Vec::with_capacity(scored.len());
        let mut failures = Vec::new();
        for result in scored {
            match result {
                Ok(record) => records.push(record),
                Err((identity, error)) => self.handle_failure(&identity, tier, error, &mut failures)?
            }
        }

        let records = records
            .into_iter()
            .sorted_by(|a, b| b.overall_score.total_cmp(&a.overall_score))
            .collect::<Vec<_>>();

        debug!(tier, ranked = records.len(), flagged = failures.len(), "Ranked tier");

        Ok(TierRanking { tier, records, failures })
    }

    fn sample(&mut self, identity: &str) -> Result<PlayerSample, ScoringError> {
        let profile = self.profiles.fetch_profile(identity)?;
        let recent_score = self.recent.estimate(identity);
        let historical_score = self.historical.estimate(identity);

        Ok(PlayerSample {
            identity: identity.to_string(),
            profile,
            recent_score,
            historical_score
        })
    }

    fn handle_failure(
        &self,
        identity: &str,
        tier: u32,
        error: ScoringError,
        failures: &mut Vec<PlayerFailure>
    ) -> Result<(), PlayerFailure> {
        let failure = PlayerFailure {
            identity: identity.to_string(),
            tier,
            error
        };

        match self.policy {
            FailurePolicy::Flag => {
                warn!(%failure, "Flagging player");
                failures.push(failure);
                Ok(())
            }
            FailurePolicy::Abort => Err(failure)
        }
    }
}

fn score_sample(
    sample: &PlayerSample,
    table: &CourseTable,
    config: &ScoringConfig,
    tier: u32
) -> Result<PlayerScoreRecord, (String, ScoringError)> {
    let fit = score_course_fit(&sample.profile, table, config).map_err(|e| (sample.identity.clone(), e))?;
    let overall_score = config.overall_score(fit.course_score, sample.recent_score, sample.historical_score);

    debug!(
        tier,
        player = %sample.identity,
        course = fit.course_score,
        recent = sample.recent_score,
        historical = sample.historical_score,
        overall = overall_score,
        "Scored player"
    );

    Ok(PlayerScoreRecord {
        player: sample.identity.clone(),
        tier,
        course_score: fit.course_score,
        recent_score: sample.recent_score,
        historical_score: sample.historical_score,
        overall_score
    })
}
