use std::{collections::HashMap, fs::File, io::Read, path::Path};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::{info, trace};

use crate::{
    course::InputError,
    model::{
        constants::{SYNTHETIC_DRIVING_DISTANCE, SYNTHETIC_FAIRWAY_ACCURACY, SYNTHETIC_PUTTING_AVG},
        error::ScoringError,
        structures::player_profile::PlayerProfile
    }
};

/// Boundary to whatever supplies player attributes. Every call is a
/// fresh query; implementations must not share state between players.
pub trait ProfileSource {
    fn fetch_profile(&mut self, identity: &str) -> Result<PlayerProfile, ScoringError>;
}

/// Placeholder provider that samples every attribute uniformly from a
/// realistic range. Sampling ignores the identity, so two players may
/// receive identical profiles.
pub struct SyntheticProfileSource<R: Rng = ChaCha8Rng> {
    rng: R
}

impl<R: Rng> SyntheticProfileSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ProfileSource for SyntheticProfileSource<R> {
    fn fetch_profile(&mut self, identity: &str) -> Result<PlayerProfile, ScoringError> {
        let profile = PlayerProfile {
            driving_distance: self.rng.random_range(SYNTHETIC_DRIVING_DISTANCE),
            fairway_accuracy: self.rng.random_range(SYNTHETIC_FAIRWAY_ACCURACY),
            putting_avg: self.rng.random_range(SYNTHETIC_PUTTING_AVG)
        };

        trace!(identity, ?profile, "Sampled synthetic profile");
        Ok(profile)
    }
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    player: String,
    driving_distance: f64,
    fairway_accuracy: f64,
    putting_avg: f64
}

/// Provider backed by a fixed set of known profiles, typically loaded from
/// a CSV export of real player statistics.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileSource {
    profiles: HashMap<String, PlayerProfile>
}

impl StaticProfileSource {
    pub fn new(profiles: impl IntoIterator<Item = (String, PlayerProfile)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect()
        }
    }

    /// Loads profiles from a CSV with the columns
    /// `player,driving_distance,fairway_accuracy,putting_avg`.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source
        })?;

        let source = Self::from_reader(file)?;
        info!(path = %path.display(), players = source.len(), "Loaded player profiles");

        Ok(source)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, InputError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
        let mut profiles = HashMap::new();

        for result in reader.deserialize::<RawProfile>() {
            let raw = result?;
            profiles.insert(
                raw.player,
                PlayerProfile {
                    driving_distance: raw.driving_distance,
                    fairway_accuracy: raw.fairway_accuracy,
                    putting_avg: raw.putting_avg
                }
            );
        }

        Ok(Self { profiles })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileSource for StaticProfileSource {
    fn fetch_profile(&mut self, identity: &str) -> Result<PlayerProfile, ScoringError> {
        let profile = self.profiles.get(identity).copied().ok_or_else(|| ScoringError::Provider {
            identity: identity.to_string(),
            reason: "no profile on record".to_string()
        })?;

        profile.validate().map_err(|reason| ScoringError::Provider {
            identity: identity.to_string(),
            reason
        })?;

        Ok(profile)
    }
}
