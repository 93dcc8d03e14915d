use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error)
}

/// Ordered mapping of tier number to the players in that tier.
///
/// Tiers are reported in insertion order (file order when loaded), not
/// numeric order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierRoster {
    tiers: IndexMap<u32, Vec<String>>
}

impl TierRoster {
    pub fn new() -> TierRoster {
        TierRoster { tiers: IndexMap::new() }
    }

    /// Adds a tier, or replaces its players if it already exists (keeping its position).
    pub fn insert(&mut self, tier: u32, players: Vec<String>) {
        self.tiers.insert(tier, players);
    }

    pub fn get(&self, tier: u32) -> Option<&[String]> {
        self.tiers.get(&tier).map(|p| p.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[String])> {
        self.tiers.iter().map(|(tier, players)| (*tier, players.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn player_count(&self) -> usize {
        self.tiers.values().map(|p| p.len()).sum()
    }

    /// Parses a roster of the form `{"1": ["Player", ...], "2": [...]}`.
    pub fn from_json(json: &str) -> Result<TierRoster, RosterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<TierRoster, RosterError> {
        let json = fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source
        })?;

        let roster = Self::from_json(&json)?;
        info!(path = %path.display(), tiers = roster.len(), players = roster.player_count(), "Loaded roster");

        Ok(roster)
    }
}

/// The built-in six tiers of ten players.
pub fn default_roster() -> TierRoster {
    let tiers: [(u32, [&str; 10]); 6] = [
        (
            1,
            [
                "Scottie Scheffler",
                "Bryson DeChambeau",
                "Rory McIlroy",
                "Jon Rahm",
                "Xander Schauffele",
                "Collin Morikawa",
                "Ludvig Aberg",
                "Joaquin Niemann",
                "Tommy Fleetwood",
                "Shane Lowry"
            ]
        ),
        (
            2,
            [
                "Justin Thomas",
                "Patrick Cantlay",
                "Sepp Straka",
                "Tyrrell Hatton",
                "Brooks Koepka",
                "Viktor Hovland",
                "Jordan Spieth",
                "Russell Henley",
                "Corey Conners",
                "Hideki Matsuyama"
            ]
        ),
        (
            3,
            [
                "Ben Griffin",
                "Sam Burns",
                "Keegan Bradley",
                "Harris English",
                "Tony Finau",
                "Maverick McNealy",
                "Robert MacIntyre",
                "Ryan Fox",
                "Si Woo Kim",
                "Daniel Berger"
            ]
        ),
        (
            4,
            [
                "Taylor Pendrith",
                "Matthew Fitzpatrick",
                "Patrick Reed",
                "Sungjae Im",
                "Justin Rose",
                "Jason Day",
                "Aaron Rai",
                "Cameron Young",
                "J.J. Spaun",
                "Akshay Bhatia"
            ]
        ),
        (
            5,
            [
                "Min Woo Lee",
                "Wyndham Clark",
                "Cameron Smith",
                "Denny McCarthy",
                "Adam Scott",
                "J.T. Poston",
                "Nick Taylor",
                "Dustin Johnson",
                "Andrew Novak",
                "Thorbjørn Olesen"
            ]
        ),
        (
            6,
            [
                "Brian Harman",
                "Jinichiro Kozuma",
                "Michael Kim",
                "Davis Thompson",
                "Joohyung Kim",
                "Carlos Ortiz",
                "Gary Woodland",
                "Marc Leishman",
                "Byeong Hun An",
                "Max Greyserman"
            ]
        )
    ];

    let mut roster = TierRoster::new();
    for (tier, players) in tiers {
        roster.insert(tier, players.iter().map(|p| p.to_string()).collect());
    }

    roster
}
