use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::model::{constants::FORM_BUCKETS, structures::form_key::FormKey};

/// A scalar form signal for a player, roughly within 0..1.
///
/// Estimates depend on the identity only; there is no course or profile
/// input and no state shared across players.
pub trait FormEstimator {
    fn estimate(&mut self, identity: &str) -> f64;
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes of `s`. Identical across runs and
/// platforms.
pub fn stable_hash(s: &str) -> u64 {
    s.bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| (hash ^ byte as u64).wrapping_mul(FNV_PRIME))
}

/// Placeholder recent-form signal keyed on the reversed identity.
pub fn recent_form<R: Rng>(identity: &str, rng: &mut R) -> f64 {
    keyed_estimate(FormKey::Reversed, identity, rng)
}

/// Placeholder historical-form signal keyed on the uppercased identity.
pub fn historical_form<R: Rng>(identity: &str, rng: &mut R) -> f64 {
    keyed_estimate(FormKey::Uppercase, identity, rng)
}

/// An identity-derived bucket in 0..50 plus one uniform draw in [0, 1),
/// scaled down by 50.
fn keyed_estimate<R: Rng>(key: FormKey, identity: &str, rng: &mut R) -> f64 {
    let bucket = stable_hash(&key.apply(identity)) % FORM_BUCKETS;
    let jitter: f64 = rng.random();
    let estimate = (bucket as f64 + jitter) / FORM_BUCKETS as f64;

    trace!(identity, key = %key, bucket, estimate, "Estimated form");
    estimate
}

/// [`FormEstimator`] that owns its random handle and applies one [`FormKey`].
pub struct SyntheticForm<R: Rng = ChaCha8Rng> {
    key: FormKey,
    rng: R
}

impl<R: Rng> SyntheticForm<R> {
    pub fn new(key: FormKey, rng: R) -> Self {
        Self { key, rng }
    }

    /// Stand-in for recent tournament form
    pub fn recent(rng: R) -> Self {
        Self::new(FormKey::Reversed, rng)
    }

    /// Stand-in for historical performance at the venue
    pub fn historical(rng: R) -> Self {
        Self::new(FormKey::Uppercase, rng)
    }

    pub fn key(&self) -> FormKey {
        self.key
    }

    /// The deterministic part of the estimate.
    pub fn bucket(&self, identity: &str) -> u64 {
        stable_hash(&self.key.apply(identity)) % FORM_BUCKETS
    }
}

impl<R: Rng> FormEstimator for SyntheticForm<R> {
    fn estimate(&mut self, identity: &str) -> f64 {
        keyed_estimate(self.key, identity, &mut self.rng)
    }
}
