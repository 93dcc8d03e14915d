use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The single deterministic source every placeholder random handle is
/// forked from. Seeded once per run; given the same seed and the same
/// fork order, every synthetic output is reproducible.
pub struct SeededRandom {
    master: ChaCha8Rng
}

impl SeededRandom {
    pub fn new(seed: u64) -> SeededRandom {
        SeededRandom {
            master: ChaCha8Rng::seed_from_u64(seed)
        }
    }

    /// Forks an independent child handle off the master stream.
    pub fn fork(&mut self) -> ChaCha8Rng {
        ChaCha8Rng::from_rng(&mut self.master)
    }
}
