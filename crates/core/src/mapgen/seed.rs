//! Seed-string hashing and the deterministic random stream used by noise filling.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use xxhash_rust::xxh3::xxh3_64;

pub(crate) fn seed_state(seed: &str) -> u64 {
    xxh3_64(seed.as_bytes())
}

/// Random stream for one generation run. Equal seed strings give equal streams.
pub(crate) struct SeedStream {
    rng: ChaCha8Rng,
}

impl SeedStream {
    pub(crate) fn from_seed(seed: &str) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed_state(seed)) }
    }

    /// Uniform-ish draw in `min_value..=max_value`.
    pub(crate) fn next_in_range(&mut self, min_value: u32, max_value: u32) -> u32 {
        debug_assert!(min_value <= max_value);
        let range_size = max_value - min_value + 1;
        min_value + self.rng.next_u32() % range_size
    }
}

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fresh seed string for callers that asked for a random seed.
pub fn runtime_seed() -> String {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy).to_string()
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
