// src/generators/entropy.rs
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

/// A source of uniformly distributed bounded integers.
pub trait EntropySource {
    /// Returns a value in `[0, bound)`. A zero bound yields 0.
    fn next_bounded(&mut self, bound: u32) -> u32;

    /// Whether the values are suitable for secrets.
    fn is_secure(&self) -> bool;
}

/// Operating-system CSPRNG with rejection sampling.
#[derive(Debug, Default)]
pub struct SecureEntropy {
    rng: OsRng,
}

impl SecureEntropy {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }

    /// Returns a source only if the OS generator actually answers.
    pub fn probe() -> Option<Self> {
        let mut buf = [0u8; 4];
        match OsRng.try_fill_bytes(&mut buf) {
            Ok(()) => Some(Self::new()),
            Err(e) => {
                log::warn!("OS random source unavailable: {}", e);
                None
            }
        }
    }
}

impl EntropySource for SecureEntropy {
    fn next_bounded(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }

        // Largest multiple of bound that fits in 2^32; values above it are redrawn.
        let limit = (1u64 << 32) / u64::from(bound) * u64::from(bound);
        loop {
            let value = self.rng.next_u32();
            if u64::from(value) < limit {
                return value % bound;
            }
        }
    }

    fn is_secure(&self) -> bool {
        true
    }
}

/// Best-effort generator seeded from the clock. Not for secrets.
#[derive(Debug)]
pub struct FallbackEntropy {
    rng: ChaCha8Rng,
}

impl FallbackEntropy {
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl Default for FallbackEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for FallbackEntropy {
    fn next_bounded(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }

        let sample: f64 = self.rng.gen();
        ((sample * f64::from(bound)).floor() as u32).min(bound - 1)
    }

    fn is_secure(&self) -> bool {
        false
    }
}

/// Picks the OS source when it is usable, the clock-seeded one otherwise.
pub fn detect() -> Box<dyn EntropySource + Send> {
    match SecureEntropy::probe() {
        Some(secure) => Box::new(secure),
        None => {
            log::warn!("Falling back to non-cryptographic randomness; generated passwords are best-effort only");
            Box::new(FallbackEntropy::new())
        }
    }
}
