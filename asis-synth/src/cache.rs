//! Epoch-versioned cache around the synthesizer.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::{SampleData, SampleDataSynthesizer, SampleHandle, SynthError};

/// Holds at most one synthesis result per epoch.
///
/// The fill runs while the slot lock is held, so concurrent callers during a
/// miss wait for the in-flight synthesis and then share its result.
pub struct SampleCache {
    synthesizer: SampleDataSynthesizer,
    seed: Option<u64>,
    slot: Mutex<Slot>,
}

struct Slot {
    epoch: u64,
    value: Option<SampleHandle>,
}

impl SampleCache {
    /// `seed = None` draws from OS entropy on every fill.
    pub fn new(synthesizer: SampleDataSynthesizer, seed: Option<u64>) -> Self {
        Self {
            synthesizer,
            seed,
            slot: Mutex::new(Slot {
                epoch: 0,
                value: None,
            }),
        }
    }

    /// Return the cached sample set, synthesizing it on a miss.
    pub fn get(&self) -> Result<SampleHandle, SynthError> {
        let mut slot = self.slot.lock().map_err(|_| SynthError::Poisoned)?;
        if let Some(value) = &slot.value {
            debug!(epoch = slot.epoch, "sample cache hit");
            return Ok(Arc::clone(value));
        }

        let mut rng = self.rng_for(slot.epoch);
        let (keywords, traffic) = self.synthesizer.generate(&mut rng);
        let data = Arc::new(SampleData {
            epoch: slot.epoch,
            keywords,
            traffic,
        });
        info!(
            epoch = slot.epoch,
            keywords = data.keywords.len(),
            traffic = data.traffic.len(),
            "synthesized sample data"
        );
        slot.value = Some(Arc::clone(&data));
        Ok(data)
    }

    /// Drop the cached value and start a new epoch. Returns the new epoch.
    pub fn invalidate(&self) -> Result<u64, SynthError> {
        let mut slot = self.slot.lock().map_err(|_| SynthError::Poisoned)?;
        slot.value = None;
        slot.epoch += 1;
        info!(epoch = slot.epoch, "sample cache invalidated");
        Ok(slot.epoch)
    }

    pub fn epoch(&self) -> Result<u64, SynthError> {
        Ok(self.slot.lock().map_err(|_| SynthError::Poisoned)?.epoch)
    }

    pub fn is_filled(&self) -> Result<bool, SynthError> {
        Ok(self.slot.lock().map_err(|_| SynthError::Poisoned)?.value.is_some())
    }

    fn rng_for(&self, epoch: u64) -> StdRng {
        match self.seed {
            // Epoch 0 uses the configured seed as-is.
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(epoch)),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn seeded(seed: u64) -> SampleCache {
        SampleCache::new(SampleDataSynthesizer::new(), Some(seed))
    }

    #[test]
    fn hit_returns_same_allocation() {
        let cache = seeded(1);
        assert!(!cache.is_filled().unwrap());
        let a = cache.get().unwrap();
        let b = cache.get().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.traffic, b.traffic);
        assert!(cache.is_filled().unwrap());
    }

    #[test]
    fn epoch_zero_matches_direct_generation() {
        let cache = seeded(99);
        let direct = SampleDataSynthesizer::new().generate(&mut StdRng::seed_from_u64(99));
        let cached = cache.get().unwrap();
        assert_eq!(cached.keywords, direct.0);
        assert_eq!(cached.traffic, direct.1);
    }

    #[test]
    fn invalidate_starts_new_epoch_and_resamples() {
        let cache = seeded(5);
        let first = cache.get().unwrap();
        assert_eq!(cache.invalidate().unwrap(), 1);
        assert!(!cache.is_filled().unwrap());

        let second = cache.get().unwrap();
        assert_eq!(second.epoch, 1);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_ne!(first.traffic, second.traffic);
        assert_eq!(first.keywords, second.keywords);
        assert_eq!(second.traffic.len(), first.traffic.len());
    }

    #[test]
    fn concurrent_misses_share_one_fill() {
        let cache = Arc::new(SampleCache::new(SampleDataSynthesizer::new(), None));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get().unwrap())
            })
            .collect();
        let results: Vec<SampleHandle> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for r in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], r));
        }
    }
}
