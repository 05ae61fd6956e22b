use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Источник случайности для автоигры (боты, стресс-тест).
pub trait ActionRng {
    /// Равномерно в `0..upper` (`upper > 0`).
    fn below(&mut self, upper: u64) -> u64;

    /// `true` с вероятностью `percent` из 100.
    fn chance(&mut self, percent: u32) -> bool {
        self.below(100) < u64::from(percent)
    }
}

/// Системный RNG (`thread_rng`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl ActionRng for SystemRng {
    fn below(&mut self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Один и тот же seed даёт одну и ту же последовательность действий.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

impl ActionRng for DeterministicRng {
    fn below(&mut self, upper: u64) -> u64 {
        if upper == 0 {
            return 0;
        }
        self.inner.gen_range(0..upper)
    }
}
