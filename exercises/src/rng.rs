use rand::{rngs::StdRng, Rng, SeedableRng};

/// The only source of randomness an exercise may use. Passing it in (rather
/// than reaching for a global generator) is what makes episodes replayable.
pub trait RandomSource {
    /// Returns a value in `low..high`. A degenerate range (`low == high`)
    /// returns `low`; it is not an error.
    fn uniform(&mut self, low: f32, high: f32) -> f32;
}

/// A `RandomSource` that produces the same draws for the same seed.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    // `gen_range` panics on an empty range, and some drills ask for one.
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        let u: f64 = self.rng.gen();
        let (low, high) = (f64::from(low), f64::from(high));
        (low + (high - low) * u) as f32
    }
}

#[cfg(test)]
pub mod tests {
    use crate::rng::{RandomSource, SeededRandom};

    /// Always draws the same fraction of the requested range. `0.0` gives the
    /// low end of every range.
    pub struct FixedFraction(pub f64);

    impl RandomSource for FixedFraction {
        fn uniform(&mut self, low: f32, high: f32) -> f32 {
            let (low, high) = (f64::from(low), f64::from(high));
            (low + (high - low) * self.0) as f32
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = SeededRandom::new(1234);
        let mut b = SeededRandom::new(1234);
        for _ in 0..100 {
            assert_eq!(
                a.uniform(-500.0, 500.0).to_bits(),
                b.uniform(-500.0, 500.0).to_bits(),
            );
        }
    }

    #[test]
    fn draws_stay_in_range() {
        let mut rng = SeededRandom::new(0);
        for _ in 0..1000 {
            let x = rng.uniform(-100.0, -90.0);
            assert!(x >= -100.0 && x <= -90.0, "{}", x);
        }
    }

    #[test]
    fn degenerate_range() {
        let mut rng = SeededRandom::new(99);
        for _ in 0..10 {
            assert_eq!(rng.uniform(-800.0, -800.0), -800.0);
        }
    }
}
