use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Random source owned by an environment or a policy. Seeded when a seed is
/// given, otherwise drawn from OS entropy.
#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { seed, rng }
    }

    /// Child generator seeded from `parent`, so a seeded experiment stays
    /// reproducible however many environments and policies it spawns.
    pub fn derive<R: Rng + ?Sized>(parent: &mut R) -> Self {
        Self::new(Some(parent.random::<u64>()))
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn seeded_is_reproducible() {
        let mut a = MaybeSeededRng::new(Some(SEED));
        let mut b = MaybeSeededRng::new(Some(SEED));

        let xs: Vec<u64> = (0..8).map(|_| a.get_rng().random()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), Some(SEED));
    }

    #[test]
    fn derive_from_same_parent_state() {
        let mut parent_1 = SmallRng::seed_from_u64(SEED);
        let mut parent_2 = SmallRng::seed_from_u64(SEED);

        let mut child_1 = MaybeSeededRng::derive(&mut parent_1);
        let mut child_2 = MaybeSeededRng::derive(&mut parent_2);
        assert_eq!(child_1.seed(), child_2.seed());
        assert_eq!(
            child_1.get_rng().random::<f64>(),
            child_2.get_rng().random::<f64>()
        );
    }

    #[test]
    fn unseeded() {
        let rng = MaybeSeededRng::new(None);
        assert!(rng.seed().is_none());
    }
}
