use super::*;

/// Uniform shuffle of the full deck, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffledDeckGenerator {
    seed: u64,
}

impl ShuffledDeckGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(self) -> Vec<Card> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;

        log::debug!("dealing shuffled deck, seed: {}", self.seed);

        let mut symbols = paired_symbols();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        symbols.shuffle(&mut rng);

        deal_in_order(symbols)
    }
}

/// Derives the seed of the next deal from the current one.
pub fn next_seed(seed: u64) -> u64 {
    use rand::rngs::SmallRng;
    use rand::{RngCore, SeedableRng};

    SmallRng::seed_from_u64(seed).next_u64()
}
