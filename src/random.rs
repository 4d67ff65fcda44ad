use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};

/// RandMode controls random generator behaviour. May be predictable for testing or truly random for gameplay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RandMode {
    Predictable,
    RandomUniform,
}

pub struct GameRand {
    rng: Box<dyn RngCore>,
    rand_mode: RandMode,
}

impl GameRand {
    pub fn new_uniform() -> GameRand {
        GameRand {
            rng: Box::new(rand::thread_rng()),
            rand_mode: RandMode::RandomUniform,
        }
    }

    pub fn new_predictable(seed: u64) -> GameRand {
        GameRand {
            rng: Box::new(StdRng::seed_from_u64(seed)),
            rand_mode: RandMode::Predictable,
        }
    }

    /// Seeded when a seed is given, uniform otherwise
    pub fn from_seed(seed: Option<u64>) -> GameRand {
        match seed {
            Some(seed) => GameRand::new_predictable(seed),
            None => GameRand::new_uniform(),
        }
    }

    pub fn mode(&self) -> RandMode {
        self.rand_mode
    }

    /// Index in `0..len`; 0 when `len` is 0
    pub fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
