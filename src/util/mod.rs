//! Random source construction for the generators
//!
//! Generators never reach for `rand::thread_rng` directly; they receive a `StdRng` built here so
//! that a run can be replayed from its seed.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use log::info;

/// builds the random source for one generator run
///
/// With `Some(seed)` the source is deterministic. Otherwise a seed is drawn from the thread rng
/// and logged, so that an interesting case can still be reproduced afterwards.
///
/// ```
///     use judgegen::util::make_rng;
///     use rand::Rng;
///     let a: u32 = make_rng(Some(42)).gen();
///     let b: u32 = make_rng(Some(42)).gen();
///     assert_eq!(a, b);
/// ```
pub fn make_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        let seed = rand::thread_rng().gen();
        info!("no seed given, using random seed {}", seed);
        seed
    });
    StdRng::seed_from_u64(seed)
}
