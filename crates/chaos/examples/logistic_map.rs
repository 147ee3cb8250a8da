//! Sweeps the growth rate and prints where the first trajectory settles.
//!
//! Every recompute is logged at debug level:
//!
//! ```sh
//! cargo run -p orbits-chaos --example logistic_map
//! ```

use orbits_chaos::{Config, Error, LogisticMap};
use rand::{SeedableRng, rngs::StdRng};
use tracing::Level;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let mut rng = StdRng::seed_from_u64(2024);
    let config = Config {
        length: 200,
        count: 4,
        ..Config::default()
    };
    let mut map = LogisticMap::random(0.0, &config, &mut rng)?;

    for r in [1.5, 2.9, 3.2, 3.5, 3.56, 3.83, 3.99] {
        map.set_parameter(r)?;

        let series = map.trajectory().series(0);
        let tail: Vec<String> = series
            .iter()
            .skip(config.length - 4)
            .map(|x| format!("{x:.4}"))
            .collect();

        println!("{map}  tail: {}", tail.join(", "));
    }

    map.resample(&mut rng)?;
    println!("resampled: {map}");

    Ok(())
}
