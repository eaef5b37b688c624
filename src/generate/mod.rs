mod euclidean;
mod random;

use rand::Rng;

pub use euclidean::generate_city_table;
pub use random::generate_random_tour;

use crate::error::{Error, Result};
use crate::types::TSPInstance;

/// Builds an instance of `num_cities` random cities along with `num_tours` random tours over them.
pub fn generate_instance<R: Rng>(
    name: impl Into<String>,
    num_cities: usize,
    num_tours: usize,
    rng: &mut R,
) -> Result<TSPInstance> {
    if num_cities == 0 {
        return Err(Error::invalid_input("an instance needs at least one city"));
    }

    let cities = generate_city_table(num_cities, rng);
    let tours = (0..num_tours)
        .map(|_| generate_random_tour(num_cities, rng))
        .collect();
    let instance = TSPInstance::new(name, cities, tours);
    log::debug!(
        "generated instance {} with {} cities and {} tours",
        instance.name,
        num_cities,
        num_tours
    );

    Ok(instance)
}
