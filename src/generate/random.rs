use rand::{seq::SliceRandom, Rng};

use crate::types::Tour;

/// A uniformly shuffled permutation of the city ids `1..=num_cities`.
pub fn generate_random_tour<R: Rng>(num_cities: usize, rng: &mut R) -> Tour {
    let mut tour: Tour = (1..=num_cities as u64).collect();
    tour.shuffle(rng);
    tour
}
