use rand::Rng;

use crate::types::{CityTable, Location};

/// Uniformly random cities in the square `[-1, 1) x [-1, 1)`.
pub fn generate_city_table<R: Rng>(num_cities: usize, rng: &mut R) -> CityTable {
    (0..num_cities)
        .map(|_| Location::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn cities_stay_inside_the_unit_square() {
        let mut rng = StdRng::seed_from_u64(1);
        let cities = generate_city_table(200, &mut rng);

        assert_eq!(cities.len(), 200);
        for location in cities.iter() {
            assert!((-1.0..1.0).contains(&location.x), "x out of range: {}", location.x);
            assert!((-1.0..1.0).contains(&location.y), "y out of range: {}", location.y);
        }
    }

    #[test]
    fn same_seed_gives_same_table() {
        let a = generate_city_table(16, &mut StdRng::seed_from_u64(9));
        let b = generate_city_table(16, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
