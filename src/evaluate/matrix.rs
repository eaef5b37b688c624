use ndarray::Array2;

use crate::error::Result;
use crate::types::{city_id_to_index, closed_tour_edges, CityTable};

use super::check_non_empty;

/// Precomputed symmetric Euclidean distances between every pair of cities,
/// indexed by 0-based table slot.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: Array2<f64>,
}

impl DistanceMatrix {
    pub fn from_city_table(cities: &CityTable) -> DistanceMatrix {
        let num_cities = cities.len();
        let locations = cities.locations();
        let mut distances = Array2::zeros((num_cities, num_cities));

        for i in 0..num_cities {
            for j in i + 1..num_cities {
                let distance = locations[i].distance_to(&locations[j]);
                distances[[i, j]] = distance;
                distances[[j, i]] = distance;
            }
        }

        log::debug!("built {}x{} distance matrix", num_cities, num_cities);
        DistanceMatrix { distances }
    }

    pub fn num_cities(&self) -> usize {
        self.distances.nrows()
    }

    /// Distance between two 1-based city ids.
    pub fn distance(&self, from: u64, to: u64) -> Result<f64> {
        let from = city_id_to_index(from, self.num_cities())?;
        let to = city_id_to_index(to, self.num_cities())?;
        Ok(self.distances[[from, to]])
    }
}

/// Same contract as [`super::compute_tour_distance`], using table lookups
/// instead of recomputing each edge.
pub fn compute_tour_distance_with_matrix(tour: &[u64], matrix: &DistanceMatrix) -> Result<f64> {
    check_non_empty(tour, matrix.num_cities())?;

    let mut tot_distance = 0.0;
    for (from, to) in closed_tour_edges(tour) {
        tot_distance += matrix.distance(from, to)?;
    }

    Ok(tot_distance)
}
