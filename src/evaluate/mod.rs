mod matrix;

pub use matrix::{compute_tour_distance_with_matrix, DistanceMatrix};

use crate::error::{Error, Result};
use crate::types::{closed_tour_edges, CityTable};

/// Total length of the closed cycle visiting `tour` in order.
///
/// City ids are 1-based: id `k` refers to `cities` slot `k - 1`. The edge from
/// the last city back to the first is included. Every id is checked before it
/// is used, so an out-of-range id yields [`Error::OutOfRangeIdentifier`] and no
/// partial total is returned.
pub fn compute_tour_distance(tour: &[u64], cities: &CityTable) -> Result<f64> {
    check_non_empty(tour, cities.len())?;
    log::trace!("evaluating tour of {} cities over {} locations", tour.len(), cities.len());

    let mut tot_distance = 0.0;
    for (from, to) in closed_tour_edges(tour) {
        tot_distance += cities.get(from)?.distance_to(cities.get(to)?);
    }

    Ok(tot_distance)
}

fn check_non_empty(tour: &[u64], num_cities: usize) -> Result<()> {
    if num_cities == 0 {
        return Err(Error::EmptyInput { what: "city table" });
    }
    if tour.is_empty() {
        return Err(Error::EmptyInput { what: "tour" });
    }

    Ok(())
}
