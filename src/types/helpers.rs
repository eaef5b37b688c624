use crate::error::{Error, Result};

/// Converts a 1-based city id into a slot of a table holding `num_cities` cities.
pub fn city_id_to_index(city_id: u64, num_cities: usize) -> Result<usize> {
    match usize::try_from(city_id) {
        Ok(id) if (1..=num_cities).contains(&id) => Ok(id - 1),
        _ => Err(Error::OutOfRangeIdentifier {
            city_id,
            num_cities,
        }),
    }
}

/// Every edge of the closed cycle described by `tour`, starting with the
/// closing edge from the last city back to the first.
pub fn closed_tour_edges(tour: &[u64]) -> impl Iterator<Item = (u64, u64)> + '_ {
    let closing_edge = tour.last().copied().zip(tour.first().copied());
    closing_edge
        .into_iter()
        .chain(tour.windows(2).map(|pair| (pair[0], pair[1])))
}

/// Returns the same cycle starting at position `offset` (taken modulo the tour length).
pub fn rotate_tour(tour: &[u64], offset: usize) -> Vec<u64> {
    let mut rotated = tour.to_vec();
    if !rotated.is_empty() {
        rotated.rotate_left(offset % tour.len());
    }

    rotated
}

pub fn reverse_tour(tour: &[u64]) -> Vec<u64> {
    tour.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_map_to_the_previous_slot() {
        assert_eq!(city_id_to_index(1, 3).ok(), Some(0));
        assert_eq!(city_id_to_index(3, 3).ok(), Some(2));
    }

    #[test]
    fn zero_and_past_the_end_ids_are_rejected() {
        assert!(city_id_to_index(0, 3).is_err());
        assert!(city_id_to_index(4, 3).is_err());
        assert!(city_id_to_index(1, 0).is_err());
        assert!(city_id_to_index(u64::MAX, 3).is_err());
    }

    #[test]
    fn closed_edges_start_with_the_closing_edge() {
        let edges: Vec<(u64, u64)> = closed_tour_edges(&[1, 2, 3]).collect();
        assert_eq!(edges, vec![(3, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn single_city_tour_has_one_self_edge() {
        let edges: Vec<(u64, u64)> = closed_tour_edges(&[7]).collect();
        assert_eq!(edges, vec![(7, 7)]);
    }

    #[test]
    fn empty_tour_has_no_edges() {
        assert_eq!(closed_tour_edges(&[]).count(), 0);
    }

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(rotate_tour(&[1, 2, 3, 4], 1), vec![2, 3, 4, 1]);
        assert_eq!(rotate_tour(&[1, 2, 3, 4], 6), vec![3, 4, 1, 2]);
        assert!(rotate_tour(&[], 3).is_empty());
    }

    #[test]
    fn reversal_flips_the_order() {
        assert_eq!(reverse_tour(&[1, 2, 3]), vec![3, 2, 1]);
    }
}
