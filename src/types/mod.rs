mod helpers;
mod serialization;
mod struct_functionality;

pub use helpers::{city_id_to_index, closed_tour_edges, reverse_tour, rotate_tour};

/// A point in the Euclidean plane.
#[derive(Debug, Copy, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// Every city of a problem instance. City id `k` lives in slot `k - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CityTable {
    locations: Vec<Location>,
}

/// 1-based city ids in visiting order. The last city connects back to the first.
pub type Tour = Vec<u64>;

#[derive(Debug, serde::Deserialize, Clone, serde::Serialize)]
pub struct TSPInstance {
    pub name: String,
    pub cities: CityTable,
    pub tours: Vec<Tour>,
}
