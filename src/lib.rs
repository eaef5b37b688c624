//! Euclidean tour length evaluation for Traveling Salesman Problem candidates.
//! Tours use 1-based city ids over a 0-based city table.

mod error;
pub mod evaluate;
pub mod generate;
pub mod logging;
pub mod options;
pub mod types;

pub use error::{Error, Result};
pub use evaluate::{compute_tour_distance, compute_tour_distance_with_matrix, DistanceMatrix};
pub use types::{CityTable, Location, TSPInstance, Tour};
