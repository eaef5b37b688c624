use std::{fs::File, io::BufReader, path::Path};

use crate::error::{Error, Result};

use super::{city_id_to_index, CityTable, Location, TSPInstance, Tour};

impl Location {
    pub fn new(x: f64, y: f64) -> Location {
        Location { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Location::new(x, y)
    }
}

impl CityTable {
    pub fn new(locations: Vec<Location>) -> CityTable {
        CityTable { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Looks up a city by its 1-based id.
    pub fn get(&self, city_id: u64) -> Result<&Location> {
        let index = city_id_to_index(city_id, self.len())?;
        Ok(&self.locations[index])
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }
}

impl FromIterator<Location> for CityTable {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        CityTable::new(iter.into_iter().collect())
    }
}

impl TSPInstance {
    pub fn new(name: impl Into<String>, cities: CityTable, tours: Vec<Tour>) -> TSPInstance {
        TSPInstance {
            name: name.into(),
            cities,
            tours,
        }
    }

    pub fn from_json(json_file_path: &Path) -> Result<TSPInstance> {
        let json_file = File::open(json_file_path)?;
        let instance: TSPInstance = serde_json::from_reader(BufReader::new(json_file))?;
        log::debug!(
            "loaded instance {} with {} cities and {} tours from {}",
            instance.name,
            instance.cities.len(),
            instance.tours.len(),
            json_file_path.display()
        );

        Ok(instance)
    }

    pub fn store_as_json(&self, json_file_path: &Path) -> Result<()> {
        // Create or verify the existence of the parent directory
        if let Some(parent) = json_file_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                match std::fs::create_dir_all(parent) {
                    Ok(_) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
                    Err(e) => return Err(Error::from(e)),
                }
            }
        }

        let json_file = File::create(json_file_path)?;
        serde_json::to_writer(json_file, self)?;
        log::debug!("stored instance {} at {}", self.name, json_file_path.display());

        Ok(())
    }
}
