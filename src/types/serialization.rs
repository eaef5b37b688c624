use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::{CityTable, Location};

impl Serialize for CityTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CityTable", 2)?;
        state.serialize_field("num_cities", &self.len())?;

        // Store the coordinates as one flat array of x/y pairs to save space
        let coordinates: Vec<f64> = self
            .iter()
            .flat_map(|location| [location.x, location.y])
            .collect();
        state.serialize_field("coordinates", &coordinates)?;

        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for CityTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        enum Field {
            NumCities,
            Coordinates,
        }

        impl<'de> serde::Deserialize<'de> for Field {
            fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct FieldVisitor;

                impl<'de> serde::de::Visitor<'de> for FieldVisitor {
                    type Value = Field;

                    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                        formatter.write_str("`num_cities` or `coordinates`")
                    }

                    fn visit_str<E>(self, value: &str) -> Result<Field, E>
                    where
                        E: serde::de::Error,
                    {
                        match value {
                            "num_cities" => Ok(Field::NumCities),
                            "coordinates" => Ok(Field::Coordinates),
                            _ => Err(serde::de::Error::unknown_field(value, FIELDS)),
                        }
                    }
                }

                deserializer.deserialize_identifier(FieldVisitor)
            }
        }

        struct CityTableVisitor;

        impl<'de> serde::de::Visitor<'de> for CityTableVisitor {
            type Value = CityTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct CityTable")
            }

            fn visit_map<V>(self, mut map: V) -> Result<CityTable, V::Error>
            where
                V: serde::de::MapAccess<'de>,
            {
                let mut num_cities = None::<usize>;
                let mut coordinates = None::<Vec<f64>>;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::NumCities => {
                            if num_cities.is_some() {
                                return Err(serde::de::Error::duplicate_field("num_cities"));
                            }
                            num_cities = Some(map.next_value()?);
                        }
                        Field::Coordinates => {
                            if coordinates.is_some() {
                                return Err(serde::de::Error::duplicate_field("coordinates"));
                            }
                            coordinates = Some(map.next_value()?);
                        }
                    }
                }

                let num_cities =
                    num_cities.ok_or_else(|| serde::de::Error::missing_field("num_cities"))?;
                let coordinates =
                    coordinates.ok_or_else(|| serde::de::Error::missing_field("coordinates"))?;

                let num_coordinates = num_cities.checked_mul(2).ok_or_else(|| {
                    serde::de::Error::invalid_value(
                        serde::de::Unexpected::Unsigned(num_cities as u64),
                        &"a city count whose coordinate count fits in memory",
                    )
                })?;
                if coordinates.len() != num_coordinates {
                    return Err(serde::de::Error::invalid_length(
                        coordinates.len(),
                        &format!("{} coordinates for {} cities", num_coordinates, num_cities)
                            .as_str(),
                    ));
                }

                Ok(coordinates
                    .chunks_exact(2)
                    .map(|pair| Location::new(pair[0], pair[1]))
                    .collect())
            }
        }

        const FIELDS: &[&str] = &["num_cities", "coordinates"];
        deserializer.deserialize_struct("CityTable", FIELDS, CityTableVisitor)
    }
}
