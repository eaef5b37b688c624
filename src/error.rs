use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("empty input: the {what} has no entries")]
    EmptyInput { what: &'static str },
    #[error("city id {city_id} is out of range, expected a value in 1..={num_cities}")]
    OutOfRangeIdentifier { city_id: u64, num_cities: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn out_of_range_message_names_the_valid_range() {
        let err = Error::OutOfRangeIdentifier {
            city_id: 4,
            num_cities: 3,
        };
        assert_eq!(
            err.to_string(),
            "city id 4 is out of range, expected a value in 1..=3"
        );
    }

    #[test]
    fn empty_input_message_names_the_input() {
        let err = Error::EmptyInput { what: "tour" };
        assert_eq!(err.to_string(), "empty input: the tour has no entries");
    }
}
