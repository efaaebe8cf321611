use serde::{Deserialize, Serialize};
use std::fmt;

use super::magazine::{MAX_PERIODICAL_YEAR, MIN_PERIODICAL_YEAR};
use super::validation::{at_least, in_range, required, ValidationError};

/// A film on disc (DVD)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DiscRecord")]
pub struct Disc {
    title: String,
    director: String,
    /// Running time in minutes
    duration: i32,
    year: i32,
}

#[derive(Deserialize)]
struct DiscRecord {
    title: String,
    director: String,
    duration: i32,
    year: i32,
}

impl TryFrom<DiscRecord> for Disc {
    type Error = ValidationError;

    fn try_from(record: DiscRecord) -> Result<Self, Self::Error> {
        Disc::new(&record.title, &record.director, record.duration, record.year)
    }
}

impl Disc {
    pub fn new(
        title: &str,
        director: &str,
        duration: i32,
        year: i32,
    ) -> Result<Self, ValidationError> {
        let title = required("title", title)?;
        let director = required("director", director)?;
        let duration = at_least("duration", duration, 1)?;
        let year = in_range("year", year, MIN_PERIODICAL_YEAR, MAX_PERIODICAL_YEAR)?;

        Ok(Self {
            title,
            director,
            duration,
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn description(&self) -> String {
        format!(
            "DVD: {} directed by {} ({}, {} min)",
            self.title, self.director, self.year, self.duration
        )
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_boundary() {
        assert_eq!(
            Disc::new("Inception", "Christopher Nolan", 0, 2010)
                .unwrap_err()
                .field(),
            "duration"
        );
        assert!(Disc::new("Inception", "Christopher Nolan", 1, 2010).is_ok());
    }

    #[test]
    fn test_description_includes_all_fields() {
        let disc = Disc::new("The Matrix", " The Wachowskis ", 136, 1999).unwrap();
        assert_eq!(disc.director(), "The Wachowskis");
        assert_eq!(
            disc.description(),
            "DVD: The Matrix directed by The Wachowskis (1999, 136 min)"
        );
    }

    #[test]
    fn test_director_required() {
        let err = Disc::new("Inception", "", 148, 2010).unwrap_err();
        assert_eq!(err.to_string(), "director must not be empty");
    }
}
