use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{at_least, in_range, required, ValidationError};

pub const MIN_PERIODICAL_YEAR: i32 = 1900;
pub const MAX_PERIODICAL_YEAR: i32 = 2030;

/// A single magazine issue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MagazineRecord")]
pub struct Magazine {
    title: String,
    issue: i32,
    publisher: String,
    year: i32,
}

#[derive(Deserialize)]
struct MagazineRecord {
    title: String,
    issue: i32,
    publisher: String,
    year: i32,
}

impl TryFrom<MagazineRecord> for Magazine {
    type Error = ValidationError;

    fn try_from(record: MagazineRecord) -> Result<Self, Self::Error> {
        Magazine::new(&record.title, record.issue, &record.publisher, record.year)
    }
}

impl Magazine {
    pub fn new(
        title: &str,
        issue: i32,
        publisher: &str,
        year: i32,
    ) -> Result<Self, ValidationError> {
        let title = required("title", title)?;
        let publisher = required("publisher", publisher)?;
        let issue = at_least("issue", issue, 1)?;
        let year = in_range("year", year, MIN_PERIODICAL_YEAR, MAX_PERIODICAL_YEAR)?;

        Ok(Self {
            title,
            issue,
            publisher,
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn issue(&self) -> i32 {
        self.issue
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn description(&self) -> String {
        format!(
            "Magazine: {} #{} by {} ({})",
            self.title, self.issue, self.publisher, self.year
        )
    }
}

impl fmt::Display for Magazine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
