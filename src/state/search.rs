/// Hero search form state
///
/// The form only collects input. Submitting validates it and hands back a
/// `SearchQuery`; running the search is someone else's job.

use chrono::NaiveDate;
use std::fmt;

/// Expected move-in date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Villa,
}

impl PropertyType {
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Condo,
        PropertyType::Villa,
    ];
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condo => "Condo",
            PropertyType::Villa => "Villa",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Move-in date must look like 2025-09-01 (got \"{0}\")")]
    InvalidMoveIn(String),
}

/// Validated search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub location: Option<String>,
    pub move_in: Option<NaiveDate>,
    pub property_type: Option<PropertyType>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub location: String,
    pub move_in: String,
    pub property_type: Option<PropertyType>,
    /// Last validation error, shown under the search bar
    pub error: Option<SearchError>,
}

impl SearchForm {
    pub fn set_location(&mut self, location: String) {
        self.location = location;
    }

    pub fn set_move_in(&mut self, move_in: String) {
        self.move_in = move_in;
        self.error = None;
    }

    pub fn select_property_type(&mut self, property_type: PropertyType) {
        self.property_type = Some(property_type);
    }

    /// Validate the current input
    pub fn query(&self) -> Result<SearchQuery, SearchError> {
        let location = self.location.trim();
        let move_in = self.move_in.trim();

        let move_in = if move_in.is_empty() {
            None
        } else {
            let date = NaiveDate::parse_from_str(move_in, DATE_FORMAT)
                .map_err(|_| SearchError::InvalidMoveIn(move_in.to_string()))?;
            Some(date)
        };

        Ok(SearchQuery {
            location: (!location.is_empty()).then(|| location.to_string()),
            move_in,
            property_type: self.property_type,
        })
    }

    /// Validate and remember the outcome for display
    pub fn submit(&mut self) -> Option<SearchQuery> {
        match self.query() {
            Ok(query) => {
                self.error = None;
                Some(query)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}
