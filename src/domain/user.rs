use serde::{Deserialize, Serialize};

/// Directory entry as stored by the provider.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub city: String,
    pub phone: i64,
    pub height: f64,
    pub married: bool,
}

/// Payload used to seed the directory.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewUser {
    pub full_name: String,
    pub city: String,
    pub phone: i64,
    pub height: f64,
    pub married: bool,
}

impl NewUser {
    #[must_use]
    pub fn new(full_name: String, city: String, phone: i64, height: f64, married: bool) -> Self {
        Self {
            full_name: full_name.trim().to_string(),
            city: city.trim().to_string(),
            phone,
            height,
            married,
        }
    }
}

/// Filters applied by a directory search.
///
/// Empty name or city filters impose no constraint. The height range is
/// inclusive on both ends and is never normalized: a `min_height` above
/// `max_height` simply matches nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCriteria {
    full_name_filter: String,
    city_filter: String,
    min_height: f64,
    max_height: f64,
}

impl SearchCriteria {
    #[must_use]
    pub fn new(
        full_name_filter: impl Into<String>,
        city_filter: impl Into<String>,
        min_height: f64,
        max_height: f64,
    ) -> Self {
        Self {
            full_name_filter: full_name_filter.into(),
            city_filter: city_filter.into(),
            min_height,
            max_height,
        }
    }

    /// Name constraint, or `None` when any name matches.
    pub fn full_name_filter(&self) -> Option<&str> {
        Some(self.full_name_filter.as_str()).filter(|s| !s.is_empty())
    }

    /// City constraint, or `None` when any city matches.
    pub fn city_filter(&self) -> Option<&str> {
        Some(self.city_filter.as_str()).filter(|s| !s.is_empty())
    }

    pub fn min_height(&self) -> f64 {
        self.min_height
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }
}
