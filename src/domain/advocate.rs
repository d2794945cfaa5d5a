use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A personnel record in the roster. Read-only from the service layer's
/// perspective: the directory only filters and paginates views over it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered list of practice specialties, insertion order preserved.
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    /// Ten significant digits when rendered; see [`crate::domain::types::format_phone_number`].
    pub phone_number: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl NewAdvocate {
    #[must_use]
    pub fn new(
        first_name: String,
        last_name: String,
        city: String,
        degree: String,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: i64,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties: specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            years_of_experience,
            phone_number,
        }
    }
}
