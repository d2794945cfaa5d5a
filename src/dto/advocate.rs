use serde::Serialize;

use crate::domain::advocate::Advocate;
use crate::domain::types::format_phone_number;

/// Presentation row for the directory table: same fields as the domain
/// record, with the phone number already formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct AdvocateRow {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: String,
}

impl From<&Advocate> for AdvocateRow {
    fn from(advocate: &Advocate) -> Self {
        Self {
            first_name: advocate.first_name.clone(),
            last_name: advocate.last_name.clone(),
            city: advocate.city.clone(),
            degree: advocate.degree.clone(),
            specialties: advocate.specialties.clone(),
            years_of_experience: advocate.years_of_experience,
            phone_number: format_phone_number(advocate.phone_number),
        }
    }
}
