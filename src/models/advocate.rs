use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advocate::{Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::advocates)]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: String, // JSON array stored as text
    pub years_of_experience: i32,
    pub phone_number: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl From<Advocate> for DomainAdvocate {
    fn from(advocate: Advocate) -> Self {
        let specialties = serde_json::from_str(&advocate.specialties).unwrap_or_default();

        Self {
            id: advocate.id,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
            created_at: advocate.created_at,
        }
    }
}

impl From<&DomainNewAdvocate> for NewAdvocate {
    fn from(advocate: &DomainNewAdvocate) -> Self {
        let specialties =
            serde_json::to_string(&advocate.specialties).unwrap_or_else(|_| "[]".to_string());

        Self {
            first_name: advocate.first_name.clone(),
            last_name: advocate.last_name.clone(),
            city: advocate.city.clone(),
            degree: advocate.degree.clone(),
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn advocate_into_domain_parses_specialties() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_advocate = Advocate {
            id: 1,
            first_name: "Sarah".to_string(),
            last_name: "Jones".to_string(),
            city: "Phoenix".to_string(),
            degree: "MD".to_string(),
            specialties: r#"["Dietician","Sleep Coaching"]"#.to_string(),
            years_of_experience: 7,
            phone_number: 4155551234,
            created_at: now,
        };

        let domain: DomainAdvocate = db_advocate.into();
        assert_eq!(domain.first_name, "Sarah");
        assert_eq!(
            domain.specialties,
            vec!["Dietician".to_string(), "Sleep Coaching".to_string()]
        );
        assert_eq!(domain.created_at, now);
    }

    #[test]
    fn advocate_into_domain_tolerates_bad_specialties_json() {
        let db_advocate = Advocate {
            id: 1,
            first_name: "Sarah".to_string(),
            last_name: "Jones".to_string(),
            city: "Phoenix".to_string(),
            degree: "MD".to_string(),
            specialties: "not json".to_string(),
            years_of_experience: 7,
            phone_number: 4155551234,
            created_at: Utc::now().naive_utc(),
        };

        let domain: DomainAdvocate = db_advocate.into();
        assert!(domain.specialties.is_empty());
    }

    #[test]
    fn from_domain_new_encodes_specialties() {
        let domain = DomainNewAdvocate::new(
            "Sarah".to_string(),
            "Jones".to_string(),
            "Phoenix".to_string(),
            "MD".to_string(),
            vec!["Dietician".to_string()],
            7,
            4155551234,
        );

        let new: NewAdvocate = (&domain).into();
        assert_eq!(new.first_name, "Sarah");
        assert_eq!(new.specialties, r#"["Dietician"]"#);
        assert_eq!(new.phone_number, 4155551234);
    }
}
