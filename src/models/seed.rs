//! Built-in roster used by the `seed` binary to populate a fresh database.

use crate::domain::advocate::NewAdvocate;

const SPECIALTIES: [&str; 12] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "General Mental Health",
    "Relationship Issues",
    "Trauma & PTSD",
    "Substance use/abuse",
    "Pediatrics",
    "Chronic pain",
    "Weight loss & nutrition",
    "Dietician",
    "Sleep issues",
];

fn pick(indices: &[usize]) -> Vec<String> {
    indices.iter().map(|i| SPECIALTIES[*i].to_string()).collect()
}

/// A fixed, deterministic roster. Phone numbers are ten-digit integers; a
/// couple intentionally start with a short area code so zero-padded
/// rendering gets exercised.
pub fn seed_advocates() -> Vec<NewAdvocate> {
    let rows: Vec<(&str, &str, &str, &str, Vec<String>, i32, i64)> = vec![
        ("Sarah", "Jones", "New York", "MD", pick(&[0, 3]), 10, 5551234567),
        ("Michael", "Bell", "Los Angeles", "PhD", pick(&[1, 4]), 8, 5559876543),
        ("Alicia", "Nguyen", "Chicago", "MSW", pick(&[2, 5]), 5, 5554567890),
        ("Noah", "Becker", "Houston", "MD", pick(&[3, 6]), 12, 5556543210),
        ("Emily", "Carter", "Phoenix", "PhD", pick(&[4, 7]), 3, 5553210987),
        ("Chris", "Olsen", "Philadelphia", "MSW", pick(&[5, 8]), 7, 5557890123),
        ("Jessica", "Tran", "San Antonio", "MD", pick(&[6, 9]), 2, 5554321098),
        ("Robert", "Kim", "San Diego", "PhD", pick(&[7, 10]), 11, 5558901234),
        ("Amanda", "Diaz", "Dallas", "MSW", pick(&[8, 11]), 9, 5555678901),
        ("Mark", "Ellis", "San Jose", "MD", pick(&[9, 0]), 4, 5552109876),
        ("Linda", "Shaw", "Austin", "PhD", pick(&[10, 1]), 6, 5556789012),
        ("Kevin", "Moore", "Jacksonville", "MSW", pick(&[11, 2]), 13, 5550987654),
        ("Asar", "Haddad", "Fort Worth", "MD", pick(&[0, 10]), 1, 5553456789),
        ("Grace", "Lindqvist", "Columbus", "PhD", pick(&[1, 11]), 14, 5551098765),
        ("Daniel", "Reyes", "Charlotte", "MSW", pick(&[2, 0]), 15, 234567890),
    ];

    rows.into_iter()
        .map(|(first, last, city, degree, specialties, years, phone)| {
            NewAdvocate::new(
                first.to_string(),
                last.to_string(),
                city.to_string(),
                degree.to_string(),
                specialties,
                years,
                phone,
            )
        })
        .collect()
}
