//! The two record-matching strategies used by the directory.
//!
//! [`ServerPrefixMatch`] is the in-memory statement of the predicate the
//! Diesel repository executes in SQL: a sanitized term prefix-matched
//! against six fields. [`ClientMirrorMatch`] is the instant-feedback filter
//! applied to a page already in hand: it works on the raw (unsanitized,
//! lower-cased) term, adds combined-name variants, and matches specialties
//! by substring. The two are deliberately not identical and must not be
//! unified silently; callers pick the strategy by name.

use crate::domain::advocate::Advocate;
use crate::domain::types::SearchTerm;

fn starts_with_ignore_case(candidate: &str, term_lower: &str) -> bool {
    candidate.to_lowercase().starts_with(term_lower)
}

/// Server-side authority: any of the six searchable fields prefix-matches
/// the sanitized term. Numeric fields are compared through their plain
/// decimal rendering, exactly as `CAST(... AS TEXT)` renders them in SQL,
/// without the zero padding used for display.
pub struct ServerPrefixMatch;

impl ServerPrefixMatch {
    pub fn matches(advocate: &Advocate, term: &SearchTerm) -> bool {
        let term_lower = term.as_str().to_lowercase();

        [
            advocate.first_name.as_str(),
            advocate.last_name.as_str(),
            advocate.city.as_str(),
            advocate.degree.as_str(),
            &advocate.years_of_experience.to_string(),
            &advocate.phone_number.to_string(),
        ]
        .iter()
        .any(|field| starts_with_ignore_case(field, &term_lower))
    }
}

/// Presentation-side convenience filter over the fetched page.
///
/// Matches when any derived name/field variant starts with the lower-cased
/// term, or when any specialty contains it as a substring. The combined-name
/// variants ("First Last", "Last First", "First Last, Degree.") exist only
/// here; the server-side predicate does not know them.
pub struct ClientMirrorMatch;

impl ClientMirrorMatch {
    pub fn matches(advocate: &Advocate, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        let term_lower = term.to_lowercase();

        let variants = [
            advocate.first_name.clone(),
            advocate.last_name.clone(),
            format!("{} {}", advocate.first_name, advocate.last_name),
            format!("{} {}", advocate.last_name, advocate.first_name),
            format!(
                "{} {}, {}.",
                advocate.first_name, advocate.last_name, advocate.degree
            ),
            advocate.city.clone(),
            advocate.degree.clone(),
            advocate.years_of_experience.to_string(),
            advocate.phone_number.to_string(),
        ];

        if variants
            .iter()
            .any(|v| starts_with_ignore_case(v, &term_lower))
        {
            return true;
        }

        advocate
            .specialties
            .iter()
            .any(|s| s.to_lowercase().contains(&term_lower))
    }

    /// Re-filters the already-fetched page. Pure and synchronous; never
    /// reaches past the records given to it.
    pub fn filter_page(records: &[Advocate], term: &str) -> Vec<Advocate> {
        records
            .iter()
            .filter(|advocate| Self::matches(advocate, term))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advocate(first: &str, last: &str) -> Advocate {
        Advocate {
            id: 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            city: "Phoenix".to_string(),
            degree: "MD".to_string(),
            specialties: vec!["Dietician".to_string(), "Sleep Coaching".to_string()],
            years_of_experience: 12,
            phone_number: 4155551234,
            ..Advocate::default()
        }
    }

    #[test]
    fn server_match_is_prefix_only() {
        let sarah = advocate("Sarah", "Jones");
        let asar = advocate("Asar", "Jones");

        let term = SearchTerm::new("Sar").unwrap();
        assert!(ServerPrefixMatch::matches(&sarah, &term));

        let term = SearchTerm::new("sar").unwrap();
        assert!(ServerPrefixMatch::matches(&sarah, &term));
        // "Asar" contains but does not start with the term.
        let asar_only = Advocate {
            last_name: "Becker".to_string(),
            ..asar
        };
        assert!(!ServerPrefixMatch::matches(
            &asar_only,
            &SearchTerm::new("sar").unwrap()
        ));
    }

    #[test]
    fn server_match_casts_numeric_fields_to_text() {
        let a = advocate("Sarah", "Jones");

        assert!(ServerPrefixMatch::matches(&a, &SearchTerm::new("12").unwrap()));
        assert!(ServerPrefixMatch::matches(&a, &SearchTerm::new("415").unwrap()));
        // The stored integer has no leading zeros to match against.
        assert!(!ServerPrefixMatch::matches(&a, &SearchTerm::new("041").unwrap()));
    }

    #[test]
    fn server_match_ignores_specialties() {
        let a = advocate("Sarah", "Jones");
        assert!(!ServerPrefixMatch::matches(
            &a,
            &SearchTerm::new("Dietician").unwrap()
        ));
    }

    #[test]
    fn mirror_match_uses_substring_for_specialties() {
        let a = advocate("Sarah", "Jones");
        assert!(ClientMirrorMatch::matches(&a, "iet"));
        assert!(ClientMirrorMatch::matches(&a, "sleep"));
        // Everything else stays prefix-based.
        assert!(!ClientMirrorMatch::matches(&a, "arah"));
    }

    #[test]
    fn mirror_match_knows_combined_name_variants() {
        let a = advocate("Sarah", "Jones");
        assert!(ClientMirrorMatch::matches(&a, "sarah jones"));
        assert!(ClientMirrorMatch::matches(&a, "jones sarah"));
        assert!(ClientMirrorMatch::matches(&a, "sarah jones, md."));
    }

    #[test]
    fn mirror_match_empty_term_is_identity() {
        let page = vec![advocate("Sarah", "Jones"), advocate("Asar", "Becker")];
        assert_eq!(ClientMirrorMatch::filter_page(&page, ""), page);
    }

    #[test]
    fn mirror_filter_page_keeps_only_matches() {
        let page = vec![advocate("Sarah", "Jones"), advocate("Noah", "Becker")];
        let filtered = ClientMirrorMatch::filter_page(&page, "sar");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].first_name, "Sarah");
    }
}
