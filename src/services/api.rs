use crate::domain::types::{PageNumber, SearchTerm};
use crate::dto::api::{AdvocatesQuery, AdvocatesResponse};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Returns the filtered page of advocates for the JSON API.
///
/// Malformed page input silently becomes page 1; a search term that
/// sanitizes down to nothing lists the roster unfiltered.
pub fn list_advocates<R>(repo: &R, params: AdvocatesQuery) -> ServiceResult<AdvocatesResponse>
where
    R: AdvocateReader + ?Sized,
{
    let page = PageNumber::parse(params.page.as_deref());
    let mut query = AdvocateListQuery::new().paginate(page.get());

    if let Some(term) = params.search.as_deref().and_then(SearchTerm::new) {
        query = query.search(term);
    }

    let (total, advocates) = repo.list_advocates(query).map_err(ServiceError::from)?;

    Ok(AdvocatesResponse { total, advocates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn expect_query(repo: &mut MockRepository, page: usize, search: Option<&'static str>) {
        repo.expect_list_advocates()
            .withf(move |query| {
                let pagination = query.pagination.as_ref().expect("pagination always set");
                pagination.page == page
                    && query.search.as_ref().map(|t| t.as_str()) == search
            })
            .returning(|_| Ok((0, vec![])));
    }

    #[test]
    fn absent_page_defaults_to_first() {
        let mut repo = MockRepository::new();
        expect_query(&mut repo, 1, None);

        let result = list_advocates(&repo, AdvocatesQuery::default()).unwrap();
        assert_eq!(result.total, 0);
        assert!(result.advocates.is_empty());
    }

    #[test]
    fn malformed_page_defaults_to_first() {
        for raw in ["abc", "0", "-3", ""] {
            let mut repo = MockRepository::new();
            expect_query(&mut repo, 1, None);

            let params = AdvocatesQuery {
                search: None,
                page: Some(raw.to_string()),
            };
            list_advocates(&repo, params).unwrap();
        }
    }

    #[test]
    fn valid_page_is_passed_through() {
        let mut repo = MockRepository::new();
        expect_query(&mut repo, 3, None);

        let params = AdvocatesQuery {
            search: None,
            page: Some("3".to_string()),
        };
        list_advocates(&repo, params).unwrap();
    }

    #[test]
    fn search_term_is_sanitized_before_the_store_sees_it() {
        let mut repo = MockRepository::new();
        expect_query(&mut repo, 1, Some("Sarah"));

        let params = AdvocatesQuery {
            search: Some(" Sar'ah% ".to_string()),
            page: None,
        };
        list_advocates(&repo, params).unwrap();
    }

    #[test]
    fn wildcard_only_search_means_no_filter() {
        let mut repo = MockRepository::new();
        expect_query(&mut repo, 1, None);

        let params = AdvocatesQuery {
            search: Some("%%%".to_string()),
            page: None,
        };
        list_advocates(&repo, params).unwrap();
    }

    #[test]
    fn empty_and_absent_search_are_equivalent() {
        for search in [None, Some(String::new())] {
            let mut repo = MockRepository::new();
            expect_query(&mut repo, 1, None);

            let params = AdvocatesQuery { search, page: None };
            list_advocates(&repo, params).unwrap();
        }
    }

    #[test]
    fn repository_failure_propagates_as_service_error() {
        let mut repo = MockRepository::new();
        repo.expect_list_advocates()
            .returning(|_| Err(RepositoryError::DatabaseError("boom".to_string())));

        let result = list_advocates(&repo, AdvocatesQuery::default());
        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
