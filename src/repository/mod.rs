use crate::domain::advocate::{Advocate, NewAdvocate};
use crate::domain::types::SearchTerm;
use crate::repository::errors::RepositoryResult;

pub mod advocate;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// One-based page selector. The page size is the server-enforced constant
/// [`crate::pagination::PAGE_SIZE`]; callers cannot override it.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
}

/// Filter and windowing parameters for a roster listing.
///
/// An absent `search` lists the roster unfiltered; an absent `pagination`
/// returns every matching row (tests lean on this; the HTTP surface always
/// pins a page).
#[derive(Debug, Clone, Default)]
pub struct AdvocateListQuery {
    pub search: Option<SearchTerm>,
    pub pagination: Option<Pagination>,
}

impl AdvocateListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: SearchTerm) -> Self {
        self.search = Some(term);
        self
    }

    pub fn paginate(mut self, page: usize) -> Self {
        self.pagination = Some(Pagination { page });
        self
    }
}

pub trait AdvocateReader {
    /// Returns the total number of matching records alongside the requested
    /// page of them.
    fn list_advocates(&self, query: AdvocateListQuery) -> RepositoryResult<(usize, Vec<Advocate>)>;
}

pub trait AdvocateWriter {
    fn create_advocates(&self, new_advocates: &[NewAdvocate]) -> RepositoryResult<usize>;
}
