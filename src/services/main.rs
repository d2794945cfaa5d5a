use crate::domain::types::{PageNumber, SearchTerm};
use crate::dto::advocate::AdvocateRow;
use crate::dto::main::{IndexPageData, IndexQuery};
use crate::pagination::{PAGE_SIZE, Paginated};
use crate::repository::{AdvocateListQuery, AdvocateReader};
use crate::services::{ServiceError, ServiceResult};

/// Loads the advocate listing for the directory index page.
pub fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: AdvocateReader + ?Sized,
{
    let page = PageNumber::parse(query.page.as_deref());
    let mut list_query = AdvocateListQuery::new().paginate(page.get());

    // The raw (trimmed) input is echoed back to the template; the sanitized
    // form is what reaches the store.
    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(term) = search_query.as_deref().and_then(SearchTerm::new) {
        list_query = list_query.search(term);
    }

    let (total, advocates) = repo.list_advocates(list_query).map_err(ServiceError::from)?;

    let rows: Vec<AdvocateRow> = advocates.iter().map(AdvocateRow::from).collect();
    let total_pages = total.div_ceil(PAGE_SIZE);

    Ok(IndexPageData {
        advocates: Paginated::new(rows, page.get(), total_pages),
        search_query,
    })
}
