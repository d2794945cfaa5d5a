use crate::dto::advocate::AdvocateRow;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface, raw.
    pub page: Option<String>,
}

/// Data required to render the directory index template.
pub struct IndexPageData {
    /// Paginated list of advocates to show in the table.
    pub advocates: Paginated<AdvocateRow>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}
