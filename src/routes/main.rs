use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;
use tera::{Context, Tera};

use crate::db::DbPool;
use crate::dto::main::IndexQuery;
use crate::repository::advocate::DieselAdvocateRepository;
use crate::routes::render_template;
use crate::services::main::load_index_page;

#[derive(Deserialize)]
struct IndexQueryParams {
    q: Option<String>,
    page: Option<String>,
}

#[get("/")]
pub async fn index(
    params: web::Query<IndexQueryParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let repo = DieselAdvocateRepository::new(&pool);
    let params = params.into_inner();

    let query = IndexQuery {
        search: params.q,
        page: params.page,
    };

    let data = match load_index_page(&repo, query) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load the directory page: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let mut context = Context::new();
    context.insert("advocates", &data.advocates);
    context.insert("current_page", "index");
    if let Some(q) = &data.search_query {
        context.insert("search_query", q);
    }

    render_template(&tera, "main/index.html", &context)
}
