use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::db::DbPool;
use crate::dto::api::{AdvocatesEnvelope, AdvocatesQuery, ErrorEnvelope, MessageEnvelope};
use crate::repository::advocate::DieselAdvocateRepository;
use crate::services::api::list_advocates;

/// A `pageSize` parameter is tolerated on the wire but never read; the
/// page size is a server-side constant.
#[derive(Deserialize)]
struct ApiV1AdvocatesQueryParams {
    search: Option<String>,
    page: Option<String>,
}

#[get("/v1/advocates")]
pub async fn api_v1_advocates(
    params: web::Query<ApiV1AdvocatesQueryParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselAdvocateRepository::new(&pool);
    let params = params.into_inner();

    let query = AdvocatesQuery {
        search: params.search,
        page: params.page,
    };

    match list_advocates(&repo, query) {
        Ok(response) if response.advocates.is_empty() => {
            HttpResponse::NotFound().json(MessageEnvelope {
                message: "No advocates found".to_string(),
                status: 404,
            })
        }
        Ok(response) => HttpResponse::Ok().json(AdvocatesEnvelope {
            data: response.advocates,
            status: 200,
        }),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            HttpResponse::InternalServerError().json(ErrorEnvelope {
                error: "Error fetching advocates".to_string(),
                status: 500,
            })
        }
    }
}
