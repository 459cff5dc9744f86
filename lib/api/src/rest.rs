use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use futures_util::StreamExt;
use gradex_core::{Error, Grader};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info_span, warn};
use uuid::Uuid;

#[derive(Deserialize)]
struct GradeEssayRequest {
    #[serde(default)]
    essay_text: Option<String>,
}

/// Default cap on request body size, in bytes.
pub const DEFAULT_MAX_ESSAY_BYTES: usize = 16 * 1024 * 1024;

/// Largest accepted request body, in bytes. Registered as app data;
/// [`DEFAULT_MAX_ESSAY_BYTES`] applies when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadLimit(pub usize);

impl Default for PayloadLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_ESSAY_BYTES)
    }
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        grader: Arc<Grader>,
        limit: PayloadLimit,
        host: &str,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            App::new()
                .wrap(Self::cors())
                .app_data(web::Data::new(grader.clone()))
                .app_data(web::Data::new(limit))
                .configure(Self::routes)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Any origin, method and header; no credentials.
    pub fn cors() -> Cors {
        Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600)
    }

    /// Register the grading routes. Expects `web::Data<Arc<Grader>>` and
    /// optionally `web::Data<PayloadLimit>`.
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/grade-essay", web::post().to(grade_essay));
    }
}

fn error_body(message: &str) -> serde_json::Value {
    serde_json::json!({ "error": message })
}

/// Read the whole body, stopping as soon as it grows past `limit`.
///
/// Errors are returned as ready-made JSON responses so that no plain-text
/// extractor error ever reaches the client.
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::BytesMut, HttpResponse> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| HttpResponse::BadRequest().json(error_body(&e.to_string())))?;
        if body.len() + chunk.len() > limit {
            let message = format!("Essay exceeds the {limit} byte limit");
            return Err(HttpResponse::PayloadTooLarge().json(error_body(&message)));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

async fn grade_essay(
    grader: web::Data<Arc<Grader>>,
    limit: Option<web::Data<PayloadLimit>>,
    payload: web::Payload,
) -> ActixResult<HttpResponse> {
    let request_id = Uuid::new_v4();
    let limit = limit.map(|l| *l.get_ref()).unwrap_or_default();

    let body = match read_body(payload, limit.0).await {
        Ok(body) => body,
        Err(response) => {
            warn!(%request_id, status = %response.status(), "Rejected request body");
            return Ok(response);
        }
    };

    // A body without a string `essay_text` counts as no text at all.
    let essay_text = match serde_json::from_slice::<GradeEssayRequest>(&body) {
        Ok(GradeEssayRequest { essay_text: Some(text) }) => text,
        _ => String::new(),
    };

    let grader = grader.get_ref().clone();
    let span = info_span!("grade_essay", %request_id);
    let outcome = web::block(move || span.in_scope(|| grader.grade(&essay_text))).await;

    match outcome {
        Ok(Ok(report)) => Ok(HttpResponse::Ok().json(report)),
        Ok(Err(e @ Error::InvalidInput)) => {
            warn!(%request_id, "Rejected essay: {}", e);
            Ok(HttpResponse::BadRequest().json(error_body(&e.to_string())))
        }
        Ok(Err(e)) => {
            error!(%request_id, "Grading failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(error_body(&e.to_string())))
        }
        Err(e) => {
            error!(%request_id, "Grading task failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(error_body(&e.to_string())))
        }
    }
}
