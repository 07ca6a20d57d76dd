// api_routes.rs
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, ResponseError};
use log::{error, info};
use serde::Deserialize;

use crate::error::GenerationError;
use crate::page::{playground_page, simple_page, PlaygroundForm};
use crate::workflow::{Generation, Playground, PromptMode};

#[derive(Deserialize)]
struct PlaygroundQuery {
    idea: Option<String>,
    mode: Option<PromptMode>,
    model: Option<String>,
}

#[derive(Deserialize)]
struct SimpleQuery {
    idea: Option<String>,
}

#[derive(Deserialize)]
struct GenerateRequest {
    idea: String,
    #[serde(default)]
    mode: PromptMode,
    model: Option<String>,
}

#[derive(Deserialize)]
struct SimpleRequest {
    idea: String,
}

// Set Routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(playground_route))
        .route("/simple", web::get().to(simple_page_route))
        .service(
            web::scope("/api")
                .route("/generate", web::post().to(generate_route))
                .route("/simple", web::post().to(simple_route)),
        );
}

async fn playground_route(query: web::Query<PlaygroundQuery>, playground: web::Data<Playground>) -> HttpResponse {
    let query = query.into_inner();
    let idea = query.idea.unwrap_or_default();
    let mode = query.mode.unwrap_or_default();
    let config = playground.config();
    let selected_model = query
        .model
        .filter(|model| config.models.contains(model))
        .unwrap_or_else(|| config.default_model.clone());

    let outcome = if idea.is_empty() {
        None
    } else {
        Some(playground.run_extended(&idea, mode, Some(&selected_model)).await)
    };

    let form = PlaygroundForm {
        idea: &idea,
        mode,
        selected_model: &selected_model,
        models: &config.models,
    };
    html_response(playground_page(&form, outcome.as_ref()), outcome.as_ref())
}

async fn simple_page_route(query: web::Query<SimpleQuery>, playground: web::Data<Playground>) -> HttpResponse {
    let idea = query.into_inner().idea.unwrap_or_default();

    let outcome = if idea.is_empty() {
        None
    } else {
        Some(playground.run_simple(&idea).await)
    };

    html_response(simple_page(&idea, outcome.as_ref()), outcome.as_ref())
}

async fn generate_route(
    req: web::Json<GenerateRequest>,
    playground: web::Data<Playground>,
) -> Result<HttpResponse, GenerationError> {
    let req = req.into_inner();
    info!("API generate request in {} mode", req.mode.label());
    let generation = playground
        .run_extended(&req.idea, req.mode, req.model.as_deref())
        .await
        .map_err(log_failure)?;
    Ok(HttpResponse::Ok().json(generation))
}

async fn simple_route(
    req: web::Json<SimpleRequest>,
    playground: web::Data<Playground>,
) -> Result<HttpResponse, GenerationError> {
    info!("API simple generate request");
    let generation = playground.run_simple(&req.idea).await.map_err(log_failure)?;
    Ok(HttpResponse::Ok().json(generation))
}

fn log_failure(e: GenerationError) -> GenerationError {
    error!("Image generation failed: {}", e);
    e
}

fn html_response(body: String, outcome: Option<&Result<Generation, GenerationError>>) -> HttpResponse {
    let mut response = match outcome {
        Some(Err(e)) => {
            error!("Image generation failed: {}", e);
            HttpResponse::build(e.status_code())
        }
        _ => HttpResponse::Ok(),
    };
    response.content_type(ContentType::html()).body(body)
}
