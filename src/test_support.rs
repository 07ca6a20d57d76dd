// test_support.rs
// In-process stand-in for the OpenAI API used by the unit tests.
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct StubReply {
    status: u16,
    body: String,
}

impl StubReply {
    pub fn json(body: Value) -> Self {
        StubReply {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16, body: &str) -> Self {
        StubReply {
            status,
            body: body.to_string(),
        }
    }

    fn respond(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status)
            .content_type("application/json")
            .body(self.body.clone())
    }
}

#[derive(Clone, Debug)]
pub struct SeenHeaders {
    pub authorization: String,
    pub content_type: String,
    pub accept: String,
}

#[derive(Default)]
struct Recorded {
    chat: Vec<(SeenHeaders, Value)>,
    images: Vec<(SeenHeaders, Value)>,
}

struct StubState {
    chat_reply: StubReply,
    image_reply: StubReply,
    recorded: Arc<Mutex<Recorded>>,
}

pub struct StubUpstream {
    pub base: String,
    recorded: Arc<Mutex<Recorded>>,
}

impl StubUpstream {
    pub async fn start(chat_reply: StubReply, image_reply: StubReply) -> Self {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let state = web::Data::new(StubState {
            chat_reply,
            image_reply,
            recorded: recorded.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .route("/v1/chat/completions", web::post().to(chat_completions))
                .route("/v1/images/generations", web::post().to(image_generations))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind stub upstream");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        StubUpstream {
            base: format!("http://{}/v1", addr),
            recorded,
        }
    }

    pub fn config(&self) -> AppConfig {
        AppConfig {
            openai_base: self.base.clone(),
            openai_key: "test-key".to_string(),
            models: vec!["dall-e-2".to_string(), "dall-e-3".to_string()],
            default_model: "dall-e-2".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        }
    }

    pub fn chat_bodies(&self) -> Vec<Value> {
        let recorded = self.recorded.lock().unwrap();
        recorded.chat.iter().map(|(_, body)| body.clone()).collect()
    }

    pub fn image_bodies(&self) -> Vec<Value> {
        let recorded = self.recorded.lock().unwrap();
        recorded.images.iter().map(|(_, body)| body.clone()).collect()
    }

    pub fn chat_headers(&self) -> Vec<SeenHeaders> {
        let recorded = self.recorded.lock().unwrap();
        recorded.chat.iter().map(|(headers, _)| headers.clone()).collect()
    }
}

fn seen_headers(req: &HttpRequest) -> SeenHeaders {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };
    SeenHeaders {
        authorization: header("authorization"),
        content_type: header("content-type"),
        accept: header("accept"),
    }
}

async fn chat_completions(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.recorded.lock().unwrap().chat.push((seen_headers(&req), body));
    state.chat_reply.respond()
}

async fn image_generations(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.recorded.lock().unwrap().images.push((seen_headers(&req), body));
    state.image_reply.respond()
}
