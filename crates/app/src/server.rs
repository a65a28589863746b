//! Actix Web server exposing the map page and the scene endpoint.
//!
//! `/scene.json` runs the blocking pipeline through `web::block` on each
//! request; nothing is cached between requests. The only state that
//! survives a request is the session camera, installed on the first scene
//! build and reused afterwards.

use std::sync::Mutex;

use actix_web::{App, HttpResponse, HttpServer, web};
use anyhow::{Context, Result};
use deck_scene::ViewState;
use tracing::error;

use crate::config::AppConfig;
use crate::html;
use crate::scene::build_scene;

/// Shared state backing the HTTP handlers.
struct ServerState {
    config: AppConfig,
    camera: Mutex<Option<ViewState>>,
}

impl ServerState {
    /// The session camera; the first call installs the fixed home view.
    fn session_camera(&self) -> ViewState {
        match self.camera.lock() {
            Ok(mut guard) => *guard.get_or_insert_with(ViewState::munich_home),
            Err(_) => ViewState::munich_home(),
        }
    }
}

/// Bind the server and block until it exits.
pub fn serve(config: AppConfig) -> Result<()> {
    let bind = (config.bind_address.clone(), config.port);
    let state = web::Data::new(ServerState {
        config,
        camera: Mutex::new(None),
    });

    actix_web::rt::System::new()
        .block_on(async move {
            HttpServer::new(move || {
                App::new()
                    .app_data(state.clone())
                    .route("/", web::get().to(index_route))
                    .route("/scene.json", web::get().to(scene_route))
                    .route("/healthz", web::get().to(healthz_route))
            })
            .bind(bind)?
            .run()
            .await
        })
        .context("HTTP server failed")
}

/// Serve the embedded map page.
async fn index_route() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::map_page::MAP_HTML)
}

/// Run the pipeline and return the scene spec.
async fn scene_route(state: web::Data<ServerState>) -> HttpResponse {
    let camera = state.session_camera();
    let config = state.config.clone();

    match web::block(move || build_scene(&config, camera)).await {
        Ok(Ok(scene)) => HttpResponse::Ok().json(scene),
        Ok(Err(err)) => {
            error!("scene pipeline failed: {err:#}");
            HttpResponse::BadGateway().body(format!("{err:#}"))
        }
        Err(err) => {
            error!("scene worker failed: {err}");
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

async fn healthz_route() -> HttpResponse {
    HttpResponse::Ok().body(env!("CARGO_PKG_VERSION"))
}
