use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod auth;
mod config;
mod controllers;
mod db;
mod errors;
mod models;
mod notes;


use auth::{AuthService, TokenIssuer};
use config::Config;
use db::Database;
use notes::NotesService;

pub struct AppState {
    pub tokens: Arc<TokenIssuer>,
    pub auth: AuthService,
    pub notes: NotesService,
}

impl AppState {
    /// Wire up the component graph: one database handle, one token issuer,
    /// services sharing both. No global registry - everything is passed
    /// by construction.
    pub fn build(config: &Config) -> rusqlite::Result<Self> {
        let db = Arc::new(Database::new(&config.database_url)?);
        let tokens = Arc::new(TokenIssuer::new(
            &config.token_secret,
            config.token_ttl_hours,
        ));

        Ok(Self {
            auth: AuthService::new(db.clone(), tokens.clone()),
            notes: NotesService::new(db),
            tokens,
        })
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    log::info!("Notes backend v{}", controllers::health::VERSION);
    log::info!("Initializing database at {}", config.database_url);

    let state = AppState::build(&config).expect("Failed to initialize database");
    let data = web::Data::new(state);

    log::info!("Listening on port {}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(controllers::auth::config)
            .configure(controllers::notes::config)
            .configure(controllers::health::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
