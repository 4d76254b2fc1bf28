//! Auth REST API - register, login, current user

use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::ApiError;
use crate::models::{AuthResponse, CredentialsRequest, UserResponse};
use crate::AppState;

/// Create an account and return the user plus a session token
async fn register(
    data: web::Data<AppState>,
    body: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, ApiError> {
    let (user, token) = data.auth.register(&body.email, &body.password)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        user: UserResponse::from(&user),
        token,
    }))
}

/// Exchange credentials for a session token
async fn login(
    data: web::Data<AppState>,
    body: web::Json<CredentialsRequest>,
) -> Result<HttpResponse, ApiError> {
    let (user, token) = data.auth.login(&body.email, &body.password)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: UserResponse::from(&user),
        token,
    }))
}

/// Return the user the presented token belongs to
async fn me(data: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let user = data.auth.current_user(super::bearer_token(&req)?)?;
    Ok(HttpResponse::Ok().json(UserResponse::from(&user)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/me", web::get().to(me)),
    );
}
