//! Notes REST API - owner-scoped CRUD
//!
//! Every route resolves the bearer token to an owner id before touching the
//! store; the service layer then scopes each query to that owner.

use actix_web::{web, HttpRequest, HttpResponse};

use super::authenticate;
use crate::errors::ApiError;
use crate::models::{CreateNoteRequest, DeleteNoteResponse, UpdateNoteRequest};
use crate::AppState;

/// Create a note owned by the authenticated user
async fn create_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CreateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = authenticate(&data, &req)?;
    let note = data.notes.create(&owner_id, &body.title, &body.content)?;
    Ok(HttpResponse::Created().json(note))
}

/// List the authenticated user's notes, newest first
async fn list_notes(
    data: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let owner_id = authenticate(&data, &req)?;
    let notes = data.notes.list(&owner_id)?;
    Ok(HttpResponse::Ok().json(notes))
}

/// Get a single note by id
async fn get_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = authenticate(&data, &req)?;
    let note = data.notes.get(&path.into_inner(), &owner_id)?;
    Ok(HttpResponse::Ok().json(note))
}

/// Update a note's title and/or content
async fn update_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = authenticate(&data, &req)?;
    let note = data.notes.update(&path.into_inner(), &owner_id, &body)?;
    Ok(HttpResponse::Ok().json(note))
}

/// Delete a note
async fn delete_note(
    data: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let owner_id = authenticate(&data, &req)?;
    data.notes.delete(&path.into_inner(), &owner_id)?;
    Ok(HttpResponse::Ok().json(DeleteNoteResponse { deleted: true }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notes")
            .route("", web::post().to(create_note))
            .route("", web::get().to(list_notes))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::put().to(update_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
