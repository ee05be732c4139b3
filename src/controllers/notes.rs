//! Notes REST API — the CRUD surface over the in-memory note store.
//!
//! The store returns result-or-error per operation; this is the only layer
//! that turns those into status codes and wire bodies. Validation failures
//! map to 422, lookup misses to 404, and the failure bodies are bare JSON
//! strings.

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::{CreateNoteRequest, Item, Note, NoteId, UpdateNoteRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
struct CreateNoteResponse {
    id: NoteId,
    title: String,
    items: Vec<Item>,
}

#[derive(Debug, Serialize)]
struct GetNoteResponse {
    note: Note,
    items: Vec<Item>,
}

/// List both collections, unfiltered
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.list_all())
}

/// Create a note with its items
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let CreateNoteRequest { id, title, items } = body.into_inner();
    let title = title.unwrap_or_default();

    match data.store.create(id.clone(), &title, &items) {
        Ok(()) => HttpResponse::Created().json(CreateNoteResponse { id, title, items }),
        Err(err) => {
            log::debug!("Note creation rejected: {}", err);
            HttpResponse::UnprocessableEntity().json("No note title provided")
        }
    }
}

/// Get a note and its items by id
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = NoteId::from(path.into_inner());

    match data.store.get(&id) {
        Ok((note, items)) => HttpResponse::Ok().json(GetNoteResponse { note, items }),
        Err(_) => HttpResponse::NotFound().json("That note does not exist!"),
    }
}

/// Delete a note and its items by id
async fn delete_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = NoteId::from(path.into_inner());

    match data.store.delete(&id) {
        Ok(()) => HttpResponse::Accepted()
            .json(format!("Note {} has been deleted successfully", id)),
        Err(_) => HttpResponse::NotFound().json("That note does not exist, nothing was deleted"),
    }
}

/// Replace a note's title and items by id
async fn update_note(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateNoteRequest>,
) -> impl Responder {
    let id = NoteId::from(path.into_inner());
    let UpdateNoteRequest { title, items } = body.into_inner();

    match data.store.update(&id, title.unwrap_or_default(), items) {
        Ok(()) => HttpResponse::Accepted().json(format!("Note {} has been updated", id)),
        Err(_) => HttpResponse::NotFound().json("That note does not exist, nothing was edited"),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notes")
            .route("", web::get().to(list_notes))
            .route("", web::post().to(create_note))
            .route("/{id}", web::get().to(get_note))
            .route("/{id}", web::delete().to(delete_note))
            .route("/{id}", web::put().to(update_note)),
    );
}
