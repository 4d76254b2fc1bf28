pub mod service;

pub use service::NotesService;
