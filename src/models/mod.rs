pub mod note;
pub mod user;

pub use note::{CreateNoteRequest, DeleteNoteResponse, Note, UpdateNoteRequest};
pub use user::{AuthResponse, CredentialsRequest, User, UserResponse};
