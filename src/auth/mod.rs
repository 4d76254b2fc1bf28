pub mod password;
pub mod service;
pub mod tokens;

pub use service::AuthService;
pub use tokens::TokenIssuer;
