//! 用户模块

pub mod handler;
pub mod model;
pub mod repository;

pub use handler::AppState;
pub use model::{NewUser, User};
pub use repository::{PgUserRepository, StoreResult, UserStore};
