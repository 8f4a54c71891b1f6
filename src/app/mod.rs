//! 应用层

pub mod router;
pub mod users;

pub use router::create_routes;
