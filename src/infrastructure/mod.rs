//! 基础设施层：配置、日志、数据库连接

pub mod config;
pub mod database;
pub mod logger;
pub mod schema;

pub use config::{AppConfig, ConfigError, ConnectionMode, DatabaseConfig, ServerConfig};
pub use database::{ConnectionProvider, DatabaseError, DbConnection};
pub use logger::Logger;
pub use schema::ensure_schema;
