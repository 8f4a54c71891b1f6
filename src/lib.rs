//! # 用户管理 REST 服务
//!
//! 分层结构：
//! - `app`：路由与用户处理器、用户存储
//! - `core`：错误处理、响应结构、中间件
//! - `infrastructure`：配置、日志、数据库连接

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{
    create_routes,
    users::{AppState, NewUser, PgUserRepository, User, UserStore},
};
pub use crate::core::{CoreError, MessageResponse};
pub use infrastructure::{AppConfig, ConnectionProvider, DatabaseError};
