//! 数据库基础设施
//!
//! `ConnectionProvider` 按需提供已验证（ping）的连接。调用方在所有退出路径上
//! 都必须调用 `DbConnection::release`。

use sqlx::{
    pool::PoolConnection,
    postgres::{PgConnectOptions, PgConnection, PgPool, PgPoolOptions},
    Connection, Postgres,
};
use thiserror::Error;
use tracing::{debug, warn};

use super::config::{ConnectionMode, DatabaseConfig};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("unable to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database did not answer ping: {0}")]
    Ping(#[source] sqlx::Error),

    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),
}

/// 一次调用期间持有的数据库连接
pub enum DbConnection {
    Direct(PgConnection),
    Pooled(PoolConnection<Postgres>),
}

impl DbConnection {
    pub fn as_conn(&mut self) -> &mut PgConnection {
        match self {
            DbConnection::Direct(conn) => conn,
            DbConnection::Pooled(conn) => &mut **conn,
        }
    }

    /// 直连模式关闭连接，连接池模式归还连接
    pub async fn release(self) {
        match self {
            DbConnection::Direct(conn) => {
                if let Err(e) = conn.close().await {
                    warn!(error = %e, "failed to close database connection cleanly");
                }
            }
            DbConnection::Pooled(conn) => drop(conn),
        }
    }

    /// 连接已不可用：直接关闭，连接池模式下先脱离连接池，避免坏连接被复用
    pub async fn discard(self) {
        let conn = match self {
            DbConnection::Direct(conn) => conn,
            DbConnection::Pooled(conn) => conn.detach(),
        };

        if let Err(e) = conn.close().await {
            debug!(error = %e, "closing broken database connection failed");
        }
    }
}

#[derive(Clone)]
pub struct ConnectionProvider {
    options: PgConnectOptions,
    pool: Option<PgPool>,
}

impl ConnectionProvider {
    pub fn new(config: &DatabaseConfig) -> Self {
        match config.mode {
            ConnectionMode::Direct => Self::direct(config.options.clone()),
            ConnectionMode::Pooled => Self::pooled(config),
        }
    }

    pub fn direct(options: PgConnectOptions) -> Self {
        Self {
            options,
            pool: None,
        }
    }

    /// 连接池延迟建立连接，首次 acquire 时才真正连接数据库
    pub fn pooled(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(config.options.clone());

        Self {
            options: config.options.clone(),
            pool: Some(pool),
        }
    }

    pub fn mode(&self) -> ConnectionMode {
        if self.pool.is_some() {
            ConnectionMode::Pooled
        } else {
            ConnectionMode::Direct
        }
    }

    pub async fn acquire(&self) -> Result<DbConnection, DatabaseError> {
        let mut conn = match &self.pool {
            Some(pool) => DbConnection::Pooled(pool.acquire().await.map_err(DatabaseError::Connect)?),
            None => DbConnection::Direct(
                PgConnection::connect_with(&self.options)
                    .await
                    .map_err(DatabaseError::Connect)?,
            ),
        };

        if let Err(e) = conn.as_conn().ping().await {
            conn.discard().await;
            return Err(DatabaseError::Ping(e));
        }

        debug!(mode = ?self.mode(), "database connection acquired");
        Ok(conn)
    }

    /// 关闭连接池（直连模式下无操作）
    pub async fn shutdown(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
