//! 数据表初始化

use tracing::info;

use super::database::{ConnectionProvider, DatabaseError};

pub const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        lastname TEXT NOT NULL,
        age BIGINT NOT NULL,
        birthdate TEXT NOT NULL
    )
"#;

// 在实际部署中可改用迁移工具，这里只保证表存在
pub async fn ensure_schema(provider: &ConnectionProvider) -> Result<(), DatabaseError> {
    info!("Ensuring users table exists...");

    let mut conn = provider.acquire().await?;
    let result = sqlx::query(CREATE_USERS_TABLE)
        .execute(conn.as_conn())
        .await;
    conn.release().await;
    result?;

    info!("Users table ready");
    Ok(())
}
