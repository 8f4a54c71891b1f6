//! 用户存储
//!
//! 每个操作都单独获取、释放一次连接，并且只执行一条参数化 SQL。

use async_trait::async_trait;
use tracing::debug;

use super::model::{NewUser, User};
use crate::infrastructure::{ConnectionProvider, DatabaseError};

pub type StoreResult<T> = Result<T, DatabaseError>;

/// 用户存储抽象，处理器只依赖这个 trait
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 插入用户并返回数据库生成的 id
    async fn insert(&self, user: &NewUser) -> StoreResult<i64>;

    /// 不存在时返回 `None`
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// 顺序由数据库决定
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// 无条件覆盖所有字段，返回受影响行数
    async fn update(&self, id: i64, user: &NewUser) -> StoreResult<u64>;

    async fn delete(&self, id: i64) -> StoreResult<u64>;

    /// 检查存储是否可用
    async fn ping(&self) -> StoreResult<()>;
}

const INSERT_USER: &str =
    "INSERT INTO users (name, lastname, age, birthdate) VALUES ($1, $2, $3, $4) RETURNING id";
const SELECT_USER: &str = "SELECT id, name, lastname, age, birthdate FROM users WHERE id = $1";
const SELECT_USERS: &str = "SELECT id, name, lastname, age, birthdate FROM users";
const UPDATE_USER: &str =
    "UPDATE users SET name = $2, lastname = $3, age = $4, birthdate = $5 WHERE id = $1";
const DELETE_USER: &str = "DELETE FROM users WHERE id = $1";

#[derive(Clone)]
pub struct PgUserRepository {
    provider: ConnectionProvider,
}

impl PgUserRepository {
    pub fn new(provider: ConnectionProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn insert(&self, user: &NewUser) -> StoreResult<i64> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>(INSERT_USER)
            .bind(&user.name)
            .bind(&user.lastname)
            .bind(user.age)
            .bind(&user.birthdate)
            .fetch_one(conn.as_conn())
            .await;
        conn.release().await;

        let id = result?;
        debug!(user_id = id, "inserted user");
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query_as::<_, User>(SELECT_USER)
            .bind(id)
            .fetch_optional(conn.as_conn())
            .await;
        conn.release().await;

        let user = result?;
        if user.is_none() {
            debug!(user_id = id, "no user row found");
        }
        Ok(user)
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(conn.as_conn())
            .await;
        conn.release().await;

        Ok(result?)
    }

    async fn update(&self, id: i64, user: &NewUser) -> StoreResult<u64> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(UPDATE_USER)
            .bind(id)
            .bind(&user.name)
            .bind(&user.lastname)
            .bind(user.age)
            .bind(&user.birthdate)
            .execute(conn.as_conn())
            .await;
        conn.release().await;

        let rows = result?.rows_affected();
        debug!(user_id = id, rows, "updated user");
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let mut conn = self.provider.acquire().await?;
        let result = sqlx::query(DELETE_USER)
            .bind(id)
            .execute(conn.as_conn())
            .await;
        conn.release().await;

        let rows = result?.rows_affected();
        debug!(user_id = id, rows, "deleted user");
        Ok(rows)
    }

    async fn ping(&self) -> StoreResult<()> {
        // acquire 内部已经执行过 ping
        let conn = self.provider.acquire().await?;
        conn.release().await;
        Ok(())
    }
}
