#![allow(dead_code)]

use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use user_api::{
    app::users::StoreResult, create_routes, AppState, DatabaseError, NewUser, User, UserStore,
};

/// 内存存储，行为与 PgUserRepository 保持一致
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &NewUser) -> StoreResult<i64> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(id, user.clone().into_user(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, user: &NewUser) -> StoreResult<u64> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = user.clone().into_user(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        Ok(self.inner.lock().unwrap().rows.remove(&id).map_or(0, |_| 1))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

/// 所有操作都返回连接失败
pub struct UnreachableStore;

#[async_trait]
impl UserStore for UnreachableStore {
    async fn insert(&self, _user: &NewUser) -> StoreResult<i64> {
        Err(unreachable_db())
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<User>> {
        Err(unreachable_db())
    }

    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Err(unreachable_db())
    }

    async fn update(&self, _id: i64, _user: &NewUser) -> StoreResult<u64> {
        Err(unreachable_db())
    }

    async fn delete(&self, _id: i64) -> StoreResult<u64> {
        Err(unreachable_db())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(unreachable_db())
    }
}

fn unreachable_db() -> DatabaseError {
    DatabaseError::Connect(sqlx::Error::PoolTimedOut)
}

pub fn memory_app() -> (axum::Router, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::default());
    let app = create_routes(AppState::new(store.clone()));
    (app, store)
}

pub fn unreachable_app() -> axum::Router {
    create_routes(AppState::new(Arc::new(UnreachableStore)))
}

pub fn new_user(name: &str, lastname: &str, age: i64, birthdate: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        lastname: lastname.to_string(),
        age,
        birthdate: birthdate.to_string(),
    }
}
