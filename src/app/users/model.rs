//! 用户数据模型

use serde::{Deserialize, Serialize};

/// `users` 表中的一行
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub age: i64,
    // 按原样保存的文本，不做日期解析
    pub birthdate: String,
}

/// 创建/更新请求体；客户端传入的 id 会被忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub lastname: String,
    pub age: i64,
    pub birthdate: String,
}

impl NewUser {
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            lastname: self.lastname,
            age: self.age,
            birthdate: self.birthdate,
        }
    }
}
