//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 写操作的结果信封，字段为空时不输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl MessageResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            message: Some(message.into()),
        }
    }
}
