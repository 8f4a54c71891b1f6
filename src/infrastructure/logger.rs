//! 日志基础设施

use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_FILTER;

pub struct Logger;

impl Logger {
    /// 优先使用 RUST_LOG，未设置时回退到默认过滤级别
    pub fn init() {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // 重复初始化（例如测试中）时忽略错误
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init();
    }
}
