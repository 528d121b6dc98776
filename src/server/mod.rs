//! 静态页面服务 - 展示层
//!
//! 装饰性端点：单个路由 `/` 原样返回一个静态文件。
//! 无状态、无参数、与批处理流程互不耦合。

use anyhow::Result;
use poem::{
    endpoint::StaticFileEndpoint, listener::TcpListener, middleware::Tracing, EndpointExt, Route,
    Server,
};
use tracing::info;

use crate::config::Config;

/// 启动静态页面服务
///
/// 阻塞当前任务直到服务退出
pub async fn run(config: &Config) -> Result<()> {
    let addr = config.server_bind_addr.clone();

    let app = Route::new()
        .at("/", StaticFileEndpoint::new(config.static_file.clone()))
        .with(Tracing);

    info!("🌐 静态页面服务已启动: http://{}", addr);

    Server::new(TcpListener::bind(&addr)).run(app).await?;

    Ok(())
}
