//! nextindiega.me 网站服务入口
//!
//! 加载配置、初始化日志与指标、连接数据库并启动 HTTP 服务。

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use indiegame_shared::{AppConfig, Database, SERVICE_NAME, observability};
use indiegame_web::{AppState, TemplateEngine, cli::Cli, routes};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("could not load config file {}", path.display()),
        None => "could not load configuration".to_string(),
    })?;

    let _guard = observability::init(SERVICE_NAME, &config.observability).await?;

    info!("Starting {} on {}", SERVICE_NAME, config.server_addr());

    if let Err(e) = run(&config).await {
        error!(error = ?e, "Server exited with error");
        return Err(e);
    }

    Ok(())
}

async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let db = Database::connect(&config.database)
        .await
        .with_context(|| format!("could not open database {}", config.database.url))?;

    let templates = TemplateEngine::load(Path::new(&config.server.templates))
        .context("could not compile templates")?;

    let state = AppState::new(db.clone(), Arc::new(templates));
    state.store.ensure_schema().await?;

    let app = routes::app(state, Path::new(&config.server.static_dir));

    let listener = TcpListener::bind(config.server_addr())
        .await
        .with_context(|| format!("could not bind {}", config.server_addr()))?;
    info!("Listening on {}", config.server_addr());

    // 收到 SIGTERM 或 Ctrl+C 时停止接收新连接并等待已有请求处理完毕
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");

    Ok(())
}

/// 监听关闭信号
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
