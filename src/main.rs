//! Novella - 小说阅读与写作平台
//!
//! 启动流程：加载配置 → 初始化日志 → 装配存储、会话、文本生成 → 启动 HTTP 服务

use std::sync::Arc;
use std::time::Duration;

use novella::application::LibraryService;
use novella::config::{load_config, print_config, AppConfig};
use novella::infrastructure::http::{AppState, HttpServer, ServerConfig};
use novella::infrastructure::{
    demo_library, GeminiClient, GeminiClientConfig, InMemoryLibraryStore,
    InMemorySessionManager, LibrarySeed,
};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},novella={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Novella - 小说阅读与写作平台");
    print_config(&config);

    // 创建存储
    let seed = if config.store.seed_demo_data {
        demo_library()?
    } else {
        LibrarySeed::empty()
    };
    let store = Arc::new(InMemoryLibraryStore::from_seed(
        seed,
        config.store.simulated_latency(),
    ));

    // 创建文本生成客户端
    let generator_config = GeminiClientConfig {
        base_url: config.ai.base_url.clone(),
        api_key: config.ai.api_key.clone().filter(|_| config.ai.has_api_key()),
        model: config.ai.model.clone(),
        timeout_secs: config.ai.timeout_secs,
    };
    let generator = Arc::new(GeminiClient::new(generator_config)?);

    // 创建会话管理器，并定期清理空闲会话
    let sessions = Arc::new(InMemorySessionManager::new());
    {
        let sessions = sessions.clone();
        let idle_secs = config.auth.session_idle_secs;
        let mut interval =
            tokio::time::interval(Duration::from_secs(config.auth.sweep_interval_secs));
        tokio::spawn(async move {
            loop {
                interval.tick().await;
                let closed = sessions.sweep_expired(idle_secs);
                if closed > 0 {
                    tracing::info!(closed, "Expired sessions swept");
                }
            }
        });
    }

    let service = LibraryService::new(
        store,
        generator,
        sessions,
        config.auth.session_idle_secs,
    );

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, AppState::new(service));

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
