//! Customer Service
//!
//! 显式构造依赖链: Repository -> Use-Case -> AppState -> HttpServer

use std::sync::Arc;

use customer_service::application::{CustomerRepositoryPort, CustomerUseCase};
use customer_service::config::{load_config, print_config, AppConfig, StorageBackend};
use customer_service::infrastructure::http::{AppState, HttpServer, ServerConfig};
use customer_service::infrastructure::memory::InMemoryCustomerRepository;
use customer_service::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteCustomerRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值），缺少 host/port 时直接退出
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},customer_service={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Customer Service");
    print_config(&config);

    let customer_repo = build_repository(&config).await?;
    let customer_usecase = Arc::new(CustomerUseCase::new(customer_repo));
    let state = AppState::new(customer_usecase);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::bind(&server_config, state).await?;

    server
        .serve(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 按配置选择仓储后端
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn CustomerRepositoryPort>> {
    match config.database.backend {
        StorageBackend::Sqlite => {
            if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
                tokio::fs::create_dir_all(parent).await?;
            }

            let db_config = DatabaseConfig {
                database_url: config.database.database_url(),
                max_connections: config.database.max_connections,
            };
            let pool = create_pool(&db_config).await?;
            run_migrations(&pool).await?;

            Ok(Arc::new(SqliteCustomerRepository::new(pool)))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory customer repository, data is lost on shutdown");
            Ok(InMemoryCustomerRepository::new().arc())
        }
    }
}
