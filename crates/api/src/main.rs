use std::sync::Arc;

use catalog_api::app;
use catalog_directory::DirectoryConfig;

#[tokio::main]
async fn main() {
    catalog_observability::init();

    let directory = DirectoryConfig::from_env();
    let services = Arc::new(app::services::build_services(directory));
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind 0.0.0.0:3000");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, router).await.unwrap();
}
