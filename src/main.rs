use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use tracing::info;

use ipinfod::config::Config;
use ipinfod::services::{ExternalApiProvider, IpInfoLookup, LookupService};
use ipinfod::system::init_logging;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // Load env configuration once; handlers only see what main passes in
    let config = Config::from_env();
    let _log_guard = init_logging(&config);

    let provider: Arc<dyn IpInfoLookup> =
        Arc::new(ExternalApiProvider::new(&config.upstream.endpoint));
    info!(
        "Using upstream provider: {} ({})",
        provider.name(),
        config.upstream.endpoint
    );

    let bind_address = config.bind_address();
    info!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(provider.clone()))
            .route("/", web::get().to(LookupService::root))
            .route("/ip", web::get().to(LookupService::own_ip))
            .route("/ip/{ip_addr}", web::get().to(LookupService::by_ip))
    })
    .bind(bind_address)?
    .run()
    .await
}
