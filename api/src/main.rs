use std::sync::Arc;

use clap::Parser;
use smart_grocery_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LogArgs},
};
use tracing::info;

fn init_logger(args: &LogArgs) {
    let builder = tracing_subscriber::fmt().with_env_filter(args.env_filter());

    if args.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    if let Ok(wd) = std::env::current_dir() {
        info!("Current working directory: {}", wd.display());
    }

    let app_state = state(args.clone())?;
    let router = router(app_state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server starting on http://{}{}", addr, args.server.root_path);
    axum::serve(listener, router).await?;

    Ok(())
}
