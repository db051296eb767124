use text_to_image_server::{app, Config};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!(
        "starting with font {} at size {}px (sanitize_text={})",
        config.font_path.display(),
        config.font_size,
        config.sanitize_text
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            log::error!("failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };
    log::info!("listening on {}", addr);

    if let Err(err) = axum::serve(listener, app(config)).await {
        log::error!("server error: {}", err);
        std::process::exit(1);
    }
}
