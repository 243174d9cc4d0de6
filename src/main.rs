//! `imgjob-client` SSR host binary. Build with `--features ssr`; the
//! `hydrate` build only produces the WASM library.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use imgjob_client::config::ServerConfig;

    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = imgjob_client::server::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, "imgjob-client listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {}
