use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

use activities_api::directory::seeded_directory;
use activities_api::web;

#[tokio::main]
async fn main() {
    // Laad .env bestand
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Bouw de activiteiten-directory met de vaste seed
    let directory = seeded_directory();
    tracing::info!(activities = directory.len(), "directory geladen");
    let directory = directory.into_shared();

    // 3. Bouw de hele applicatie
    let app = web::router(directory);

    // 4. Start de server (met fallback poort)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Kan host/port niet parsen");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "⚠️  Kon niet binden op {}: {}. Probeer fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Kan fallback niet parsen");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Kan niet binden op fallback poort")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("🚀 Server draait op http://{}", bound_addr);
    println!("📍 Ga naar http://{}/static/index.html om te beginnen", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
