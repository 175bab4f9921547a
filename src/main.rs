//! Gist Viewer - renders a remote source file as an annotated gist page
//!
//! # Usage
//! ```bash
//! gist-viewer                                   # Serve the default file on :8080
//! gist-viewer --source <blob-url> --raw <raw-url>
//! gist-viewer --port 3000 --open                # Pick a port and open the browser
//! ```

mod error;
mod gist;
mod highlight;
mod models;
mod remote;
mod render;
mod routes;
mod state;

use std::sync::Arc;

use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gist::GistComposer;
use highlight::{SyntectHighlighter, DEFAULT_THEME};
use remote::HttpFetcher;
use render::MaudRenderer;
use state::AppState;

const DEFAULT_SOURCE: &str =
    "https://github.com/iris-contrib/gowebexamples/blob/master/examples/favicon/main.go";
const DEFAULT_RAW: &str =
    "https://raw.githubusercontent.com/iris-contrib/gowebexamples/master/examples/favicon/main.go";

/// Gist Viewer - Show a remote source file as an annotated gist
#[derive(Parser)]
#[command(name = "gist-viewer")]
#[command(about = "Renders a remote source file as an annotated gist page", long_about = None)]
struct Cli {
    /// Blob page of the file to show (author, last update, parent listing)
    #[arg(long, value_name = "URL", default_value = DEFAULT_SOURCE)]
    source: String,

    /// Raw contents of the same file
    #[arg(long, value_name = "URL", default_value = DEFAULT_RAW)]
    raw: String,

    /// Header text shown above the source
    #[arg(long, default_value = "")]
    description: String,

    /// Footer text shown below the source
    #[arg(long, default_value = "")]
    notes: String,

    /// Highlighting theme
    #[arg(long, default_value = DEFAULT_THEME)]
    theme: String,

    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Open browser automatically after starting
    #[arg(short, long)]
    open: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let highlighter = match SyntectHighlighter::new(&cli.theme) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };
    let syntax_css = highlighter.stylesheet()?;

    let fetcher = HttpFetcher::new()?;
    let composer = GistComposer::new(fetcher.clone(), fetcher, highlighter)
        .with_description(cli.description)
        .with_notes(cli.notes);

    let state = Arc::new(AppState {
        composer,
        renderer: MaudRenderer,
        source_url: cli.source.clone(),
        raw_url: cli.raw,
        syntax_css,
    });

    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let url = format!("http://{}", addr);
    println!();
    println!("  Gist Viewer");
    println!();
    println!("  Source: {}", cli.source);
    println!("  Server: {}", url);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    if cli.open {
        if let Err(e) = open::that(&url) {
            eprintln!("  Warning: Could not open browser: {}", e);
        }
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
