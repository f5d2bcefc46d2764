use clap::Parser;
use pf_app::AppResult;

mod routes;

#[derive(Parser)]
#[command(name = "pf-server")]
#[command(about = "pipeflow server - pipeline graph analysis API", long_about = None)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "PF_HOST")]
    host: String,
    /// Port to listen on
    #[arg(long, default_value_t = 8000, env = "PF_PORT")]
    port: u16,
    /// Frontend origin granted cross-origin access
    #[arg(long, default_value = "http://localhost:3000", env = "PF_FRONTEND_ORIGIN")]
    frontend_origin: String,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let app = routes::router(&cli.frontend_origin)?;

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
