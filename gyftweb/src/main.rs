use std::{thread, time::Duration};

use args::parse_args;
use router::router;
use tracing::{debug, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

mod args;
mod asset;
mod error;
mod index;
mod router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    configure_tracing();

    let args = parse_args();
    debug!("{:?}", &args);

    // Port 0 binds to a random unused port. Then use a background thread to
    // automatically open the correct URL in the browser, after waiting a bit
    // to give axum time to start up.
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port.unwrap_or(0))).await?;
    let addr = listener.local_addr()?;
    let url = format!("http://localhost:{}", addr.port());
    info!("Listening on {url}");

    if args.auto_open {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs_f32(0.5));
            // Ignore any errors, this is a "nice-to-have" anyway.
            let _ = opener::open_browser(url);
        });
    }

    // We block here until the process is killed.
    axum::serve(listener, router()).await?;

    Ok(())
}

fn configure_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE) // Makes #[instrument] output something
        .init();
}
