use clap::Parser;
use hello_view::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "hello-view", about = "Shows the greeting served by the backend")]
struct Args {
    /// Backend origin, e.g. http://localhost:8080
    #[arg(long)]
    base_url: Option<String>,

    /// Print each rendered state as a line instead of drawing full screen
    #[arg(long)]
    plain: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to hello-view.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("hello-view.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        config::HelloConfig::default()
    });
    let resolved = config::resolve(&file_config, args.base_url.as_deref());

    log::info!("hello-view starting against {}", resolved.base_url);

    if args.plain {
        hello_view::plain::run(&resolved).await
    } else {
        hello_view::tui::run(resolved)
    }
}
