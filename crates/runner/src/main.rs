use floe_runner::{RunnerConfig, session, start};
use log::info;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

fn print_help() {
    eprintln!(
        r#"Floe Runner - order book matching over newline-delimited JSON

USAGE:
    floe-runner [OPTIONS] < orders.ndjson

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (overrides log_level from config)

INPUT:
    One order per line, e.g.
    {{"type":"ICEBERG","order":{{"direction":"SELL","price":100,"quantity":200,"peak":100}}}}

OUTPUT:
    One line per order: {{"order":..,"buyOrders":[..],"sellOrders":[..],"transactions":[..]}}
    or {{"error":".."}} when the order is rejected
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => RunnerConfig::from_file(path)?,
        None => RunnerConfig::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    match &config_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("Using default configuration"),
    }
    info!("Book: {}", config.name);

    let (handle, worker) = start(&config);

    let seeded = session::seed(&handle, &config.seed_orders).await?;
    info!("Seed orders: {}/{}", seeded, config.seed_orders.len());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    while let Some(line) = lines.next_line().await? {
        if let Some(output) = session::handle_line(&handle, &line).await? {
            stdout.write_all(output.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    handle.shutdown().await?;
    let stats = worker.await?;
    info!(
        "Done: {} accepted, {} rejected, {} executions",
        stats.accepted, stats.rejected, stats.executions
    );

    Ok(())
}
