use clap::Parser;
use leadgen_cli::api::client::PRODUCTION_WEBHOOK_URL;
use leadgen_cli::cli::dispatcher::Dispatcher;
use leadgen_cli::cli::main_types::Cli;
use leadgen_cli::utils::validation::validate_url;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Resolve the endpoint: override wins, otherwise production
    let webhook_url = cli
        .webhook_url
        .clone()
        .unwrap_or_else(|| PRODUCTION_WEBHOOK_URL.to_string());

    if let Err(err) = validate_url(&webhook_url) {
        eprintln!("Error: {}", err.display_friendly());
        std::process::exit(1);
    }

    if cli.verbose {
        println!("Verbose mode is enabled");
        if cli.webhook_url.is_some() {
            println!("Using webhook URL override: {}", webhook_url);
        }
    }

    let dispatcher = Dispatcher::new(webhook_url, cli.verbose);

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} {}", e.severity().emoji(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
