//! Diagnostic CLI: run one visitor lookup against a directory endpoint and
//! print the interpreted outcome. Useful for smoke-testing a deployment
//! without opening the check-in dialog.

use clap::Parser;
use directory_client::{DirectoryClient, DirectoryConfig};
use frontdesk_core::{interpret_lookup, LookupOutcome, LookupRequest, VisitorDirectory};
use frontdesk_core::phone;

#[derive(Parser, Debug)]
#[command(name = "lookup-check", about = "Smoke-test the visitor directory lookup endpoint")]
struct Args {
    /// Phone number as a receptionist would type it.
    phone: String,

    /// Optional year of birth to narrow the match.
    #[arg(long)]
    year: Option<u16>,

    /// Directory base URL.
    #[arg(long, env = "FRONTDESK_DIRECTORY_URL", default_value = "http://127.0.0.1:8000")]
    url: String,

    /// Bearer token, if the directory requires one.
    #[arg(long, env = "FRONTDESK_DIRECTORY_TOKEN")]
    token: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = DirectoryConfig::new(args.url);
    config.bearer_token = args.token;
    let client = DirectoryClient::new(config);

    let request = LookupRequest {
        phone_number: phone::normalize(&args.phone),
        year_of_birth: args.year,
    };
    tracing::info!(phone = %request.phone_number, "Looking up visitor");

    let outcome = interpret_lookup(client.lookup(&request));
    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("failed to render outcome: {}", err),
    }

    if matches!(outcome, LookupOutcome::Failed { .. }) {
        std::process::exit(1);
    }
}
