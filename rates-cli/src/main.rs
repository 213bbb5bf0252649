//! Rates CLI
//!
//! Command-line interface for the daily exchange rate bulletin.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_client::{BULLETIN_URL, HttpTransport};
use rates_hex::RatesService;
use rates_types::{BulletinTransport, ExchangeRate, FetchError, RateView, find_rate};

const UNAVAILABLE: &str = "Exchange rates are currently unavailable";

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "Daily exchange rate bulletin CLI", long_about = None)]
struct Cli {
    /// Bulletin URL
    #[arg(long, global = true, env = "RATES_BULLETIN_URL", default_value = BULLETIN_URL)]
    url: String,

    /// Prefixing proxy base URL
    #[arg(long, global = true, env = "RATES_PROXY_URL")]
    proxy: Option<String>,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all rates in the current bulletin
    List,
    /// Convert a base-currency amount into another currency
    Convert {
        /// Amount in the base currency
        amount: f64,
        /// Target currency code (e.g. EUR)
        code: String,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,rates_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn render_table(rates: &[ExchangeRate]) -> String {
    let mut out = format!(
        "{:<20} {:<14} {:>7} {:<5} {:>10}",
        "Country", "Currency", "Amount", "Code", "Rate"
    );
    for rate in rates {
        out.push_str(&format!(
            "\n{:<20} {:<14} {:>7} {:<5} {:>10.3}",
            rate.country(),
            rate.currency(),
            rate.amount().to_string(),
            rate.code(),
            rate.rate()
        ));
    }
    out
}

/// Fetch failures are shown to the user as a single unavailable state.
fn unavailable(err: FetchError) -> anyhow::Error {
    tracing::error!(error = %err, "failed to fetch exchange rates");
    anyhow::anyhow!(UNAVAILABLE)
}

/// Executes one command and returns the text to print.
async fn run<T: BulletinTransport>(
    command: Commands,
    json: bool,
    service: &RatesService<T>,
) -> Result<String> {
    let rates = service.fetch_rates().await.map_err(unavailable)?;

    match command {
        Commands::List => {
            if json {
                let views: Vec<RateView> = rates.iter().map(RateView::from).collect();
                Ok(serde_json::to_string_pretty(&views)?)
            } else if rates.is_empty() {
                Ok("No rates published".to_string())
            } else {
                Ok(render_table(&rates))
            }
        }

        Commands::Convert { amount, code } => {
            let Some(rate) = find_rate(&rates, &code) else {
                anyhow::bail!("Currency {} is not in the current bulletin", code);
            };
            if !rate.is_well_formed() {
                tracing::warn!(code = rate.code(), "converting with a degraded rate record");
            }

            let conversion = service.conversion(amount, rate);
            if json {
                Ok(serde_json::to_string_pretty(&conversion)?)
            } else {
                Ok(format!(
                    "{:.2} = {:.2} {}",
                    conversion.base_amount, conversion.converted, conversion.code
                ))
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut transport = HttpTransport::new().with_url(cli.url);
    if let Some(proxy) = cli.proxy {
        transport = transport.with_proxy(proxy);
    }
    tracing::debug!(url = %transport.request_url(), "using bulletin source");

    let service = RatesService::new(transport);

    // An error returned from main exits with status 1.
    let output = run(cli.command, cli.json, &service).await?;
    println!("{}", output);

    Ok(())
}
