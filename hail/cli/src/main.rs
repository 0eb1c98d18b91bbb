use clap::Parser;
use hail_lib::greet_all;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod output;

/// Greet people by name
///
/// With no arguments, greets the house trio. Otherwise greets each name
/// given on the command line.
#[derive(Parser)]
#[command(name = "hail")]
#[command(about = "Generate welcome greetings for a list of names", long_about = None)]
#[command(version)]
struct Cli {
    /// Names to greet (greets the default trio if none are given)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Output as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The names greeted when none are supplied on the command line.
const DEFAULT_NAMES: [&str; 3] = ["Prince", "Royal_courtesan", "Emily"];

/// Initialize tracing subscriber based on verbosity
fn init_tracing(verbose: u8) {
    // RUST_LOG wins; otherwise the -v count sets the floor. Default is
    // WARN so normal runs keep stderr quiet.
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,hail=debug,hail_lib=debug".to_string(),
            2 => "debug,hail_lib=trace".to_string(),
            _ => "trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("hail starting");

    let names: Vec<String> = if cli.names.is_empty() {
        DEFAULT_NAMES.iter().map(|n| n.to_string()).collect()
    } else {
        cli.names
    };

    // Any greeting error is fatal; one dispatch, no retries.
    match greet_all(&names) {
        Ok(messages) => {
            if cli.json {
                if let Err(e) = output::print_json(&messages) {
                    eprintln!("hail: {e}");
                    std::process::exit(1);
                }
            } else {
                output::print_text(&messages);
            }
        }
        Err(e) => {
            eprintln!("hail: {e}");
            std::process::exit(1);
        }
    }
}
