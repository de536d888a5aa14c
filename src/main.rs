use clap::Parser;
use thermo_convert::app::{self, AppOutcome};
use thermo_convert::utils::logger;
use thermo_convert::{CliConfig, ConvertError};

fn main() {
    // Exit code 2 is reserved for rejected conversions, so argument errors exit 1
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Config is loaded before logging so its level can feed the filter
    let config = match app::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);

    let request = app::resolve_request(&cli.value, cli.from, cli.to, &config);
    let format = app::resolve_format(cli.format, &config);

    match app::run(&request, format) {
        Ok(outcome) => report(outcome),
        Err(e) => fail(e),
    }
}

fn report(outcome: AppOutcome) {
    // The error banner goes to stdout as well, so JSON consumers always get one document
    println!("{}", outcome.rendered);

    if let Some(error) = &outcome.error {
        eprintln!("💡 Suggestion: {}", error.recovery_suggestion());
        std::process::exit(outcome.exit_code());
    }
}

fn fail(e: ConvertError) {
    tracing::error!(
        "❌ Conversion failed: {} (Category: {:?})",
        e,
        e.category()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
