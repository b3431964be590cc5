use clap::Parser;
use tracing::info;

use memberships_import::cli::{Cli, Command};
use memberships_import::config::Config;
use memberships_import::core::ExecutionContext;
use memberships_import::handler::StubImportHandler;
use memberships_import::request::SessionNonce;
use memberships_import::{logging, run_import, VERSION};

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logging);
    info!("memberships-import {}", VERSION);
    config.log_summary();

    // Single synchronous invocation; the handler owns all the work.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let code = runtime.block_on(run(cli, config));
    std::process::exit(code);
}

async fn run(cli: Cli, config: Config) -> i32 {
    match cli.command {
        Command::Import(args) => {
            let exec = ExecutionContext::from_env();
            let nonce = SessionNonce::new(config.request.session_key.clone());
            // Without an embedding host, dispatch targets the built-in
            // stub handler sharing the same nonce session.
            let handler = StubImportHandler::new(nonce.clone());
            let options = args.options();

            let mut out = std::io::stdout();
            let mut err = std::io::stderr();

            run_import(
                handler, &exec, &options, &args.file, &config, &nonce, &mut out, &mut err,
            )
            .await
        }
    }
}
