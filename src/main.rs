//! Imgstudio - AI image studio CLI with a mock credit ledger.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod data_uri;
mod error;
mod output;
mod payment;
mod ports;
mod session;
mod upload;

use std::path::Path;
use std::process;
use std::time::Duration;

use clap::Parser;

use crate::cli::{Cli, Command, SubmitArgs};
use crate::config::Config;
use crate::context::ServiceContext;
use crate::data_uri::DataUri;
use crate::output::{resolve_output_path, save_data_uri, validate_format};
use crate::payment::{PaymentRequest, ReviewDelay};
use crate::session::{Mode, Studio, UserProfile};

/// The fake review delay shown after a payment request.
const REVIEW_DELAY: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), error::StudioError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(error::StudioError::Config)?;

    match cli.command {
        Command::Generate(args) => submit(&config, &args, None, cli.verbose).await,
        Command::Edit { args, image } => {
            submit(&config, &args, Some(Path::new(&image)), cli.verbose).await
        }
        Command::Topup { plan, trx_id } => topup(plan, &trx_id).await,
    }
}

/// Run one generate or edit submission through a fresh studio session.
async fn submit(
    config: &Config,
    args: &SubmitArgs,
    source: Option<&Path>,
    verbose: bool,
) -> Result<(), error::StudioError> {
    // Resolve prompt and defaults
    let prompt = args.resolve_prompt().map_err(error::StudioError::Io)?;
    let model = args.model.clone().unwrap_or_else(|| config.defaults.model.clone());
    let format = args.format.clone().unwrap_or_else(|| config.defaults.format.clone());
    validate_format(&format).map_err(error::StudioError::InvalidArgument)?;

    if verbose {
        eprintln!("Model: {model}");
        eprintln!("Starting credits: {}", config.defaults.starting_credits);
    }

    // The session owns the mock profile; credits reset every invocation.
    let profile = UserProfile::guest(config.defaults.starting_credits);
    let mut studio = Studio::new(profile, config.defaults.cost_per_image);

    if let Some(path) = source {
        studio.set_mode(Mode::Edit);
        studio.attach_source(upload::load_source_image(path)?);
    }

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("IMGSTUDIO_REPLAY").ok();
    let is_recording = std::env::var("IMGSTUDIO_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        if verbose {
            eprintln!("Replaying from: {cassette_path}");
        }
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        if verbose {
            eprintln!("Recording mode enabled");
        }
        let (ctx, session) = ServiceContext::recording(config)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(config)?, None)
    };

    // Submit
    let image = studio.submit(ctx.generator.as_ref(), &model, &prompt).await?;

    // Save the result
    let uri = DataUri::parse(&image.data_uri)?;
    let output_path = resolve_output_path(args.output.as_deref(), &image.prompt, &format);
    save_data_uri(&uri, &format, &output_path)?;
    eprintln!("Saved: {}", output_path.display());
    eprintln!("Credits remaining: {}", studio.credits());

    // Finish recording if active
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    Ok(())
}

/// Run the mock payment-request flow.
async fn topup(plan: u32, trx_id: &str) -> Result<(), error::StudioError> {
    let request = PaymentRequest::new(plan, trx_id)?;
    eprintln!("Verifying payment of PKR {} for {} credits...", request.amount, request.plan);

    let timer = ReviewDelay::new(REVIEW_DELAY);
    let ack = payment::submit_request(&request, &timer).await;
    println!("{ack}");

    Ok(())
}
