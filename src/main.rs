mod cli;

use clap::Parser;
use cli::Args;
use devradar::adapters::inbound::StdinCommandSource;
use devradar::adapters::outbound::console::StderrProgressReporter;
use devradar::adapters::outbound::location::FixedLocationProvider;
use devradar::adapters::outbound::navigation::LogNavigator;
use devradar::adapters::outbound::network::{HttpDeveloperSearch, HttpPushChannel};
use devradar::application::dto::ScreenOptions;
use devradar::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use devradar::application::use_cases::{RunRadarUseCase, SessionSummary};
use devradar::config::{discover_config, load_config_from_path, RadarSettings};
use devradar::radar::domain::{ScreenState, SearchFilter};
use devradar::shared::{ExitCode, RadarError, Result};
use std::process;
use std::time::Duration;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("\n❌ Failed to start the async runtime: {}\n", e);
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    };

    match runtime.block_on(run(args)) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Bad user input exits like a clap error; everything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<RadarError>() {
        Some(RadarError::Validation { .. }) | Some(RadarError::InvalidCoordinate { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}

fn load_settings(args: &Args) -> Result<RadarSettings> {
    let mut settings = RadarSettings::default();

    let loaded = match &args.config {
        Some(path) => Some((path.clone(), load_config_from_path(path)?)),
        None => discover_config(&std::env::current_dir()?)?,
    };
    if let Some((path, config)) = &loaded {
        eprintln!("📄 Using config file: {}", path.display());
        settings.apply_file(config, path)?;
    }

    args.apply_to(&mut settings);
    settings.validate()?;
    Ok(settings)
}

async fn run(args: Args) -> Result<ExitCode> {
    let settings = load_settings(&args)?;
    let timeout = Duration::from_secs(settings.timeout_secs);

    // Create adapters (Dependency Injection)
    let location = FixedLocationProvider::from_parts(settings.latitude, settings.longitude)?;
    let search = HttpDeveloperSearch::new(&settings.server, timeout)?;
    let channel = HttpPushChannel::new(&settings.server, timeout)?;
    let navigator = LogNavigator::new();
    let progress_reporter = StderrProgressReporter::new();
    let renderer =
        RendererFactory::create(settings.format, settings.map_width, settings.map_height);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let live_updates = settings.follow && !args.once;
    let options = ScreenOptions::new(settings.stale, live_updates, true);

    let mut use_case = RunRadarUseCase::new(
        location,
        search,
        channel,
        navigator,
        progress_reporter,
        renderer,
        presenter,
    )
    .with_screen(options, SearchFilter::new(settings.techs.clone()));

    let summary = if args.once {
        use_case.execute_once().await?
    } else {
        eprintln!("⌨️  Commands: techs <text> | pan <lat> <lon> [dlat dlon] | search | open <n> | show | quit");
        let mut commands = StdinCommandSource::stdin();
        use_case.execute(&mut commands).await?
    };

    Ok(exit_code_for_summary(&summary))
}

fn exit_code_for_summary(summary: &SessionSummary) -> ExitCode {
    match summary.final_state {
        ScreenState::Blocked(_) => ExitCode::Blocked,
        _ => ExitCode::Success,
    }
}
