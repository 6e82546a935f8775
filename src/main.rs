use depgraph::adapters::outbound::console::StderrProgressReporter;
use depgraph::adapters::outbound::filesystem::FileSystemReader;
use depgraph::application::dto::{AnalysisQuery, AnalysisRequest, OutputFormat};
use depgraph::application::factories::{FormatterFactory, PresenterFactory};
use depgraph::application::use_cases::AnalyzeGraphUseCase;
use depgraph::cli::{Args, Command};
use depgraph::config::{self, ConfigFile};
use depgraph::shared::error::{DepGraphError, ExitCode};
use depgraph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

/// Default dependency list filename when neither the CLI nor the config
/// names one
const DEFAULT_INPUT: &str = "dependencies.txt";

fn main() {
    // Invalid arguments make clap exit with code 2 (InvalidArguments)
    let args = Args::parse_args();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(code.as_i32());
}

fn run(args: Args) -> Result<ExitCode> {
    // Explicit --config must exist; otherwise discovery is silent
    let config = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let input_path = resolve_input(&args, &config);
    let format = resolve_format(&args, &config);
    let fail_on_cycle = config.fail_on_cycle.unwrap_or(false);
    let treat_cycle_as_failure = matches!(args.command, Command::Check) || fail_on_cycle;

    let query = match args.command {
        Command::Check => AnalysisQuery::Check,
        Command::Order => AnalysisQuery::InstallOrder,
        Command::Sccs => AnalysisQuery::Sccs,
        Command::Critical => AnalysisQuery::Critical,
        Command::Deps { package } => AnalysisQuery::Dependencies(package),
        Command::Impact { package } => AnalysisQuery::Impact(package),
        Command::Report => AnalysisQuery::Full,
    };

    // Create adapters (Dependency Injection)
    let dependency_source = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = AnalyzeGraphUseCase::new(dependency_source, progress_reporter);

    let request = AnalysisRequest::new(input_path, query);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(format));

    let formatter = FormatterFactory::create(format);
    let formatted_output = formatter.format(&response.report, &response.metadata)?;

    let presenter = PresenterFactory::create(args.output);
    presenter.present(&formatted_output)?;

    if treat_cycle_as_failure && response.cycle_detected {
        return Ok(ExitCode::CycleDetected);
    }

    Ok(ExitCode::Success)
}

/// CLI flag wins over config file, which wins over the default.
fn resolve_input(args: &Args, config: &ConfigFile) -> PathBuf {
    args.input
        .clone()
        .or_else(|| config.input.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

/// CLI flag wins over config file, which wins over the default.
/// Config format strings are validated at load time.
fn resolve_format(args: &Args, config: &ConfigFile) -> OutputFormat {
    args.format
        .or_else(|| config.format.as_deref().and_then(|f| f.parse().ok()))
        .unwrap_or(OutputFormat::Markdown)
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<DepGraphError>() {
        Some(DepGraphError::CyclicDependency) => ExitCode::CycleDetected,
        _ => ExitCode::ApplicationError,
    }
}
