mod cli;
mod config;

use cli::Args;
use csaf_purls::adapters::outbound::console::StderrProgressReporter;
use csaf_purls::adapters::outbound::filesystem::FileSystemReader;
use csaf_purls::application::dto::ResolveRequest;
use csaf_purls::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use csaf_purls::application::read_models::PurlReportBuilder;
use csaf_purls::application::use_cases::ResolvePurlsUseCase;
use csaf_purls::purl_resolution::services::MetadataGenerator;
use csaf_purls::shared::error::ExitCode;
use csaf_purls::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\n{} {}", "Caused by:".yellow(), err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let settings = config::merge_settings(&args, config)?;

    let request = ResolveRequest::builder()
        .product_ids(settings.product_ids)
        .advisory_paths(args.advisories)
        .isolate_advisories(settings.isolate_advisories)
        .build()?;

    let use_case = ResolvePurlsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let report = PurlReportBuilder::build(&response, &MetadataGenerator::generate_default_metadata());
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    if settings.fail_if_empty && !response.has_purls() {
        eprintln!("⚠️  No package URL found for the requested product id(s).");
        return Ok(ExitCode::NoPurlsFound);
    }

    Ok(ExitCode::Success)
}
