use report_opts::cli::Args;
use report_opts::config::{discover_config, load_config_from_path};
use report_opts::prelude::*;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();
    let logger = StderrLogger::new(args.debug);

    if let Err(e) = run(args, &logger) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args, logger: &StderrLogger) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path, logger)?),
        None => discover_config(Path::new("."), logger)?,
    };

    let mut option = args.into_report_option(config.as_ref());

    let use_case = ResolveReportOptionsUseCase::new(FileSystemSinkOpener::new(), logger);
    use_case.execute(&mut option, OutputSink::Stdout)?;

    let report = ResolvedReport::from(&option);
    let sink = option.output.clone().unwrap_or(OutputSink::Stdout);
    let presenter = PresenterFactory::create(&sink);
    presenter.present(&format!("{}\n", report.to_json()?))?;

    Ok(())
}
