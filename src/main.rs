use clap::Parser;
use diabetes_check::app::content;
use diabetes_check::config::cli::{BatchArgs, OutputFormat, PredictArgs};
use diabetes_check::config::Command;
use diabetes_check::utils::logger::{self, LogFormat};
use diabetes_check::utils::validation::Validate;
use diabetes_check::{
    screen_csv, AppConfig, CliConfig, ConfigProvider, DiabetesError, InputValidator,
    LinearModel, RawInput, Report, ScreeningEngine,
};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::sync::Arc;

fn main() {
    let cli = CliConfig::parse();

    // Validate command line arguments
    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // Load the config file and apply overrides
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging
    let format = LogFormat::parse(&config.logging.format).unwrap_or_default();
    logger::init_cli_logger(cli.verbose, &config.logging.level, format);

    tracing::info!("Starting diabetes-check");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(&cli.command, &config) {
        // Log detailed error information
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // Print a user-friendly message and exit by severity
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(command: &Command, config: &AppConfig) -> Result<(), DiabetesError> {
    match command {
        Command::About => {
            print!("{}", content::render_about());
            Ok(())
        }
        Command::Predict(args) => predict(args, config),
        Command::Batch(args) => batch(args, config),
    }
}

/// Loaded once per process; a load failure is fatal.
fn load_engine(config: &AppConfig) -> Result<ScreeningEngine<Arc<LinearModel>>, DiabetesError> {
    let model = LinearModel::from_file(config.model_path())?;
    Ok(ScreeningEngine::new(Arc::new(model)))
}

fn predict(args: &PredictArgs, config: &AppConfig) -> Result<(), DiabetesError> {
    let raw = RawInput::from(&args.form);

    let (report, failure) = if args.dry_run {
        // no model needed until the form is submitted
        let assessment = InputValidator::new().assess(&raw)?;
        (Report::pending(assessment), None)
    } else {
        let engine = load_engine(config)?;
        let submission = engine.submit(&raw)?;
        let failure = submission.result.clone().err();
        (Report::from_submission(submission, config), failure)
    };

    // Render the banners
    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    // the banner is already printed; only the exit status is left to decide
    if let Some(e) = failure.map(DiabetesError::from) {
        tracing::debug!("Submission ended with an error banner ({:?})", e.severity());
        if e.exit_code() != 0 {
            std::process::exit(e.exit_code());
        }
    }
    Ok(())
}

fn batch(args: &BatchArgs, config: &AppConfig) -> Result<(), DiabetesError> {
    let engine = load_engine(config)?;
    let input = BufReader::new(File::open(&args.input)?);

    // Write to the output file, or stdout when none is given
    let summary = match &args.output {
        Some(path) => {
            let summary = screen_csv(&engine, input, BufWriter::new(File::create(path)?))?;
            println!("📁 Results saved to: {}", path.display());
            summary
        }
        None => screen_csv(&engine, input, io::stdout().lock())?,
    };

    eprintln!(
        "✅ {} rows screened: {} positive, {} negative, {} failed",
        summary.rows, summary.positive, summary.negative, summary.failed
    );
    Ok(())
}
