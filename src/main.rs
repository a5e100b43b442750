use anyhow::Context as _;
use clap::Parser;
use phone_extract::core::report;
use phone_extract::utils::error::ErrorSeverity;
use phone_extract::utils::{logger, validation::Validate};
use phone_extract::{
    CliConfig, Command, ExtractionEngine, ExtractionPipeline, LocalStorage, PhoneError,
    RunSettings, TomlConfig,
};
use std::io::IsTerminal;
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = CliConfig::parse();
    let verbose = cli.verbose;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let file_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => TomlConfig::default(),
    };
    file_config.validate().context("validate config")?;

    // 初始化日誌
    if file_config.json_logs() {
        logger::init_json_logger(cli.verbose, file_config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, file_config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    let CliConfig {
        command,
        json,
        max_concurrent_reads,
        ..
    } = cli;

    if let Command::FromFiles { files, .. } = &command {
        if files.is_empty() {
            println!("No input files given.");
            return Ok(());
        }
    }

    let settings = RunSettings::resolve(&file_config, command.output(), max_concurrent_reads, json);
    settings.validate().context("validate settings")?;
    let json = settings.json;

    if matches!(command, Command::FromText { .. }) && std::io::stdin().is_terminal() {
        eprintln!("Enter text (Ctrl+D to finish):");
    }

    let pipeline =
        ExtractionPipeline::new(LocalStorage::new(), settings, command.mode(), command.inputs());
    let engine = ExtractionEngine::new(pipeline);
    let run_report = engine.run().await.context("extract phone numbers")?;

    if let Some(text) = report::render(&run_report, json).context("render results")? {
        println!("{}", text);
    }

    Ok(())
}

fn report_error(err: &anyhow::Error, verbose: bool) {
    let phone_error = err.chain().find_map(|c| c.downcast_ref::<PhoneError>());

    tracing::error!("❌ {:#}", err);
    match phone_error {
        Some(e) if !verbose => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
        Some(e) => {
            eprintln!("❌ {:#}", err);
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        }
        None => eprintln!("❌ {:#}", err),
    }
}

fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let severity = err
        .chain()
        .find_map(|c| c.downcast_ref::<PhoneError>())
        .map(PhoneError::severity);

    match severity {
        Some(ErrorSeverity::Low) => ExitCode::SUCCESS,
        Some(ErrorSeverity::Medium) => ExitCode::from(EXIT_INVALID_INPUT),
        Some(ErrorSeverity::High) | Some(ErrorSeverity::Critical) | None => {
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
