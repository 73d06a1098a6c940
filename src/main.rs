// Aadhaar card field extraction from front/back photos or OCR text

use aadhaar_ocr::models::ExtractionResult;
use aadhaar_ocr::processing::{RemoveFiles, ResourceCleanup, RetainFiles, TesseractOcr};
use aadhaar_ocr::utils::{ConfigError, ExtractionError};
use aadhaar_ocr::validation::VerhoeffValidator;
use aadhaar_ocr::{EngineConfig, ExtractionPipeline};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "aadhaar-ocr", version, about = "Extract Aadhaar card fields from front and back images")]
struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Tesseract language, e.g. "eng+hin"
    #[arg(long, global = true, env = "AADHAAR_OCR_LANG")]
    lang: Option<String>,

    /// Directory holding Tesseract traineddata files
    #[arg(long, global = true, env = "TESSDATA_PREFIX")]
    tessdata: Option<PathBuf>,

    /// Skip grayscale/contrast preprocessing
    #[arg(long, global = true)]
    no_preprocess: bool,

    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run OCR on both card photos, then extract
    Images {
        front: PathBuf,
        back: PathBuf,
        /// Delete both photos afterwards, whatever the outcome
        #[arg(long)]
        remove_inputs: bool,
    },
    /// Extract from text files that were already through OCR
    Text { front: PathBuf, back: PathBuf },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Extraction(err) if err.is_user_facing() => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(lang) = &cli.lang {
        config.language = lang.clone();
    }
    if let Some(dir) = &cli.tessdata {
        config.tessdata_dir = Some(dir.clone());
    }
    if cli.no_preprocess {
        config.preprocess = false;
    }
    if let Command::Images { remove_inputs: true, .. } = cli.command {
        config.remove_inputs = true;
    }
    Ok(config)
}

fn read_text(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadText {
        path: path.to_path_buf(),
        source,
    })
}

async fn run(cli: &Cli) -> Result<ExtractionResult, CliError> {
    let config = load_config(cli)?;
    info!("Using OCR language {}", config.language);

    let cleanup: Box<dyn ResourceCleanup> = if config.remove_inputs {
        Box::new(RemoveFiles)
    } else {
        Box::new(RetainFiles)
    };
    let pipeline = ExtractionPipeline::new(TesseractOcr::new(config), VerhoeffValidator, cleanup);

    let result = match &cli.command {
        Command::Images { front, back, .. } => pipeline.process_images(front, back).await?,
        Command::Text { front, back } => {
            let front_text = read_text(front)?;
            let back_text = read_text(back)?;
            pipeline.process_text(&front_text, &back_text)?
        }
    };
    Ok(result)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let output = run(&cli).await.and_then(|result| {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };
        Ok(json)
    });

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            err.exit_code()
        }
    }
}
