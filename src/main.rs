use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use dotenvy::dotenv;
use std::env;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use cmockgen::config::AppConfig;
use cmockgen::error;
use cmockgen::mockgen::generator::MockGenerator;
use cmockgen::mockgen::logger::GenLogger;
use cmockgen::mockgen::spec_loader::SpecLoader;
use cmockgen::mockgen::types::SignatureFile;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a mock scaffolding header from signature files
    Generate {
        #[arg(required = true)]
        specs: Vec<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print plain C prototypes for the functions in signature files
    Prototypes {
        #[arg(required = true)]
        specs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();

    if let Ok(env) = env::var("RUN_MODE") {
        println!("Running in {env} mode");
    }

    let app_config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(app_config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Generate { specs, output }) => {
            let signatures = match load_signatures(specs) {
                Ok(signatures) => signatures,
                Err(e) => {
                    GenLogger::error(&format!("Failed to load signature files: {}", e));
                    return Err(e.into());
                }
            };

            let generator = MockGenerator::new();
            GenLogger::step(&format!(
                "Generating mock scaffolding for {} function(s)...",
                signatures.functions.len()
            ));

            match resolve_output(output.as_deref(), &app_config) {
                Some(path) => {
                    generator.write_header(&signatures, &path)?;
                    GenLogger::info_file(
                        &path.display().to_string(),
                        "Mock header written to",
                    );
                }
                None => print!("{}", generator.render_header(&signatures)),
            }
            Ok(())
        }
        Some(Commands::Prototypes { specs }) => {
            let signatures = load_signatures(specs)?;
            print!("{}", MockGenerator::new().render_prototypes(&signatures));
            Ok(())
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Loads every signature file and merges them into one document. The merged
/// document is re-validated so a function declared in two files is still a
/// duplicate.
fn load_signatures(specs: &[PathBuf]) -> error::Result<SignatureFile> {
    let loader = SpecLoader::new();
    let mut merged = SignatureFile { functions: vec![] };
    for path in specs {
        GenLogger::info_file(&path.display().to_string(), "Loading signatures from");
        let signatures = loader.load(path)?;
        merged.functions.extend(signatures.functions);
    }
    merged.validate()?;
    Ok(merged)
}

fn resolve_output(output: Option<&Path>, app_config: &AppConfig) -> Option<PathBuf> {
    if let Some(path) = output {
        return Some(path.to_path_buf());
    }
    app_config
        .output_dir
        .as_ref()
        .map(|dir| Path::new(dir).join(&app_config.header_name))
}
