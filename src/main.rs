use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use trackkit::{format_bom, init_logging, DesignerState, EditorConfig, Project, BUILD_DATE, VERSION};

#[derive(Parser, Debug)]
#[command(name = "trackkit", version, about = "Track layout editor engine")]
struct Cli {
    /// Editor configuration file (.json or .toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write an empty project document
    New {
        file: PathBuf,
        #[arg(long, default_value = "New Track")]
        name: String,
    },
    /// Append pieces given as quick text (L100, R50-90)
    Add {
        file: PathBuf,
        #[arg(required = true)]
        pieces: Vec<String>,
    },
    /// Append boundary vertices given as "x, y" in centimetres
    Boundary {
        file: PathBuf,
        #[arg(required = true)]
        points: Vec<String>,
    },
    /// Print the bill of materials
    Bom {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective editor configuration
    Config {
        #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConfigFormat {
    Toml,
    Json,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    tracing::debug!("trackkit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::New { file, name } => {
            let mut state = DesignerState::with_config(config);
            let mut project = Project::new(name);
            project.skin = state.project().skin.clone();
            state.load_project(project);
            state.save_to_file(&file)?;
            println!("Created {}", file.display());
        }
        Command::Add { file, pieces } => {
            let mut state = open(config, &file)?;
            for text in &pieces {
                let id = state
                    .add_quick_text(text)
                    .with_context(|| format!("Cannot add '{}'", text))?;
                tracing::info!("Added {} as {}", text, id);
            }
            state.save_to_file(&file)?;
            println!("Added {} pieces to {}", pieces.len(), file.display());
        }
        Command::Boundary { file, points } => {
            let mut state = open(config, &file)?;
            for text in &points {
                state
                    .add_boundary_point_text(text)
                    .with_context(|| format!("Cannot add boundary point '{}'", text))?;
            }
            state.save_to_file(&file)?;
            println!("Added {} boundary points to {}", points.len(), file.display());
        }
        Command::Bom { file, json } => {
            let state = open(config, &file)?;
            let summary = state.bom();
            if json {
                let rows: Vec<serde_json::Value> = summary
                    .entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "key": e.key,
                            "count": e.count,
                            "lengthCm": e.total_length_cm(),
                        })
                    })
                    .collect();
                let report = serde_json::json!({
                    "entries": rows,
                    "totalPieces": summary.total_pieces,
                    "totalLengthM": summary.total_length_m(),
                    "boundaryLengthCm": summary.boundary_length_cm,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", format_bom(&summary));
            }
        }
        Command::Config { format } => {
            let text = match format {
                ConfigFormat::Toml => toml::to_string_pretty(&config)?,
                ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
            };
            println!("{}", text);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EditorConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match EditorConfig::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("No config directory, using defaults: {}", e);
                return Ok(EditorConfig::default());
            }
        },
    };
    EditorConfig::load_or_default(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

fn open(config: EditorConfig, file: &Path) -> anyhow::Result<DesignerState> {
    let mut state = DesignerState::with_config(config);
    state.load_from_file(file)?;
    Ok(state)
}
