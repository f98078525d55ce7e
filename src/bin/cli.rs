use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use gengraphic_engine::aspect;
use gengraphic_engine::catalog::{self, COLOR_PALETTES, DISTRIBUTION_OPTIONS, FONT_OPTIONS, LOGO_TYPE_OPTIONS};
use gengraphic_engine::client::GeminiClient;
use gengraphic_engine::config::Config;
use gengraphic_engine::credentials::{CredentialGate, EnvCredentials};
use gengraphic_engine::params::DesignParameters;
use gengraphic_engine::store::FileStore;
use gengraphic_engine::studio::{Action, Studio};
use std::io::StdinLock;
use std::path::PathBuf;

type CliStudio = Studio<GeminiClient, EnvCredentials<StdinLock<'static>>, FileStore>;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Image model name.
    #[arg(long, global = true)]
    model: Option<String>,
    /// Base URL of the generative language API.
    #[arg(long, global = true)]
    api_base: Option<String>,
    /// Directory holding the saved collection and API key.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new design and add it to the collection.
    Generate {
        #[arg(short, long, default_value = "")]
        name: String,
        #[arg(short, long, default_value = "")]
        slogan: String,
        /// Accent color; repeat for several. Replaces the palette colors.
        #[arg(short, long = "color")]
        colors: Vec<String>,
        /// Named palette from the catalog.
        #[arg(long)]
        palette: Option<String>,
        /// Font style id or name.
        #[arg(long)]
        font: Option<String>,
        #[arg(long, default_value = "")]
        icon: String,
        /// Element distribution id or name.
        #[arg(long)]
        distribution: Option<String>,
        /// Logo type id or name.
        #[arg(long)]
        logo_type: Option<String>,
        #[arg(long, default_value_t = 1024)]
        width: u32,
        #[arg(long, default_value_t = 1024)]
        height: u32,
        /// Shortcut for 1920x1080.
        #[arg(long)]
        full_hd: bool,
        #[arg(long)]
        name_color: Option<String>,
        #[arg(long)]
        slogan_color: Option<String>,
        /// Also download the result into this directory.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Apply an instruction to a saved design.
    Edit {
        #[arg(short, long)]
        id: String,
        #[arg(short = 'p', long)]
        instruction: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Export a saved design at 1920x1080.
    ExportHd {
        #[arg(short, long)]
        id: String,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Download a saved design at its original size.
    Download {
        #[arg(short, long)]
        id: String,
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
    /// Inspect or prune the saved collection.
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// List the available fonts, layouts, logo types and palettes.
    Catalog,
    /// Select the API key to use.
    Key,
}

#[derive(Subcommand)]
enum HistoryCommands {
    List,
    Delete {
        #[arg(short, long)]
        id: String,
    },
}

fn resolve_option(options: &[catalog::DesignOption], input: Option<String>, current: String) -> String {
    match input {
        Some(value) => catalog::resolve(options, &value)
            .map(|o| o.name.to_string())
            .unwrap_or(value),
        None => current,
    }
}

fn build_studio(config: &Config) -> CliStudio {
    Studio::new(
        GeminiClient::from_config(config),
        EnvCredentials::new(config, std::io::stdin().lock()),
        FileStore::new(config.data_dir.clone()),
    )
}

fn report_failure(studio: &CliStudio, err: gengraphic_engine::GenGraphicError) -> anyhow::Error {
    if let Some(message) = &studio.state().error {
        eprintln!("{}", message);
    }
    err.into()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    match cli.command {
        Commands::Generate {
            name,
            slogan,
            colors,
            palette,
            font,
            icon,
            distribution,
            logo_type,
            width,
            height,
            full_hd,
            name_color,
            slogan_color,
            out,
        } => {
            let defaults = DesignParameters::default();
            let mut params = DesignParameters {
                name,
                slogan,
                icon_description: icon,
                width,
                height,
                font_style: resolve_option(FONT_OPTIONS, font, defaults.font_style.clone()),
                element_distribution: resolve_option(
                    DISTRIBUTION_OPTIONS,
                    distribution,
                    defaults.element_distribution.clone(),
                ),
                logo_type: resolve_option(LOGO_TYPE_OPTIONS, logo_type, defaults.logo_type.clone()),
                name_color: name_color.unwrap_or(defaults.name_color.clone()),
                slogan_color: slogan_color.unwrap_or(defaults.slogan_color.clone()),
                ..defaults
            };
            if let Some(palette) = palette {
                let found = catalog::find_palette(&palette)
                    .ok_or_else(|| anyhow!("Unknown palette: {}", palette))?;
                params.colors = found.colors.iter().map(|c| c.to_string()).collect();
            }

            let mut studio = build_studio(&config);
            studio.dispatch(Action::SetParams(params));
            if !colors.is_empty() {
                studio.dispatch(Action::SetParams(DesignParameters {
                    colors: Vec::new(),
                    ..studio.state().params.clone()
                }));
                for color in colors {
                    studio.dispatch(Action::AddColor(color));
                }
            }
            if full_hd {
                studio.dispatch(Action::SetFullHd);
            }

            if let Err(e) = studio.generate() {
                return Err(report_failure(&studio, e));
            }
            let record = &studio.history().records()[0];
            let params = &studio.state().params;
            println!(
                "{}  {}  {}  {}",
                record.id,
                record.name,
                record.dimensions,
                aspect::ratio_label(params.width, params.height)
            );
            if let Some(dir) = out {
                let path = studio.save_current(&dir)?;
                println!("Saved {}", path.display());
            }
        }

        Commands::Edit {
            id,
            instruction,
            out,
        } => {
            let mut studio = build_studio(&config);
            studio.load_to_workspace(&id)?;
            studio.dispatch(Action::SetEditPrompt(instruction));
            if let Err(e) = studio.edit() {
                return Err(report_failure(&studio, e));
            }
            let record = &studio.history().records()[0];
            println!("{}  {}  {}", record.id, record.name, record.dimensions);
            if let Some(dir) = out {
                let path = studio.save_current(&dir)?;
                println!("Saved {}", path.display());
            }
        }

        Commands::ExportHd { id, out } => {
            let mut studio = build_studio(&config);
            studio.load_to_workspace(&id)?;
            match studio.save_full_hd(&out) {
                Ok(path) => println!("Saved {}", path.display()),
                Err(e) => return Err(report_failure(&studio, e)),
            }
        }

        Commands::Download { id, out } => {
            let studio = build_studio(&config);
            let path = studio.save_record(&id, &out)?;
            println!("Saved {}", path.display());
        }

        Commands::History { command } => {
            let mut studio = build_studio(&config);
            match command {
                HistoryCommands::List => {
                    if studio.history().is_empty() {
                        println!("No saved designs.");
                    }
                    for record in studio.history().records() {
                        let when = chrono::DateTime::from_timestamp_millis(record.timestamp)
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default();
                        println!(
                            "{}  {}  {:>9}  {}  {}",
                            record.id,
                            when,
                            record.dimensions,
                            record.fingerprint(),
                            record.name
                        );
                    }
                }
                HistoryCommands::Delete { id } => {
                    if studio.delete(&id)? {
                        println!("Deleted {}", id);
                    } else {
                        eprintln!("No design with id {}", id);
                    }
                }
            }
        }

        Commands::Catalog => {
            let sections = [
                ("Fonts", FONT_OPTIONS),
                ("Distributions", DISTRIBUTION_OPTIONS),
                ("Logo types", LOGO_TYPE_OPTIONS),
            ];
            for (title, options) in sections {
                println!("{}:", title);
                for option in options {
                    println!("  {:<18} {}  {}", option.id, option.name, option.description);
                }
            }
            println!("Palettes:");
            for palette in COLOR_PALETTES {
                println!("  {:<18} {}  {}", palette.name, palette.colors.join(" "), palette.summary);
            }
        }

        Commands::Key => {
            let mut credentials = EnvCredentials::new(&config, std::io::stdin().lock());
            credentials
                .select_credential()
                .context("Failed to store API key")?;
            if credentials.has_credential() {
                println!("API key configured.");
            } else {
                eprintln!("No API key entered.");
            }
        }
    }

    Ok(())
}
