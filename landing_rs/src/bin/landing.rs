//! # landing
//!
//! Command line front end for the landing page builder.
//!
//! ## Usage
//!
//! ```bash
//! # Render the compiled-in page
//! landing render --out index.html
//!
//! # Render with the editor sidebar, one panel open
//! landing render --with-editor --open faqs --out editor.html
//!
//! # Edit copy stored in a JSON file
//! landing edit --data page.json --section faqs --field headline --value "Dudas" --out page.json
//!
//! # Ask Gemini to rewrite a section
//! GEMINI_API_KEY=... landing refine --data page.json --section above_the_fold --feedback "Más corto"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use landing::config::{DEFAULT_CONFIG_FILE, LandingConfig};
use landing::defaults::default_landing_page;
use landing::editor::Editor;
use landing::export::to_markdown;
use landing::refine::GeminiRefiner;
use page_leptos::sections::SectionKind;
use page_leptos::types::{ContentField, EditorSnapshot, LandingPageData};
use page_leptos::{RenderOptions, render_page};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "landing")]
#[command(about = "Render, edit and refine the workshop landing page")]
#[command(version)]
struct Cli {
    /// Config file (default: ./landing.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page to HTML
    Render {
        /// Page data as JSON (default: the compiled-in page)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Include the editor sidebar
        #[arg(long)]
        with_editor: bool,
        /// Section whose editor panel starts expanded
        #[arg(long, requires = "with_editor")]
        open: Option<String>,
    },
    /// List page slots and whether each one is populated
    Sections {
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the page data as JSON or markdown
    Export {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
    /// Change one field or bullet of a section
    Edit {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Section id (e.g. above_the_fold)
        #[arg(long)]
        section: String,
        /// Text field to set (camelCase key, e.g. headline, cta, painPoint)
        #[arg(long, conflicts_with = "bullet", required_unless_present = "bullet")]
        field: Option<ContentField>,
        /// Bullet index to set (0-based)
        #[arg(long)]
        bullet: Option<usize>,
        /// New text
        #[arg(long)]
        value: String,
    },
    /// Rewrite a section with Gemini
    Refine {
        #[arg(long)]
        data: Option<PathBuf>,
        #[arg(long)]
        out: Option<PathBuf>,
        /// Section id (e.g. above_the_fold)
        #[arg(long)]
        section: String,
        /// What to change (default: make it more persuasive and clear)
        #[arg(long)]
        feedback: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Json,
    Markdown,
}

// ============================================================================
// Helpers
// ============================================================================

fn load_config(path: Option<&Path>) -> Result<LandingConfig> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let config = LandingConfig::load(path)?;
    Ok(config.with_env())
}

fn load_data(path: Option<&Path>) -> Result<LandingPageData> {
    let Some(path) = path else {
        return Ok(default_landing_page());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read page data {}", path.display()))?;
    let data: LandingPageData = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse page data {}", path.display()))?;
    data.validate()
        .with_context(|| format!("invalid page data {}", path.display()))?;
    info!(
        "Loaded {} sections from {}",
        data.sections.len(),
        path.display()
    );
    Ok(data)
}

fn emit(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", contents.len(), path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}

fn to_json(data: &LandingPageData) -> Result<String> {
    serde_json::to_string_pretty(data).context("failed to serialize page data")
}

// ============================================================================
// Commands
// ============================================================================

fn render(
    config: &LandingConfig,
    data: Option<&Path>,
    out: Option<&Path>,
    with_editor: bool,
    open: Option<String>,
) -> Result<()> {
    let data = load_data(data)?;
    if let Some(id) = &open
        && data.section(id).is_none()
    {
        bail!("unknown section '{}'", id);
    }

    let editor = with_editor.then(|| EditorSnapshot {
        open_section: open,
        ..Default::default()
    });
    let html = render_page(
        &data,
        &RenderOptions {
            footer_year: config.page.footer_year,
            editor,
        },
    );
    emit(out, &html)
}

fn sections(data: Option<&Path>) -> Result<()> {
    let data = load_data(data)?;
    for kind in SectionKind::ALL {
        match data.section(kind.id()) {
            Some(section) => println!("{:<20} {}", kind.id(), section.name),
            None => println!("{:<20} (empty)", kind.id()),
        }
    }
    let unknown: Vec<&str> = data
        .sections
        .iter()
        .filter(|s| s.id.parse::<SectionKind>().is_err())
        .map(|s| s.id.as_str())
        .collect();
    if !unknown.is_empty() {
        println!("not rendered: {}", unknown.join(", "));
    }
    Ok(())
}

fn export(data: Option<&Path>, format: ExportFormat) -> Result<()> {
    let data = load_data(data)?;
    let rendered = match format {
        ExportFormat::Json => to_json(&data)?,
        ExportFormat::Markdown => to_markdown(&data),
    };
    emit(None, &rendered)
}

fn edit(
    data: Option<&Path>,
    out: Option<&Path>,
    section: &str,
    field: Option<ContentField>,
    bullet: Option<usize>,
    value: String,
) -> Result<()> {
    let mut editor = Editor::new(load_data(data)?);
    let count = match editor.data().section(section) {
        Some(copy) => copy.content.bullets.as_ref().map_or(0, Vec::len),
        None => bail!("unknown section '{}'", section),
    };

    let changed = match (field, bullet) {
        (Some(field), _) => editor.set_field(section, field, value),
        (None, Some(index)) => {
            if index >= count {
                bail!(
                    "section '{}' has {} bullets, index {} is out of range",
                    section,
                    count,
                    index
                );
            }
            editor.set_bullet(section, index, value)
        }
        (None, None) => bail!("pass --field or --bullet"),
    };
    if !changed {
        bail!("section '{}' was not changed", section);
    }

    emit(out, &to_json(editor.data())?)
}

async fn refine(
    config: &LandingConfig,
    data: Option<&Path>,
    out: Option<&Path>,
    section: &str,
    feedback: Option<String>,
) -> Result<()> {
    let refiner = GeminiRefiner::new(&config.gemini)?;
    let mut editor = Editor::new(load_data(data)?);
    if let Some(feedback) = feedback {
        editor.set_feedback(section, feedback);
    }

    let before = editor.data().clone();
    let replaced = editor.refine(&refiner, section).await?;
    if !replaced || editor.data() == &before {
        bail!("refinement left section '{}' unchanged", section);
    }

    emit(out, &to_json(editor.data())?)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            data,
            out,
            with_editor,
            open,
        } => render(&config, data.as_deref(), out.as_deref(), with_editor, open),
        Command::Sections { data } => sections(data.as_deref()),
        Command::Export { data, format } => export(data.as_deref(), format),
        Command::Edit {
            data,
            out,
            section,
            field,
            bullet,
            value,
        } => edit(data.as_deref(), out.as_deref(), &section, field, bullet, value),
        Command::Refine {
            data,
            out,
            section,
            feedback,
        } => refine(&config, data.as_deref(), out.as_deref(), &section, feedback).await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the rendered output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[landing] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
