mod config;
mod test_runner;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use landing::LandingData;
use landing::Language;
use landing::block::BlockKind;
use landing::page::{NavProps, PageContent};
use landing::parser::{self, LoadError, ParseError};
use landing::store::{ContentSource, FsStore, StoreError};
use landing::tenant::Tenant;
use renderer::{Catalog, CopyError, RenderContext, render_history, render_landing, render_page};

use crate::config::{Config, ConfigError};

#[derive(Parser)]
#[command(name = "landing", version, about = "Render tenant landing pages to HTML")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./landing.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Content language (overrides the config file)
    #[arg(long, global = true)]
    lang: Option<Language>,

    /// User portal base URL (overrides config and environment)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a landing page draft
    Render(RenderArgs),

    /// Render a static page
    Page(PageArgs),

    /// Render the change history of a page
    History(HistoryArgs),

    /// Decode a landing or page document and list its blocks
    Check(CheckArgs),

    /// Run .case fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Landing document to render instead of reading the content store
    #[arg(conflicts_with = "slug")]
    file: Option<PathBuf>,

    /// Page slug in the content store
    #[arg(long)]
    slug: Option<String>,

    /// Content store root (overrides the config file)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Tenant document used with FILE
    #[arg(long, requires = "file")]
    tenant: Option<PathBuf>,
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page document to render instead of reading the content store
    #[arg(conflicts_with = "slug", requires = "tenant")]
    file: Option<PathBuf>,

    /// Page slug in the content store
    #[arg(long, required_unless_present = "file")]
    slug: Option<String>,

    /// Content store root (overrides the config file)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Tenant document used with FILE
    #[arg(long, requires = "file")]
    tenant: Option<PathBuf>,

    /// Navigation descriptor
    #[arg(long)]
    nav: Option<PathBuf>,
}

#[derive(clap::Args)]
struct HistoryArgs {
    /// Page slug in the content store
    #[arg(long, default_value = "home")]
    slug: String,

    /// Content store root (overrides the config file)
    #[arg(long)]
    dir: Option<PathBuf>,
}

#[derive(clap::Args)]
struct CheckArgs {
    /// Landing or page JSON document
    file: PathBuf,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .case file or directory containing them
    path: String,

    /// Run only cases in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Copy(#[from] CopyError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Settings shared by every command once config, environment and flags are merged.
struct Settings {
    config: Config,
    catalog: Catalog,
}

impl Settings {
    fn resolve(cli: &Cli) -> Result<Settings, CliError> {
        let mut config = Config::load(cli.config.as_deref())?;
        if let Some(lang) = cli.lang {
            config.language = Some(lang);
        }
        if let Some(url) = &cli.base_url {
            config.user_page_base_url = Some(url.clone());
        }
        let catalog = config.catalog()?;
        Ok(Settings { config, catalog })
    }

    fn store(&self, dir: Option<&Path>) -> FsStore {
        FsStore::new(dir.map(Path::to_path_buf).unwrap_or_else(|| self.config.content_dir()))
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(error) => {
            report(&error, color_choice);
            process::exit(1);
        }
    };

    let result = match &cli.command {
        Command::Render(args) => do_render(&settings, args),
        Command::Page(args) => do_page(&settings, args),
        Command::History(args) => do_history(&settings, args),
        Command::Check(args) => do_check(args, color_choice),
        Command::Test(args) => {
            let path = Path::new(&args.path);
            if args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_cases(path, cli.no_color, &args.category, &settings.catalog);
            process::exit(exit_code);
        }
    };

    if let Err(error) = result {
        report(&error, color_choice);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn do_render(settings: &Settings, args: &RenderArgs) -> Result<(), CliError> {
    let language = settings.config.language();
    let (data, tenant, slug): (LandingData, Option<Tenant>, String) = match &args.file {
        Some(file) => {
            let tenant = args.tenant.as_deref().map(parser::load_file).transpose()?;
            (parser::load_file(file)?, tenant, "home".to_string())
        }
        None => {
            let store = settings.store(args.dir.as_deref());
            let slug = args.slug.clone().unwrap_or_else(|| "home".to_string());
            let tenant = match store.tenant() {
                Ok(tenant) => Some(tenant),
                Err(StoreError::NotFound(path)) => {
                    warn!(path = %path.display(), "no tenant in content store; rendering unscoped");
                    None
                }
                Err(error) => return Err(error.into()),
            };
            (store.draft_landing(&slug, language)?, tenant, slug)
        }
    };

    let links = settings.config.links();
    let ctx = RenderContext::new(&links, &settings.catalog)
        .with_language(language)
        .with_slug(&slug);
    println!("{}", render_landing(&ctx, tenant.as_ref(), &data));
    Ok(())
}

fn do_page(settings: &Settings, args: &PageArgs) -> Result<(), CliError> {
    let (page, tenant): (PageContent, Tenant) = match (&args.file, &args.tenant) {
        (Some(file), Some(tenant)) => (parser::load_file(file)?, parser::load_file(tenant)?),
        _ => {
            let store = settings.store(args.dir.as_deref());
            let slug = args.slug.as_deref().unwrap_or("home");
            (store.page_content(slug)?, store.tenant()?)
        }
    };
    let nav: Option<NavProps> = args.nav.as_deref().map(parser::load_file).transpose()?;

    let links = settings.config.links();
    let ctx = RenderContext::new(&links, &settings.catalog).with_language(settings.config.language());
    println!("{}", render_page(&ctx, &tenant, nav.as_ref(), &page));
    Ok(())
}

fn do_history(settings: &Settings, args: &HistoryArgs) -> Result<(), CliError> {
    let store = settings.store(args.dir.as_deref());
    let events = store.audit_events(&args.slug)?;

    let links = settings.config.links();
    let ctx = RenderContext::new(&links, &settings.catalog)
        .with_language(settings.config.language())
        .with_slug(&args.slug);
    println!("{}", render_history(&ctx, &events));
    Ok(())
}

fn do_check(args: &CheckArgs, color_choice: ColorChoice) -> Result<(), CliError> {
    let source = std::fs::read_to_string(&args.file).map_err(|source| LoadError::Io {
        path: args.file.clone(),
        source,
    })?;
    let mut files = SimpleFiles::new();
    let file_id = files.add(args.file.display().to_string(), source.clone());
    let parser = parser::Parser::new(source, file_id);
    let decode_failed = |error: ParseError| LoadError::Parse {
        path: args.file.clone(),
        text: parser.source().to_string(),
        error,
    };

    // Page documents are recognised by their `layout` key.
    let is_page = serde_json::from_str::<serde_json::Value>(parser.source())
        .map(|value| value.get("layout").is_some())
        .unwrap_or(false);

    if is_page {
        let page = parser.parse_page().map_err(decode_failed)?;
        println!("page  layout={}  title={:?}", page.layout, page.title);
        println!(
            "      {} section(s), {} card(s), {} bullet(s)",
            page.sections.len(),
            page.cards.len(),
            page.bullets.len()
        );
        eprintln!("ok: {} decoded successfully", args.file.display());
        return Ok(());
    }

    let data = parser.parse_landing().map_err(decode_failed)?;
    let warnings = parser.lint_landing(&data);
    let diagnostics: Vec<_> = warnings.iter().map(ParseError::to_diagnostic).collect();
    emit(&files, &diagnostics, color_choice);

    for block in &data.blocks {
        let marker = match &block.kind {
            BlockKind::Unknown(_) => "  (not rendered)",
            _ => "",
        };
        println!(
            "{:<14} {:<14} {}{}",
            renderer::resolve_anchor(block),
            block.kind.as_str(),
            block.id,
            marker
        );
    }
    eprintln!(
        "ok: {} decoded successfully ({} block(s), {} warning(s))",
        args.file.display(),
        data.blocks.len(),
        warnings.len()
    );
    Ok(())
}

fn report(error: &CliError, color_choice: ColorChoice) {
    let load = match error {
        CliError::Load(load) | CliError::Store(StoreError::Load(load)) => Some(load),
        _ => None,
    };
    if let Some(LoadError::Parse { path, text, error }) = load {
        let mut files = SimpleFiles::new();
        let file_id = files.add(path.display().to_string(), text.clone());
        let mut diagnostic = error.clone();
        diagnostic.file_id = file_id;
        emit(&files, &[diagnostic.to_diagnostic()], color_choice);
        return;
    }
    eprintln!("error: {}", error);
}

fn emit(files: &SimpleFiles<String, String>, diagnostics: &[Diagnostic<usize>], color_choice: ColorChoice) {
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();
    for diagnostic in diagnostics {
        let _ = term::emit_to_write_style(&mut writer.lock(), &config, files, diagnostic);
    }
}
