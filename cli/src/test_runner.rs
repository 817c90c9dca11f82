use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use landing::document::Node;
use landing::page::{NavProps, PageContent};
use landing::parser::Parser;
use landing::tenant::Tenant;
use landing::{LandingData, Language};
use renderer::{Catalog, LinkConfig, RenderContext, render_blocks, render_page};
use serde::Deserialize;
use tracing::warn;

const CASE_EXTENSION: &str = ".case";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Document {
    #[default]
    Landing,
    Page,
}

#[derive(Debug, Deserialize)]
pub struct CaseTenant {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Human-readable case description.
    #[serde(default)]
    pub description: Option<String>,

    /// What the JSON body decodes as. Defaults to a landing document.
    #[serde(default)]
    pub document: Document,

    /// Tenant in scope while rendering. Required for page cases.
    #[serde(default)]
    pub tenant: Option<CaseTenant>,

    /// Navigation descriptor passed to the page renderer.
    #[serde(default)]
    pub nav: Option<NavProps>,

    #[serde(default)]
    pub user_page_base_url: Option<String>,

    #[serde(default)]
    pub language: Language,

    /// Page slug forwarded to lead forms.
    #[serde(default = "default_slug")]
    pub slug: String,

    /// Number of rendered fragments (landing cases only).
    #[serde(default)]
    pub expect_fragments: Option<usize>,

    /// Root ids of the rendered fragments, in order (landing cases only).
    #[serde(default)]
    pub expect_anchors: Option<Vec<String>>,

    /// Substrings that must appear in the rendered HTML.
    #[serde(default)]
    pub expect_contains: Vec<String>,

    /// Substrings that must not appear in the rendered HTML.
    #[serde(default)]
    pub expect_absent: Vec<String>,

    /// If true, the case expects the body to fail decoding.
    #[serde(default)]
    pub expect_decode_error: bool,
}

fn default_slug() -> String {
    "home".to_string()
}

/// Parse a `.case` file into its TOML config and JSON body.
fn parse_case_file(content: &str) -> Result<(CaseConfig, &str), String> {
    let content = content.trim_start_matches('\u{feff}');

    if !content.starts_with("---") {
        return Err("missing opening --- frontmatter delimiter".into());
    }

    let after_open = &content[3..];
    let after_open = after_open
        .strip_prefix('\n')
        .or_else(|| after_open.strip_prefix("\r\n"))
        .unwrap_or(after_open);

    let close_pos = after_open
        .find("\n---")
        .ok_or("missing closing --- frontmatter delimiter")?;

    let toml_str = after_open[..close_pos].trim_end_matches('\r');
    let body = &after_open[close_pos + 4..];

    let config: CaseConfig =
        toml::from_str(toml_str).map_err(|e| format!("TOML parse error: {}", e))?;

    Ok((config, body))
}

pub enum CaseOutcome {
    Pass,
    Fail(String),
}

pub struct CaseResult {
    pub path: PathBuf,
    pub description: Option<String>,
    pub outcome: CaseOutcome,
}

/// What a case body rendered to.
struct Rendered {
    fragments: Option<Vec<Node>>,
    html: String,
}

fn run_single_case(path: &Path, catalog: &Catalog) -> CaseResult {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            return CaseResult {
                path: path.to_path_buf(),
                description: None,
                outcome: CaseOutcome::Fail(format!("cannot read file: {}", e)),
            };
        }
    };

    let (config, body) = match parse_case_file(&content) {
        Ok(pair) => pair,
        Err(e) => {
            return CaseResult {
                path: path.to_path_buf(),
                description: None,
                outcome: CaseOutcome::Fail(format!("frontmatter error: {}", e)),
            };
        }
    };

    let description = config.description.clone();
    let outcome = match evaluate(&config, body, catalog) {
        Ok(()) => CaseOutcome::Pass,
        Err(reason) => CaseOutcome::Fail(reason),
    };
    CaseResult {
        path: path.to_path_buf(),
        description,
        outcome,
    }
}

fn evaluate(config: &CaseConfig, body: &str, catalog: &Catalog) -> Result<(), String> {
    let links = LinkConfig::new(config.user_page_base_url.clone());
    let ctx = RenderContext::new(&links, catalog)
        .with_language(config.language)
        .with_slug(&config.slug);
    let tenant = config
        .tenant
        .as_ref()
        .map(|t| Tenant::new(t.id.as_str(), t.slug.as_str(), t.name.as_str()));
    let parser = Parser::new(body.to_string(), 0);

    let decoded = match config.document {
        Document::Landing => parser.parse_landing().map(|data: LandingData| {
            let fragments = render_blocks(&ctx, tenant.as_ref(), &data.blocks);
            let html = fragments.iter().map(Node::to_string).collect();
            Rendered {
                fragments: Some(fragments),
                html,
            }
        }),
        Document::Page => {
            let tenant = tenant
                .as_ref()
                .ok_or("page cases need a [tenant] table")?;
            parser.parse_page().map(|page: PageContent| Rendered {
                fragments: None,
                html: render_page(&ctx, tenant, config.nav.as_ref(), &page).to_string(),
            })
        }
    };

    if config.expect_decode_error {
        return match decoded {
            Err(_) => Ok(()),
            Ok(_) => Err("expected decode error, but decoding succeeded".into()),
        };
    }
    let rendered = decoded.map_err(|e| format!("unexpected decode error: {}", e))?;

    check_fragments(config, rendered.fragments.as_deref())?;

    for needle in &config.expect_contains {
        if !rendered.html.contains(needle.as_str()) {
            return Err(format!(
                "expected output to contain \"{}\"\n  actual: {}",
                needle, rendered.html
            ));
        }
    }
    for needle in &config.expect_absent {
        if rendered.html.contains(needle.as_str()) {
            return Err(format!("expected output not to contain \"{}\"", needle));
        }
    }
    Ok(())
}

fn check_fragments(config: &CaseConfig, fragments: Option<&[Node]>) -> Result<(), String> {
    if config.expect_fragments.is_none() && config.expect_anchors.is_none() {
        return Ok(());
    }
    let fragments =
        fragments.ok_or("expect_fragments and expect_anchors apply to landing cases only")?;

    if let Some(expected) = config.expect_fragments {
        if fragments.len() != expected {
            return Err(format!(
                "expected {} fragment(s), got {}",
                expected,
                fragments.len()
            ));
        }
    }
    if let Some(expected) = &config.expect_anchors {
        let actual: Vec<&str> = fragments
            .iter()
            .map(|node| {
                node.as_element()
                    .and_then(|e| e.get_attr("id"))
                    .unwrap_or("")
            })
            .collect();
        if actual != *expected {
            return Err(format!(
                "anchor mismatch\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            ));
        }
    }
    Ok(())
}

/// `.case` files grouped by the folder they sit in, relative to `root`.
/// Files directly under `root` land in the unnamed group.
fn discover_categorized(root: &Path) -> BTreeMap<String, Vec<PathBuf>> {
    let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|entry| entry.path()) {
            if path.is_dir() {
                pending.push(path);
            } else if path.to_string_lossy().ends_with(CASE_EXTENSION) {
                let group = dir
                    .strip_prefix(root)
                    .map(|rel| rel.to_string_lossy().replace('\\', "/"))
                    .unwrap_or_default();
                groups.entry(group).or_default().push(path);
            }
        }
    }
    groups.values_mut().for_each(|files| files.sort());
    groups
}

fn group_name(group: &str) -> &str {
    if group.is_empty() { "(root)" } else { group }
}

/// Print the fixture folders under `path` with their case counts.
pub fn list_categories(path: &Path) {
    if path.is_file() {
        eprintln!("{} is a single case file", path.display());
        return;
    }
    let groups = discover_categorized(path);
    if groups.is_empty() {
        eprintln!("no .case files found in {}", path.display());
        return;
    }
    for (group, files) in &groups {
        eprintln!("{:<24} {} case(s)", group_name(group), files.len());
    }
}

/// ANSI styling for runner output, switched off by `--no-color`.
#[derive(Clone, Copy)]
struct Palette {
    color: bool,
}

impl Palette {
    const GREEN: &'static str = "32";
    const RED: &'static str = "31";
    const BOLD: &'static str = "1";

    fn paint(self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

/// Pass count and failed cases collected over one run.
#[derive(Default)]
struct Tally {
    passed: usize,
    failures: Vec<CaseResult>,
}

impl Tally {
    fn record(&mut self, result: CaseResult, palette: Palette) {
        let name = result.description.clone().unwrap_or_else(|| {
            result
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        });
        match &result.outcome {
            CaseOutcome::Pass => {
                self.passed += 1;
                eprintln!("  {}  {}", palette.paint(Palette::GREEN, "PASS"), name);
            }
            CaseOutcome::Fail(_) => {
                eprintln!("  {}  {}", palette.paint(Palette::RED, "FAIL"), name);
                self.failures.push(result);
            }
        }
    }

    /// Print failure details and the closing line; returns the exit code.
    fn finish(self, palette: Palette) -> i32 {
        for failure in &self.failures {
            if let CaseOutcome::Fail(reason) = &failure.outcome {
                eprintln!("\n{}", palette.paint(Palette::BOLD, &failure.path.display().to_string()));
                reason.lines().for_each(|line| eprintln!("    {}", line));
            }
        }
        let failed = self.failures.len();
        let verdict = if failed == 0 {
            palette.paint(Palette::GREEN, "ok")
        } else {
            palette.paint(Palette::RED, "FAILED")
        };
        eprintln!("\n{}: {} passed, {} failed", verdict, self.passed, failed);
        i32::from(failed > 0)
    }
}

/// Run every `.case` file under `path`, or `path` itself when it is a file,
/// restricted to `categories` when any are given. Exit code 1 on any failure.
pub fn run_cases(path: &Path, no_color: bool, categories: &[String], catalog: &Catalog) -> i32 {
    let palette = Palette { color: !no_color };
    let single = path.is_file();
    let groups = if single {
        BTreeMap::from([(String::new(), vec![path.to_path_buf()])])
    } else {
        select_categories(discover_categorized(path), categories)
    };
    if groups.is_empty() {
        eprintln!("no matching .case files under {}", path.display());
        return 1;
    }

    let mut tally = Tally::default();
    for (group, files) in groups {
        if !single {
            eprintln!("\n{}", palette.paint(Palette::BOLD, group_name(&group)));
        }
        for file in files {
            tally.record(run_single_case(&file, catalog), palette);
        }
    }
    tally.finish(palette)
}

/// Keep the groups named in `requested`, including their nested folders.
/// An empty request keeps everything.
fn select_categories(
    groups: BTreeMap<String, Vec<PathBuf>>,
    requested: &[String],
) -> BTreeMap<String, Vec<PathBuf>> {
    if requested.is_empty() {
        return groups;
    }
    let wanted: Vec<&str> = requested.iter().map(|r| r.trim_matches('/')).collect();
    for name in &wanted {
        if !groups.keys().any(|group| in_group(group, name)) {
            warn!(category = %name, "no fixture folder with this name");
        }
    }
    groups
        .into_iter()
        .filter(|(group, _)| wanted.iter().any(|name| in_group(group, name)))
        .collect()
}

fn in_group(group: &str, name: &str) -> bool {
    group == name
        || group
            .strip_prefix(name)
            .is_some_and(|rest| rest.starts_with('/'))
}
