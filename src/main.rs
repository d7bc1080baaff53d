// SPDX-License-Identifier: MIT
//
// tonekit — derive a complete CSS color theme from a single seed color.
//
// This is the binary that wires the two library crates together:
//
//   tone-color → RGB/HSL values, conversion, hex codec
//   tone-theme → adjustment, scheme, tonal ramp, CSS variables, extraction
//
// A run is a straight pipeline:
//
//   args → seed (text or image) → ThemeConfig → Theme::derive → stdout
//
// Usage:
//
//   tonekit [--config FILE] [--json] [--no-adjust] [--only SECTIONS] <SEED>
//   tonekit [OPTIONS] --image FILE
//
// SEED is `#rrggbb`, `#rgb`, `rrggbb`, `rgb(r, g, b)` or `r,g,b`.
// SECTIONS is a comma list of `light`, `dark` and `scheme`.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::LazyLock;

use bitflags::bitflags;
use regex::Regex;
use thiserror::Error;
use tone_color::{ColorError, Rgb, parse_hex};
use tone_theme::{ColorScheme, ConfigError, ExtractError, HistogramExtractor, SeedExtractor, Theme, ThemeConfig};

const USAGE: &str = "usage: tonekit [--config FILE] [--json] [--no-adjust] [--only light,dark,scheme] <SEED | --image FILE>";

/// `rgb(r, g, b)` or bare `r,g,b`, channels as decimal numbers.
static RGB_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(rgb\s*\(\s*)?(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)\s*(\))?\s*$",
    )
});

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad seed pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(format!("{}\n{USAGE}", msg.into()))
}

// ─── Sections ───────────────────────────────────────────────────────────────

bitflags! {
    /// Which parts of the theme to print.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Sections: u8 {
        const LIGHT  = 0b001;
        const DARK   = 0b010;
        const SCHEME = 0b100;
    }
}

impl Sections {
    /// Parse a comma list such as `light,dark`.
    fn parse(list: &str) -> Result<Self, CliError> {
        let mut sections = Self::empty();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            sections |= match name {
                "light" => Self::LIGHT,
                "dark" => Self::DARK,
                "scheme" => Self::SCHEME,
                other => return Err(usage(format!("unknown section '{other}'"))),
            };
        }
        if sections.is_empty() {
            return Err(usage("--only needs at least one section"));
        }
        Ok(sections)
    }
}

// ─── Arguments ──────────────────────────────────────────────────────────────

/// Where the seed color comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SeedSource {
    Text(String),
    Image(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    config: Option<PathBuf>,
    json: bool,
    no_adjust: bool,
    sections: Sections,
    seed: SeedSource,
}

impl Args {
    /// Parse everything after the program name.
    fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut config = None;
        let mut json = false;
        let mut no_adjust = false;
        let mut sections = Sections::all();
        let mut seed = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let mut value = |flag: &str| {
                iter.next().cloned().ok_or_else(|| usage(format!("{flag} needs a value")))
            };

            let source = match arg.as_str() {
                "--config" | "-c" => {
                    config = Some(PathBuf::from(value(arg)?));
                    continue;
                }
                "--json" => {
                    json = true;
                    continue;
                }
                "--no-adjust" => {
                    no_adjust = true;
                    continue;
                }
                "--only" => {
                    sections = Sections::parse(&value(arg)?)?;
                    continue;
                }
                "--image" | "-i" => SeedSource::Image(PathBuf::from(value(arg)?)),
                flag if flag.starts_with("--") => {
                    return Err(usage(format!("unknown option '{flag}'")));
                }
                text => SeedSource::Text(text.to_owned()),
            };

            if seed.replace(source).is_some() {
                return Err(usage("only one seed may be given"));
            }
        }

        let seed = seed.ok_or_else(|| usage("missing seed color"))?;
        Ok(Self { config, json, no_adjust, sections, seed })
    }
}

// ─── Seed parsing ───────────────────────────────────────────────────────────

/// Parse a textual seed: hex, `rgb(r, g, b)`, or `r,g,b`.
fn parse_seed(text: &str) -> Result<Rgb, CliError> {
    let pattern = RGB_PATTERN.as_ref().map_err(Clone::clone)?;

    let Some(caps) = pattern.captures(text) else {
        return Ok(parse_hex(text)?);
    };

    // `rgb(` and `)` come as a pair or not at all.
    if caps.get(1).is_some() != caps.get(5).is_some() {
        return Err(ColorError::InvalidHex(text.to_owned()).into());
    }

    let channel = |i: usize| caps[i].parse::<f64>().unwrap_or(f64::NAN);
    Ok(Rgb::from_channels(channel(2), channel(3), channel(4))?)
}

fn resolve_seed(source: &SeedSource) -> Result<Rgb, CliError> {
    match source {
        SeedSource::Text(text) => parse_seed(text),
        SeedSource::Image(path) => {
            let bytes = fs::read(path)?;
            let seed = HistogramExtractor::default().extract_color(&bytes)?;
            log::debug!("extracted seed {seed} from {}", path.display());
            Ok(seed)
        }
    }
}

// ─── Output ─────────────────────────────────────────────────────────────────

fn scheme_comment(scheme: &ColorScheme) -> String {
    let lines: String = [
        ("primary", scheme.primary),
        ("complement", scheme.complement),
        ("dark", scheme.dark),
        ("light", scheme.light),
    ]
    .iter()
    .map(|(name, color)| format!(" *   {name:<10} {}\n", color.to_css_hex()))
    .collect();
    format!("/* scheme\n{lines} */\n")
}

fn render_css(theme: &Theme, config: &ThemeConfig, sections: Sections) -> String {
    let vars = &theme.full.css_variables;
    let mut blocks = Vec::new();
    if sections.contains(Sections::SCHEME) {
        blocks.push(scheme_comment(&theme.scheme));
    }
    if sections.contains(Sections::LIGHT) {
        blocks.push(vars.light_css(&config.selector_light));
    }
    if sections.contains(Sections::DARK) {
        blocks.push(vars.dark_css(&config.selector_dark));
    }
    blocks.join("\n")
}

fn render_json(theme: &Theme, sections: Sections) -> Result<String, CliError> {
    if sections == Sections::all() {
        return Ok(serde_json::to_string_pretty(theme)?);
    }

    let vars = &theme.full.css_variables;
    let mut map = serde_json::Map::new();
    if sections.contains(Sections::SCHEME) {
        map.insert("scheme".into(), serde_json::to_value(theme.scheme)?);
    }
    if sections.contains(Sections::LIGHT) {
        map.insert("light".into(), serde_json::to_value(vars.light())?);
    }
    if sections.contains(Sections::DARK) {
        map.insert("dark".into(), serde_json::to_value(vars.dark())?);
    }
    Ok(serde_json::to_string_pretty(&map)?)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<String, CliError> {
    let mut config = match &args.config {
        Some(path) => ThemeConfig::load(path)?,
        None => ThemeConfig::default(),
    };
    if args.no_adjust {
        config.adjust = false;
    }

    let seed = resolve_seed(&args.seed)?;
    let theme = Theme::derive(seed, &config);

    if args.json {
        render_json(&theme, args.sections)
    } else {
        Ok(render_css(&theme, &config, args.sections))
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let argv: Vec<String> = env::args().skip(1).collect();

    if argv.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE}");
        return;
    }

    let result = Args::parse(&argv).and_then(|args| run(&args));
    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("tonekit: {e}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
