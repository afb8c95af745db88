use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use cv_render::{render, save_timestamped, Locale, RenderConfig, ResumeDocument};
use flexi_logger::Logger;

const DEFAULT_OUT_DIR: &str = ".";

#[derive(Clone, Debug, Default)]
struct Args {
    resume: PathBuf,
    config: Option<PathBuf>,
    out_dir: Option<PathBuf>,
    photo: Option<PathBuf>,
    locale: Option<String>,
}

fn help_text() -> &'static str {
    "usage: cv-render <resume.json> [--config FILE] [--out DIR] [--photo FILE] [--locale CODE]\n\
     \n\
     Renders the résumé to a single PDF page and prints the generated file name.\n\
     Set RUST_LOG to change the log level (default: info)."
}

/// `None` when help was asked for
fn parse_args(args: Vec<String>) -> Result<Option<Args>> {
    let mut parsed = Args::default();
    let mut resume: Option<PathBuf> = None;
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .with_context(|| format!("{flag} needs a value"))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--config" => parsed.config = Some(value("--config")?.into()),
            "--out" => parsed.out_dir = Some(value("--out")?.into()),
            "--photo" => parsed.photo = Some(value("--photo")?.into()),
            "--locale" => parsed.locale = Some(value("--locale")?),
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            path if resume.is_none() => resume = Some(path.into()),
            extra => bail!("unexpected argument {extra}"),
        }
    }

    parsed.resume = resume.context("missing résumé file")?;
    Ok(Some(parsed))
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    let out_dir = args
        .out_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let settings = config.into_settings().context("invalid render configuration")?;

    let raw = std::fs::read_to_string(&args.resume)
        .with_context(|| format!("failed to read {}", args.resume.display()))?;
    let mut resume: ResumeDocument = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a valid résumé", args.resume.display()))?;
    if let Some(code) = &args.locale {
        resume.locale = Locale::from_code(code);
    }
    if args.photo.is_some() {
        resume.photo = args.photo.clone();
    }

    let document = render(&resume, &settings).context("failed to render résumé")?;
    let name = save_timestamped(document, &out_dir)
        .with_context(|| format!("failed to save into {}", out_dir.display()))?;
    println!("{name}");
    Ok(())
}

fn main() -> ExitCode {
    let _logger = match Logger::try_with_env_or_str("info").and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {e}");
            None
        }
    };

    let args = match parse_args(env::args().collect()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{}", help_text());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("{}", help_text());
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
