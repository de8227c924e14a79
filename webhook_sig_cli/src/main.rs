//! `webhook-sig`: sign payloads, normalize URLs and check webhook signatures
//! from the shell.
//!
//! The signing key comes from `--key` or the `WEBHOOK_AUTH_TOKEN` environment
//! variable, which may be seeded from a `.env`-style file via `--env-file`.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;
use webhook_sig::{
    add_port, body_sha256_from_url, build_url, generate_hmac, remove_port, ParsedUrl,
    RequestValidator,
};

const AUTH_TOKEN_ENV: &str = "WEBHOOK_AUTH_TOKEN";

/// Exit code for a request whose signature did not match.
const EXIT_INVALID: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "webhook-sig", version)]
#[command(about = "Sign and verify HMAC-SHA1 webhook requests", long_about = None)]
struct Cli {
    /// Load environment variables (credentials, RUST_LOG) from this file first.
    #[arg(short = 'e', long, global = true, value_name = "PATH")]
    env_file: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the base64 HMAC-SHA1 of CONTENT.
    Sign {
        /// Signing key (defaults to $WEBHOOK_AUTH_TOKEN).
        #[arg(short, long)]
        key: Option<String>,
        content: String,
    },

    /// Rebuild a URL with the protocol's default port appended to its host.
    BuildUrl {
        /// Absolute URL to take apart and rebuild.
        #[arg(required_unless_present = "json")]
        url: Option<String>,
        /// Read the URL components from a JSON object instead.
        #[arg(long, value_name = "FILE", conflicts_with = "url")]
        json: Option<PathBuf>,
    },

    /// Print URL with its port spelled out.
    AddPort { url: String },

    /// Print URL with any explicit port removed.
    RemovePort { url: String },

    /// Print the bodySHA256 query value of URL, if present.
    BodyHash { url: String },

    /// Check SIGNATURE for a request to URL.
    Validate {
        url: String,
        signature: String,
        /// Form-encoded request body.
        #[arg(long, conflicts_with = "body")]
        form: Option<String>,
        /// Raw request body, bound through the bodySHA256 query parameter.
        #[arg(long)]
        body: Option<String>,
        /// Auth token (defaults to $WEBHOOK_AUTH_TOKEN).
        #[arg(short, long)]
        key: Option<String>,
    },
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Print(String),
    Verdict(bool),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn load_env_file(path: &Path) -> Result<()> {
    dotenvy::from_path(path).with_context(|| format!("failed to load {}", path.display()))
}

fn resolve_key(key: Option<String>) -> Result<String> {
    key.or_else(|| env::var(AUTH_TOKEN_ENV).ok())
        .ok_or_else(|| anyhow!("no key given; pass --key or set {AUTH_TOKEN_ENV}"))
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).with_context(|| format!("invalid URL `{url}`"))
}

fn run(command: Command) -> Result<Outcome> {
    match command {
        Command::Sign { key, content } => {
            let key = resolve_key(key)?;
            Ok(Outcome::Print(generate_hmac(key, &content)?))
        }
        Command::BuildUrl { url, json } => {
            let parsed = match (url, json) {
                (_, Some(path)) => {
                    let data = fs::read_to_string(&path)
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    ParsedUrl::from_json(&data)
                        .with_context(|| format!("failed to parse {}", path.display()))?
                }
                (Some(url), None) => ParsedUrl::from(&parse_url(&url)?),
                (None, None) => return Err(anyhow!("a URL or --json FILE is required")),
            };
            Ok(Outcome::Print(build_url(&parsed)))
        }
        Command::AddPort { url } => Ok(Outcome::Print(add_port(&parse_url(&url)?)?)),
        Command::RemovePort { url } => Ok(Outcome::Print(remove_port(&parse_url(&url)?)?)),
        Command::BodyHash { url } => {
            let hash = body_sha256_from_url(&url)?
                .ok_or_else(|| anyhow!("no bodySHA256 parameter on `{url}`"))?;
            Ok(Outcome::Print(hash))
        }
        Command::Validate {
            url,
            signature,
            form,
            body,
            key,
        } => {
            let validator = RequestValidator::new(resolve_key(key)?);
            let valid = match (form, body) {
                (Some(form), _) => validator.validate_form(&url, &form, &signature)?,
                (None, Some(body)) => validator.validate_body(&url, body.as_bytes(), &signature)?,
                (None, None) => validator.validate::<&str, &str>(&url, &[], &signature)?,
            };
            Ok(Outcome::Verdict(valid))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Before logging, so RUST_LOG from the file applies.
    if let Some(path) = &cli.env_file {
        if let Err(err) = load_env_file(path) {
            eprintln!("webhook-sig error: {err:#}");
            process::exit(1);
        }
    }
    init_logging(cli.verbose);

    if let Some(path) = &cli.env_file {
        tracing::debug!("loaded environment from {}", path.display());
    }

    match run(cli.command) {
        Ok(Outcome::Print(text)) => println!("{text}"),
        Ok(Outcome::Verdict(true)) => println!("valid"),
        Ok(Outcome::Verdict(false)) => {
            println!("invalid");
            process::exit(EXIT_INVALID);
        }
        Err(err) => {
            eprintln!("webhook-sig error: {err:#}");
            process::exit(1);
        }
    }
}
