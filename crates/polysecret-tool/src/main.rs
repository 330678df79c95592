//! polysecret — split a secret into threshold shares and put it back together
//!
//! # Usage
//!
//! ```bash
//! polysecret split --text "my shared secret"       # 2-of-3 by default
//! polysecret -t 3 -n 5 split 00ff6869               # hex secret, 3-of-5
//! polysecret recover 01-... 03-...
//! polysecret verify 02-... 01-... 03-...
//! ```

mod codec;
mod commands;
mod config;

use anyhow::{Context, Result};
use std::path::PathBuf;

enum Command {
    Split { text: bool, secret: String },
    Recover { shares: Vec<String> },
    Verify { candidate: String, shares: Vec<String> },
}

fn main() -> Result<()> {
    // Parse CLI args (minimal — no clap dependency needed)
    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut threshold: Option<u8> = None;
    let mut total_shares: Option<u8> = None;
    let mut text = false;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args
                    .get(i)
                    .context("--config requires a path argument")?;
                config_path = Some(PathBuf::from(path));
            }
            "--threshold" | "-t" => {
                i += 1;
                threshold = Some(parse_count(args.get(i), "--threshold")?);
            }
            "--shares" | "-n" => {
                i += 1;
                total_shares = Some(parse_count(args.get(i), "--shares")?);
            }
            "--text" => {
                text = true;
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--version" | "-V" => {
                println!("polysecret {}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            other if other.starts_with("--") => {
                anyhow::bail!("Unknown argument: {}", other);
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let command = parse_command(positional, text)?;

    // Load config
    let mut tool_config = match &config_path {
        Some(path) => config::ToolConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => config::ToolConfig::default(),
    };

    // Apply env overrides, then flags
    tool_config
        .apply_env_overrides()
        .context("Invalid environment override")?;
    if let Some(t) = threshold {
        tool_config.sharing.threshold = t;
    }
    if let Some(n) = total_shares {
        tool_config.sharing.total_shares = n;
    }

    // Validate
    tool_config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger
    env_logger::Builder::new()
        .parse_filters(&tool_config.general.log_level)
        .init();

    let layout = tool_config.shamir();
    match command {
        Command::Split { text, secret } => {
            let bytes = if text {
                zeroize::Zeroizing::new(secret.into_bytes())
            } else {
                zeroize::Zeroizing::new(
                    hex::decode(secret.trim()).context("Secret must be hex (or use --text)")?,
                )
            };
            for share in commands::split(&bytes, &layout)? {
                println!("{}", share);
            }
        }
        Command::Recover { shares } => {
            let secret = commands::recover(layout.threshold, &shares)?;
            println!("hex:  {}", hex::encode(secret.as_slice()));
            if let Ok(s) = std::str::from_utf8(&secret) {
                println!("text: {}", s);
            }
        }
        Command::Verify { candidate, shares } => {
            if commands::verify(layout.threshold, &candidate, &shares)? {
                println!("✅ Share is consistent with the recovered secret.");
            } else {
                println!("❌ Share does NOT match the recovered secret.");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn parse_count(value: Option<&String>, flag: &str) -> Result<u8> {
    let value = value.with_context(|| format!("{} requires a number", flag))?;
    match value.parse::<u8>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => anyhow::bail!("{} must be a number in 1..=255, got {:?}", flag, value),
    }
}

fn parse_command(mut positional: Vec<String>, text: bool) -> Result<Command> {
    if positional.is_empty() {
        print_help();
        anyhow::bail!("Missing command");
    }
    let name = positional.remove(0);
    match name.as_str() {
        "split" => {
            anyhow::ensure!(positional.len() == 1, "split takes exactly one SECRET");
            Ok(Command::Split {
                text,
                secret: positional.remove(0),
            })
        }
        "recover" => {
            anyhow::ensure!(!positional.is_empty(), "recover needs at least one SHARE");
            Ok(Command::Recover { shares: positional })
        }
        "verify" => {
            anyhow::ensure!(
                positional.len() >= 2,
                "verify needs a CANDIDATE and at least one SHARE"
            );
            let candidate = positional.remove(0);
            Ok(Command::Verify {
                candidate,
                shares: positional,
            })
        }
        other => anyhow::bail!("Unknown command: {}", other),
    }
}

fn print_help() {
    println!(
        r#"polysecret — threshold secret sharing over GF(256)

USAGE:
    polysecret [OPTIONS] split [--text] <SECRET>
    polysecret [OPTIONS] recover <SHARE>...
    polysecret [OPTIONS] verify <CANDIDATE> <SHARE>...

OPTIONS:
    -c, --config <PATH>     TOML config file
    -t, --threshold <T>     Shares needed to recover (default: 2)
    -n, --shares <N>        Shares emitted by split (default: 3)
    --text                  Treat SECRET as UTF-8 instead of hex
    -h, --help              Show this help message
    -V, --version           Show version

SHARES are written as XX-hexbytes, e.g. 04-b4.

ENVIRONMENT VARIABLES (override config file):
    POLYSECRET_LOG_LEVEL      Log level (error/warn/info/debug/trace)
    POLYSECRET_THRESHOLD      Shares needed to recover
    POLYSECRET_TOTAL_SHARES   Shares emitted by split

EXAMPLES:
    # 3-of-5 split of a hex secret
    polysecret -t 3 -n 5 split 00ff6869

    # Recover, then check a fourth share against the result
    polysecret recover 01-6e3a 02-0b71
    polysecret verify 03-5a8c 01-6e3a 02-0b71
"#
    );
}
