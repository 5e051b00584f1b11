//! Oris command-line host.
//!
//! Reads text from `--text` or stdin, synthesizes a viseme timeline, and
//! writes the JSON to stdout or `--output`. When `--duration` is not given
//! the speaking-rate estimate stands in for a measured audio length.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use oris_core::{estimate_duration_secs, synthesize, synthesize_smoothed};
use tracing::info;

#[derive(Debug, Default)]
struct Args {
    text: Option<String>,
    duration: Option<f64>,
    smooth: bool,
    pretty: bool,
    output: Option<PathBuf>,
}

const USAGE: &str = "Usage: oris [--text <s>] [--duration <secs>] [--smooth] [--pretty] \\
  [--output <file.json>]

Reads text from stdin when --text is not given.";

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--text" => {
                let Some(v) = it.next() else {
                    return Err("missing value for --text".into());
                };
                args.text = Some(v);
            }
            "--duration" => {
                let Some(v) = it.next() else {
                    return Err("missing value for --duration".into());
                };
                let secs = v
                    .parse::<f64>()
                    .map_err(|_| "invalid value for --duration".to_string())?;
                args.duration = Some(secs);
            }
            "--smooth" => args.smooth = true,
            "--pretty" => args.pretty = true,
            "--output" => {
                let Some(v) = it.next() else {
                    return Err("missing value for --output".into());
                };
                args.output = Some(PathBuf::from(v));
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => {
                return Err(format!("unknown argument: {other}"));
            }
        }
    }

    Ok(args)
}

fn main() -> anyhow::Result<()> {
    // ── Tracing ───────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oris=info".parse().expect("static filter parses")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading text from stdin")?;
            buf
        }
    };

    let duration_secs = args
        .duration
        .unwrap_or_else(|| estimate_duration_secs(&text));

    let timeline = if args.smooth {
        synthesize_smoothed(&text, duration_secs)
    } else {
        synthesize(&text, duration_secs)
    };
    info!(
        cues = timeline.mouth_cues.len(),
        duration_secs, "timeline generated"
    );

    let json = if args.pretty {
        timeline.to_json_pretty()
    } else {
        timeline.to_json()
    }
    .context("serializing timeline")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing timeline to {}", path.display()))?;
            info!(path = %path.display(), "timeline written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
