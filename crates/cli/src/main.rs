// File: crates/cli/src/main.rs
// Summary: Fetches the cyclist dataset and writes the doping scatter plot as SVG, HTML or PNG.

mod fetch;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use log::{error, info, warn};
use scatter_core::svg::{render_error_svg, wrap_html};
use scatter_core::types::{DEFAULT_DATA_URL, HEIGHT, PADDING, WIDTH};
use scatter_core::{theme, RenderOptions, ScatterChart, Theme};

use crate::fetch::Source;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Svg,
    Html,
    Png,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    fn preset(self) -> Theme {
        match self {
            Self::Light => theme::find("light"),
            Self::Dark => theme::find("dark"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the cyclist doping scatter plot", long_about = None)]
struct Cli {
    /// Dataset URL (JSON array of ride records)
    #[arg(long, env = "DOPING_SCATTER_URL")]
    url: Option<String>,

    /// Local dataset (.json or .csv); takes precedence over --url
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output document path
    #[arg(short, long, default_value = "target/out/doping_scatter.svg", value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Output format (defaults to the output extension, then svg)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Theme preset
    #[arg(long, value_enum, default_value_t = ThemeName::Light)]
    theme: ThemeName,

    /// Viewbox width
    #[arg(long, default_value_t = WIDTH)]
    width: i32,

    /// Viewbox height
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,

    /// Padding around the plot area
    #[arg(long, default_value_t = PADDING)]
    padding: u32,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Debug logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let format = resolve_format(cli.format, &cli.output);
    let opts = RenderOptions {
        width: cli.width,
        height: cli.height,
        padding: cli.padding,
        theme: cli.theme.preset(),
        ..RenderOptions::default()
    };

    let source = Source::select(cli.input.clone(), cli.url.clone(), DEFAULT_DATA_URL);
    let loaded = fetch::load(&source, Duration::from_secs(cli.timeout_secs))
        .and_then(|ds| ds.require_records().map_err(anyhow::Error::from));
    let dataset = match loaded {
        Ok(ds) => ds,
        Err(err) => {
            error!("{err:#}");
            let message = format!("Failed to load dataset: {err}");
            if let Err(write_err) = write_error_state(&cli.output, format, &opts, &message) {
                error!("could not write error state: {write_err:#}");
            }
            return Err(err);
        }
    };
    if !dataset.skipped.is_empty() {
        warn!("{} malformed record(s) were skipped", dataset.skipped.len());
    }

    let chart = ScatterChart::from_dataset(dataset);
    ensure_parent(&cli.output)?;
    match format {
        OutputFormat::Svg => {
            let svg = chart.render_to_svg(&opts)?;
            std::fs::write(&cli.output, svg).with_context(|| format!("writing {}", cli.output.display()))?;
        }
        OutputFormat::Html => {
            let html = chart.render_to_html(&opts)?;
            std::fs::write(&cli.output, html).with_context(|| format!("writing {}", cli.output.display()))?;
        }
        OutputFormat::Png => chart.render_to_png(&opts, &cli.output)?,
    }
    info!("Wrote {} ({} marks)", cli.output.display(), chart.records.len());
    Ok(())
}

fn resolve_format(explicit: Option<OutputFormat>, output: &Path) -> OutputFormat {
    if let Some(f) = explicit {
        return f;
    }
    let ext = output.extension().map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("png") => OutputFormat::Png,
        Some("html") | Some("htm") => OutputFormat::Html,
        _ => OutputFormat::Svg,
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    Ok(())
}

/// Replace the blank chart with a visible message. PNG output has no error document.
fn write_error_state(output: &Path, format: OutputFormat, opts: &RenderOptions, message: &str) -> Result<()> {
    let svg = render_error_svg(opts.width, opts.height, &opts.theme, message);
    let doc = match format {
        OutputFormat::Svg => svg,
        OutputFormat::Html => wrap_html(&svg, &opts.theme),
        OutputFormat::Png => {
            warn!("no error document for PNG output; {} not written", output.display());
            return Ok(());
        }
    };
    ensure_parent(output)?;
    std::fs::write(output, doc).with_context(|| format!("writing {}", output.display()))?;
    info!("Wrote error state to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(resolve_format(None, Path::new("out/chart.png")), OutputFormat::Png);
        assert_eq!(resolve_format(None, Path::new("out/chart.HTML")), OutputFormat::Html);
        assert_eq!(resolve_format(None, Path::new("out/chart")), OutputFormat::Svg);
        assert_eq!(resolve_format(Some(OutputFormat::Html), Path::new("chart.svg")), OutputFormat::Html);
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["doping-scatter"]);
        assert_eq!(cli.width, 1000);
        assert_eq!(cli.height, 600);
        assert_eq!(cli.padding, 60);
        assert_eq!(cli.output, PathBuf::from("target/out/doping_scatter.svg"));
        assert!(cli.input.is_none());
        assert_eq!(cli.theme, ThemeName::Light);
    }

    #[test]
    fn theme_is_validated_by_clap() {
        let cli = Cli::parse_from(["doping-scatter", "--theme", "dark"]);
        assert_eq!(cli.theme.preset().name, "dark");
        assert!(Cli::try_parse_from(["doping-scatter", "--theme", "neon"]).is_err());
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("doping-scatter-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("scratch dir");
        dir
    }

    #[test]
    fn all_malformed_input_writes_error_document_and_fails() {
        let dir = scratch_dir("malformed");
        let input = dir.join("bad.json");
        std::fs::write(
            &input,
            r#"[{"Time": "3650", "Place": 1, "Seconds": 2210, "Name": "A", "Year": 1995,
                 "Nationality": "ITA", "Doping": "", "URL": ""},
                {"Time": "37:00", "Place": 2}]"#,
        )
        .expect("write input");
        let output = dir.join("chart.html");
        let cli = Cli::parse_from([
            OsStr::new("doping-scatter"),
            OsStr::new("--input"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ]);

        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("no plottable records"), "{err:#}");
        let doc = std::fs::read_to_string(&output).expect("error document written");
        assert!(doc.contains(r#"<div id="graph">"#));
        assert!(doc.contains(r#"id="error""#));
        assert!(!doc.contains(r#"class="dot""#));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn load_error_survives_a_failed_error_write() {
        let dir = scratch_dir("blocked");
        // A file where the output directory should be makes the write fail.
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, b"").expect("write blocker");
        let output = blocker.join("chart.svg");
        let missing = dir.join("missing.json");
        let cli = Cli::parse_from([
            OsStr::new("doping-scatter"),
            OsStr::new("--input"),
            missing.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ]);

        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load dataset"), "{err:#}");
        assert!(!output.exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn error_state_document_is_written() {
        let out = std::env::temp_dir().join(format!("doping-scatter-err-{}.svg", std::process::id()));
        write_error_state(&out, OutputFormat::Svg, &RenderOptions::default(), "Failed to load dataset: offline")
            .expect("write error state");
        let doc = std::fs::read_to_string(&out).expect("read back");
        assert!(doc.contains(r#"id="error""#));
        assert!(doc.contains("offline"));
        std::fs::remove_file(&out).ok();
    }
}
