//! CLI entry point for resultguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `resultguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use resultguard_app::{
    CheckInput, DumpSource, ExplainOutput, format_patterns, load_config, parse_report_json,
    render_annotations, render_markdown, run_check, run_explain, run_patterns,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use resultguard_settings::Overrides;
use resultguard_types::ResultguardReport;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "resultguard",
    version,
    about = "Reports Java method calls whose return value is ignored"
)]
struct Cli {
    /// Path to resultguard config TOML. A missing file means defaults.
    #[arg(long, default_value = "resultguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn).
    #[arg(long)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long)]
    max_findings: Option<u32>,

    /// Log at debug level (otherwise RESULTGUARD_LOG, default "warn").
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a call-site dump and write artifacts.
    Check {
        /// Call-site dump produced by the Java front end.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/resultguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/resultguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/resultguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/resultguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "calls.result_ignored") or code (e.g., "simple_getter").
        identifier: String,
    },

    /// List the effective must-use method patterns (built-in and configured).
    Patterns,

    /// Print a JSON Schema.
    Schema {
        #[arg(value_enum, default_value = "config")]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SchemaKind {
    Config,
    Report,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref input,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, input, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
        Commands::Patterns => cmd_patterns(&cli),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RESULTGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        max_findings: cli.max_findings,
    }
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        debug!(path = %path, "no config file, using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn cmd_check(
    cli: &Cli,
    input: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;

        let output = run_check(CheckInput {
            dump: DumpSource::Path(input),
            config_text: &cfg_text,
            overrides: overrides(cli),
        })?;

        for dropped in &output.resolved_config.dropped {
            warn!("{}: {dropped}", cli.config);
        }

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(&output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("resultguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &ResultguardReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<ResultguardReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found {
            identifier,
            explanation,
        } => {
            print!(
                "{}",
                resultguard_app::format_explanation(&identifier, &explanation)
            );
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                resultguard_app::format_not_found(
                    &identifier,
                    available_check_ids,
                    available_codes
                )
            );
            std::process::exit(1);
        }
    }
}

fn cmd_patterns(cli: &Cli) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let resolved = load_config(&cfg_text, overrides(cli))?;
    for dropped in &resolved.dropped {
        warn!("{}: {dropped}", cli.config);
    }
    print!("{}", format_patterns(&run_patterns(&resolved)));
    Ok(())
}

fn cmd_schema(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Config => resultguard_settings::config_schema_json(),
        SchemaKind::Report => serde_json::to_value(schemars::schema_for!(ResultguardReport))
            .context("serialize report schema")?,
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).context("format schema")?
    );
    Ok(())
}
