//! CLI entry point for deplens.
//!
//! This module is intentionally thin: argument parsing, file IO, logging, and
//! exit codes. Everything else lives in `deplens-app` and below.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use deplens_app::{
    AnalyzeInput, ExplainOutput, PackageInput, format_explanation, format_not_found,
    render_markdown, render_text, run_analyze, run_explain, runtime_error_report,
    serialize_report, verdict_exit_code, write_report, write_text,
};
use deplens_settings::Overrides;
use deplens_types::PackageRef;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "deplens", version, about = "Dependency-analysis reports as editor diagnostics")]
struct Cli {
    /// Path to the deplens config file.
    #[arg(long, global = true, default_value = "deplens.toml")]
    config: Utf8PathBuf,

    /// Override the config profile (strict|advisory).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the failure threshold (error|warning).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Log progress to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log debug detail to stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one dependency-analysis report and emit diagnostics.
    Check {
        /// Path to the report JSON for the package under analysis (`-` for stdin).
        #[arg(long)]
        report: Utf8PathBuf,

        /// Package name as it appears in the manifest.
        #[arg(long)]
        package: String,

        /// Package version as it appears in the manifest.
        #[arg(long)]
        package_version: String,

        /// Zero-based manifest line of the version token.
        #[arg(long)]
        version_line: Option<u32>,

        /// Zero-based manifest column of the version token.
        #[arg(long)]
        version_col: Option<u32>,

        /// Where to write the JSON report envelope.
        #[arg(long, default_value = "artifacts/deplens/report.json")]
        report_out: Utf8PathBuf,

        /// What to print to stdout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write a Markdown rendering of the report.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown rendering.
        #[arg(long, default_value = "artifacts/deplens/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Explain a rule_id or diagnostic code, with remediation guidance.
    Explain {
        /// A rule_id like `analysis.security_issues` or a code like `known_vulnerability`.
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

struct CheckParams {
    config_path: Utf8PathBuf,
    overrides: Overrides,
    report: Utf8PathBuf,
    package: String,
    package_version: String,
    version_line: Option<u32>,
    version_col: Option<u32>,
    report_out: Utf8PathBuf,
    format: OutputFormat,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug);

    let config_path = cli.config.clone();
    let overrides = Overrides {
        profile: cli.profile.clone(),
        fail_on: cli.fail_on.clone(),
    };

    match cli.cmd {
        Commands::Check {
            report,
            package,
            package_version,
            version_line,
            version_col,
            report_out,
            format,
            write_markdown,
            markdown_out,
        } => cmd_check(CheckParams {
            config_path,
            overrides,
            report,
            package,
            package_version,
            version_line,
            version_col,
            report_out,
            format,
            write_markdown,
            markdown_out,
        }),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn cmd_check(params: CheckParams) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        // A missing config file is not an error; defaults apply.
        let config_text = std::fs::read_to_string(&params.config_path).unwrap_or_default();
        if config_text.is_empty() {
            debug!("no config at {}; defaults apply", params.config_path);
        }

        let report_text = if params.report == "-" {
            std::io::read_to_string(std::io::stdin()).context("read report from stdin")?
        } else {
            std::fs::read_to_string(&params.report)
                .with_context(|| format!("read report: {}", params.report))?
        };

        let output = run_analyze(AnalyzeInput {
            report_text: &report_text,
            config_text: &config_text,
            overrides: params.overrides.clone(),
            package: PackageInput {
                name: params.package.clone(),
                version: params.package_version.clone(),
                version_line: params.version_line,
                version_col: params.version_col,
            },
        })?;

        info!(
            "analyzed {}-{}: {:?}, {} diagnostics",
            params.package,
            params.package_version,
            output.report.verdict,
            output.report.diagnostics.len()
        );

        write_report(&params.report_out, &output.report).context("write report json")?;
        if params.write_markdown {
            let markdown = render_markdown(&output.report);
            write_text(&params.markdown_out, &markdown).context("write markdown")?;
        }

        match params.format {
            OutputFormat::Text => print!("{}", render_text(&output.report)),
            OutputFormat::Json => print!("{}", serialize_report(&output.report)?),
        }

        Ok(verdict_exit_code(output.report.verdict.clone()))
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let package = PackageRef {
                name: params.package.clone(),
                version: params.package_version.clone(),
            };
            let report = runtime_error_report(Some(package), &format!("{err:#}"));
            let _ = write_report(&params.report_out, &report);
            eprintln!("deplens error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(explanation) => {
            print!("{}", format_explanation(&explanation));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, &available_rule_ids, &available_codes)
            );
            std::process::exit(1);
        }
    }
}

/// Initialize tracing based on CLI flags; `RUST_LOG` wins when set.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level {level}");
}
