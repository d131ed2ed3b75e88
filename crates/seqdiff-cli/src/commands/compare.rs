//! Compare command
//!
//! Usage: seqdiff compare <A> <B> [--mode lines] [--format json|text] [--inline]

use clap::{Args, ValueEnum};
use seqdiff_core::core_types::RequestContext;
use seqdiff_core::{
    compare_texts_with_context, render_summary, DiffMode, SeqDiffError,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `{ mode, runs, stats, editDistance }` as pretty JSON
    Json,
    /// Prefixed human-readable report
    Text,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Old side: file path, or literal text with --inline
    pub a: String,

    /// New side: file path, or literal text with --inline
    pub b: String,

    /// Comparison granularity (chars, words, lines); defaults to the config's mode
    #[arg(short, long)]
    pub mode: Option<DiffMode>,

    /// Lowercase both sides before comparing
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Collapse whitespace runs within lines before comparing
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,

    /// Treat A and B as literal text instead of file paths
    #[arg(long)]
    pub inline: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// TOML engine config (max_elements, max_trace_bytes, default_mode)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the config's per-side element limit
    #[arg(long)]
    pub max_elements: Option<usize>,

    /// Override the config's trace memory budget in bytes
    #[arg(long)]
    pub max_trace_bytes: Option<usize>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = super::load_config(args.config.as_deref())?;
    if let Some(max_elements) = args.max_elements {
        config.max_elements = max_elements;
    }
    if let Some(max_trace_bytes) = args.max_trace_bytes {
        config.max_trace_bytes = max_trace_bytes;
    }
    config.validate()?;

    let (a, b) = if args.inline {
        (args.a, args.b)
    } else {
        (read_input(Path::new(&args.a))?, read_input(Path::new(&args.b))?)
    };

    let options = config
        .options(args.mode)
        .ignore_case(args.ignore_case)
        .ignore_whitespace(args.ignore_whitespace);
    let ctx = RequestContext::new().with_origin("cli");

    tracing::debug!(request_id = ctx.request_id.as_str(), inline = args.inline, "comparing");
    let result = compare_texts_with_context(&a, &b, &options, &config, &ctx)?;

    let rendered = match args.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&result).map_err(SeqDiffError::from)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_summary(&result),
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, rendered).map_err(|e| SeqDiffError::Io {
            path: output_path.display().to_string(),
            reason: e.to_string(),
        })?;
        eprintln!("✓ Wrote diff to {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, SeqDiffError> {
    std::fs::read_to_string(path).map_err(|e| SeqDiffError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
