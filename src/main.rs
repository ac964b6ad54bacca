use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use nubaek_admit::input::catalog::TableCatalog;
use nubaek_admit::input::{
    InputError, load_cutlines, load_profile, load_score_vectors, load_tables, select_score_vector,
};
use nubaek_admit::logging::init_logging;
use nubaek_admit::report::{ReportFormat, render, write_report};
use nubaek_admit::{
    AnalysisError, AnalysisRequest, ExamSitting, PercentileResolution, ScoreVector,
    ScoringProfile, Track, percentile_with_fallback, run_analysis_with_fallback,
};

#[derive(Debug, Parser)]
#[command(name = "nubaek-admit", version, about = "University admission probability scoring")]
struct Cli {
    /// Debug-level logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and rank cutlines of the preferred departments.
    Recommend(RecommendArgs),
    /// Print the composite score and cumulative percentile only.
    Percentile(StudentArgs),
}

#[derive(Debug, Clone, Args)]
struct StudentArgs {
    /// Score vectors (JSON, optionally .gz).
    #[arg(long)]
    scores: PathBuf,
    /// Percentile lookup tables (JSON, optionally .gz).
    #[arg(long)]
    tables: PathBuf,
    #[arg(long, value_parser = parse_track)]
    track: Track,
    /// Exam year of the sitting.
    #[arg(long)]
    year: u16,
    /// Exam month of the sitting.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
    month: u8,
    #[arg(long)]
    student: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct RecommendArgs {
    #[command(flatten)]
    student: StudentArgs,
    /// Cutline records (JSON, optionally .gz).
    #[arg(long)]
    cutlines: PathBuf,
    /// Cutline year; defaults to the exam year.
    #[arg(long)]
    cutline_year: Option<u16>,
    /// Preferred department, in order (repeatable).
    #[arg(long = "department")]
    departments: Vec<String>,
    /// Scoring profile (JSON).
    #[arg(long)]
    profile: Option<PathBuf>,
    #[arg(long)]
    per_department_cap: Option<usize>,
    #[arg(long)]
    global_cap: Option<usize>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

impl From<OutputFormat> for ReportFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Text => ReportFormat::Text,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("reference data unavailable: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Analysis(_) => 2,
            _ => 1,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend(&args),
        Command::Percentile(args) => run_percentile(&args),
    }
}

fn run_recommend(args: &RecommendArgs) -> Result<(), CliError> {
    let profile = resolve_profile(args)?;
    let (scores, catalog) = load_student(&args.student)?;
    let cutlines = load_cutlines(&args.cutlines)?;
    let requested = ExamSitting::new(args.student.year, args.student.month);

    if args.departments.is_empty() {
        tracing::warn!("no preferred departments given; the recommendation list will be empty");
    }

    let request = AnalysisRequest {
        scores: &scores,
        track: args.student.track,
        cutline_year: args.cutline_year.unwrap_or(args.student.year),
        cutlines: &cutlines,
        preferred_departments: &args.departments,
        profile: &profile,
    };
    let analysis =
        run_analysis_with_fallback(&request, catalog.fallback_order(requested), requested)?;

    let rendered = render(&analysis, args.format.into())?;
    write_report(&rendered, args.out.as_deref())?;
    if let Some(out) = &args.out {
        tracing::info!(path = %out.display(), "report written");
    }
    Ok(())
}

fn run_percentile(args: &StudentArgs) -> Result<(), CliError> {
    let (scores, catalog) = load_student(args)?;
    let resolved = resolve_percentile(&scores, &catalog, args)?;
    println!(
        "composite={:.1}\tpercentile={:.2}\tsitting={}",
        resolved.composite_score, resolved.percentile, resolved.sitting_used
    );
    Ok(())
}

fn resolve_percentile(
    scores: &ScoreVector,
    catalog: &TableCatalog,
    args: &StudentArgs,
) -> Result<PercentileResolution, AnalysisError> {
    let requested = ExamSitting::new(args.year, args.month);
    percentile_with_fallback(
        scores,
        catalog.fallback_order(requested),
        requested,
        args.track,
    )
}

fn load_student(args: &StudentArgs) -> Result<(ScoreVector, TableCatalog), CliError> {
    let vectors = load_score_vectors(&args.scores)?;
    let scores = select_score_vector(
        &vectors,
        args.student.as_deref(),
        Some(ExamSitting::new(args.year, args.month)),
    )?;
    let catalog = load_tables(&args.tables)?;
    Ok((scores, catalog))
}

fn resolve_profile(args: &RecommendArgs) -> Result<ScoringProfile, CliError> {
    let mut profile = match &args.profile {
        Some(path) => load_profile(path)?,
        None => ScoringProfile::default_v1(),
    };
    apply_overrides(&mut profile, args.per_department_cap, args.global_cap);
    profile.validate().map_err(CliError::Config)?;
    Ok(profile)
}

fn apply_overrides(
    profile: &mut ScoringProfile,
    per_department_cap: Option<usize>,
    global_cap: Option<usize>,
) {
    if let Some(cap) = per_department_cap {
        profile.per_department_cap = cap;
    }
    if let Some(cap) = global_cap {
        profile.global_cap = cap;
    }
}

fn parse_track(s: &str) -> Result<Track, String> {
    s.parse()
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
