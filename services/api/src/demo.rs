use crate::infra::build_service;
use chrono::Local;
use clap::Args;
use job_risk::config::AppConfig;
use job_risk::error::AppError;
use job_risk::workflows::jobs::report::views::BatchAssessment;
use job_risk::workflows::jobs::{explain, JobCsvImporter, JobRecord, JobRiskService};
use std::io::{self, Write};
use std::path::PathBuf;

const BAR_WIDTH: usize = 20;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export of work orders (Job Number, Department, Operation, ...)
    #[arg(long)]
    pub(crate) jobs: PathBuf,
    /// JSON reference-data document to use instead of the standard tables
    #[arg(long)]
    pub(crate) reference: Option<PathBuf>,
    /// Print the risk-factor breakdown under each job
    #[arg(long)]
    pub(crate) explain: bool,
    /// Emit the batch assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print the risk-factor breakdown under each job
    #[arg(long)]
    pub(crate) explain: bool,
    /// Emit the batch assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        jobs,
        reference,
        explain,
        json,
    } = args;

    let mut settings = AppConfig::load()?.scoring;
    if reference.is_some() {
        settings.reference_path = reference;
    }
    let service = build_service(&settings)?;

    let import = JobCsvImporter::from_path(&jobs)?;
    let assessment = service.assess_jobs(&import.jobs, &import.rejected);

    let title = format!("Job risk report for {}", jobs.display());
    emit(&title, &assessment, explain, json)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = JobRiskService::default();
    let assessment = service.assess(demo_jobs());

    let title = format!(
        "Job risk demo (generated {})",
        Local::now().format("%Y-%m-%d %H:%M")
    );
    emit(&title, &assessment, args.explain, args.json)
}

fn emit(
    title: &str,
    assessment: &BatchAssessment,
    explain: bool,
    json: bool,
) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, assessment).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        render_assessment(&mut out, title, assessment, explain)?;
    }
    Ok(())
}

/// The work orders shown on the shop-floor dashboard.
fn demo_jobs() -> Vec<JobRecord> {
    [
        ("8624796", "0042", "Saw - Magnet Cut Hand", 3, 0.30, None),
        ("8624797", "0042", "Saw - Magnet Cut Hand", 3, 0.30, None),
        ("8625370", "0043", "Assembly - Heavy", 1, 0.25, None),
        ("8627039-500", "0045", "Deburr/Finish - Sandblast", 5, 0.94, None),
        ("8627125", "0043", "Assembly - Heavy", 1, 0.00, Some(11)),
        ("9396522-1-2", "0041", "Lathe/Saw Operations", 1, 0.75, None),
    ]
    .into_iter()
    .map(
        |(job_number, department, operation, quantity, estimated_hours, stages)| JobRecord {
            job_number: job_number.to_string(),
            department: department.to_string(),
            operation: operation.to_string(),
            complete: false,
            quantity,
            estimated_hours,
            stages,
        },
    )
    .collect()
}

pub(crate) fn render_assessment<W: Write>(
    out: &mut W,
    title: &str,
    assessment: &BatchAssessment,
    explain_factors: bool,
) -> io::Result<()> {
    let summary = &assessment.summary;
    writeln!(out, "{title}")?;
    writeln!(
        out,
        "Jobs scored: {} | Avg risk: {} | High risk: {} | Predicted change requests: {:.1} | Est. rework cost: ${:.0}",
        summary.job_count,
        summary
            .average_risk_score
            .map(|score| score.to_string())
            .unwrap_or_else(|| "n/a".to_string()),
        summary.high_risk_count,
        summary.total_predicted_incidents,
        summary.estimated_cost
    )?;

    if assessment.ranked.is_empty() {
        writeln!(out, "\nRanked jobs: none")?;
    } else {
        writeln!(out, "\nRanked jobs")?;
        for (index, view) in assessment.ranked.iter().enumerate() {
            let scored = &view.scored;
            writeln!(
                out,
                "{:>2}. {:<14} {:<6} {:<28} risk {:>2} ({}) conf {}% | {}",
                index + 1,
                scored.job_number().as_str(),
                scored.job.department,
                scored.job.operation,
                scored.risk_score,
                view.band_label,
                scored.confidence,
                view.recommendation_label
            )?;
            if explain_factors {
                for factor in explain(scored) {
                    writeln!(
                        out,
                        "      {:<16} [{}] {}/{}",
                        factor.label,
                        bar(factor.fill_ratio()),
                        factor.value,
                        factor.max
                    )?;
                }
            }
        }
    }

    let insights = &assessment.insights;
    if insights.action_items.is_empty() {
        writeln!(out, "\nPre-flight checks: none")?;
    } else {
        writeln!(out, "\nPre-flight checks")?;
        for item in &insights.action_items {
            writeln!(
                out,
                "- #{} {} (risk {}): {}",
                item.position, item.job_number, item.risk_score, item.instruction
            )?;
        }
    }

    writeln!(out, "\nRisk bands")?;
    for count in &insights.band_counts {
        writeln!(out, "- {}: {}", count.band_label, count.jobs)?;
    }

    if !assessment.rejected.is_empty() {
        writeln!(out, "\nRejected rows")?;
        for rejected in &assessment.rejected {
            match &rejected.job_number {
                Some(job_number) => writeln!(out, "- {job_number}: {}", rejected.reason)?,
                None => writeln!(out, "- (no job number): {}", rejected.reason)?,
            }
        }
    }

    Ok(())
}

fn bar(ratio: f64) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
