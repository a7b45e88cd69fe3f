use super::super::scoring::{RiskBand, ScoredJob};
use super::views::{BandCount, LandscapePoint, PreflightActionItem, RiskInsights};

const LANDSCAPE_LABEL_LEN: usize = 12;

/// Derives action items and chart data from a batch already in ranked order.
pub fn generate_insights(ranked: &[ScoredJob]) -> RiskInsights {
    let action_items = ranked
        .iter()
        .filter(|job| job.band() == RiskBand::High)
        .enumerate()
        .map(|(index, job)| preflight_item(index + 1, job))
        .collect();

    let landscape = ranked
        .iter()
        .map(|job| LandscapePoint {
            label: job
                .job_number()
                .as_str()
                .chars()
                .take(LANDSCAPE_LABEL_LEN)
                .collect(),
            complexity: job.complexity_score,
            risk_score: job.risk_score,
        })
        .collect();

    let band_counts = RiskBand::ordered()
        .into_iter()
        .map(|band| BandCount {
            band,
            band_label: band.label(),
            jobs: ranked.iter().filter(|job| job.band() == band).count(),
        })
        .collect();

    RiskInsights {
        action_items,
        landscape,
        band_counts,
    }
}

fn preflight_item(position: usize, job: &ScoredJob) -> PreflightActionItem {
    let primary_risk = job.primary_risk().unwrap_or("Generic risk").to_string();
    let secondary_risk = job.secondary_risk().map(str::to_string);

    let instruction = match &secondary_risk {
        Some(secondary) => format!("Verify {primary_risk} and {secondary} before release"),
        None => format!("Verify {primary_risk} before release"),
    };

    PreflightActionItem {
        position,
        job_number: job.job_number().clone(),
        risk_score: job.risk_score,
        primary_risk,
        secondary_risk,
        instruction,
    }
}
