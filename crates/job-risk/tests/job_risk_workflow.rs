use job_risk::workflows::jobs::{
    explain, rank_jobs, score_job, summarize, JobCsvImporter, JobRiskService, Recommendation,
    ReferenceData, RiskBand,
};

fn dashboard_import() -> job_risk::workflows::jobs::JobImport {
    let data = include_bytes!("fixtures/dashboard_jobs.csv");
    JobCsvImporter::from_reader(&data[..]).expect("dashboard export imports")
}

#[test]
fn imported_dashboard_batch_ranks_and_summarizes() {
    let import = dashboard_import();
    assert_eq!(import.jobs.len(), 6);
    assert!(import.rejected.is_empty());

    let reference = ReferenceData::standard();
    let ranked = rank_jobs(&import.jobs, &reference);

    let recommendations: Vec<(&str, Recommendation)> = ranked
        .iter()
        .map(|scored| (scored.job_number().as_str(), scored.recommendation))
        .collect();
    assert_eq!(
        recommendations,
        vec![
            ("8625370", Recommendation::HighRisk),
            ("8627125", Recommendation::HighRisk),
            ("9396522-1-2", Recommendation::MediumRisk),
            ("8627039-500", Recommendation::LowRisk),
            ("8624796", Recommendation::LowRisk),
            ("8624797", Recommendation::LowRisk),
        ]
    );

    let stats = summarize(&ranked);
    assert_eq!(stats.job_count, 6);
    assert_eq!(stats.average_risk_score, Some(48));
    assert_eq!(stats.high_risk_count, 2);
    assert_eq!(stats.total_predicted_incidents, 3.6);
}

#[test]
fn multi_stage_heavy_assembly_is_fully_explained() {
    let import = dashboard_import();
    let job = import
        .jobs
        .iter()
        .find(|job| job.job_number.as_str() == "8627125")
        .expect("multi-stage job imported");

    let scored = score_job(job, &ReferenceData::standard());
    assert_eq!(scored.complexity_score, 9);
    assert_eq!(scored.stage_risk, 0.25);
    assert_eq!(scored.predicted_incidents, 1.57);
    assert_eq!(scored.confidence, 77);
    assert_eq!(scored.band(), RiskBand::High);

    let factors = explain(&scored);
    assert!(factors.iter().all(|factor| factor.value == factor.max));
}

#[test]
fn service_assessment_matches_direct_ranking() {
    let import = dashboard_import();
    let service = JobRiskService::default();

    let assessment = service.assess_jobs(&import.jobs, &import.rejected);
    let direct = rank_jobs(&import.jobs, &ReferenceData::standard());

    let from_service: Vec<u8> = assessment
        .ranked
        .iter()
        .map(|view| view.scored.risk_score)
        .collect();
    let from_ranker: Vec<u8> = direct.iter().map(|scored| scored.risk_score).collect();
    assert_eq!(from_service, from_ranker);
    assert_eq!(assessment.summary.estimated_cost, 13770.0);
    assert_eq!(assessment.insights.action_items.len(), 2);
}

#[test]
fn import_reports_bad_rows_alongside_good_ones() {
    let csv = "Job Number,Department,Operation,Complete,Quantity,Est Hours,Stages\n\
8624796,0042,Saw - Magnet Cut Hand,n,3,0.30,\n\
8624798,0042,Saw - Magnet Cut Hand,n,3,-1,\n";

    let import = JobCsvImporter::from_reader(csv.as_bytes()).expect("import succeeds");
    let assessment = JobRiskService::default().assess_jobs(&import.jobs, &import.rejected);

    assert_eq!(assessment.ranked.len(), 1);
    assert_eq!(assessment.rejected.len(), 1);
    assert_eq!(
        assessment.rejected[0]
            .job_number
            .as_ref()
            .map(|number| number.as_str()),
        Some("8624798")
    );
}
