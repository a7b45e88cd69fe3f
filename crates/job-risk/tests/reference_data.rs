use job_risk::workflows::jobs::{
    score_job, JobRecord, JobRiskService, Recommendation, ReferenceData, ReferenceDataError,
    ReferenceDocument, RiskBand,
};
use std::sync::Arc;
use std::thread;

fn fixture_reference() -> ReferenceData {
    let data = include_bytes!("fixtures/reference.json");
    ReferenceData::from_reader(&data[..]).expect("fixture reference loads")
}

fn record(job_number: &str, department: &str, operation: &str) -> JobRecord {
    JobRecord {
        job_number: job_number.to_string(),
        department: department.to_string(),
        operation: operation.to_string(),
        complete: false,
        quantity: 1,
        estimated_hours: 0.5,
        stages: None,
    }
}

#[test]
fn fixture_reference_scores_custom_operations() {
    let reference = fixture_reference();
    assert_eq!(reference.operation_count(), 2);
    assert_eq!(reference.department_count(), 2);

    let job = record("weld-7", "0050", "WELD - TIG")
        .validate()
        .expect("valid job");
    let scored = score_job(&job, &reference);

    assert_eq!(scored.complexity_score, 6);
    assert_eq!(scored.risk_score, 56);
    assert_eq!(scored.recommendation, Recommendation::MediumRisk);
    assert_eq!(scored.band(), RiskBand::Elevated);
}

#[test]
fn fixture_fallback_replaces_builtin_default() {
    let reference = fixture_reference();
    let job = JobRecord {
        quantity: 3,
        estimated_hours: 0.3,
        ..record("8624796", "0042", "Saw - Magnet Cut Hand")
    }
    .validate()
    .expect("valid job");

    let scored = score_job(&job, &reference);

    assert_eq!(scored.base_probability, 0.1);
    assert_eq!(scored.department_multiplier, 1.0);
    assert_eq!(scored.risk_score, 16);
    assert_eq!(scored.recurring_risks, vec!["Unreviewed operation"]);
}

#[test]
fn published_document_round_trips_through_loader() {
    let reference = ReferenceData::standard();

    let json = serde_json::to_vec(&reference.to_document()).expect("serialize document");
    let reloaded = ReferenceData::from_reader(&json[..]).expect("document reloads");

    assert_eq!(reloaded, reference);
}

#[test]
fn malformed_documents_are_rejected() {
    let error = ReferenceData::from_reader(&b"{\"operations\": 7}"[..]).expect_err("bad json");
    assert!(matches!(error, ReferenceDataError::Json(_)));

    let document: ReferenceDocument = serde_json::from_str(
        r#"{"departments": [{"code": "0041", "multiplier": 0.0}]}"#,
    )
    .expect("document parses");
    let error = ReferenceData::from_document(document).expect_err("zero multiplier");
    assert!(matches!(error, ReferenceDataError::Multiplier { .. }));
}

#[test]
fn concurrent_scoring_sees_whole_tables_during_replacement() {
    let service = Arc::new(JobRiskService::default());
    let replacement: ReferenceDocument =
        serde_json::from_slice(include_bytes!("fixtures/reference.json")).expect("fixture parses");

    let scorers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                (0..200)
                    .map(|index| {
                        service
                            .score(record(&format!("job-{index}"), "0050", "Weld - TIG"))
                            .expect("valid job")
                            .department_multiplier
                    })
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    service
        .replace_reference(replacement)
        .expect("replacement accepted");

    for scorer in scorers {
        let multipliers = scorer.join().expect("scorer thread");
        assert!(multipliers
            .iter()
            .all(|multiplier| *multiplier == 1.0 || *multiplier == 1.4));
        assert!(
            multipliers.windows(2).all(|pair| pair[0] <= pair[1]),
            "a scorer observed the old table after the new one"
        );
    }

    let after = service
        .score(record("after", "0050", "Weld - TIG"))
        .expect("valid job");
    assert_eq!(after.department_multiplier, 1.4);
}

#[test]
fn extreme_complexity_saturates_instead_of_wrapping() {
    let reference = ReferenceData::from_reader(
        &br#"{"operations":[{"description":"Weld","incident_rate":0.1,"complexity":4294967295,"risks":["Distortion"]}]}"#[..],
    )
    .expect("document loads");
    let job = JobRecord {
        quantity: 4,
        estimated_hours: 2.0,
        stages: Some(9),
        ..record("weld-max", "0050", "Weld")
    }
    .validate()
    .expect("valid job");

    let scored = score_job(&job, &reference);

    assert_eq!(scored.complexity_score, u32::MAX);
    assert_eq!(scored.risk_score, 95);
    assert_eq!(scored.confidence, 65);
    assert_eq!(scored.recommendation, Recommendation::HighRisk);
}
