//! End-to-end engine behaviour on typed series.

use metriclens_core::config::ModelConfig;
use metriclens_core::models::{CostParameters, KpiPoint, QualityRecord};
use metriclens_engine::{compute_metrics, MetricsEngine};

fn factuality(ts: &str, score: f64) -> QualityRecord {
    QualityRecord::new(ts).with_score("factuality", score)
}

fn kpi(points: &[(&str, f64)]) -> Vec<KpiPoint> {
    points.iter().map(|(d, v)| KpiPoint::new(*d, *v)).collect()
}

fn one_record() -> Vec<QualityRecord> {
    vec![factuality("2024-01-01T12:00:00Z", 0.7)]
}

// ---- Insufficient data ----

#[test]
fn absent_or_empty_series_yield_no_result() {
    let quality = one_record();
    let points = kpi(&[("2024-01-01", 1.0)]);
    let costs = CostParameters::default();

    assert!(compute_metrics(None, None, &costs).is_none());
    assert!(compute_metrics(None, Some(points.as_slice()), &costs).is_none());
    assert!(compute_metrics(Some(quality.as_slice()), None, &costs).is_none());
    assert!(compute_metrics(Some(&[][..]), Some(points.as_slice()), &costs).is_none());
    assert!(compute_metrics(Some(quality.as_slice()), Some(&[][..]), &costs).is_none());
}

// ---- Alignment ----

#[test]
fn chart_preserves_kpi_order_and_length() {
    let quality = one_record();
    let points = kpi(&[
        ("2024-01-05", 3.0),
        ("2024-01-02", 1.0),
        ("2024-01-09", 2.0),
    ]);
    let result =
        compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
            .unwrap();

    assert_eq!(result.chart_data.len(), points.len());
    for (chart, input) in result.chart_data.iter().zip(&points) {
        assert_eq!(chart.date, input.date);
        assert_eq!(chart.kpi_value, input.value);
    }
}

#[test]
fn quality_scores_are_carried_forward_not_interpolated() {
    let quality = vec![
        factuality("2024-01-01T10:00:00Z", 0.5),
        factuality("2024-01-03T10:00:00Z", 0.8),
    ];
    let points = kpi(&[
        ("2024-01-01", 10.0),
        ("2024-01-02", 11.0),
        ("2024-01-03", 12.0),
        ("2024-01-04", 13.0),
    ]);
    let result =
        compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
            .unwrap();

    let scores: Vec<Option<f64>> = result.chart_data.iter().map(|p| p.quality_score).collect();
    assert_eq!(scores, vec![Some(0.5), Some(0.5), Some(0.8), Some(0.8)]);
}

#[test]
fn later_listed_record_wins_on_shared_date() {
    let quality = vec![
        factuality("2024-01-02T23:00:00Z", 0.2),
        factuality("2024-01-02T01:00:00Z", 0.9),
    ];
    let points = kpi(&[("2024-01-01", 1.0), ("2024-01-02", 1.0)]);
    let result =
        compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
            .unwrap();

    // Seed comes from the first listed record, the date hit from the last.
    assert_eq!(result.chart_data[0].quality_score, Some(0.2));
    assert_eq!(result.chart_data[1].quality_score, Some(0.9));
}

#[test]
fn configured_dimension_is_read() {
    let engine = MetricsEngine::new(ModelConfig {
        score_dimension: "relevance".to_string(),
        ..Default::default()
    });
    let quality = vec![QualityRecord::new("2024-01-01T00:00:00Z")
        .with_score("factuality", 0.1)
        .with_score("relevance", 0.95)];
    let points = kpi(&[("2024-01-01", 1.0)]);
    let result = engine
        .compute(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
        .unwrap();

    assert_eq!(result.chart_data[0].quality_score, Some(0.95));
}

// ---- ROI model ----

#[test]
fn zero_initial_kpi_means_no_interventions() {
    let quality = one_record();
    let points = kpi(&[("2024-01-01", 0.0), ("2024-01-02", 10.0)]);
    let result =
        compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
            .unwrap();

    assert_eq!(result.manual_interventions_avoided, 0);
    assert_eq!(result.hours_recaptured, 0.0);
    assert!(result.total_roi.is_finite());
}

#[test]
fn declining_kpi_never_goes_negative() {
    let quality = one_record();
    let points = kpi(&[("2024-01-01", 100.0), ("2024-01-31", 50.0)]);
    let result =
        compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
            .unwrap();

    assert_eq!(result.manual_interventions_avoided, 0);
    assert_eq!(result.total_roi, -100.0);
}

#[test]
fn fifty_percent_improvement_end_to_end() {
    let quality = one_record();
    let points = kpi(&[("2024-01-01", 100.0), ("2024-01-31", 150.0)]);
    let costs = CostParameters::new(150.0, 2.0).unwrap();
    let result = compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &costs).unwrap();

    assert_eq!(result.manual_interventions_avoided, 500);
    assert_eq!(result.hours_recaptured, 1000.00);
    assert_eq!(result.total_roi, 1400.00);
}

#[test]
fn outputs_are_rounded_to_two_decimals() {
    let quality = one_record();
    // 3 interventions: 0.3% improvement * 10
    let points = kpi(&[("2024-01-01", 1000.0), ("2024-01-02", 1003.0)]);
    let costs = CostParameters::new(33.333, 1.0 / 3.0).unwrap();
    let result = compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &costs).unwrap();

    assert_eq!(result.manual_interventions_avoided, 3);
    assert_eq!(result.hours_recaptured, 1.0);
    // (99.999 - 5000) / 5000 * 100 = -98.00002
    assert_eq!(result.total_roi, -98.0);
}

#[test]
fn investment_and_scale_are_configurable() {
    let engine = MetricsEngine::new(ModelConfig {
        total_investment: 10_000.0,
        interventions_per_point: 2.0,
        ..Default::default()
    });
    let quality = one_record();
    let points = kpi(&[("2024-01-01", 100.0), ("2024-01-31", 150.0)]);
    let result = engine
        .compute(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
        .unwrap();

    // 50 * 2 = 100 interventions, 15_000 saved against 10_000 invested.
    assert_eq!(result.manual_interventions_avoided, 100);
    assert_eq!(result.hours_recaptured, 200.0);
    assert_eq!(result.total_roi, 50.0);
}

#[test]
fn inputs_are_not_mutated_and_output_is_deterministic() {
    let quality = vec![
        factuality("2024-01-03T00:00:00Z", 0.8),
        factuality("2024-01-01T00:00:00Z", 0.5),
    ];
    let points = kpi(&[("2024-01-02", 5.0), ("2024-01-01", 4.0)]);
    let snapshot = (quality.clone(), points.clone());
    let engine = MetricsEngine::new(ModelConfig {
        sort_inputs: true,
        ..Default::default()
    });
    let costs = CostParameters::default();

    let first = engine.compute(Some(quality.as_slice()), Some(points.as_slice()), &costs);
    let second = engine.compute(Some(quality.as_slice()), Some(points.as_slice()), &costs);

    assert_eq!(first, second);
    assert_eq!((quality, points), snapshot);
}

#[test]
fn result_serializes_for_presentation_layer() {
    let quality = one_record();
    let points = kpi(&[("2024-01-01", 100.0), ("2024-01-31", 150.0)]);
    let result =
        compute_metrics(Some(quality.as_slice()), Some(points.as_slice()), &CostParameters::default())
            .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["totalROI"], 1400.0);
    assert_eq!(json["hoursRecaptured"], 1000.0);
    assert_eq!(json["manualInterventionsAvoided"], 500);
    assert_eq!(json["chartData"][1]["qualityScore"], 0.7);
}
