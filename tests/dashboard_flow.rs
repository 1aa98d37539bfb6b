use std::fs;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use forgeiq::fixtures::FixtureAnalytics;
use forgeiq::ports::PortSet;
use forgeiq::{Dashboard, ForgeConfig, ViewReport};
use forgeiq_domain::{MetricKind, ScheduleChange, Severity, TimeRange, ViewKind};
use forgeiq_engine::SampleTier;
use forgeiq_ui_presentation::formatting::{report_lines, stat_cards};
use forgeiq_ui_terminal::{dashboard_from, load_config};

fn fixture_dashboard(config: &ForgeConfig) -> Dashboard {
    let now = Utc.with_ymd_and_hms(2025, 11, 29, 12, 0, 0).unwrap();
    let ports = PortSet::new(Arc::new(FixtureAnalytics::sample_at(now)));
    Dashboard::new_with_ports(config, ports)
}

#[test]
fn config_file_overrides_thresholds_and_scheduling() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "thresholds:\n  risk:\n    critical: 90\nscheduling:\n  high_risk: 90\n",
    )
    .unwrap();
    let config = load_config(Some(&path)).unwrap();
    let dashboard = fixture_dashboard(&config);

    let summary = dashboard.tier_summary(TimeRange::Days30).unwrap();
    assert_eq!(
        summary.count(MetricKind::RiskScore, SampleTier::Severity(Severity::Critical)),
        1
    );
    assert_eq!(
        summary.count(MetricKind::RiskScore, SampleTier::Severity(Severity::High)),
        1
    );

    let schedules = dashboard.scheduling().unwrap();
    let changes: Vec<ScheduleChange> = schedules
        .endpoints
        .iter()
        .map(|e| e.recommendation.change)
        .collect();
    assert_eq!(
        changes,
        vec![
            ScheduleChange::Keep,
            ScheduleChange::Relax,
            ScheduleChange::Tighten,
            ScheduleChange::Relax,
        ]
    );
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "thresholds:\n  risk:\n    critical: 10\n").unwrap();
    assert!(load_config(Some(&path)).is_err());
}

#[test]
fn dataset_file_feeds_every_view() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.yaml");
    FixtureAnalytics::sample().save_to_path(&path).unwrap();

    let mut dashboard = dashboard_from(&ForgeConfig::default(), Some(&path)).unwrap();
    let now = Utc::now();
    for view in ViewKind::ALL {
        dashboard.select_view(view);
        let report = dashboard.current_report().unwrap();
        assert_eq!(report.view(), view);
        assert_eq!(stat_cards(&report).len(), 4);
        assert!(!report_lines(&report, now).is_empty());
    }
}

#[test]
fn applying_schedules_shows_in_report_json() {
    let mut dashboard = fixture_dashboard(&ForgeConfig::default());
    dashboard.select_view(ViewKind::Scheduling);
    assert_eq!(dashboard.apply_all_schedules().unwrap(), 2);

    let report = dashboard.current_report().unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["view"], "scheduling");
    let applied: Vec<bool> = json["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["applied"].as_bool().unwrap())
        .collect();
    assert_eq!(applied, vec![false, true, false, true]);
    assert!(matches!(report, ViewReport::Scheduling(_)));
}
