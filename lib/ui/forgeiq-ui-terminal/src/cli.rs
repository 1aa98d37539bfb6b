use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use forgeiq_domain::{
    ForgeConfig, MetricKind, MetricSample, Stability, TestFrequency, Tiered, TimeRange, ViewKind,
};
use forgeiq_engine::{Classifier, SampleTier, SchedulingRecommender};

use crate::bootstrap::{CONFIG_ENV, dashboard_from, load_config};
use crate::render::{render_report, render_tier_summary};

#[derive(Parser, Debug)]
#[command(name = "forgeiq", version, about = "API test analytics and recommendations")]
struct Cli {
    /// Config file (YAML).
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,
    /// Dataset file to serve instead of the demo data.
    #[arg(long, global = true, env = "FORGEIQ_DATASET")]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single reading.
    Classify {
        #[arg(value_enum)]
        metric: MetricArg,
        /// Numeric reading, or a severity label for `label`.
        #[arg(allow_negative_numbers = true)]
        value: String,
        /// SLA target; turns an `sla` value into an uptime reading.
        #[arg(long, allow_negative_numbers = true)]
        target: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Recommend a test cadence for one endpoint.
    Schedule {
        /// Current cadence, e.g. `15m`, `2h`, `90s`.
        #[arg(long)]
        every: TestFrequency,
        #[arg(long, allow_negative_numbers = true)]
        risk: f64,
        #[arg(long)]
        degrading: bool,
        #[arg(long)]
        json: bool,
    },
    /// Render a dashboard view.
    Report {
        #[arg(default_value = "analytics")]
        view: ViewKind,
        #[arg(long, default_value = "30d")]
        range: TimeRange,
        /// Apply auto-eligible schedule changes before rendering.
        #[arg(long)]
        apply: bool,
        #[arg(long)]
        json: bool,
    },
    /// Tier counts across every metric sample.
    Summary {
        #[arg(long, default_value = "30d")]
        range: TimeRange,
        #[arg(long)]
        json: bool,
    },
    /// List the dashboard views.
    Views,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MetricArg {
    Risk,
    Deviation,
    Coverage,
    Reliability,
    Sla,
    Probability,
    Label,
}

impl MetricArg {
    fn kind(self) -> Option<MetricKind> {
        match self {
            MetricArg::Risk => Some(MetricKind::RiskScore),
            MetricArg::Deviation => Some(MetricKind::AnomalyDeviation),
            MetricArg::Coverage => Some(MetricKind::CoveragePercent),
            MetricArg::Reliability => Some(MetricKind::ReliabilityScore),
            MetricArg::Sla => Some(MetricKind::SlaDelta),
            MetricArg::Probability => Some(MetricKind::FailureProbability),
            MetricArg::Label => None,
        }
    }
}

#[derive(Serialize)]
struct ClassifyOutput {
    metric: &'static str,
    value: String,
    #[serde(flatten)]
    tier: SampleTier,
    label: &'static str,
    emphasis: &'static str,
}

pub fn run() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Classify {
            metric,
            value,
            target,
            json,
        } => classify(&config, metric, &value, target, json),
        Command::Schedule {
            every,
            risk,
            degrading,
            json,
        } => {
            let stability = if degrading {
                Stability::Degrading
            } else {
                Stability::Stable
            };
            let rec = SchedulingRecommender::from_config(&config).recommend(every, risk, stability);
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                let review = if rec.auto_adjust_eligible {
                    "auto-adjust"
                } else {
                    "review required"
                };
                println!(
                    "{} -> {} ({}, {review})",
                    rec.current,
                    rec.recommended_frequency,
                    rec.change.label()
                );
            }
            Ok(())
        }
        Command::Report {
            view,
            range,
            apply,
            json,
        } => {
            let mut dashboard = dashboard_from(&config, cli.dataset.as_deref())?;
            dashboard.set_range(range);
            dashboard.select_view(view);
            if apply {
                let applied = dashboard.apply_all_schedules()?;
                tracing::info!(applied, "applied eligible schedule changes");
            }
            let report = dashboard.current_report()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render_report(&report, Utc::now()));
            }
            Ok(())
        }
        Command::Summary { range, json } => {
            let dashboard = dashboard_from(&config, cli.dataset.as_deref())?;
            let summary = dashboard.tier_summary(range)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_tier_summary(&summary));
            }
            Ok(())
        }
        Command::Views => {
            for view in ViewKind::ALL {
                println!(
                    "{}  {:<12} {:<20} {}",
                    view.index() + 1,
                    view.slug(),
                    view.label(),
                    view.subtitle()
                );
            }
            Ok(())
        }
    }
}

fn classify(
    config: &ForgeConfig,
    metric: MetricArg,
    raw: &str,
    target: Option<f64>,
    json: bool,
) -> Result<()> {
    let classifier = Classifier::from_config(config);
    let tier = match metric.kind() {
        None => SampleTier::Severity(classifier.classify_severity(raw)),
        Some(kind) => {
            let value: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("'{raw}' is not a number"))?;
            match (kind, target) {
                (MetricKind::SlaDelta, Some(target)) => {
                    SampleTier::Sla(classifier.classify_sla(value, target))
                }
                _ => classifier.classify_sample(&MetricSample::new("cli", kind, value)),
            }
        }
    };

    let meta = tier.meta();
    if json {
        let output = ClassifyOutput {
            metric: metric.kind().map_or("severity_label", MetricKind::as_str),
            value: raw.to_string(),
            tier,
            label: meta.label,
            emphasis: meta.emphasis.as_str(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", meta.label);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FORGEIQ_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_report_arguments() {
        let cli = Cli::try_parse_from([
            "forgeiq", "report", "business", "--range", "7d", "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Report {
                view, range, json, ..
            } => {
                assert_eq!(view, ViewKind::Business);
                assert_eq!(range, TimeRange::Days7);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_schedule_cadence() {
        let cli = Cli::try_parse_from([
            "forgeiq", "schedule", "--every", "15m", "--risk", "87", "--degrading",
        ])
        .unwrap();
        match cli.command {
            Command::Schedule {
                every, degrading, ..
            } => {
                assert_eq!(every, TestFrequency::from_minutes(15));
                assert!(degrading);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn accepts_negative_readings() {
        let cli = Cli::try_parse_from(["forgeiq", "classify", "sla", "-0.3"]).unwrap();
        match cli.command {
            Command::Classify { metric, value, .. } => {
                assert!(matches!(metric, MetricArg::Sla));
                assert_eq!(value, "-0.3");
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::try_parse_from(["forgeiq", "classify", "risk", "-5"]).unwrap();
        assert!(matches!(cli.command, Command::Classify { ref value, .. } if value == "-5"));

        let cli = Cli::try_parse_from([
            "forgeiq", "schedule", "--every", "30m", "--risk", "-5",
        ])
        .unwrap();
        match cli.command {
            Command::Schedule { risk, .. } => assert_eq!(risk, -5.0),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_readings_classify_without_error() {
        let config = ForgeConfig::default();
        assert!(classify(&config, MetricArg::Sla, "-0.3", None, false).is_ok());
        assert!(classify(&config, MetricArg::Risk, "-5", None, false).is_ok());
    }

    #[test]
    fn rejects_unknown_view() {
        assert!(Cli::try_parse_from(["forgeiq", "report", "nope"]).is_err());
    }

    #[test]
    fn classify_rejects_non_numeric_values() {
        let err = classify(&ForgeConfig::default(), MetricArg::Risk, "high", None, false)
            .unwrap_err();
        assert!(err.to_string().contains("not a number"));
        assert!(classify(&ForgeConfig::default(), MetricArg::Label, "severe", None, false).is_ok());
    }
}
