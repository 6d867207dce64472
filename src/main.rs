//! ClarityScope CLI
//!
//! Scores an activity log and renders the daily dashboard figures.
//! The orchestration order is fixed: load preferences, import the log,
//! recompute scores, then (optionally) request insights. Insight
//! failures never touch already-computed scores.

use chrono::{DateTime, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use clarity_scope::{
    config::Config,
    core::{
        analyze_daily, compute_scores, default_productive_apps, series_average, summarize,
        ActivityEvent, DailySummary, PeakAnalysis, ScorePoint, ScoringConfig,
    },
    import,
    insight::{BlockingInsightClient, InsightConfig, InsightRequest, InsightResponse},
    sample, VERSION,
};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "clarity-scope")]
#[command(version = VERSION)]
#[command(about = "Local-first focus and stress analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an activity log and print the daily summary
    Analyze {
        /// Path to a JSON activity log (array or `{ "logs": [...] }`)
        input: PathBuf,

        /// Window length in minutes (overrides config)
        #[arg(long)]
        window_minutes: Option<u64>,

        /// Request daily/weekly insights from the insight service
        #[arg(long)]
        insight: bool,

        /// Insight service base URL (overrides config)
        #[arg(long)]
        insight_url: Option<String>,

        /// Average focus score for the previous week, if known
        #[arg(long)]
        last_week_focus: Option<f64>,

        /// Write the full analysis as JSON to this path
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the full analysis as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage the productive application list
    Apps {
        #[command(subcommand)]
        action: AppsAction,
    },

    /// Generate a synthetic activity log
    Generate {
        /// Output path for the generated log
        #[arg(long, short, default_value = "sample_logs.json")]
        output: PathBuf,

        /// Hours of activity to simulate
        #[arg(long, default_value = "8")]
        hours: u32,
    },

    /// Show configuration
    Config,
}

#[derive(Subcommand)]
enum AppsAction {
    /// List the productive applications
    List,
    /// Add an application to the list
    Add { name: String },
    /// Remove an application from the list
    Remove { name: String },
    /// Restore the default list
    Reset,
}

/// Full analysis bundle for JSON export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport {
    report_id: Uuid,
    generated_at: DateTime<Utc>,
    window_minutes: i64,
    event_count: usize,
    metrics: Vec<ScorePoint>,
    daily_summary: DailySummary,
    analysis: PeakAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<InsightResponse>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            window_minutes,
            insight,
            insight_url,
            last_week_focus,
            output,
            json,
        } => {
            cmd_analyze(
                input,
                window_minutes,
                insight,
                insight_url,
                last_week_focus,
                output,
                json,
            );
        }
        Commands::Apps { action } => {
            cmd_apps(action);
        }
        Commands::Generate { output, hours } => {
            cmd_generate(output, hours);
        }
        Commands::Config => {
            cmd_config();
        }
    }
}

fn cmd_analyze(
    input: PathBuf,
    window_minutes: Option<u64>,
    insight: bool,
    insight_url: Option<String>,
    last_week_focus: Option<f64>,
    output: Option<PathBuf>,
    json: bool,
) {
    let config = Config::load().unwrap_or_default();

    let productive_apps = match config.load_productive_apps() {
        Ok(apps) => apps,
        Err(e) => {
            tracing::warn!("Could not load productive apps ({e}); using defaults");
            default_productive_apps()
        }
    };

    let mut events = match import::load_log_file(&input) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    // The engine requires a time-ordered log; ordering is the caller's job.
    events.sort_by_key(|e| e.timestamp);

    let window = match window_minutes {
        Some(0) => {
            eprintln!("Error: window length must be at least one minute");
            std::process::exit(1);
        }
        Some(m) => chrono::Duration::minutes(m as i64),
        None => config.window(),
    };
    let scoring = ScoringConfig::default();

    let metrics = compute_scores(&events, &productive_apps, window, &scoring);
    let summary = summarize(&metrics);
    let analysis = analyze_daily(&metrics);

    let insights = if insight {
        Some(request_insights(
            &config,
            &events,
            &productive_apps,
            window,
            &scoring,
            &metrics,
            &summary,
            &analysis,
            insight_url,
            last_week_focus,
        ))
    } else {
        None
    };

    let report = AnalysisReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        window_minutes: window.num_minutes(),
        event_count: events.len(),
        metrics,
        daily_summary: summary,
        analysis,
        insights,
    };

    if let Some(ref path) = output {
        match serde_json::to_string_pretty(&report) {
            Ok(content) => {
                if let Err(e) = std::fs::write(path, content) {
                    eprintln!("Error writing report: {e}");
                } else {
                    println!("Wrote analysis report to {path:?}");
                }
            }
            Err(e) => {
                eprintln!("Error serializing report: {e}");
            }
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        render_report(&report);
    }
}

fn render_report(report: &AnalysisReport) {
    let summary = &report.daily_summary;
    let analysis = &report.analysis;

    println!("ClarityScope v{VERSION}");
    println!();
    println!("Events analyzed: {}", report.event_count);
    println!(
        "Windows scored:  {} ({} min each)",
        report.metrics.len(),
        report.window_minutes
    );
    println!();
    println!("Current focus:   {:.0} / 100", summary.current.focus);
    println!("Current stress:  {:.0} / 100", summary.current.stress);
    println!("{}", summary.headline);
    println!();
    println!(
        "Peak focus at {}, peak stress at {}.",
        analysis.peak_focus_time, analysis.peak_stress_time
    );

    if let Some(ref insights) = report.insights {
        println!();
        println!("Daily insight:   {}", insights.daily_insight);
        println!("Weekly insight:  {}", insights.weekly_insight);
    }
}

/// Request insights for an already-computed analysis.
///
/// Always returns a usable pair: an empty series short-circuits, a
/// missing service or failed call degrades to the fixed fallbacks.
#[allow(clippy::too_many_arguments)]
fn request_insights(
    config: &Config,
    events: &[ActivityEvent],
    productive_apps: &[String],
    window: chrono::Duration,
    scoring: &ScoringConfig,
    metrics: &[ScorePoint],
    summary: &DailySummary,
    analysis: &PeakAnalysis,
    insight_url: Option<String>,
    last_week_focus: Option<f64>,
) -> InsightResponse {
    if metrics.is_empty() {
        return InsightResponse::not_enough_data();
    }

    let Some(url) = insight_url.or_else(|| config.insight_url.clone()) else {
        tracing::warn!("No insight service configured; using fallback insights");
        return InsightResponse::fallback();
    };

    let last_week = last_week_focus
        .unwrap_or_else(|| trailing_week_focus(events, productive_apps, window, scoring));
    let request = InsightRequest::from_analysis(analysis, summary.weekly_average.focus, last_week);

    let client = match BlockingInsightClient::new(InsightConfig::new(url)) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Insight client initialization failed: {e}");
            return InsightResponse::fallback();
        }
    };

    match client.generate(&request) {
        Ok(response) => response,
        Err(e) => {
            // Scores stand regardless; a failed call only degrades the text.
            tracing::warn!("Insight generation failed: {e}");
            InsightResponse::fallback()
        }
    }
}

/// Average focus over the windows falling in the trailing seven days.
fn trailing_week_focus(
    events: &[ActivityEvent],
    productive_apps: &[String],
    window: chrono::Duration,
    scoring: &ScoringConfig,
) -> f64 {
    let cutoff = (Utc::now() - chrono::Duration::days(7))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc();

    let recent: Vec<ActivityEvent> = events
        .iter()
        .filter(|e| e.timestamp > cutoff)
        .cloned()
        .collect();

    let points = compute_scores(&recent, productive_apps, window, scoring);
    series_average(&points).focus
}

fn cmd_apps(action: AppsAction) {
    let config = Config::load().unwrap_or_default();

    let mut apps = match config.load_productive_apps() {
        Ok(apps) => apps,
        Err(e) => {
            eprintln!("Error loading productive apps: {e}");
            std::process::exit(1);
        }
    };

    match action {
        AppsAction::List => {}
        AppsAction::Add { name } => {
            if apps.iter().any(|a| a == &name) {
                println!("'{name}' is already on the list.");
            } else {
                apps.push(name);
                save_apps(&config, &apps);
            }
        }
        AppsAction::Remove { name } => {
            let before = apps.len();
            apps.retain(|a| a != &name);
            if apps.len() == before {
                println!("'{name}' is not on the list.");
            } else {
                save_apps(&config, &apps);
            }
        }
        AppsAction::Reset => {
            apps = default_productive_apps();
            save_apps(&config, &apps);
        }
    }

    println!("Productive applications:");
    for app in &apps {
        println!("  {app}");
    }
}

fn save_apps(config: &Config, apps: &[String]) {
    if let Err(e) = config.save_productive_apps(apps) {
        eprintln!("Error saving productive apps: {e}");
        std::process::exit(1);
    }
}

fn cmd_generate(output: PathBuf, hours: u32) {
    let start = Utc::now() - chrono::Duration::hours(i64::from(hours));
    let logs = sample::generate_daily_log(start, hours);

    let document = serde_json::json!({ "logs": &logs });
    match serde_json::to_string_pretty(&document) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&output, json) {
                eprintln!("Error writing sample log: {e}");
                std::process::exit(1);
            }
            println!("Generated {} events to {:?}", logs.len(), output);
        }
        Err(e) => {
            eprintln!("Error serializing sample log: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_config() {
    let config = Config::load().unwrap_or_default();

    println!("Configuration");
    println!("=============");
    println!();
    println!("Config file: {:?}", Config::config_path());
    println!("Productive apps: {:?}", config.productive_apps_path());
    println!();
    println!(
        "{}",
        serde_json::to_string_pretty(&config).unwrap_or_else(|_| "Error".to_string())
    );
}
