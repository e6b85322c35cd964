// File: crates/demo/src/main.rs
// Summary: Demo loads candlestick records (CSV/JSON), applies group/toggle selections and an optional
// prediction, then prints a per-row summary and writes the composed frame as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use dashboard_core::prediction::JsonFileSource;
use dashboard_core::{load_records, DashboardConfig, IndicatorRegistry, PlotRegion, SeriesPoints, Session};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    symbol: Option<String>,
    group: Option<String>,
    toggles: Vec<String>,
    prediction: Option<PathBuf>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
    list: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let registry = Arc::new(IndicatorRegistry::standard());

    if args.list {
        print_catalog(&registry);
        return Ok(());
    }

    let input = args.input.clone().context("usage: dashboard-demo <records.csv|records.json> [--symbol S] [--group G] [--toggle KEY]... [--prediction P.json] [--config C.json] [--out OUT.json] [--list]")?;
    if !input.exists() {
        anyhow::bail!("file not found: {}", input.display());
    }
    info!(path = %input.display(), "using input file");

    let config = match &args.config {
        Some(p) => DashboardConfig::from_json_file(p).with_context(|| format!("failed to load config '{}'", p.display()))?,
        None => DashboardConfig::default(),
    }
    .with_env_overrides();

    let records = load_records(&input).with_context(|| format!("failed to load records '{}'", input.display()))?;
    info!(count = records.len(), "loaded records");
    if records.is_empty() {
        warn!("no records loaded; every series will be empty");
    }

    let symbol = args.symbol.clone().unwrap_or_else(|| symbol_from_path(&input));
    let mut session = Session::new(registry, config)?;
    session.navigate(symbol.clone(), records);

    if let Some(group) = &args.group {
        session.select_group(group).with_context(|| format!("cannot select group '{group}'"))?;
    }
    for key in &args.toggles {
        session.toggle_indicator(key).with_context(|| format!("cannot toggle '{key}'"))?;
    }

    if let Some(path) = &args.prediction {
        let source = JsonFileSource::new(path);
        let kept = session.request_default_prediction(&source)?;
        if !kept {
            warn!(path = %path.display(), "prediction not applied");
        }
    }

    let frame = session.render();
    if let Some(e) = &frame.overlay_error {
        warn!(error = %e, "prediction overlay omitted");
    }
    if let Some(e) = session.last_error() {
        warn!(error = %e, "upstream error");
    }

    println!("{}", frame.layout.title);
    println!(
        "Active group: {} (matches: {})",
        session.state().active_group(),
        session.matching_group().unwrap_or("custom")
    );
    for region in PlotRegion::ALL {
        let row = frame.layout.row(region);
        println!("[{}] {}", row.axis_id, row.title);
        for s in frame.layout.series_in(region, &frame.series) {
            let mark = if s.visible { "x" } else { " " };
            let gaps = match &s.points {
                SeriesPoints::Values(_) => format!(", {} gaps", s.points.gap_count()),
                SeriesPoints::Ohlc(_) => String::new(),
            };
            println!("  [{mark}] {:<24} {} points{gaps}", s.label, s.points.len());
        }
    }

    let out = args.out.clone().unwrap_or_else(|| out_name(&symbol));
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let body = serde_json::json!({
        "layout": frame.layout,
        "active_group": session.state().active_group(),
        "enabled": session.state().enabled(),
        "series": frame.series,
    });
    std::fs::write(&out, serde_json::to_string_pretty(&body)?)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} expects a value"));
        match a.as_str() {
            "--symbol" => args.symbol = Some(value("--symbol")?),
            "--group" => args.group = Some(value("--group")?),
            "--toggle" => args.toggles.push(value("--toggle")?),
            "--prediction" => args.prediction = Some(PathBuf::from(value("--prediction")?)),
            "--config" => args.config = Some(PathBuf::from(value("--config")?)),
            "--out" => args.out = Some(PathBuf::from(value("--out")?)),
            "--list" => args.list = true,
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag: {flag}"),
            _ if args.input.is_none() => args.input = Some(PathBuf::from(a)),
            _ => anyhow::bail!("unexpected argument: {a}"),
        }
    }
    Ok(args)
}

fn print_catalog(registry: &IndicatorRegistry) {
    println!("Subplot groups:");
    for g in registry.groups() {
        println!("  {:<20} {} indicators", g.name, g.members.len());
    }
    println!("Indicators:");
    for spec in registry.indicators() {
        println!(
            "  {:<16} {:<24} {:?} ({})",
            spec.key,
            spec.label,
            spec.region,
            dashboard_core::checkbox_label(&spec.key)
        );
    }
}

/// "AAPL_1d_2023.csv" -> "AAPL"
fn symbol_from_path(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.split('_').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("UNKNOWN")
        .to_uppercase()
}

/// Produce output file name like target/out/dashboard_<symbol>.json
fn out_name(symbol: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!("dashboard_{}.json", symbol.to_lowercase()));
    out
}
