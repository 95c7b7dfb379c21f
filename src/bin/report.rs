use std::{fs, sync::OnceLock};

use clap::Parser;
use numfmt::{Formatter, Precision};
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use foreman_reports::{
    Granularity, Project, accumulate, progress, resource_summary, revenue_report, volume_report,
};

/// Prints the dashboard report rollups for a project document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the project JSON document.
    project_path: String,

    /// The rollup resolution for the report.
    #[arg(short, long, default_value_t = Granularity::Weekly)]
    granularity: Granularity,

    /// Leave the project-wide ceilings off the generated buckets.
    #[arg(long)]
    no_totals: bool,

    /// Only print the revenue view.
    #[arg(long)]
    revenue_only: bool,
}

fn main() {
    setup_logging();

    let args = Args::parse();

    let json = fs::read_to_string(&args.project_path).expect("Could not read the project file.");
    let project = Project::from_json(&json).expect("Could not parse the project file.");

    tracing::info!(
        "Loaded project starting {} with {} daily records.",
        project.start_date,
        project.reports.daily.len()
    );

    if !args.revenue_only {
        print_volume_report(&project, &args);
        print_resource_summary(&project);
    }

    print_revenue_report(&project, &args);
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_filter(
                    filter::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| filter::EnvFilter::new("info")),
                ),
        )
        .init();
}

fn print_volume_report(project: &Project, args: &Args) {
    let buckets = volume_report(project, args.granularity, !args.no_totals);

    println!("Progress report ({})", args.granularity);
    println!(
        "{:<12} {:>10} {:>10} {:>12} {:>14}",
        "period", "plan", "actual", "target plan", "target actual"
    );
    for bucket in &buckets {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>12.2} {:>14.2}",
            bucket.key.to_string(),
            bucket.period_plan,
            bucket.period_actual,
            bucket.target_plan,
            bucket.target_actual,
        );
    }

    println!();
    println!("Cumulative progress");
    println!(
        "{:<12} {:>16} {:>22}",
        "period", "volume to date", "target volume to date"
    );
    for point in accumulate(&buckets) {
        println!(
            "{:<12} {:>16.2} {:>22.2}",
            point.key.to_string(),
            point.volume_to_date,
            point.target_volume_to_date,
        );
    }

    println!();
    match progress(&buckets) {
        Some(percentage) => println!("Overall progress: {percentage:.1}%"),
        None => println!("Overall progress: unknown (no plan data)"),
    }
    println!();
}

fn print_revenue_report(project: &Project, args: &Args) {
    let buckets = revenue_report(project, args.granularity, !args.no_totals);

    println!("Revenue report ({})", args.granularity);
    println!(
        "{:<12} {:>14} {:>14} {:>14}",
        "period", "revenue", "paid", "of total"
    );
    for bucket in &buckets {
        println!(
            "{:<12} {:>14} {:>14} {:>14}",
            bucket.key.to_string(),
            format_currency(bucket.period_revenue),
            format_currency(bucket.period_paid),
            format_currency(bucket.total_revenue),
        );
    }
    println!();
}

fn print_resource_summary(project: &Project) {
    let summary = resource_summary(&project.reports.daily);
    if summary.workers.is_empty() && summary.equipment.is_empty() {
        return;
    }

    println!("Resource summary");

    let mut workers: Vec<_> = summary.workers.iter().collect();
    workers.sort();
    for (category, total) in workers {
        println!("  {category}: {total} worker-days");
    }

    let mut equipment: Vec<_> = summary.equipment.iter().collect();
    equipment.sort();
    for (category, total) in equipment {
        println!("  {category}: {total} equipment-days");
    }

    println!("  peak daily workers: {}", summary.peak_daily_workers);
    println!();
}

fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}
