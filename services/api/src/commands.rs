use crate::infra::{parse_life_path, system_insights_service};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use vibeworks_hub::config::{AppConfig, InsightsConfig};
use vibeworks_hub::error::AppError;
use vibeworks_hub::insights::{
    parse_date, DailyTiming, DealProbability, LaunchWindow, LifePathNumber, NumerologyReport,
    PipelineReport,
};

#[derive(Args, Debug)]
pub(crate) struct NumerologyArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: NaiveDate,
    /// First name used in the greeting
    #[arg(long)]
    pub(crate) first_name: Option<String>,
    /// Override "today" (defaults to the reference time zone's date)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Hour of day (0-23) for the greeting; defaults to the current hour
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
    pub(crate) hour: Option<u32>,
    /// Print the JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DealArgs {
    /// Deal value in dollars
    #[arg(long)]
    pub(crate) value: f64,
    /// Pipeline stage of the deal
    #[arg(long, default_value = "Discovery")]
    pub(crate) stage: String,
    /// Life path number of the deal owner
    #[arg(long, value_parser = parse_life_path)]
    pub(crate) life_path: LifePathNumber,
    /// Override "today" (defaults to the reference time zone's date)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DailyArgs {
    /// Life path number of the user
    #[arg(long, value_parser = parse_life_path)]
    pub(crate) life_path: LifePathNumber,
    /// User id used to personalise the tarot draw and scores
    #[arg(long)]
    pub(crate) user_id: Option<String>,
    /// Override "today" (defaults to the reference time zone's date)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct LaunchDaysArgs {
    /// First day to consider (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: Option<NaiveDate>,
    /// Number of days to scan (defaults to APP_LAUNCH_WINDOW_DAYS)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=366))]
    pub(crate) window: Option<u32>,
    /// Print the JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PipelineArgs {
    /// CRM export with Name, Value and Stage columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Life path number of the pipeline owner
    #[arg(long, value_parser = parse_life_path)]
    pub(crate) life_path: LifePathNumber,
    /// Override "today" (defaults to the reference time zone's date)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the JSON payload instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

fn insights_config() -> Result<InsightsConfig, AppError> {
    Ok(AppConfig::load()?.insights)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("JSON payload unavailable: {err}"),
    }
}

pub(crate) fn run_numerology(args: NumerologyArgs) -> Result<(), AppError> {
    let service = system_insights_service(&insights_config()?);
    let report = service.numerology(
        args.birth_date,
        args.first_name.as_deref(),
        args.today,
        args.hour,
    )?;

    if args.json {
        print_json(&report);
    } else {
        render_numerology(&report);
    }
    Ok(())
}

pub(crate) fn run_deal(args: DealArgs) -> Result<(), AppError> {
    let service = system_insights_service(&insights_config()?);
    let today = service.today(args.today);
    let result = service.deal_probability(args.value, &args.stage, args.life_path, Some(today));

    if args.json {
        print_json(&result);
    } else {
        render_deal(&args.stage, args.value, today, &result);
    }
    Ok(())
}

pub(crate) fn run_daily(args: DailyArgs) -> Result<(), AppError> {
    let service = system_insights_service(&insights_config()?);
    let timing = service.daily(args.life_path, args.user_id.as_deref(), args.today);

    if args.json {
        print_json(&timing);
    } else {
        render_daily(&timing);
    }
    Ok(())
}

pub(crate) fn run_launch_days(args: LaunchDaysArgs) -> Result<(), AppError> {
    let mut config = insights_config()?;
    if let Some(window) = args.window {
        config.launch_window_days = window;
    }
    let service = system_insights_service(&config);
    let window = service.launch_days(args.from);

    if args.json {
        print_json(&window);
    } else {
        render_launch_days(&window);
    }
    Ok(())
}

pub(crate) fn run_pipeline(args: PipelineArgs) -> Result<(), AppError> {
    let service = system_insights_service(&insights_config()?);
    let file = std::fs::File::open(&args.csv)?;
    let report = service.pipeline(file, args.life_path, args.today)?;

    if args.json {
        print_json(&report);
    } else {
        render_pipeline(&args.csv, &report);
    }
    Ok(())
}

fn render_numerology(report: &NumerologyReport) {
    println!("{}", report.greeting);
    println!("{}", report.subtitle);
    println!(
        "\nLife Path {}{} - {}",
        report.life_path_number,
        if report.is_master_number {
            " (master number)"
        } else {
            ""
        },
        report.profile.title
    );
    println!("  {}", report.profile.description);
    println!("  Strengths: {}", report.profile.strengths.join(", "));
    println!(
        "Sun sign: {} {}",
        report.sun_sign_glyph,
        report.sun_sign.label()
    );
    println!(
        "Universal Day {} on {}: {}",
        report.universal_day_number, report.today, report.universal_day_energy
    );
}

fn render_deal(stage: &str, value: f64, today: NaiveDate, result: &DealProbability) {
    println!("Deal probability for {today}");
    println!("- Stage {stage} | value ${value:.2}");
    println!(
        "- {}% closing probability ({:?} confidence)",
        result.probability, result.confidence
    );
    println!("- {}", result.recommendation);
    if result.factors.is_empty() {
        println!("Factors: none");
    } else {
        println!("Factors:");
        for factor in &result.factors {
            println!("  - {factor}");
        }
    }
}

fn render_daily(timing: &DailyTiming) {
    println!("Business timing for {}", timing.date);
    println!(
        "- Universal Day {}: {}",
        timing.universal_day_number, timing.universal_day_energy
    );
    println!(
        "- {} {} ({}% illuminated): {}",
        timing.moon_phase.emoji,
        timing.moon_phase.phase.label(),
        timing.moon_phase.illumination,
        timing.moon_phase.business_guidance
    );
    println!(
        "- Tarot: {} {}{}",
        timing.tarot.emoji,
        timing.tarot.name,
        if timing.tarot.reversed { " (reversed)" } else { "" }
    );
    println!("  {}", timing.tarot.business_meaning);
    println!(
        "- Next full moon {} | next new moon {}",
        timing.next_full_moon, timing.next_new_moon
    );
    println!("Category scores:");
    for recommendation in &timing.business_recommendations {
        println!(
            "  - {}: {}/10 | {}",
            recommendation.category.label(),
            recommendation.score,
            recommendation.recommendation
        );
        if !recommendation.reasoning.is_empty() {
            println!("    {}", recommendation.reasoning.trim_end());
        }
    }
}

fn render_launch_days(window: &LaunchWindow) {
    println!(
        "Launch days within {} days of {}",
        window.window_days, window.from
    );
    if window.days.is_empty() {
        println!("- none aligned; widen the window with --window");
        return;
    }
    for day in &window.days {
        println!("- {}", day.format("%A %Y-%m-%d"));
    }
}

fn render_pipeline(source: &std::path::Path, report: &PipelineReport) {
    println!(
        "Pipeline scores for {} ({} deals from {})",
        report.today,
        report.deals.len(),
        source.display()
    );
    for deal in &report.deals {
        println!(
            "- {:>3}% {} | {} | ${:.2}",
            deal.probability.probability, deal.name, deal.stage, deal.value
        );
        println!("       {}", deal.probability.recommendation);
    }
}
