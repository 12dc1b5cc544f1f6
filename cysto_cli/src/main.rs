use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use cysto_core::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cystoplan")]
#[command(
    about = "Bladder cancer risk stratification and surveillance planning",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override export output directory
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess a case and plan surveillance (default)
    Assess(AssessArgs),
}

#[derive(Args, Default)]
struct AssessArgs {
    /// Tumour grade (low, high)
    #[arg(long)]
    grade: Option<String>,

    /// Tumour stage (Ta, T1, CIS)
    #[arg(long)]
    stage: Option<String>,

    /// Tumour size (<3cm, >3cm)
    #[arg(long)]
    size: Option<String>,

    /// Number of tumours (single, multiple)
    #[arg(long)]
    number: Option<String>,

    /// Prior recurrence (yes, no)
    #[arg(long)]
    recurrence: Option<String>,

    /// CIS present (yes, no)
    #[arg(long)]
    cis: Option<String>,

    /// Date of TURBT (YYYY-MM-DD); enables schedule generation
    #[arg(long)]
    date: Option<String>,

    /// Write the plain-text treatment report
    #[arg(long)]
    report: bool,

    /// Write the surveillance schedule as an iCalendar file
    #[arg(long)]
    calendar: bool,

    /// Print the assessment as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Machine-readable assessment result for --json output
#[derive(serde::Serialize)]
struct Assessment<'a> {
    case: &'a CaseDescriptor,
    risk: RiskCategory,
    risk_label: &'static str,
    treatment: &'a str,
    schedule: &'a [NaiveDate],
}

fn main() -> Result<()> {
    // Initialize logging
    cysto_core::logging::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Some(Commands::Assess(args)) => cmd_assess(args, cli.output_dir, &config),
        None => {
            // Default to "assess" with an empty case
            cmd_assess(AssessArgs::default(), cli.output_dir, &config)
        }
    }
}

fn cmd_assess(args: AssessArgs, output_dir: Option<PathBuf>, config: &Config) -> Result<()> {
    let case = build_case(&args)?;

    let category = classify(&case);
    let treatment = recommend(category);

    // Schedule generation needs an anchor date; without one the assessment
    // still classifies and recommends, it just plans no visits.
    let schedule = match args.date.as_deref() {
        Some(value) => {
            let anchor = parse_anchor(value)?;
            generate_schedule(anchor, category)?
        }
        None => Vec::new(),
    };

    if args.json {
        let assessment = Assessment {
            case: &case,
            risk: category,
            risk_label: category.label(),
            treatment,
            schedule: &schedule,
        };
        println!("{}", serde_json::to_string_pretty(&assessment).map_err(Error::from)?);
    } else {
        display_assessment(category, treatment, &schedule);
    }

    let output_dir = output_dir.unwrap_or_else(|| config.export.output_dir.clone());

    if args.report {
        let path = output_dir.join(&config.export.report_filename);
        std::fs::write(&path, plain_text_report(category, treatment))?;
        println!("✓ Report written to {}", path.display());
    }

    if args.calendar {
        match calendar_feed(&schedule) {
            Some(ics) => {
                let path = output_dir.join(&config.export.calendar_filename);
                std::fs::write(&path, ics)?;
                println!("✓ Calendar written to {}", path.display());
            }
            None => {
                tracing::info!("no schedule generated, skipping calendar export");
                println!("No schedule to export - provide --date to generate one.");
            }
        }
    }

    Ok(())
}

/// Build the case descriptor from the discrete form selections
fn build_case(args: &AssessArgs) -> Result<CaseDescriptor> {
    Ok(CaseDescriptor {
        grade: args.grade.as_deref().map(parse_grade).transpose()?,
        stage: args.stage.as_deref().map(parse_stage).transpose()?,
        size: args.size.as_deref().map(parse_size).transpose()?,
        number: args.number.as_deref().map(parse_number).transpose()?,
        recurrence: args
            .recurrence
            .as_deref()
            .map(|v| parse_yes_no("recurrence", v))
            .transpose()?,
        cis: args
            .cis
            .as_deref()
            .map(|v| parse_yes_no("cis", v))
            .transpose()?,
    })
}

fn parse_grade(value: &str) -> Result<Grade> {
    match value.to_lowercase().as_str() {
        "low" => Ok(Grade::Low),
        "high" => Ok(Grade::High),
        _ => Err(Error::InvalidArgument(format!(
            "unknown grade: {} (expected low or high)",
            value
        ))),
    }
}

fn parse_stage(value: &str) -> Result<Stage> {
    match value.to_lowercase().as_str() {
        "ta" => Ok(Stage::Ta),
        "t1" => Ok(Stage::T1),
        "cis" => Ok(Stage::Cis),
        _ => Err(Error::InvalidArgument(format!(
            "unknown stage: {} (expected Ta, T1 or CIS)",
            value
        ))),
    }
}

fn parse_size(value: &str) -> Result<TumourSize> {
    match value {
        "<3cm" => Ok(TumourSize::UnderThreeCm),
        ">3cm" => Ok(TumourSize::OverThreeCm),
        _ => Err(Error::InvalidArgument(format!(
            "unknown size: {} (expected <3cm or >3cm)",
            value
        ))),
    }
}

fn parse_number(value: &str) -> Result<TumourCount> {
    match value.to_lowercase().as_str() {
        "single" => Ok(TumourCount::Single),
        "multiple" => Ok(TumourCount::Multiple),
        _ => Err(Error::InvalidArgument(format!(
            "unknown number: {} (expected single or multiple)",
            value
        ))),
    }
}

fn parse_yes_no(field: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(Error::InvalidArgument(format!(
            "unknown {}: {} (expected yes or no)",
            field, value
        ))),
    }
}

fn display_assessment(category: RiskCategory, treatment: &str, schedule: &[NaiveDate]) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BLADDER CANCER RISK STRATIFICATION");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Risk Category: {}", category);
    println!();
    println!("  Treatment Plan:");
    println!("  {}", treatment);

    if !schedule.is_empty() {
        println!();
        println!("  Surveillance Schedule:");
        for date in schedule {
            println!("  → {}", date.format("%Y-%m-%d"));
        }
    }

    println!();
}
