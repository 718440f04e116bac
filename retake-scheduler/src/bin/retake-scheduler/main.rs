mod os_signal_termination;
mod render;
mod result;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::CliResult;
use retake_engine::statistics::configure_statistic_logging;
use retake_engine::termination::Combinator;
use retake_engine::termination::TimeBudget;
use retake_scheduler::config::default_agenda;
use retake_scheduler::config::VariableSelection;
use retake_scheduler::schedule_with_termination;
use retake_scheduler::Availability;
use retake_scheduler::Roster;
use retake_scheduler::SchedulerOptions;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The weekly availability of every course, as a JSON object mapping every course to an
    /// object which maps every day label to a list of flags (0 = free, 1 = busy), one per period.
    #[clap(verbatim_doc_comment)]
    availability_path: PathBuf,

    /// The roster, as a JSON object mapping every course to an object which maps every student
    /// to the list of subjects they retake.
    #[clap(verbatim_doc_comment)]
    roster_path: PathBuf,

    /// The number of periods in a day. When omitted, it is taken from the first course on the
    /// first day of the agenda.
    ///
    /// Possible values: usize (Optional)
    #[arg(short = 'p', long = "periods-per-day", verbatim_doc_comment)]
    periods_per_day: Option<usize>,

    /// The labels of the day-instances in which exams can take place, in order. A label may be
    /// repeated, for example to cover several weeks; every occurrence uses the weekly
    /// availability of that label.
    #[arg(
        long = "agenda",
        value_delimiter = ',',
        default_values_t = default_agenda(),
        verbatim_doc_comment
    )]
    agenda: Vec<String>,

    /// The time budget for the search, given in milliseconds. When it runs out, the best
    /// timetable found so far is reported.
    ///
    /// Possible values: u64
    #[arg(
        short = 't',
        long = "time-limit",
        default_value_t = 10_000,
        verbatim_doc_comment
    )]
    time_limit: u64,

    /// The maximum number of exams a student sits on a single day.
    ///
    /// Possible values: u32
    #[arg(long = "max-daily-exams", default_value_t = 3, verbatim_doc_comment)]
    max_daily_exams: u32,

    /// The order in which exams are assigned during search.
    #[arg(long = "variable-selection", value_enum, default_value_t)]
    variable_selection: VariableSelection,

    /// Writes the timetable as JSON to the given path.
    #[arg(short = 'o', long = "output", verbatim_doc_comment)]
    output_path: Option<PathBuf>,

    /// Enables log message output from the scheduler.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the model and the engine.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%% stat:", None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if retake_engine::asserts::RETAKE_ASSERT_LEVEL_DEFINITION
        >= retake_engine::asserts::RETAKE_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            retake_engine::asserts::RETAKE_ASSERT_LEVEL_DEFINITION
        );
    };

    let availability = Availability::read(&args.availability_path)?;
    let roster = Roster::read(&args.roster_path)?;

    let options = SchedulerOptions {
        periods_per_day: args.periods_per_day,
        agenda: args.agenda,
        time_budget: Duration::from_millis(args.time_limit),
        max_daily_exams_per_student: args.max_daily_exams,
        variable_selection: args.variable_selection,
    };

    let mut termination = Combinator::new(
        OsSignal::install()?,
        TimeBudget::starting_now(options.time_budget),
    );

    let timetable = schedule_with_termination(&availability, &roster, &options, &mut termination)?;

    let stdout = std::io::stdout();
    render::write_timetable(&mut stdout.lock(), &timetable)?;

    if let Some(output_path) = args.output_path {
        let mut writer = BufWriter::new(File::create(&output_path)?);
        serde_json::to_writer_pretty(&mut writer, &timetable)?;
        writer.flush()?;
        info!("Timetable written to {}", output_path.display());
    }

    Ok(())
}
