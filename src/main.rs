use clap::Parser;
use course_fit::{
    args::Args,
    course::{load_course_table, InputError},
    model::{
        config::ConfigError,
        error::PlayerFailure,
        form::SyntheticForm,
        profile::{ProfileSource, StaticProfileSource, SyntheticProfileSource},
        random::SeededRandom,
        ranker::Ranker,
        structures::output_format::OutputFormat
    },
    report::{default_roster, generate_report, render_json, render_text, RosterError, TierRoster},
    utils::logging::init_tracing
};
use thiserror::Error;
use tracing::{error, info};

const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 2;
const EXIT_ABORTED: i32 = 3;
const EXIT_SOURCES: i32 = 4;

#[derive(Debug, Error)]
enum RunError {
    #[error("Invalid scoring configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load course table: {0}")]
    Course(#[source] InputError),

    #[error("Failed to load player profiles: {0}")]
    Profiles(#[source] InputError),

    #[error("Failed to load roster: {0}")]
    Roster(#[from] RosterError),

    #[error("Ranking aborted: {0}")]
    Aborted(#[from] PlayerFailure),

    #[error("Failed to serialize report: {0}")]
    Output(#[from] serde_json::Error)
}

impl RunError {
    fn exit_code(&self) -> i32 {
        match self {
            RunError::Course(_) => EXIT_INPUT,
            RunError::Config(_) => EXIT_CONFIG,
            RunError::Aborted(_) => EXIT_ABORTED,
            RunError::Profiles(_) | RunError::Roster(_) | RunError::Output(_) => EXIT_SOURCES
        }
    }
}

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        if let RunError::Course(_) = e {
            error!("No tier can be ranked without a valid course table");
        }

        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let config = args.scoring_config();
    config.validate()?;

    let table = load_course_table(&args.course, &args.column_names()).map_err(RunError::Course)?;

    let roster = match &args.roster {
        Some(path) => TierRoster::load(path)?,
        None => default_roster()
    };

    // Fork order is fixed so a seed always maps to the same streams
    let mut random = SeededRandom::new(args.seed);
    let synthetic_profiles = SyntheticProfileSource::new(random.fork());
    let recent = SyntheticForm::recent(random.fork());
    let historical = SyntheticForm::historical(random.fork());

    let profiles: Box<dyn ProfileSource> = match &args.profiles {
        Some(path) => Box::new(StaticProfileSource::load(path).map_err(RunError::Profiles)?),
        None => Box::new(synthetic_profiles)
    };

    let mut ranker = Ranker::new(
        config,
        args.on_player_error,
        profiles,
        Box::new(recent),
        Box::new(historical)
    )?;

    let course = args.course_label();
    info!(
        course = %course,
        tiers = roster.len(),
        players = roster.player_count(),
        seed = args.seed,
        policy = %args.on_player_error,
        "Ranking roster"
    );

    let report = generate_report(&course, &table, &roster, &mut ranker)?;

    match args.format {
        OutputFormat::Table => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?)
    }

    Ok(())
}
