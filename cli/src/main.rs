use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use leaders::{
    pipeline::{self, Paths},
    Role,
};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;

/// Projects next-season ERA and wOBA leaderboards from this season's stats.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Directory holding the season stats CSVs and model files
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Where leaderboards are written [default: same as --dir]
    #[arg(short = 'o', long = "out-dir", value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Roles to project: starter, batter, reliever [default: all]
    #[arg(short = 'r', long = "role")]
    roles: Vec<Role>,

    /// Print the top N rows of each leaderboard
    #[arg(long, default_value_t = 0)]
    top: usize,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set the default level based on verbosity
    let default_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let config = ConfigBuilder::new()
        .add_filter_allow_str("leaders")
        .build();

    TermLogger::init(
        default_level,
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    log::trace!("Args {:#?}", args);

    let roles = if args.roles.is_empty() {
        Role::ALL.to_vec()
    } else {
        args.roles.iter().copied().unique().collect()
    };
    let out_dir = args.out_dir.unwrap_or_else(|| args.dir.clone());
    let paths = Paths::new(&args.dir, &out_dir);
    log::info!("Projecting {}", roles.iter().join(", "));

    for role in roles {
        let config = role.config();
        let model = pipeline::load_model(&config, &paths)
            .with_context(|| format!("loading {} model {}", role, paths.model(&config).display()))?;
        let board = pipeline::run_role(&config, &model, &paths)
            .with_context(|| format!("projecting {} from {}", role, paths.stats(&config).display()))?;

        if args.top > 0 {
            println!("{}", board.head(Some(args.top)));
        }
    }

    Ok(())
}
