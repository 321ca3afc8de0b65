//! Mastermind Solver - CLI
//!
//! Plays, benchmarks and analyzes Mastermind games with entropy, minimax and
//! random-consistent strategies.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mastermind_solver::{
    commands::{
        analyze_code, compare_strategies, random_secrets, run_benchmark, run_interactive,
        solve_code,
    },
    core::{Alphabet, CandidateUniverse},
    game::GameConfig,
    logging,
    output::{print_analysis_result, print_benchmark_result, print_comparison, print_solve_result},
    solver::{ProbePool, StrategyKind, StrategyOptions},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver using entropy-maximizing and consistent-hypothesis strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy used to pick guesses
    #[arg(short, long, global = true, value_enum, default_value_t = StrategyKind::Entropy)]
    strategy: StrategyKind,

    /// Comma-separated symbol names (default: blue,green,red,white,black,pink)
    #[arg(short, long, global = true)]
    alphabet: Option<String>,

    /// Number of symbols in a code
    #[arg(short = 'n', long, global = true, default_value_t = GameConfig::DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Turn limit per game; 0 plays until solved
    #[arg(short = 't', long, global = true, default_value_t = GameConfig::DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Seed for secrets and the random strategy
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Where entropy and minimax look for probes
    #[arg(long, global = true, value_enum, default_value_t = PoolArg::Universe)]
    probe_pool: PoolArg,

    /// Hypothesis count below which the adaptive pool stops probing the universe
    #[arg(long, global = true, default_value_t = ProbePool::DEFAULT_THRESHOLD)]
    adaptive_threshold: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum PoolArg {
    Universe,
    Hypotheses,
    Adaptive,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a given secret, or a random one (default)
    Solve {
        /// The secret, e.g. "red green blue pink"; random if omitted
        secret: Option<String>,

        /// Show candidate counts and scores for each turn
        #[arg(short, long)]
        details: bool,
    },

    /// Score a probe against every possible secret
    Analyze {
        /// Probe to analyze
        probe: String,
    },

    /// Benchmark strategy performance over many secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Play every code in the universe instead of random secrets
        #[arg(short, long)]
        exhaustive: bool,

        /// Compare all strategies on the same secrets
        #[arg(long)]
        all: bool,
    },

    /// Hold a secret yourself and let the solver guess it
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = build_config(&cli)?;
    let universe = config
        .universe()
        .context("failed to enumerate candidate universe")?;
    let options = StrategyOptions {
        seed: cli.seed,
        probe_pool: match cli.probe_pool {
            PoolArg::Universe => ProbePool::Universe,
            PoolArg::Hypotheses => ProbePool::Hypotheses,
            PoolArg::Adaptive => ProbePool::Adaptive {
                threshold: cli.adaptive_threshold,
            },
        },
    };

    info!(
        alphabet = %config.alphabet(),
        length = config.code_length(),
        universe = universe.len(),
        strategy = %cli.strategy,
        pool = options.probe_pool.label(),
        "configured"
    );

    // Default to solving a random secret if no command given
    let command = cli.command.unwrap_or(Commands::Solve {
        secret: None,
        details: false,
    });

    match command {
        Commands::Solve { secret, details } => run_solve_command(
            &config,
            &universe,
            cli.strategy,
            &options,
            secret.as_deref(),
            details,
        ),
        Commands::Analyze { probe } => run_analyze_command(&config, &universe, &probe),
        Commands::Benchmark {
            count,
            exhaustive,
            all,
        } => run_benchmark_command(
            &config,
            &universe,
            cli.strategy,
            &options,
            count,
            exhaustive,
            all,
        ),
        Commands::Interactive => run_interactive(&config, &universe, cli.strategy, options),
    }
}

/// Build the game configuration from global flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let alphabet = match &cli.alphabet {
        Some(list) => Alphabet::parse(list).context("invalid --alphabet")?,
        None => Alphabet::default(),
    };
    let max_turns = (cli.max_turns > 0).then_some(cli.max_turns);

    GameConfig::new(alphabet, cli.length, max_turns).context("invalid game configuration")
}

fn run_solve_command(
    config: &GameConfig,
    universe: &CandidateUniverse,
    kind: StrategyKind,
    options: &StrategyOptions,
    secret: Option<&str>,
    details: bool,
) -> Result<()> {
    let secret = match secret {
        Some(text) => config.parse_code(text).context("invalid secret")?,
        None => {
            let mut rng = options
                .seed
                .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
            config.random_secret(&mut rng)
        }
    };

    let result = solve_code(config, universe, secret, kind, options)?;
    print_solve_result(&result, config, details);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, universe: &CandidateUniverse, probe: &str) -> Result<()> {
    let probe = config.parse_code(probe).context("invalid probe")?;
    let result = analyze_code(universe, probe)?;
    print_analysis_result(&result, config.alphabet(), config.code_length());
    Ok(())
}

fn run_benchmark_command(
    config: &GameConfig,
    universe: &CandidateUniverse,
    kind: StrategyKind,
    options: &StrategyOptions,
    count: usize,
    exhaustive: bool,
    all: bool,
) -> Result<()> {
    let secrets = if exhaustive {
        universe.codes().to_vec()
    } else {
        random_secrets(config, count, options.seed.unwrap_or_else(rand::random))
    };

    println!(
        "Running benchmark on {} {} secrets...",
        secrets.len(),
        if exhaustive { "(all)" } else { "random" }
    );

    if all {
        let results =
            compare_strategies(config, universe, &secrets, &StrategyKind::ALL, options, true)?;
        for result in &results {
            print_benchmark_result(result);
        }
        print_comparison(&results);
    } else {
        let result = run_benchmark(config, universe, &secrets, kind, options, true)?;
        print_benchmark_result(&result);
    }
    Ok(())
}
