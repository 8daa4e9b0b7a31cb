use super::*;

mod run;
pub use run::*;

mod list;
pub use list::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run a scenario file and check its expectations.
    #[command(alias = "r")]
    Run(Run),

    /// Query household energization in a network file.
    #[command(alias = "q")]
    Query(Query),

    /// Print summary statistics for a network file.
    Stats(Stats),

    /// Simulate random plant outages on a network.
    #[command(alias = "sim")]
    Simulate(Simulate),

    /// List network files in a directory.
    #[command(alias = "ls")]
    ListNetworks(ListNetworks),
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Path to the scenario JSON or YAML file.
    path: PathBuf,
    /// Print the report as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Query {
    /// Path to the network JSON or YAML file.
    path: PathBuf,
    /// Household node index; omit to list all energized households.
    #[arg(short = 'H', long)]
    household: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct Stats {
    /// Path to the network JSON or YAML file.
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct Simulate {
    /// Path to the network JSON or YAML file.
    path: PathBuf,
    /// Number of plants to kill in each trial.
    #[arg(short, long, default_value_t = 1)]
    failures: usize,
    /// Number of trials to simulate.
    #[arg(short, long, default_value_t = 1000)]
    trials: usize,
    /// RNG seed for reproducible studies.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the results as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListNetworks {
    /// Directory containing network files.
    path: PathBuf,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Run(args) => args.run(),
            Command::Query(args) => args.run(),
            Command::Stats(args) => args.run(),
            Command::Simulate(args) => args.run(),
            Command::ListNetworks(args) => args.run(),
        }
    }
}
