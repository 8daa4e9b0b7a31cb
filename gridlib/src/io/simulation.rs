//! Monte-Carlo outage studies over a distribution network.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::network::{PlantId, PowerNetwork};
use crate::types::{Probability, TrialCount};

/// Result of simulating random plant outages on a network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutageStudyResult {
    /// For each node, the fraction of trials in which it remained energized.
    /// Entries for plant nodes are always 0.
    pub survival_p: Vec<Probability>,
    /// Number of plants killed per trial.
    pub plant_failures: usize,
    /// Number of trials simulated.
    pub trials: TrialCount,
    /// Execution time in seconds.
    pub runtime: f64,
}

impl PowerNetwork {
    /// Simulate random plant outages: in each trial, kill `plant_failures`
    /// randomly chosen alive plants and record which households stay
    /// energized.
    ///
    /// If fewer alive plants exist than `plant_failures`, every alive plant
    /// is killed in each trial.
    pub fn simulate_outages(
        &self,
        plant_failures: usize,
        trials: TrialCount,
        rng: &mut impl Rng,
    ) -> OutageStudyResult {
        let start_time = Instant::now();

        let alive_plants: Vec<PlantId> = (0..self.node_count())
            .filter_map(|i| self.plant(i).ok())
            .filter(|&plant| self.is_alive(plant).unwrap_or(false))
            .collect();

        let mut survived = vec![0usize; self.node_count()];
        for _ in 0..trials {
            let mut damaged = self.clone();
            for &plant in alive_plants.choose_multiple(rng, plant_failures) {
                damaged
                    .kill(plant)
                    .expect("plant handles must be valid in a clone of the same network");
            }
            for household in damaged.energized_households() {
                survived[household.index()] += 1;
            }
        }

        let survival_p: Vec<Probability> = survived
            .into_iter()
            .map(|count| {
                if trials == 0 {
                    0.0
                } else {
                    count as Probability / trials as Probability
                }
            })
            .collect();

        let runtime = start_time.elapsed().as_secs_f64();

        log::info!(
            "Simulated {} outage trials in {:.4} seconds",
            trials,
            runtime,
        );

        OutageStudyResult {
            survival_p,
            plant_failures,
            trials,
            runtime,
        }
    }
}

/// Run an outage study with an optional fixed seed.
///
/// Entry point for the CLI and server; passing a seed makes runs
/// reproducible.
pub fn run_outage_study(
    network: &PowerNetwork,
    plant_failures: usize,
    trials: TrialCount,
    seed: Option<u64>,
) -> OutageStudyResult {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    network.simulate_outages(plant_failures, trials, &mut rng)
}
