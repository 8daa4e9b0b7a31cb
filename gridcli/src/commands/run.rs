use gridlib::io::run_outage_study;

/// Commands for running scenarios and outage simulations.
use super::*;

impl Run {
    pub fn run(self) {
        let Run { path, json } = self;

        let scenario = match Scenario::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read scenario: {}", err),
        };
        let has_checks = scenario
            .steps
            .iter()
            .any(|step| matches!(step, gridlib::io::Step::Expect { .. }));
        if !has_checks {
            log::warn!("Scenario has no expect steps; nothing will be checked");
        }
        let report = match scenario.run() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Error while running scenario: {}", err),
        };

        if json {
            let serialized = match serde_json::to_string_pretty(&report) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
            };
            println!("{}", serialized);
        } else {
            println!("{:10}{}", "Scenario:".bold(), report.name);
            for check in report.checks.iter() {
                let status = if check.passed() {
                    "ok".green()
                } else {
                    "FAIL".red().bold()
                };
                println!(
                    "  step {:<4} household {:<4} expected {:<5} got {:<5} {}",
                    check.step, check.household, check.expected, check.actual, status,
                );
            }
            println!(
                "{:10}{} passed, {} failed",
                "Result:".bold(),
                report.passed,
                report.failed,
            );
        }

        if report.failed > 0 {
            std::process::exit(1);
        }
    }
}

impl Simulate {
    pub fn run(self) {
        let Simulate {
            path,
            failures,
            trials,
            seed,
            json,
        } = self;

        let spec = match NetworkSpec::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read network: {}", err),
        };
        let network = match spec.build() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Error while building network: {}", err),
        };

        let result = run_outage_study(&network, failures, trials, seed);

        if json {
            let serialized = match serde_json::to_string_pretty(&result) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
            };
            println!("{}", serialized);
            return;
        }

        println!("{:16}{}", "Network Name:".bold(), spec.name);
        println!("{:16}{}", "Plant Failures:".bold(), result.plant_failures);
        println!("{:16}{}", "Trials:".bold(), result.trials);
        println!("{:16}{:.4}", "Runtime:".bold(), result.runtime);
        println!("{}", "Household Survival:".bold());
        for (index, p) in result.survival_p.iter().enumerate() {
            if network.household(index).is_ok() {
                println!("{:>15} {:.3}", format!("{}:", index).bold(), p);
            }
        }
    }
}
