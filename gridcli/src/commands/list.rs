use gridlib::utils::component_count;

/// Printing network summaries and directory listings.
use super::*;

impl Query {
    pub fn run(self) {
        let Query { path, household } = self;

        let spec = match NetworkSpec::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read network: {}", err),
        };
        let network = match spec.build() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Error while building network: {}", err),
        };

        println!("{:12}{}", "Network:".bold(), spec.name);
        match household {
            Some(index) => {
                let id = match network.household(index) {
                    Ok(x) => x,
                    Err(err) => fatal_error!(1, "Cannot query household: {}", err),
                };
                let energized = match network.is_energized(id) {
                    Ok(x) => x,
                    Err(err) => fatal_error!(1, "Cannot query household: {}", err),
                };
                println!("{:12}{}", "Household:".bold(), index);
                println!("{:12}{}", "Energized:".bold(), energized);
            }
            None => {
                let energized: Vec<String> = network
                    .energized_households()
                    .iter()
                    .map(|id| id.index().to_string())
                    .collect();
                if energized.is_empty() {
                    println!("{:12}{}", "Energized:".bold(), "none");
                } else {
                    println!("{:12}{}", "Energized:".bold(), energized.join(", "));
                }
            }
        }
    }
}

impl Stats {
    pub fn run(self) {
        let Stats { path } = self;

        let spec = match NetworkSpec::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read network: {}", err),
        };
        let network = match spec.build() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Error while building network: {}", err),
        };

        println!("{:22}{}", "Network Name:".bold(), spec.name);
        println!("{:22}{}", "Plants:".bold(), network.plant_count());
        println!("{:22}{}", "Alive Plants:".bold(), network.alive_plant_count());
        println!("{:22}{}", "Households:".bold(), network.household_count());
        println!("{:22}{}", "Links:".bold(), network.link_count());
        println!(
            "{:22}{}",
            "Components:".bold(),
            component_count(&network.adjacency()),
        );
        println!(
            "{:22}{}",
            "Energized Households:".bold(),
            network.energized_households().len(),
        );

        let repeated = spec.repeated_links();
        if !repeated.is_empty() {
            println!(
                "{} links {:?} repeat an earlier pair",
                "warning:".yellow().bold(),
                repeated,
            );
        }
    }
}

impl ListNetworks {
    pub fn run(self) {
        let ListNetworks { path } = self;

        let all_networks = match fs::list_networks(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot list networks: {}", err),
        };

        let mut dirs: Vec<_> = all_networks.into_iter().collect();
        dirs.sort_by(|a, b| a.0.cmp(&b.0));
        for (dir, entries) in dirs {
            if entries.is_empty() {
                continue;
            }
            let label = if dir.is_empty() { "." } else { dir.as_str() };
            println!("{}", label.bold());
            for entry in entries {
                println!(
                    "  {:30} {} plants, {} households, {} links ({})",
                    entry.name, entry.plants, entry.households, entry.links, entry.filename,
                );
            }
        }
    }
}
