//! A module responsible for network and scenario file system operations.
use super::{NetworkEntry, NetworkSpec, NodeSpec, Scenario};

use itertools::Itertools;

use std::collections::HashMap;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

/// Yields a list of the network `.json` files for the root directory and each
/// subdirectory. Root directory will have an empty string key in the HashMap,
/// and others will have their relative path as their key.
pub fn list_networks(dir: &Path) -> std::io::Result<HashMap<String, Vec<NetworkEntry>>> {
    if !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Path {} is not a directory.", dir.to_string_lossy()),
        ));
    }
    let mut q = vec![dir.to_path_buf()];
    let mut all_networks: HashMap<String, Vec<NetworkEntry>> = HashMap::new();
    let rootdirstr = dir.to_string_lossy().into_owned();
    let rootdirstrlen = rootdirstr.len();
    while let Some(dir) = q.pop() {
        let mut entries: Vec<NetworkEntry> = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_dir() {
                q.push(path);
                continue;
            }
            let filename = String::from(&path.to_string_lossy()[rootdirstrlen..]);
            if !filename.ends_with(".json") {
                continue;
            }
            let spec: NetworkSpec = match read_spec(&path) {
                Ok(spec) => spec,
                Err(e) => {
                    log::warn!("Cannot parse network file {filename}: {e}");
                    continue;
                }
            };
            entries.push(entry_for(filename, &spec));
        }
        let dirname = String::from(&dir.to_string_lossy()[rootdirstrlen..]);
        all_networks.insert(dirname, entries);
    }
    Ok(all_networks)
}

fn entry_for(filename: String, spec: &NetworkSpec) -> NetworkEntry {
    let plants = spec
        .nodes
        .iter()
        .filter(|node| matches!(node, NodeSpec::Plant { .. }))
        .count();
    NetworkEntry {
        filename,
        name: spec.name.clone(),
        plants,
        households: spec.nodes.len() - plants,
        links: spec.links.len(),
    }
}

/// Convert a string to sanitized JSON filename.
pub fn name_to_json(name: &str) -> String {
    let name = name.split_whitespace().join("-");
    let name = name + ".json";
    sanitize_filename::sanitize(name)
}

/// Save a network to the given directory as a human-readable (pretty) JSON
/// file named after the network. Fails if the file already exists.
pub fn save_network(spec: &NetworkSpec, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(name_to_json(&spec.name));
    let mut file = std::fs::File::options()
        .read(false)
        .write(true)
        .create_new(true)
        .open(&path)?;
    let content = match serde_json::to_string_pretty(spec) {
        Ok(s) => s,
        Err(e) => {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e));
        }
    };
    file.write_all(content.as_bytes())?;
    log::info!("Saved network: {}", path.display());
    Ok(path)
}

/// True if the extension indicates a YAML file.
fn is_yaml_path<P: AsRef<Path>>(path: P) -> bool {
    matches!(
        path.as_ref().extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn read_spec<P: AsRef<Path>>(path: P) -> std::io::Result<NetworkSpec> {
    let content = std::fs::read_to_string(&path)?;
    if is_yaml_path(&path) {
        serde_yaml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Given a `serde_json::Value`, read it from the path it specifies if it's a
/// string, relative to the given `path`.
pub fn read_json_value_from_file<P: AsRef<Path>>(
    value: &mut serde_json::Value,
    path: P,
) -> std::io::Result<bool> {
    if let serde_json::Value::String(s) = value {
        let mut target = PathBuf::new();
        target.push(path);
        target.pop();
        target.push(s);
        *value = {
            let content = std::fs::read_to_string(&target)?;
            serde_json::from_str(&content)?
        };
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Given a `serde_json::Value`, read its given `field` from the path it
/// specifies if it's a string, relative to the given `path`.
pub fn read_field_from_file<P: AsRef<Path>>(
    value: &mut serde_json::Value,
    field: &str,
    path: P,
) -> std::io::Result<bool> {
    let field = value.get_mut(field);
    if let Some(v) = field {
        read_json_value_from_file(v, path)
    } else {
        Ok(false)
    }
}

impl NetworkSpec {
    /// Read a network from a JSON or YAML file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<NetworkSpec> {
        read_spec(path)
    }
}

impl Scenario {
    /// Read a scenario from a JSON or YAML file.
    ///
    /// The `network` field may be a string instead of an inline network, in
    /// which case it is read from that path, relative to the scenario file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Scenario> {
        let content = std::fs::read_to_string(&path)?;
        let mut value: serde_json::Value = if is_yaml_path(&path) {
            serde_yaml::from_str(&content)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        } else {
            serde_json::from_str(&content)?
        };
        read_field_from_file(&mut value, "network", path)?;
        let scenario: Scenario = serde_json::from_value(value)?;
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_to_json() {
        assert_eq!(
            name_to_json("IEEE 9-bus Toy Grid 1"),
            "IEEE-9-bus-Toy-Grid-1.json"
        );
        assert_eq!(
            name_to_json("/IEEE    9-bus Toy Grid 1"),
            "IEEE-9-bus-Toy-Grid-1.json"
        );
        assert_eq!(
            name_to_json("\\/?IEEE    9-?bus Toy    Grid 1"),
            "IEEE-9-bus-Toy-Grid-1.json"
        );
    }

    #[test]
    fn test_is_yaml_path() {
        assert!(is_yaml_path("networks/ring.yaml"));
        assert!(is_yaml_path("networks/ring.yml"));
        assert!(!is_yaml_path("networks/ring.json"));
        assert!(!is_yaml_path("networks/ring"));
    }
}
