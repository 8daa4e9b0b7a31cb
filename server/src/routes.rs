use log::error;
use serde::Serialize;
use std::path::Path;
use warp::{filters::BoxedFilter, Filter, Reply};
use warp::{http::StatusCode, reply};

use gridlib::io::{fs, run_outage_study, NetworkSpec, Scenario};

#[derive(Serialize)]
struct EnergizedResponse {
    household: usize,
    energized: bool,
}

#[derive(Serialize)]
struct EnergizedListResponse {
    energized: Vec<usize>,
}

/// Every route combined for a single network
pub fn api(networks_path: String) -> BoxedFilter<(impl Reply,)> {
    let list_path = networks_path.clone();
    let get_networks = warp::path!("get-networks").and(warp::get()).map(move || {
        match fs::list_networks(Path::new(&list_path)) {
            Ok(list) => reply::with_status(reply::json(&list), StatusCode::OK),
            Err(error) => {
                error!("Error while getting the network list: {error}");
                let error = error.to_string();
                reply::with_status(reply::json(&error), StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    });

    let energized = warp::path!("energized")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 1024))
        .and(warp::body::json())
        .map(|req: serde_json::Value| {
            let spec: NetworkSpec = if let Some(field) = req.get("network") {
                match serde_json::from_value(field.clone()) {
                    Ok(v) => v,
                    Err(e) => {
                        let error = format!("Failed to parse network: {e}");
                        return reply::with_status(reply::json(&error), StatusCode::BAD_REQUEST);
                    }
                }
            } else {
                return reply::with_status(
                    reply::json(&"No network is given"),
                    StatusCode::BAD_REQUEST,
                );
            };
            let network = match spec.build() {
                Ok(x) => x,
                Err(e) => {
                    let error = format!("Error while building network: {e}");
                    return reply::with_status(reply::json(&error), StatusCode::BAD_REQUEST);
                }
            };
            match req.get("household") {
                Some(field) => {
                    let household: usize = match serde_json::from_value(field.clone()) {
                        Ok(v) => v,
                        Err(e) => {
                            let error = format!("Failed to parse household: {e}");
                            return reply::with_status(
                                reply::json(&error),
                                StatusCode::BAD_REQUEST,
                            );
                        }
                    };
                    let energized = match network
                        .household(household)
                        .and_then(|id| network.is_energized(id))
                    {
                        Ok(x) => x,
                        Err(e) => {
                            let error = format!("Error while querying household: {e}");
                            return reply::with_status(
                                reply::json(&error),
                                StatusCode::BAD_REQUEST,
                            );
                        }
                    };
                    reply::with_status(
                        reply::json(&EnergizedResponse {
                            household,
                            energized,
                        }),
                        StatusCode::OK,
                    )
                }
                None => {
                    let energized = network
                        .energized_households()
                        .into_iter()
                        .map(|id| id.index())
                        .collect();
                    reply::with_status(
                        reply::json(&EnergizedListResponse { energized }),
                        StatusCode::OK,
                    )
                }
            }
        });

    let scenario = warp::path!("scenario")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 1024))
        .and(warp::body::json())
        .map(|scenario: Scenario| match scenario.run() {
            Ok(report) => reply::with_status(reply::json(&report), StatusCode::OK),
            Err(e) => {
                let error = format!("Error while running scenario: {e}");
                reply::with_status(reply::json(&error), StatusCode::BAD_REQUEST)
            }
        });

    let simulate = warp::path!("simulate")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 1024))
        .and(warp::body::json())
        .map(|req: serde_json::Value| {
            let spec: NetworkSpec = if let Some(field) = req.get("network") {
                match serde_json::from_value(field.clone()) {
                    Ok(v) => v,
                    Err(e) => {
                        let error = format!("Failed to parse network: {e}");
                        return reply::with_status(reply::json(&error), StatusCode::BAD_REQUEST);
                    }
                }
            } else {
                return reply::with_status(
                    reply::json(&"No network is given"),
                    StatusCode::BAD_REQUEST,
                );
            };
            let network = match spec.build() {
                Ok(x) => x,
                Err(e) => {
                    let error = format!("Error while building network: {e}");
                    return reply::with_status(reply::json(&error), StatusCode::BAD_REQUEST);
                }
            };
            let failures = req.get("failures").and_then(|v| v.as_u64()).unwrap_or(1) as usize;
            let trials = req.get("trials").and_then(|v| v.as_u64()).unwrap_or(1000) as usize;
            let seed = req.get("seed").and_then(|v| v.as_u64());
            let result = run_outage_study(&network, failures, trials, seed);
            reply::with_status(reply::json(&result), StatusCode::OK)
        });

    let save_path = networks_path.clone();
    let save_network = warp::path!("save-network")
        .and(warp::post())
        .and(warp::body::content_length_limit(1024 * 1024))
        .and(warp::body::json())
        .map(move |spec: NetworkSpec| {
            match fs::save_network(&spec, Path::new(&save_path)) {
                Ok(path) => reply::with_status(
                    reply::json(&path.to_string_lossy().into_owned()),
                    StatusCode::OK,
                ),
                Err(e) => {
                    let error = format!("Error while saving network: {e}");
                    reply::with_status(reply::json(&error), StatusCode::BAD_REQUEST)
                }
            }
        });

    let network_files = warp::path("networks").and(warp::fs::dir(networks_path));
    network_files
        .or(scenario)
        .or(simulate)
        .or(energized)
        .or(save_network)
        .or(get_networks)
        .boxed()
}
