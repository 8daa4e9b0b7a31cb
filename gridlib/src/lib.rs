//! # Power Grid Library
//!
//! Common functionality for the grid server and command line interface:
//! the distribution network model, energization queries, and the IO layer
//! for network and scenario files.

use serde::{Deserialize, Serialize};

pub mod io;
pub mod network;
pub mod types;
pub mod utils;

/// Represents the reasons why a network operation might fail.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum NetworkError {
    /// Network or scenario data failed validation.
    BadInput(String),
    /// A node handle that does not belong to this network.
    InvalidReference(String),
}

impl std::error::Error for NetworkError {}

impl std::fmt::Display for NetworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NetworkError::BadInput(reason) => write!(f, "Bad input: {}", reason),
            NetworkError::InvalidReference(reason) => {
                write!(f, "Invalid node reference: {}", reason)
            }
        }
    }
}
