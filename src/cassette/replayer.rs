//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use thiserror::Error;

use super::format::{Cassette, Interaction};

/// A replay request the cassette cannot satisfy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// The cassette never recorded this port/method.
    #[error("no interactions recorded for {port}::{method}; cassette has [{available}]")]
    Unrecorded {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// Comma-separated `port::method` pairs present in the cassette.
        available: String,
    },

    /// Every recorded call of this port/method has been served.
    #[error("all {count} recorded {port}::{method} interactions have been consumed")]
    Exhausted {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// How many were recorded.
        count: usize,
    },
}

/// Replays a cassette with an independent cursor per `port::method` pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
    served: HashMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Indexes `cassette` for replay.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, served: HashMap::new() }
    }

    /// Reads and indexes the cassette stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns a message naming `path` if it cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read cassette {}: {e}", path.display()))?;
        let cassette = Cassette::from_yaml(&yaml)
            .map_err(|e| format!("cannot parse cassette {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Takes the next recorded interaction for `port::method`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError`] if the pair was never recorded or is used up.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Interaction, ReplayError> {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(ReplayError::Unrecorded {
                port: key.0,
                method: key.1,
                available: available.join(", "),
            });
        };

        let served = self.served.entry(key).or_insert(0);
        if let Some(interaction) = queue.pop_front() {
            *served += 1;
            Ok(interaction)
        } else {
            Err(ReplayError::Exhausted {
                port: port.to_string(),
                method: method.to_string(),
                count: *served,
            })
        }
    }
}
