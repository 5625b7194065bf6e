//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions (in order).
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    /// Per port+method cursor tracking position.
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns a "cassette exhausted" message when the cassette has no (more)
    /// interactions for the given port/method combination.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "cassette exhausted: no interactions recorded for {port}::{method} \
                 (available: [{}])",
                available.join(", ")
            ));
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        if *cursor >= queue.len() {
            return Err(format!(
                "cassette exhausted: all {count} interactions for {port}::{method} were used",
                count = queue.len(),
            ));
        }

        let interaction = &queue[*cursor];
        *cursor += 1;
        Ok(interaction)
    }

    /// Interactions still waiting to be served for a port/method pair.
    #[must_use]
    pub fn remaining(&self, port: &str, method: &str) -> usize {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };
        let total = self.queues.get(&key).map_or(0, Vec::len);
        total - self.cursors.get(&key).copied().unwrap_or(0)
    }
}
