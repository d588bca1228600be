use std::sync::Arc;

use crate::accel::Accelerator;

/// Engine configuration, fixed at construction.
///
/// Replaces process-wide tunables with explicit state: the parallelization
/// threshold and the optional accelerator slot travel with the engine that
/// was built from them.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum destination row AND column count for the parallel column
    /// loop; below it every kernel runs sequentially.
    pub parallel_threshold: usize,
    /// Optional external accelerator for large column-major products.
    pub accelerator: Option<Arc<dyn Accelerator>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            parallel_threshold: 100,
            accelerator: None,
        }
    }
}
