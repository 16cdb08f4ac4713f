/// Tunables for a grounding run.
///
/// `threads` and `queue_bound` are clamped to at least 1 where they are
/// consumed, so a zero from a config file cannot wedge the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrounderConfig {
    /// Worker threads evaluating substitutions.
    pub threads: usize,
    /// Capacity of the assignment channel between the enumerator and the
    /// workers. Bounds memory on large cartesian products.
    pub queue_bound: usize,
    /// Split negative-weight clauses into positive-weight unit clauses.
    pub split_negative: bool,
}

impl Default for GrounderConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus(),
            queue_bound: 1024,
            split_negative: true,
        }
    }
}

/// Get number of CPUs (fallback to 1).
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_usable() {
        let config = GrounderConfig::default();
        assert!(config.threads >= 1);
        assert!(config.queue_bound >= 1);
        assert!(config.split_negative);
    }

    #[test]
    fn fields_override_independently() {
        let config = GrounderConfig {
            threads: 2,
            split_negative: false,
            ..GrounderConfig::default()
        };
        assert_eq!(config.threads, 2);
        assert!(!config.split_negative);
        assert_eq!(config.queue_bound, 1024);
    }
}
