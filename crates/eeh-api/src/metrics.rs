//! Prometheus counters for the assessment API, exposed at `/metrics`.
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};

pub struct ApiMetrics {
    registry: Registry,
    pub submitted: IntCounter,
    pub served: IntCounter,
    pub not_found: IntCounter,
    pub stored: IntGauge,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let submitted = IntCounter::new(
            "eeh_assessments_submitted_total",
            "Assessments accepted and stored",
        )?;
        let served = IntCounter::new("eeh_results_served_total", "Snapshots returned by token")?;
        let not_found = IntCounter::new(
            "eeh_results_not_found_total",
            "Result lookups for unknown tokens",
        )?;
        let stored = IntGauge::new("eeh_stored_assessments", "Snapshots currently held in memory")?;

        registry.register(Box::new(submitted.clone()))?;
        registry.register(Box::new(served.clone()))?;
        registry.register(Box::new(not_found.clone()))?;
        registry.register(Box::new(stored.clone()))?;

        Ok(Self {
            registry,
            submitted,
            served,
            not_found,
            stored,
        })
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_lists_all_series() {
        let metrics = ApiMetrics::new().unwrap();
        metrics.submitted.inc();
        metrics.stored.set(1);

        let text = metrics.encode().unwrap();
        assert!(text.contains("eeh_assessments_submitted_total 1"));
        assert!(text.contains("eeh_results_served_total 0"));
        assert!(text.contains("eeh_results_not_found_total 0"));
        assert!(text.contains("eeh_stored_assessments 1"));
    }

    #[test]
    fn test_instances_are_independent() {
        let a = ApiMetrics::new().unwrap();
        let b = ApiMetrics::new().unwrap();
        a.served.inc();
        assert_eq!(a.served.get(), 1);
        assert_eq!(b.served.get(), 0);
    }
}
