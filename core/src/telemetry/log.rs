use log::info;

/// Component-tagged logger used by the graph pipeline.
pub struct LogManager {
    component: &'static str,
}

impl LogManager {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.component, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_manager_is_tagged() {
        let logger = LogManager::new("graph");
        logger.record("span walk complete");
        assert_eq!(logger.component, "graph");
    }
}
