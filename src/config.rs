//! Bundled page configuration.
//!
//! `portfolio.json` is compiled into the binary; anything it omits falls back
//! to the defaults in `portfolio-core`.

use portfolio_core::PortfolioConfig;

const BUNDLED_CONFIG: &str = include_str!("../portfolio.json");

/// Load the bundled configuration, falling back to defaults if it is invalid.
pub fn load() -> PortfolioConfig {
    match PortfolioConfig::from_json(BUNDLED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "bundled portfolio.json rejected, using defaults");
            PortfolioConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_is_valid() {
        let config = PortfolioConfig::from_json(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.typing.roles.len(), 3);
        assert!(config.contact.endpoint.starts_with("https://"));
    }
}
