//! Shared building blocks for the scholarship backend crates:
//! logging setup, startup checks, metrics and small response types.

pub mod types;
pub mod utils;
pub mod env;
pub mod metrics;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn root_banner_names_the_api() {
        let b = types::Banner::default();
        assert_eq!(b.message, "MetaMind Fellowship API");
    }
}
