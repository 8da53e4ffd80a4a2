//! zonerelay application layer: ports, the zone store and use cases.
pub mod ports;
pub mod services;
pub mod use_cases;
