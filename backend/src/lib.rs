//! Lanfest backend library modules.
//!
//! Guest server registration and lifecycle for LAN-party events: the pure
//! domain logic and application services live in [`domain`], the adapters
//! implementing its driven ports in [`outbound`]. The web layer consuming
//! the driving ports is a separate deployment concern.

pub mod domain;
pub mod outbound;
