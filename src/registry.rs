use std::net::IpAddr;
use serde::Serialize;

/// A service known to the registry.
/// This is the canonical record shape served by `/services`; `/resolve`
/// returns a reduced view of it (no protocol).
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    /// Fully-qualified service name, e.g. "db.test.warp.local"
    pub name: String,

    /// Resolvable addresses, at least one
    pub addresses: Vec<IpAddr>,

    /// Service port
    pub port: u16,

    /// Protocol tag, e.g. "http", "postgres", "redis"
    pub protocol: String,
}

/// The static, ordered service list. Built once at startup and never
/// mutated; list order is the tie-break for prefix resolution.
#[derive(Debug)]
pub struct Registry {
    records: Vec<ServiceRecord>,
}

impl Registry {
    pub fn new(records: Vec<ServiceRecord>) -> Self {
        Self { records }
    }

    /// The WarpGrid test environment fixture set.
    pub fn fixture() -> Self {
        fn record(name: &str, address: &str, port: u16, protocol: &str) -> ServiceRecord {
            ServiceRecord {
                name: name.to_string(),
                addresses: vec![address.parse().expect("fixture address is a valid IP")],
                port,
                protocol: protocol.to_string(),
            }
        }

        Self::new(vec![
            record("db.test.warp.local", "172.20.0.10", 5432, "postgres"),
            record("cache.test.warp.local", "172.20.0.11", 6379, "redis"),
            record("user-svc.test.warp.local", "172.20.0.20", 8080, "http"),
            record("notification-svc.test.warp.local", "172.20.0.21", 8080, "http"),
            record("analytics-svc.test.warp.local", "172.20.0.22", 8080, "http"),
        ])
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ServiceRecord] {
        &self.records
    }

    /// Resolves a name to the first record whose name equals it or starts
    /// with it. Prefix matching is deliberately permissive ("db" resolves
    /// to "db.test.warp.local"); consumers depend on this behavior.
    pub fn resolve(&self, name: &str) -> Option<&ServiceRecord> {
        self.records
            .iter()
            .find(|r| r.name == name || r.name.starts_with(name))
    }
}
