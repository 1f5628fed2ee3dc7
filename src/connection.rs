/// Connection tracking
///
/// Remembers whether the client is currently connected to the target
/// service. Only login and logout signals mutate this; the check is a
/// case-insensitive domain match on the address the client logged into.

/// Domain of the tracked service's servers
pub const SERVICE_DOMAIN: &str = "hypixel.net";

/// Tracks whether the client is connected to the service
#[derive(Debug, Default)]
pub struct ConnectionMonitor {
    connected: bool,
}

impl ConnectionMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Record a login and check the server address against the service
    /// domain
    pub fn on_login(&mut self, server_address: &str) {
        self.connected = server_address.to_lowercase().contains(SERVICE_DOMAIN);
        tracing::debug!(
            server_address,
            connected = self.connected,
            "login attempt recorded"
        );
    }

    /// Record a logout; the client is no longer on the service
    pub fn on_logout(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_to_service_domain_connects() {
        let mut monitor = ConnectionMonitor::new();
        monitor.on_login("mc.hypixel.net");
        assert!(monitor.is_connected());
    }

    #[test]
    fn test_domain_check_is_case_insensitive() {
        let mut monitor = ConnectionMonitor::new();
        monitor.on_login("MC.Hypixel.NET");
        assert!(monitor.is_connected());
    }

    #[test]
    fn test_login_elsewhere_does_not_connect() {
        let mut monitor = ConnectionMonitor::new();
        monitor.on_login("play.example.org");
        assert!(!monitor.is_connected());
    }

    #[test]
    fn test_logout_always_clears() {
        let mut monitor = ConnectionMonitor::new();
        monitor.on_login("mc.hypixel.net");
        monitor.on_logout();
        assert!(!monitor.is_connected());
    }
}
