// Local network interface lookup

use crate::error::InterfaceError;
use pnet::datalink;
use pnet::ipnetwork::IpNetwork;
use std::net::Ipv4Addr;
use tracing::debug;

/// Source of local interface addresses.
pub trait InterfaceInspector: Send + Sync {
    /// The first IPv4 address bound to `name`, without its prefix length.
    fn primary_ipv4(&self, name: &str) -> Result<Ipv4Addr, InterfaceError>;

    fn exists(&self, name: &str) -> bool;
}

/// Reads the host's interfaces on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaces;

impl InterfaceInspector for SystemInterfaces {
    fn primary_ipv4(&self, name: &str) -> Result<Ipv4Addr, InterfaceError> {
        let interface = datalink::interfaces()
            .into_iter()
            .find(|iface| iface.name == name)
            .ok_or_else(|| InterfaceError::NotFound(name.to_string()))?;

        let address = first_ipv4(&interface.ips)
            .ok_or_else(|| InterfaceError::NoIpv4Address(name.to_string()))?;
        debug!("Interface {} resolved to {}", name, address);
        Ok(address)
    }

    fn exists(&self, name: &str) -> bool {
        datalink::interfaces().iter().any(|iface| iface.name == name)
    }
}

/// First IPv4 entry of an interface's address list, prefix length dropped.
pub fn first_ipv4(ips: &[IpNetwork]) -> Option<Ipv4Addr> {
    ips.iter().find_map(|network| match network {
        IpNetwork::V4(v4) => Some(v4.ip()),
        IpNetwork::V6(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn networks(list: &[&str]) -> Vec<IpNetwork> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_first_ipv4_strips_prefix_length() {
        let ips = networks(&["10.0.0.5/24"]);
        assert_eq!(first_ipv4(&ips), Some(Ipv4Addr::new(10, 0, 0, 5)));
        assert_eq!(first_ipv4(&ips).unwrap().to_string(), "10.0.0.5");
    }

    #[test]
    fn test_first_ipv4_skips_ipv6() {
        let ips = networks(&["fe80::1/64", "192.168.1.20/16", "10.0.0.5/8"]);
        assert_eq!(first_ipv4(&ips), Some(Ipv4Addr::new(192, 168, 1, 20)));
    }

    #[test]
    fn test_first_ipv4_none_without_ipv4() {
        assert_eq!(first_ipv4(&networks(&["fe80::1/64"])), None);
        assert_eq!(first_ipv4(&[]), None);
    }

    #[test]
    fn test_system_interfaces_unknown_name() {
        let inspector = SystemInterfaces;
        let name = "nodeview-no-such-if0";

        assert!(!inspector.exists(name));
        assert_eq!(
            inspector.primary_ipv4(name),
            Err(InterfaceError::NotFound(name.to_string()))
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_system_interfaces_loopback() {
        let inspector = SystemInterfaces;

        assert!(inspector.exists("lo"));
        assert_eq!(inspector.primary_ipv4("lo"), Ok(Ipv4Addr::LOCALHOST));
    }
}
