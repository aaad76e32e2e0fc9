use dns_lookup::{lookup_addr, lookup_host};
use std::net::{IpAddr, Ipv4Addr};

/// Resolve `hostname` to the IPv4 address a probe will be sent to.
pub fn resolve_ipv4(hostname: &str) -> anyhow::Result<Ipv4Addr> {
    // First try to parse as IP address
    if let Ok(ip) = hostname.parse::<IpAddr>() {
        return match ip {
            IpAddr::V4(v4) => Ok(v4),
            IpAddr::V6(_) => Err(anyhow::anyhow!("IPv6 address {} is not supported", hostname)),
        };
    }

    let addresses = lookup_host(hostname)
        .map_err(|e| anyhow::anyhow!("Failed to resolve {}: {}", hostname, e))?;

    addresses
        .into_iter()
        .find_map(|addr| match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(_) => None,
        })
        .ok_or_else(|| anyhow::anyhow!("No IPv4 addresses found for hostname: {}", hostname))
}

pub fn reverse_lookup(ip: Ipv4Addr) -> Option<String> {
    lookup_addr(&IpAddr::V4(ip)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ip_address_parsing() {
        let result = resolve_ipv4("8.8.8.8");
        assert_eq!(result.unwrap(), Ipv4Addr::new(8, 8, 8, 8));
    }

    #[test]
    fn test_ipv6_literal_rejected() {
        assert!(resolve_ipv4("::1").is_err());
        assert!(resolve_ipv4("2001:db8::1").is_err());
    }

    #[test]
    fn test_reverse_lookup() {
        let result = reverse_lookup(Ipv4Addr::LOCALHOST);
        // This may or may not succeed depending on resolver configuration
        println!("Reverse lookup result: {:?}", result);
    }
}
