use crate::snapshot::{IfaceAddress, NetworkInterface, NetworkIoTotals};
use std::net::{IpAddr, Ipv4Addr};
use sysinfo::Networks;

#[derive(Debug, Clone)]
pub struct NetworkReport {
    pub interfaces: Vec<NetworkInterface>,
    pub io: NetworkIoTotals,
}

pub fn collect() -> NetworkReport {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<NetworkInterface> = networks
        .iter()
        .map(|(name, data)| {
            let mut addresses: Vec<IfaceAddress> = data
                .ip_networks()
                .iter()
                .filter_map(|net| classify(net.addr, net.prefix))
                .collect();
            let mac = data.mac_address();
            if !mac.is_unspecified() {
                addresses.push(IfaceAddress::Mac {
                    address: mac.to_string(),
                });
            }
            NetworkInterface {
                name: name.clone(),
                addresses,
            }
        })
        .collect();
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));

    let io = networks
        .iter()
        .fold(NetworkIoTotals::default(), |acc, (_, data)| NetworkIoTotals {
            bytes_sent: acc.bytes_sent.saturating_add(data.total_transmitted()),
            bytes_received: acc.bytes_received.saturating_add(data.total_received()),
        });

    NetworkReport { interfaces, io }
}

/// Family dispatch happens on the address type itself; only IPv4 entries
/// carry netmask/broadcast, and every non-IPv4 family is dropped here.
fn classify(addr: IpAddr, prefix: u8) -> Option<IfaceAddress> {
    match addr {
        IpAddr::V4(address) => {
            let netmask = netmask_from_prefix(prefix);
            Some(IfaceAddress::V4 {
                address,
                netmask,
                broadcast: broadcast_of(address, netmask),
            })
        }
        IpAddr::V6(_) => None,
    }
}

fn netmask_from_prefix(prefix: u8) -> Ipv4Addr {
    let bits = match prefix {
        0 => 0,
        1..=31 => u32::MAX << (32 - u32::from(prefix)),
        _ => u32::MAX,
    };
    Ipv4Addr::from(bits)
}

fn broadcast_of(address: Ipv4Addr, netmask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(address) | !u32::from(netmask))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_gets_netmask_and_broadcast() {
        let addr = classify("192.168.1.17".parse().unwrap(), 24).unwrap();
        assert_eq!(
            addr,
            IfaceAddress::V4 {
                address: Ipv4Addr::new(192, 168, 1, 17),
                netmask: Ipv4Addr::new(255, 255, 255, 0),
                broadcast: Ipv4Addr::new(192, 168, 1, 255),
            }
        );
    }

    #[test]
    fn ipv6_is_dropped() {
        assert!(classify("fe80::1".parse().unwrap(), 64).is_none());
    }

    #[test]
    fn prefix_edge_cases() {
        assert_eq!(netmask_from_prefix(0), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(netmask_from_prefix(32), Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(netmask_from_prefix(20), Ipv4Addr::new(255, 255, 240, 0));
    }

    #[test]
    fn point_to_point_host_broadcasts_to_itself() {
        let address = Ipv4Addr::new(10, 0, 0, 5);
        assert_eq!(
            broadcast_of(address, netmask_from_prefix(32)),
            address
        );
    }
}
