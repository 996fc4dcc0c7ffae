use std::net::IpAddr;

use axum::http::HeaderMap;
use ipnet::IpNet;

/// Resolve the client IP used as the rate-limit key.
///
/// X-Forwarded-For is only honored when the direct peer is a trusted proxy;
/// the leftmost entry that is not itself a trusted proxy wins.
pub fn resolve(headers: &HeaderMap, peer_addr: IpAddr, trusted_proxies: &[IpNet]) -> IpAddr {
    if !trusted_proxies.is_empty() && trusted_proxies.iter().any(|net| net.contains(&peer_addr)) {
        if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
            for ip_str in xff.split(',').map(|s| s.trim()) {
                if let Ok(ip) = ip_str.parse::<IpAddr>() {
                    if !trusted_proxies.iter().any(|net| net.contains(&ip)) {
                        return ip;
                    }
                }
            }
        }
    }

    peer_addr
}
