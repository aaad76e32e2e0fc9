use rawping::ProbeResult;

use crate::utils::format_time;

pub fn format_header(target: &str, resolved_ip: &str, payload_size: usize) -> String {
    if target == resolved_ip {
        format!("正在 Ping {} 具有 {} 字节的数据:", target, payload_size)
    } else {
        format!("正在 Ping {} [{}] 具有 {} 字节的数据:", target, resolved_ip, payload_size)
    }
}

pub fn format_result(result: &ProbeResult, source: &str, resolved_name: Option<&str>) -> String {
    if !result.reachable {
        return "请求超时。".to_string();
    }

    let source_display = match resolved_name {
        Some(name) => format!("{} [{}]", name, source),
        None => source.to_string(),
    };

    format!(
        "来自 {} 的回复: 时间={} TTL={}",
        source_display,
        format_time(result.round_trip_ms),
        result.ttl
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_formatting() {
        assert_eq!(
            format_header("8.8.8.8", "8.8.8.8", 32),
            "正在 Ping 8.8.8.8 具有 32 字节的数据:"
        );
        assert!(format_header("dns.google", "8.8.8.8", 32).contains("dns.google [8.8.8.8]"));
    }

    #[test]
    fn test_reply_formatting() {
        let result = ProbeResult::reachable(15.7, 117);

        let formatted = format_result(&result, "8.8.8.8", None);
        assert!(formatted.contains("来自 8.8.8.8 的回复"));
        assert!(formatted.contains("时间=16ms"));
        assert!(formatted.contains("TTL=117"));

        let formatted = format_result(&result, "8.8.8.8", Some("dns.google"));
        assert!(formatted.contains("dns.google [8.8.8.8]"));
    }

    #[test]
    fn test_timeout_formatting() {
        let result = ProbeResult::unreachable(5000.4);
        assert_eq!(format_result(&result, "192.0.2.1", None), "请求超时。");
    }
}
