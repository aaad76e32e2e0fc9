use std::process;

/// Print error message and exit with error code
pub fn exit_with_error(message: &str, code: i32) -> ! {
    eprintln!("rawping: {}", message);
    process::exit(code);
}

/// Reject targets the probe cannot handle before touching the network
pub fn validate_target(target: &str) -> anyhow::Result<()> {
    if target.trim().is_empty() {
        return Err(anyhow::anyhow!("目标地址不能为空"));
    }

    Ok(())
}

/// Format time duration for display
pub fn format_time(ms: f64) -> String {
    if ms < 1.0 {
        "<1ms".to_string()
    } else {
        format!("{:.0}ms", ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_validation() {
        assert!(validate_target("8.8.8.8").is_ok());
        assert!(validate_target("example.com").is_ok());

        assert!(validate_target("").is_err());
        assert!(validate_target("   ").is_err());
    }

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_time(0.5), "<1ms");
        assert_eq!(format_time(1.0), "1ms");
        assert_eq!(format_time(15.7), "16ms");
        assert_eq!(format_time(5000.3), "5000ms");
    }
}
