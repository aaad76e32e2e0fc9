mod cli;
mod report;
mod utils;

use rawping::icmp::PAYLOAD_LEN;
use rawping::{dns, icmp};
use std::process;

fn main() {
    // Enable debug logging if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    }

    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            utils::exit_with_error(&format!("参数解析错误: {}", e), 1);
        }
    };

    if let Err(e) = utils::validate_target(&args.target) {
        utils::exit_with_error(&e.to_string(), 1);
    }

    // Resolve up front so the header can show the address being probed
    let target_ip = match dns::resolve_ipv4(&args.target) {
        Ok(ip) => ip,
        Err(e) => {
            utils::exit_with_error(&format!("无法解析主机名 '{}': {}", args.target, e), 1);
        }
    };
    let target_addr = target_ip.to_string();

    println!("{}", report::format_header(&args.target, &target_addr, PAYLOAD_LEN));

    let result = match icmp::ping(&target_addr) {
        Ok(result) => result,
        Err(e) => {
            utils::exit_with_error(&e.to_string(), 1);
        }
    };

    let resolved_name = if args.resolve_addresses && result.reachable {
        dns::reverse_lookup(target_ip)
    } else {
        None
    };

    println!("{}", report::format_result(&result, &target_addr, resolved_name.as_deref()));

    if !result.reachable {
        process::exit(1);
    }
}
