use clap::{Arg, ArgAction, Command};

#[derive(Debug, Clone)]
pub struct ProbeArgs {
    pub target: String,
    pub resolve_addresses: bool,
}

pub fn build_cli() -> Command {
    Command::new("rawping")
        .version("0.1.0")
        .about("Send a single ICMP echo request and report latency, TTL and reachability")
        .arg(
            Arg::new("target")
                .help("Target IPv4 address or hostname")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("resolve")
                .short('a')
                .help("Resolve the target address to a hostname")
                .action(ArgAction::SetTrue),
        )
}

pub fn parse_args() -> anyhow::Result<ProbeArgs> {
    parse_from(build_cli().get_matches())
}

fn parse_from(matches: clap::ArgMatches) -> anyhow::Result<ProbeArgs> {
    let target = matches
        .get_one::<String>("target")
        .ok_or_else(|| anyhow::anyhow!("Missing target"))?;

    Ok(ProbeArgs {
        target: target.clone(),
        resolve_addresses: matches.get_flag("resolve"),
    })
}
