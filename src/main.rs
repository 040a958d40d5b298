use anyhow::Result;
use clap::{Arg, ArgAction, ArgGroup, Command};
use std::path::PathBuf;

use rigmon::commands;
use rigmon::core::config::Config;
use rigmon::core::event_log::MAX_USER_DELAY_SECS;

fn cli() -> Command {
    Command::new("rigmon")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Fleet health checks and event logging for Awesome Miner managed rigs")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("pc")
                .long("pc")
                .value_name("PC_NAME")
                .help("PC where Awesome Miner runs, as in 'http://<pc_name>:<port>/api'")
                .global(true),
        )
        .subcommand(
            Command::new("defective")
                .about("Show GPU miners with missing GPUs or GPUs on default memory clock")
                .arg(
                    Arg::new("groups")
                        .short('g')
                        .long("groups")
                        .value_name("GROUPS")
                        .help("Comma-separated group names (default: every registered fleet)")
                        .value_delimiter(','),
                ),
        )
        .subcommand(
            Command::new("find")
                .about("Show a miner by IP address or name")
                .arg(
                    Arg::new("ip")
                        .long("ip")
                        .value_name("IP")
                        .help("Miner IP address")
                        .conflicts_with("name"),
                )
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .value_name("NAME")
                        .help("Miner name"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the miner as JSON")
                        .action(ArgAction::SetTrue),
                )
                .group(ArgGroup::new("target").args(["ip", "name"]).required(true)),
        )
        .subcommand(
            Command::new("notifications")
                .about("Show deduplicated Awesome Miner notifications")
                .arg(
                    Arg::new("prefix")
                        .short('p')
                        .long("prefix")
                        .value_name("PREFIX")
                        .help("Only notifications whose miner name starts with PREFIX"),
                ),
        )
        .subcommand(
            Command::new("log-offline")
                .about("Record that a miner went offline in a .csv log")
                .long_about(
                    "Record that a miner went offline in a .csv log\n\n\
                     Awesome Miner re-runs the 'Detect Offline' action while a miner stays \
                     offline. Add a 'Wait' action after 'Run Executable' and pass its duration \
                     as --delay so repeated triggers are not counted as new offline events.",
                )
                .arg(ip_arg())
                .arg(log_arg())
                .arg(
                    Arg::new("delay")
                        .short('d')
                        .long("delay")
                        .value_name("SECONDS")
                        .help("Seconds of the 'Wait' action in the Awesome Miner rule")
                        .value_parser(clap::value_parser!(u64).range(..=MAX_USER_DELAY_SECS))
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("log-restart")
                .about("Record a miner restart in a .csv log")
                .arg(ip_arg())
                .arg(log_arg()),
        )
        .subcommand(
            Command::new("logs")
                .about("Print an offline or restart log")
                .arg(log_arg())
                .arg(
                    Arg::new("restarts")
                        .short('r')
                        .long("restarts")
                        .help("The log is a restart log")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("plugs")
                .about("Inspect the miner to smart plug map (use 'rigmon plugs --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("list")
                        .about("List mapped plugs")
                        .arg(map_arg()),
                )
                .subcommand(
                    Command::new("resolve")
                        .about("Show the plug powering the miner at an IP address")
                        .arg(map_arg())
                        .arg(ip_arg()),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage configuration (use 'rigmon config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(
                    Command::new("init")
                        .about("Write a default configuration file")
                        .arg(
                            Arg::new("force")
                                .short('f')
                                .long("force")
                                .help("Overwrite an existing configuration")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

fn ip_arg() -> Arg {
    Arg::new("ip")
        .long("ip")
        .value_name("IP")
        .help("Miner IP address")
        .required(true)
}

fn log_arg() -> Arg {
    Arg::new("log")
        .short('l')
        .long("log")
        .value_name("FILE")
        .help("Path to the .csv log file")
        .value_parser(clap::value_parser!(PathBuf))
        .required(true)
}

fn map_arg() -> Arg {
    Arg::new("map")
        .short('m')
        .long("map")
        .value_name("FILE")
        .help("Path to the file mapping miner names to plug IPs ('<miner> : <plug ip>' per line)")
        .value_parser(clap::value_parser!(PathBuf))
        .required(true)
}

fn load_config(matches: &clap::ArgMatches) -> Result<Config> {
    let mut config = Config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    if let Some(pc_name) = matches.get_one::<String>("pc") {
        config.awesome_miner.pc_name = pc_name.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    rigmon::init_logging();

    let matches = cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("version", _)) => commands::version()?,
        Some(("logs", sub_matches)) => commands::event_log::show(sub_matches)?,
        Some((name, sub_matches)) => {
            let config = load_config(&matches)?;
            match name {
                "defective" => commands::defective(sub_matches, &config)?,
                "find" => commands::find(sub_matches, &config)?,
                "notifications" => commands::notifications(sub_matches, &config)?,
                "log-offline" => commands::event_log::log_offline(sub_matches, &config)?,
                "log-restart" => commands::event_log::log_restart(sub_matches, &config)?,
                "plugs" => commands::plugs::handle_plugs(sub_matches, &config)?,
                "config" => commands::config::handle_config(sub_matches, &config)?,
                _ => unreachable!("subcommand is defined in cli()"),
            }
        }
        None => {
            cli().print_help()?;
            println!();
        }
    }

    Ok(())
}
