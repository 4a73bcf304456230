// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print JSON instead of text").action(ArgAction::SetTrue))
        .arg(
            arg!(--jsonl "Print one JSON document per line")
                .action(ArgAction::SetTrue)
                .conflicts_with("json"),
        )
}

pub fn build_cli() -> Command {
    command!()
        .name("tradeboard")
        .about("Terminal dashboard for automated crypto trading activity")
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .global(true)
                .help("Settings database (defaults to the platform data dir)"),
        )
        .arg(
            arg!(-v --verbose "Debug logging; honours RUST_LOG")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("connect")
                .about("Store backend URL and API key, then test the connection")
                .arg(arg!(--url <URL> "Backend base URL").required(false))
                .arg(arg!(--token <TOKEN> "API key sent as a bearer token").required(false)),
        )
        .subcommand(Command::new("disconnect").about("Forget the API key (demo mode)"))
        .subcommand(Command::new("status").about("Show connection settings"))
        .subcommand(
            Command::new("fetch")
                .about("Fetch one panel once")
                .subcommand_required(true)
                .subcommand(json_flags(Command::new("portfolio")))
                .subcommand(json_flags(Command::new("current")))
                .subcommand(json_flags(Command::new("transactions")))
                .subcommand(json_flags(Command::new("chart"))),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Live dashboard")
                .arg(
                    arg!(--once "Render once every panel has loaded, then exit")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    arg!(--ticks <N> "Stop after N redraws")
                        .required(false)
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Poll intervals and request timeout")
                .subcommand_required(true)
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(arg!(<KEY> "interval.portfolio|interval.current|interval.transactions|interval.chart|request.timeout"))
                        .arg(arg!(<SECONDS> "Whole seconds, at least 1")),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        build_cli().debug_assert();
    }
}
