//! Terminal board: `tap_board [--user <name>] [--fen <placement>]`.
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use tap_board::board_state::board_types::PieceGrid;
use tap_board::config::BoardConfig;
use tap_board::front_end::text_loop::run_stdio_loop;
use tap_board::session::Session;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let CliArgs { user_arg, fen_arg } = parse_args(std::env::args().skip(1))?;

    let grid = match fen_arg {
        Some(fen) => PieceGrid::from_placement(&fen).map_err(|err| err.to_string())?,
        None => PieceGrid::new_game(),
    };

    let session = match user_arg {
        Some(name) => Session::login(&name).map_err(|err| err.to_string())?,
        None => prompt_login().map_err(|err| err.to_string())?,
    };

    run_stdio_loop(session, BoardConfig::default(), grid).map_err(|err| err.to_string())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    user_arg: Option<String>,
    fen_arg: Option<String>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--user" | "-u" => {
                parsed.user_arg = Some(args.next().ok_or("missing value for --user")?);
            }
            "--fen" => {
                parsed.fen_arg = Some(args.next().ok_or("missing value for --fen")?);
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    Ok(parsed)
}

fn prompt_login() -> io::Result<Session> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        write!(stdout, "Username: ")?;
        stdout.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before login",
            ));
        }

        match Session::login(&input) {
            Ok(session) => return Ok(session),
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_args, CliArgs};

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_user_and_fen_flags() {
        let parsed = parse_args(args(&["-u", "magnus", "--fen", "8/8/8/8/8/8/8/8"]))
            .expect("flags should parse");
        assert_eq!(
            parsed,
            CliArgs {
                user_arg: Some("magnus".to_owned()),
                fen_arg: Some("8/8/8/8/8/8/8/8".to_owned()),
            }
        );
        assert_eq!(parse_args(args(&[])), Ok(CliArgs::default()));
    }

    #[test]
    fn trailing_flag_without_value_is_rejected() {
        assert_eq!(
            parse_args(args(&["--user"])),
            Err("missing value for --user".to_owned())
        );
        assert_eq!(
            parse_args(args(&["--user", "magnus", "--fen"])),
            Err("missing value for --fen".to_owned())
        );
        assert_eq!(
            parse_args(args(&["--colour"])),
            Err("unknown argument '--colour'".to_owned())
        );
    }
}
