use std::{
    env::args_os,
    io::{stderr, stdout, Write},
    process::ExitCode,
};

use env_logger::Env;
use fontest::{font::truetype::TrueType, Error};

const TAG: &str = "[fontest]";

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "{TAG} {}: {}", record.level(), record.args()))
        .init();

    match fontest::run::<TrueType, _, _>(args_os(), &mut stdout(), &mut stderr()) {
        Ok(()) | Err(Error::Help) => ExitCode::SUCCESS,
        Err(e) => {
            // Nothing left to report to if stderr is gone
            let _ = writeln!(stderr(), "{TAG} {e}");
            ExitCode::FAILURE
        }
    }
}
