use std::{env, path::PathBuf, process::ExitCode};

use matchup::{log, Matchup, Options};

// cargo run -- file.ext `pwd`/src

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    log::enable_by_env();
    let Some(specifier) = env::args().nth(1) else {
        eprintln!("usage: matchup <specifier> [cwd]");
        return ExitCode::FAILURE;
    };
    let options = Options {
        cwd: env::args().nth(2).map(PathBuf::from),
        ..Default::default()
    };
    let result = match Matchup::new(options).search(&specifier).await {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    match serde_json::to_string(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
