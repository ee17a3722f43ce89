use std::process::ExitCode;

use clap::Parser;
use gaze::Vector;

#[derive(Parser)]
#[command(name = "gaze")]
#[command(about = "Build 2d vectors from text and print their components")]
#[command(version = gaze::VERSION)]
struct Cli {
    /// Vectors to build, e.g. "3", "3,5", "[3]" or "[3, 5]"
    #[arg(required = true, allow_hyphen_values = true)]
    vectors: Vec<String>,

    /// Scalar added to the x component of every vector
    #[arg(long, allow_hyphen_values = true)]
    add: Option<f64>,

    /// Print each vector as a json array
    #[arg(long)]
    json: bool,
}

fn render(cli: &Cli, input: &str) -> anyhow::Result<String> {
    let mut v: Vector = gaze::parse_vector(input)?;
    if let Some(c) = cli.add {
        v = v.try_add(c)?;
    }
    log::debug!("{} -> {:?}", input, v);
    if cli.json {
        Ok(serde_json::to_string(&v)?)
    } else {
        Ok(v.to_string())
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut failed = false;
    for input in &cli.vectors {
        match render(&cli, input) {
            Ok(out) => println!("{}", out),
            Err(err) => {
                eprintln!("parse vector {} error: {}", input, err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
