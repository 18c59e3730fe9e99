use std::{
    io::{self, Write},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wavefft::{MAX_SIZE_EXPONENT, Strategy, Wave, WaveConfig, WaveError};

mod report;

#[derive(Parser, Debug)]
#[command(name = "wave")]
#[command(about = "Compute the FFT of the ramp 0, 1, ..., 2^n - 1", long_about = None)]
struct Cli {
    /// Problem size as a power-of-two exponent.
    #[arg(
        short = 'n',
        long = "size",
        value_name = "EXP",
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIZE_EXPONENT as i64)
    )]
    size: u32,
    /// Use the vectorized (SIMD) strategy.
    #[arg(short, long, conflicts_with = "recursive")]
    simd: bool,
    /// Use the recursive scalar strategy.
    #[arg(short, long)]
    recursive: bool,
    /// Print the transformed sequence.
    #[arg(short, long)]
    print: bool,
    /// Print how long the transform took.
    #[arg(short, long)]
    time: bool,
}

impl Cli {
    fn strategy(&self) -> Strategy {
        match (self.simd, self.recursive) {
            (true, _) => Strategy::Vectorized,
            (false, true) => Strategy::Recursive,
            (false, false) => Strategy::scalar(),
        }
    }

    fn config(&self) -> Result<WaveConfig, WaveError> {
        WaveConfig::new(self.size, self.strategy())
            .map(|config| config.with_print(self.print).with_time(self.time))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut wave = Wave::new(&config);
    tracing::info!(
        samples = wave.len(),
        strategy = %wave.strategy(),
        kernel = wave.kernel_name(),
        "transforming"
    );

    let start = Instant::now();
    wave.transform();
    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.print() {
        if let Err(error) = report::write_results(&mut out, wave.samples()) {
            eprintln!("Error: failed to print results: {error}");
            return ExitCode::FAILURE;
        }
    }

    if config.time() {
        if let Err(error) = report::write_timing(&mut out, &wave, elapsed) {
            eprintln!("Error: failed to print timing: {error}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(error) = out.flush() {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("wave").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_scalar() {
        let cli = parse(&["-n", "4"]).unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.exponent(), 4);
        assert_eq!(config.strategy(), Strategy::Iterative);
        assert!(!config.print());
        assert!(!config.time());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&["-n", "10", "-s", "-p", "-t"]).unwrap();
        let config = cli.config().unwrap();
        assert_eq!(config.strategy(), Strategy::Vectorized);
        assert!(config.print());
        assert!(config.time());
    }

    #[test]
    fn test_recursive_flag() {
        let cli = parse(&["--size", "3", "--recursive"]).unwrap();
        assert_eq!(cli.config().unwrap().strategy(), Strategy::Recursive);
    }

    #[test]
    fn test_rejects_missing_size() {
        assert!(parse(&["-s"]).is_err());
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(parse(&["-n", "0"]).is_err());
        assert!(parse(&["-n", "-3"]).is_err());
        assert!(parse(&["-n", "abc"]).is_err());
    }

    #[test]
    fn test_rejects_oversized_exponent() {
        assert!(parse(&["-n", "31"]).is_err());
    }

    #[test]
    fn test_simd_conflicts_with_recursive() {
        assert!(parse(&["-n", "3", "-s", "-r"]).is_err());
    }
}
