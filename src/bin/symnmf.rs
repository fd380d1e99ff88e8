use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use ndarray::Array2;
use symnmf::{
    degree_matrix, format_matrix, normalized_similarity, read_points, similarity_matrix, Error,
    SymNmf,
};

#[derive(Debug, Parser)]
#[command(name = "symnmf")]
#[command(about = "SymNMF clustering pipeline over a comma-separated point file")]
struct Cli {
    /// Which matrix to compute and print.
    #[arg(value_enum)]
    goal: Goal,

    /// Point file: one point per line, coordinates comma-separated.
    file: PathBuf,

    /// Number of clusters (required for the symnmf goal).
    #[arg(long)]
    k: Option<usize>,

    /// Seed for the initial factor.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Goal {
    /// Similarity matrix.
    Sym,
    /// Diagonal degree matrix.
    Ddg,
    /// Normalized similarity matrix.
    Norm,
    /// Final factor of the full factorization pipeline.
    Symnmf,
}

fn run(cli: &Cli) -> symnmf::Result<Array2<f64>> {
    let points = read_points(&cli.file)?;

    match cli.goal {
        Goal::Sym => similarity_matrix(&points),
        Goal::Ddg => degree_matrix(&points),
        Goal::Norm => normalized_similarity(&points),
        Goal::Symnmf => {
            let k = cli
                .k
                .ok_or_else(|| Error::Other("the symnmf goal requires --k".to_string()))?;
            let fit = SymNmf::new(k).with_seed(cli.seed).fit(&points)?;
            Ok(fit.h)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(matrix) => {
            println!("{}", format_matrix(&matrix));
            ExitCode::SUCCESS
        }
        Err(_) => {
            println!("An Error Has Occurred");
            ExitCode::FAILURE
        }
    }
}
