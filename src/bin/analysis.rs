use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use symnmf::{read_points, silhouette_score, Clustering, Kmeans, SymNmf};

#[derive(Debug, Parser)]
#[command(name = "analysis")]
#[command(about = "Compare SymNMF and k-means silhouette scores on a point file")]
struct Cli {
    /// Number of clusters.
    k: usize,

    /// Point file: one point per line, coordinates comma-separated.
    file: PathBuf,

    /// Seed for the initial factor.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn run(cli: &Cli) -> symnmf::Result<(f64, f64)> {
    let points = read_points(&cli.file)?;

    let nmf_labels = SymNmf::new(cli.k)
        .with_seed(cli.seed)
        .fit_predict(&points)?;
    let kmeans_labels = Kmeans::new(cli.k).with_seed(cli.seed).fit_predict(&points)?;

    let nmf = silhouette_score(&points, &nmf_labels)?;
    let kmeans = silhouette_score(&points, &kmeans_labels)?;
    Ok((nmf, kmeans))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok((nmf, kmeans)) => {
            println!("nmf: {:.4}", nmf);
            println!("kmeans: {:.4}", kmeans);
            ExitCode::SUCCESS
        }
        Err(_) => {
            println!("An Error Has Occurred");
            ExitCode::FAILURE
        }
    }
}
