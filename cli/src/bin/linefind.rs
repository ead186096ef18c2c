use clap::{Parser, Subcommand};
use cli::{LineFindJob, ThresholdSettings};
use color_eyre::eyre::{eyre, Result};
use linefind::{ComputedLines, LineFindCommand, LineFinder, PipelineConfig};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a job described by a TOML or JSON file
    Run {
        /// Path to the job file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Detect line segments in an image
    Detect {
        /// Path to the input image
        #[arg(short, long)]
        input: PathBuf,
        /// Write the result as JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Fixed brightness threshold (Otsu's level when omitted)
        #[arg(long)]
        threshold: Option<u8>,
        /// Treat bright pixels as lines
        #[arg(long)]
        invert: bool,
        /// Neighbourhood radius in pixels for endpoint adjacency
        #[arg(long, default_value = "1")]
        delta: u32,
        /// Only trace, skip grouping
        #[arg(long)]
        no_group: bool,
        /// Merge segments whose angle differs by at most this many degrees
        #[arg(long)]
        angle_epsilon: Option<f64>,
    },
    /// Print the JSON schema of the job file and the command enum
    Schema,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let job = LineFindJob::from_file(&config)?;
            info!("Job: {:?}", job);
            run_job(&job)?;
        }
        Commands::Detect {
            input,
            output,
            threshold,
            invert,
            delta,
            no_group,
            angle_epsilon,
        } => {
            let job = LineFindJob {
                input_path: input.to_string_lossy().into_owned(),
                output_path: output.map(|p| p.to_string_lossy().into_owned()),
                classification: ThresholdSettings { threshold, invert },
                pipeline: PipelineConfig {
                    delta,
                    group: !no_group,
                    merge: angle_epsilon.is_some(),
                    angle_epsilon,
                },
            };
            run_job(&job)?;
        }
        Commands::Schema => {
            let job_schema = schemars::schema_for!(LineFindJob);
            println!("{}", serde_json::to_string_pretty(&job_schema)?);
            println!("{}", serde_json::to_string_pretty(&LineFindCommand::schema())?);
        }
    }

    Ok(())
}

fn run_job(job: &LineFindJob) -> Result<()> {
    let mut finder = LineFinder::new();
    finder.load_image(&job.input_path)?;
    let image = finder
        .image()
        .ok_or_else(|| eyre!("No image loaded from {}", job.input_path))?;
    let classifier = job.classification.classifier(image);
    info!(
        "Loaded {} ({}x{}), threshold {} ({:?})",
        job.input_path,
        image.width(),
        image.height(),
        classifier.threshold,
        classifier.polarity
    );
    finder.set_classifier(classifier);

    let result = finder.run(&job.pipeline)?;
    report(&result);

    match &job.output_path {
        Some(path) => {
            result.save_json(Path::new(path))?;
            info!("Wrote {}", path);
        }
        None => println!("{}", serde_json::to_string_pretty(&result.to_coordinates())?),
    }

    Ok(())
}

fn report(result: &ComputedLines) {
    info!("Traced {} segments", result.segments.len());
    if !result.structures.is_empty() {
        info!(
            "{} structures, {} segments after post-processing",
            result.structures.len(),
            result.final_segment_count()
        );
    }
}
