// ============================================================================
// File: src/main.rs
// Entry point and CLI handling
// ============================================================================

mod error;
mod export;
mod generator;
mod llm_client;
mod models;
mod prompt;
mod request;

use anyhow::Result;
use clap::Parser;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::generator::TopicGenerator;
use crate::llm_client::GroqClient;
use crate::request::{AcademicLevel, GenerationRequest};

/// Command-line arguments for the topic recommender
#[derive(Parser, Debug)]
#[command(name = "research-topics")]
#[command(about = "AI-powered research paper topic suggestions", long_about = None)]
struct Args {
    /// Your area of research interest (e.g., "Machine Learning in Healthcare")
    #[arg(short, long, default_value = "")]
    interest: String,

    /// Optional specific focus (e.g., "neural networks", "error correction")
    #[arg(short, long)]
    focus: Option<String>,

    /// Academic level the topics should target
    #[arg(short, long, value_enum, default_value_t = AcademicLevel::Masters)]
    level: AcademicLevel,

    /// Number of topics to generate
    #[arg(short = 'n', long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(3..=10))]
    count: u8,

    /// Focus on current trends and emerging topics
    #[arg(short, long)]
    trends: bool,

    /// Include interdisciplinary topics
    #[arg(long)]
    interdisciplinary: bool,

    /// Groq API key
    #[arg(short = 'k', long, env = "GROQ_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String,

    /// Path where the generated topics will be saved
    #[arg(short, long, default_value = "research_topics.txt")]
    output: PathBuf,

    /// Skip saving the topics to a file
    #[arg(long)]
    no_save: bool,

    /// Enable verbose output (shows model and sampling settings)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// Snapshot of the current field values. Trims text fields and turns an
    /// empty focus into None; missing required fields are reported at
    /// dispatch time, not here.
    fn into_request(self) -> GenerationRequest {
        let focus = self
            .focus
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty());

        GenerationRequest {
            interest: self.interest.trim().to_string(),
            focus,
            level: self.level,
            count: self.count,
            trends: self.trends,
            interdisciplinary: self.interdisciplinary,
            credential: self.api_key.trim().to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let output = args.output.clone();
    let no_save = args.no_save;
    let verbose = args.verbose;
    let request = args.into_request();

    print_header(&request);

    let client = GroqClient::new(request.credential.clone(), verbose);
    let generator = TopicGenerator::new(Box::new(client));

    let spinner = create_spinner();
    let result = generator.generate(&request).await;
    spinner.finish_and_clear();

    match result {
        Ok(topics) => {
            export::print_topics(&topics);

            if !no_save {
                export::save(&output, &topics)?;
                println!(
                    "\n{} Topics saved to: {}",
                    "✓".green().bold(),
                    output.display().to_string().bright_cyan()
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("\n{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn print_header(request: &GenerationRequest) {
    println!("{}", "\n═══════════════════════════════════════".bright_blue());
    println!("{}", "   RESEARCH PAPER TOPIC RECOMMENDER".bright_white().bold());
    println!("{}", "═══════════════════════════════════════".bright_blue());
    if !request.interest.is_empty() {
        println!("\n{}: {}", "Interest".green().bold(), request.interest);
    }
    if let Some(focus) = &request.focus {
        println!("{}: {}", "Focus".green().bold(), focus);
    }
    println!("{}: {}", "Level".green().bold(), request.level);
    println!("{}: {}\n", "Topics".green().bold(), request.count);
}

fn create_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Generating research topics... This may take a moment.");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_five_within_bounds() {
        let args = Args::parse_from(["research-topics", "--interest", "x", "-k", "key"]);
        assert_eq!(args.count, 5);
        assert_eq!(args.level, AcademicLevel::Masters);
    }

    #[test]
    fn count_outside_range_is_rejected_at_the_surface() {
        assert!(Args::try_parse_from(["research-topics", "-n", "2"]).is_err());
        assert!(Args::try_parse_from(["research-topics", "-n", "11"]).is_err());
        assert!(Args::try_parse_from(["research-topics", "-n", "3"]).is_ok());
        assert!(Args::try_parse_from(["research-topics", "-n", "10"]).is_ok());
    }

    #[test]
    fn into_request_trims_and_normalizes_focus() {
        let args = Args::parse_from([
            "research-topics",
            "--interest",
            "  Quantum Computing  ",
            "--focus",
            "   ",
            "-k",
            "key",
        ]);
        let request = args.into_request();
        assert_eq!(request.interest, "Quantum Computing");
        assert_eq!(request.focus, None);
    }
}
