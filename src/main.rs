use clap::Parser;
use promptgen::{AppError, GenerateOptions};

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(version)]
#[command(
    about = "Generate tailored AI prompts for any industry via the Gemini API",
    long_about = None
)]
struct Cli {
    /// Industry, service or profession (interactive form when omitted)
    industry: Option<String>,

    /// Problem type: app-creation, process-optimization, marketing-strategy,
    /// data-analysis, or content-creation
    #[arg(short = 't', long, value_name = "TYPE")]
    problem_type: Option<String>,

    /// Complexity level: beginner, intermediate, advanced, or expert
    #[arg(short, long, value_name = "LEVEL")]
    complexity: Option<String>,

    /// Prompt format (ignored for app-creation): instructions, questions,
    /// examples, or role-play
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    prompt_format: Option<String>,

    /// Print the result without copying it to the clipboard
    #[arg(long)]
    no_copy: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = GenerateOptions {
        industry: cli.industry,
        problem_type: cli.problem_type,
        complexity: cli.complexity,
        prompt_format: cli.prompt_format,
        copy_to_clipboard: !cli.no_copy,
    };

    let result: Result<(), AppError> = promptgen::generate(options);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
