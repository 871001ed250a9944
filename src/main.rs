use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idea_scorecard::config::AppConfig;
use idea_scorecard::models::Rice;
use idea_scorecard::render::Renderer;
use idea_scorecard::repl::Repl;
use idea_scorecard::scoring::rice_score;

#[derive(Parser)]
#[command(name = "ideas")]
#[command(about = "Score and categorize business ideas with RICE, Kano and MoSCoW")]
struct Cli {
    /// Disable colored Kano and MoSCoW tags
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter ideas interactively (the default)
    Repl,
    /// Compute a single RICE score
    Score(ScoreArgs),
}

#[derive(Args)]
struct ScoreArgs {
    /// Number of people affected
    #[arg(long, allow_negative_numbers = true)]
    reach: f64,
    /// Impact (0.25 = low, 1 = medium, 3 = high)
    #[arg(long, allow_negative_numbers = true)]
    impact: f64,
    /// Confidence in percent (0-100)
    #[arg(long, allow_negative_numbers = true)]
    confidence: f64,
    /// Effort in work-days
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    effort: f64,
}

/// Initialize tracing on stderr so stdout stays the interactive channel.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "idea_scorecard=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();
    let renderer = Renderer::new(config.color && !cli.no_color);

    match cli.command {
        Some(Commands::Score(args)) => {
            let rice = Rice::new(args.reach, args.impact, args.confidence, args.effort);
            println!("RICE Score: {}", rice_score(&rice));
        }
        Some(Commands::Repl) | None => {
            tracing::debug!("Starting interactive session");
            println!("Business idea scorecard. Type 'help' for commands.");

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Repl::new(renderer).run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
