use std::path::PathBuf;

use clap::Parser;
use paged_quiz::{
    logging, Locale, PageCount, Quiz, QuizConfig, QuizError, QuizSource, DEFAULT_QUESTIONS_PER_PAGE,
    DEFAULT_SOURCE, DEFAULT_TOTAL_PAGES,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file or http(s) URL to load the questions from
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    source: String,

    /// Questions shown on each page
    #[arg(long, default_value_t = DEFAULT_QUESTIONS_PER_PAGE)]
    per_page: usize,

    /// Fixed number of pages, regardless of how many questions there are
    #[arg(long, default_value_t = DEFAULT_TOTAL_PAGES)]
    total_pages: usize,

    /// Derive the page count from the number of questions instead
    #[arg(long, conflicts_with = "total_pages")]
    derive_pages: bool,

    /// Language of the quiz messages
    #[arg(long, value_enum, default_value_t = Locale::En)]
    lang: Locale,

    /// Default log filter, overridden by RUST_LOG
    #[arg(short, long, default_value = "error")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> QuizConfig {
        let page_count = if self.derive_pages {
            PageCount::Derived
        } else {
            PageCount::Fixed(self.total_pages)
        };

        QuizConfig {
            questions_per_page: self.per_page,
            page_count,
            locale: self.lang,
        }
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    logging::init(&args.log_level, args.log_file.as_deref())?;

    let quiz = Quiz::new(QuizSource::parse(&args.source), args.config())?;
    quiz.run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
