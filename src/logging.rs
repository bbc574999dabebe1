use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::QuizError;

/// Sets up `env_logger`. `RUST_LOG` overrides `default_filter`.
///
/// Logs go to `log_file` when given. Otherwise they go to stderr, which
/// draws over the quiz while the terminal UI is up.
pub fn init(default_filter: &str, log_file: Option<&Path>) -> Result<(), QuizError> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}
