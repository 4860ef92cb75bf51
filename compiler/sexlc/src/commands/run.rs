//! `run` / `eval`: evaluate source and print the result.

use sexl_eval::{json, Evaluator};
use tracing::debug;

use super::{CliError, RunOptions};

/// Evaluate `source` with the given host arguments.
pub fn eval_source(source: &str, options: &RunOptions) -> Result<String, CliError> {
    let evaluator = Evaluator::builder().args(options.args.clone()).build();
    debug!(args = options.args.len(), "running");
    let value = evaluator.run(source)?;

    if options.json {
        let text = json::encode(&value).map_err(sexl_eval::Error::from)?;
        Ok(format!("{text}\n"))
    } else {
        Ok(format!("{value:?}\n"))
    }
}
