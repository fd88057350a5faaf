use std::path::Path;

use recipe_gateway_graphql::schema::sdl;

use crate::cli::SchemaArgs;
use crate::error::CliError;
use crate::output::{OutputContext, OutputMode};

/// Print the gateway's SDL, or write it to `--output`.
pub fn run(args: SchemaArgs, output: &OutputContext) -> Result<(), CliError> {
    let sdl = sdl();

    match args.output {
        Some(path) => {
            write_sdl(&path, &sdl)?;
            if output.mode == OutputMode::Json {
                output.print_json(&serde_json::json!({
                    "written": path.display().to_string(),
                    "bytes": sdl.len(),
                }));
            } else {
                output.success(&format!("schema written to {}", path.display()));
            }
        }
        None if output.mode == OutputMode::Json => {
            output.print_json(&serde_json::json!({ "sdl": sdl }));
        }
        None => print!("{sdl}"),
    }

    Ok(())
}

fn write_sdl(path: &Path, sdl: &str) -> Result<(), CliError> {
    std::fs::write(path, sdl).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
