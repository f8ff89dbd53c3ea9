//! `fcdev generate`: markdown templates to Lua via the chat API.

use crate::chat::{ChatClient, load_api_key};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{FcError, Result};
use crate::generate::{GenerateSettings, GenerationSummary, generate_all};
use std::path::PathBuf;
use std::time::Duration;

pub fn cmd_generate(mut config: Config, args: GenerateArgs) -> Result<()> {
    if let Some(endpoint) = args.endpoint {
        config.chat_endpoint = endpoint;
    }
    if let Some(delay_ms) = args.delay_ms {
        config.request_delay_ms = delay_ms;
    }
    if args.keep_existing {
        config.clean_output = false;
    }
    config.validate()?;

    let token_file = args
        .token_file
        .unwrap_or_else(|| PathBuf::from(&config.token_file));
    let api_key = load_api_key(&token_file)?;
    let client = ChatClient::new(&config.chat_endpoint, api_key)?;

    let settings = GenerateSettings {
        source_dir: args
            .source
            .unwrap_or_else(|| PathBuf::from(&config.template_dir)),
        output_dir: args
            .output
            .unwrap_or_else(|| PathBuf::from(&config.output_dir)),
        delay: Duration::from_millis(config.request_delay_ms),
        clean_output: config.clean_output,
    };

    let summary = generate_all(&settings, &client)?;
    print!("{}", format_summary(&summary));

    if summary.is_success() {
        Ok(())
    } else {
        Err(FcError::UserError(format!(
            "{} template(s) failed to generate",
            summary.failed.len()
        )))
    }
}

fn format_summary(summary: &GenerationSummary) -> String {
    let mut out = String::new();
    for path in &summary.generated {
        out.push_str(&format!("Generated {}\n", path.display()));
    }
    for (path, reason) in &summary.failed {
        out.push_str(&format!("Failed    {}: {}\n", path.display(), reason));
    }
    out.push_str(&format!(
        "\n{} generated, {} failed\n",
        summary.generated.len(),
        summary.failed.len()
    ));
    out
}
