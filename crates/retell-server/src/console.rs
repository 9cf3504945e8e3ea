//! Interactive console adapter: one prompt, one report.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use retell_clients::{GeminiReconstructor, GoogleSearchClient};
use retell_core::RetellConfig;
use retell_runtime::{format_report, Orchestrator};

/// Read one fragment from stdin, print the report, optionally save it.
pub async fn run(config: RetellConfig) -> anyhow::Result<()> {
    println!("Text Reconstruction Application");
    println!("{}", "=".repeat(50));

    let pipeline = Orchestrator::new(
        GeminiReconstructor::new(config.gemini_api_key.clone(), config.gemini_model.clone()),
        GoogleSearchClient::new(
            config.search_api_key.clone(),
            config.search_engine_id.clone(),
        ),
    );

    println!();
    println!("Enter the text you want to reconstruct:");
    println!("(Example: 'lol, that was epic fail. brb')");
    print!("\n> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let input = input.trim();

    if input.is_empty() {
        println!("No text provided. Exiting.");
        return Ok(());
    }

    match pipeline.process(input).await {
        Ok(result) => {
            let report = format_report(&result);
            println!("\n{}", report);

            print!("\nSave report to file? (y/n): ");
            io::stdout().flush()?;
            let mut answer = String::new();
            io::stdin().lock().read_line(&mut answer)?;
            if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                let path = save_report(&report, Path::new("."))?;
                println!("Report saved to: {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("Please check your API keys and configuration.");
        }
    }

    Ok(())
}

/// Write `report` to a timestamp-named file under `dir`.
fn save_report(report: &str, dir: &Path) -> io::Result<PathBuf> {
    let filename = format!("reconstruction_report_{}.txt", Utc::now().timestamp());
    let path = dir.join(filename);
    std::fs::write(&path, report)?;
    Ok(path)
}
