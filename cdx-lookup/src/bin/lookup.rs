use std::fs;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cdx_lookup::config::{DEFAULT_CDX_BASE, DEFAULT_REPLAY_BASE};
use cdx_lookup::{run_batch, ArchiveConfig, HttpIndexClient, ResultRow};

/// Check which URLs are indexed for replay in the web archive
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file with one URL per line
    input_file: String,

    /// Report output path
    #[arg(short, long, default_value = "cdx_report.csv")]
    output: String,

    /// Write the report as JSON instead of CSV
    #[arg(long)]
    json: bool,

    /// CDX query endpoint of the index
    #[arg(long, default_value = DEFAULT_CDX_BASE)]
    cdx_base: String,

    /// Base URL of the replay viewer
    #[arg(long, default_value = DEFAULT_REPLAY_BASE)]
    replay_base: String,
}

/// Split input text into URLs: trim each line, drop blank ones. No
/// deduplication and no syntax validation.
fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_urls(path: &str) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL list from {}", path))?;
    Ok(parse_url_lines(&text))
}

/// Quote a CSV field when it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn write_csv(rows: &[ResultRow], path: &str) -> Result<()> {
    let mut out = String::from("url,indexed,versions,replay_url\n");
    for row in rows {
        let replay = row.replay_url.as_deref().unwrap_or("");
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&row.url),
            row.indexed,
            row.versions,
            csv_field(replay)
        ));
    }
    fs::write(path, out).with_context(|| format!("Failed to write report to {}", path))
}

fn write_json(rows: &[ResultRow], path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(rows).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report to {}", path))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let urls = read_urls(&cli.input_file)?;
    if urls.is_empty() {
        return Err(anyhow::anyhow!(
            "No URLs found in {}",
            cli.input_file
        ));
    }

    let config = ArchiveConfig {
        cdx_base: cli.cdx_base,
        replay_base: cli.replay_base,
    };
    let client = HttpIndexClient::new().context("Failed to build HTTP client")?;

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        handler_flag.store(true, std::sync::atomic::Ordering::SeqCst);
        eprintln!("Interrupt received, finishing current URL ...");
    })
    .context("Failed to set Ctrl-C handler")?;

    println!("Looking up {} URLs against {}", urls.len(), config.cdx_base);

    let result = run_batch(&config, &client, &urls, &cancel, |progress| {
        println!(
            "[{}/{}] {}",
            progress.completed,
            progress.total,
            urls[progress.completed - 1]
        );
    });

    if result.rows.len() < urls.len() {
        println!(
            "Cancelled after {} of {} URLs; writing the completed rows",
            result.rows.len(),
            urls.len()
        );
    }

    if cli.json {
        write_json(&result.rows, &cli.output)?;
    } else {
        write_csv(&result.rows, &cli.output)?;
    }

    println!(
        "Wrote {} rows to {} ({} indexed, {} failed lookups)",
        result.rows.len(),
        cli.output,
        result.indexed(),
        result.failed()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_lines_are_trimmed_and_blanks_dropped() {
        let text = "https://a.test\n\n  https://b.test  \n\t\nhttps://a.test\n";
        assert_eq!(
            parse_url_lines(text),
            vec!["https://a.test", "https://b.test", "https://a.test"]
        );
    }

    #[test]
    fn plain_fields_are_left_alone() {
        assert_eq!(csv_field("https://example.com/a"), "https://example.com/a");
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }
}
