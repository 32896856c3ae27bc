use anyhow::{bail, Context, Result};
use clap::Parser;
use log::warn;
use serde::Serialize;
use show_years::{ShowTitle, YearRange};
use std::io::{self, BufRead};

/// Extract the years from television show titles like "The Wire (2002-2008)"
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show titles to parse; one per line is read from stdin when none are given
    titles: Vec<String>,

    /// Print one JSON object per title
    #[arg(long)]
    json: bool,

    /// Exit with an error if any title has no year information
    #[arg(long)]
    strict: bool,
}

#[derive(Serialize, Debug)]
struct TitleReport<'a> {
    title: &'a str,
    name: &'a str,
    years: Option<YearRange>,
}

fn read_titles<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut titles = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read title from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            titles.push(line.to_string());
        }
    }
    Ok(titles)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let titles = if cli.titles.is_empty() {
        read_titles(io::stdin().lock())?
    } else {
        cli.titles
    };

    let mut failures = 0;
    for raw in &titles {
        let title = ShowTitle::from(raw.as_str());

        let years = match title.year_range() {
            Ok(range) => {
                if !range.is_chronological() {
                    warn!("{:?} ends before it starts: {}", raw, range);
                }
                Some(range)
            }
            Err(e) => {
                warn!("{}", e);
                failures += 1;
                None
            }
        };

        if cli.json {
            let report = TitleReport {
                title: title.as_str(),
                name: title.name(),
                years,
            };
            let json = serde_json::to_string(&report).context("Failed to serialize title report")?;
            println!("{}", json);
        } else {
            match years {
                Some(range) => println!("{}\t{}", title, range),
                None => println!("{}\t-", title),
            }
        }
    }

    if cli.strict && failures > 0 {
        bail!(
            "{} of {} titles had no year information",
            failures,
            titles.len()
        );
    }

    Ok(())
}
