use anyhow::{Context, Result};
use bookshelf_config::{Config, ConfigError, ConfigManager, CONFIG_FILE_NAME};
use bookshelf_core::{AppError, Book, StatCount, Stats, Status};
use bookshelf_library::{Catalog, UpcomingBooks};
use bookshelf_site::SiteBuilder;
use chrono::{Datelike, Local};
use clap::ArgMatches;
use console::style;
use std::path::{Path, PathBuf};

/// Render the full site
pub fn build_site(config: &Config, matches: &ArgMatches) -> Result<()> {
    let data_path = data_path(config, matches);
    let output_path = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| config.site.output_path.clone());
    let year = reference_year(matches);

    let catalog = load_catalog(&data_path)?;

    let summary = SiteBuilder::new(&output_path, config.site.title.clone())
        .static_path(&config.site.static_path)
        .upcoming_limit(config.site.upcoming_limit)
        .current_year(year)
        .build(&catalog)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to build site into {}", output_path.display()))?;

    println!(
        "{} Built {} pages into {}",
        style("✓").green().bold(),
        style(summary.pages_written).bold(),
        summary.output_path.display()
    );
    if summary.static_files_copied > 0 {
        println!("  Copied {} static files", summary.static_files_copied);
    }

    Ok(())
}

/// Print catalog statistics
pub fn show_stats(config: &Config, matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(&data_path(config, matches))?;
    let year = reference_year(matches);
    let stats = catalog.stats(year);

    if matches.get_flag("json") {
        let json = serde_json::to_string_pretty(&stats).context("Failed to serialize stats")?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", format_stats(&stats, year));
    Ok(())
}

/// Print the books that are up next
pub fn show_upcoming(config: &Config, matches: &ArgMatches) -> Result<()> {
    let catalog = load_catalog(&data_path(config, matches))?;
    let limit = matches
        .get_one::<i64>("limit")
        .map(|&n| upcoming_limit(n))
        .unwrap_or(config.site.upcoming_limit);
    let upcoming = catalog.upcoming_books(limit);

    if matches.get_flag("json") {
        let json =
            serde_json::to_string_pretty(&upcoming.groups).context("Failed to serialize books")?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", format_upcoming(&upcoming));
    Ok(())
}

/// Write a default config file
pub fn init_config(manager: &ConfigManager) -> Result<()> {
    let created = manager
        .initialize()
        .map_err(config_error)
        .context("Failed to write default configuration")?;

    if created {
        println!(
            "{} Created {}",
            style("✓").green().bold(),
            manager.config_path().display()
        );
    } else {
        println!(
            "Config already exists at {}",
            manager.config_path().display()
        );
    }

    Ok(())
}

/// Folds a config failure into the shared error type
pub fn config_error(err: ConfigError) -> AppError {
    match err {
        ConfigError::Read { path, source } => {
            AppError::io(format!("reading {}", path.display()), source)
        }
        ConfigError::Write { path, source } => {
            AppError::io(format!("writing {}", path.display()), source)
        }
        ConfigError::Empty { path } => AppError::InvalidConfiguration {
            setting: path.display().to_string(),
            reason: "the file is empty".to_string(),
        },
        ConfigError::Parse { path, source } => AppError::InvalidConfiguration {
            setting: path.display().to_string(),
            reason: source.to_string(),
        },
        ConfigError::Invalid(problems) => AppError::InvalidConfiguration {
            setting: CONFIG_FILE_NAME.to_string(),
            reason: problems
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        },
        ConfigError::WorkingDir(source) => AppError::io("reading the working directory", source),
        other => AppError::InternalError {
            message: other.to_string(),
        },
    }
}

/// Any limit at or below zero means no limit
fn upcoming_limit(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0)
}

fn data_path(config: &Config, matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("data")
        .cloned()
        .unwrap_or_else(|| config.site.data_path.clone())
}

/// The explicit `--year`, or the current local year
fn reference_year(matches: &ArgMatches) -> i32 {
    matches
        .get_one::<i32>("year")
        .copied()
        .unwrap_or_else(|| Local::now().year())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::load(path)
        .map_err(AppError::from)
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}

fn format_stats(stats: &Stats, year: i32) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", style("Library Statistics").bold().cyan()));
    out.push_str(&format!("{}\n", "=".repeat(60)));

    let rows = [
        ("Books", stats.total_books.to_string()),
        ("Finished", stats.books_finished.to_string()),
        (
            "Finished this year",
            format!("{} ({})", stats.books_finished_this_year, year),
        ),
        ("Pages read", stats.pages_read.to_string()),
        ("Pages read this year", stats.pages_read_this_year.to_string()),
        ("Average rating", format!("{:.2}", stats.average_rating)),
        ("Average pages", format!("{:.2}", stats.average_pages)),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{:<22}{}\n", label, style(value).bold()));
    }

    for (heading, counts) in [
        ("Top genres", &stats.top_genres),
        ("By status", &stats.books_by_status),
        ("By language", &stats.books_by_language),
    ] {
        out.push_str(&format!("\n{}\n", style(heading).bold()));
        out.push_str(&format_counts(counts));
    }

    out
}

fn format_counts(counts: &[StatCount]) -> String {
    if counts.is_empty() {
        return "  (none)\n".to_string();
    }

    counts
        .iter()
        .map(|entry| format!("  {:<20}{}\n", display_label(&entry.value), entry.count))
        .collect()
}

fn format_upcoming(upcoming: &UpcomingBooks) -> String {
    if upcoming.total() == 0 {
        return "Nothing on the reading list.\n".to_string();
    }

    let mut out = String::new();
    for (status, books) in &upcoming.groups {
        if books.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "\n{} ({})\n",
            style(status_label(status)).bold().cyan(),
            books.len()
        ));
        for book in books {
            out.push_str(&format_book_line(book));
        }
    }
    out
}

fn format_book_line(book: &Book) -> String {
    let mut line = format!("  {}", style(&book.title).bold());
    if !book.authors.is_empty() {
        line.push_str(&format!(" by {}", book.authors.join(", ")));
    }
    if book.is_ranked() {
        line.push_str(&format!(" [#{}]", book.rank));
    }
    line.push('\n');
    line
}

fn status_label(status: &Status) -> String {
    display_label(status.as_str())
}

fn display_label(value: &str) -> String {
    if value.is_empty() {
        "(unset)".to_string()
    } else {
        bookshelf_site::helpers::title(value)
    }
}
