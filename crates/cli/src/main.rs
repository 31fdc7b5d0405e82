use anyhow::{Context, Result};
use bookshelf_config::ConfigManager;
use bookshelf_core::{AppError, ErrorSeverity};
use clap::{value_parser, Arg, ArgAction, Command};
use console::style;
use log::LevelFilter;
use std::path::PathBuf;

mod commands;

fn data_arg() -> Arg {
    Arg::new("data")
        .short('d')
        .long("data")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Catalog JSON file (defaults to site.data_path)")
}

fn year_arg() -> Arg {
    Arg::new("year")
        .short('y')
        .long("year")
        .value_name("YYYY")
        .value_parser(value_parser!(i32))
        .help("Reference year for year-scoped statistics (defaults to the current year)")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print JSON instead of a table")
        .action(ArgAction::SetTrue)
}

fn build_cli() -> Command {
    Command::new("bookshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Bookshelf Contributors")
        .about("Static site generator for a personal book catalog")
        .arg(
            Arg::new("config-dir")
                .short('c')
                .long("config-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding bookshelf.toml")
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Render the site into the output directory")
                .arg(data_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("PATH")
                        .value_parser(value_parser!(PathBuf))
                        .help("Output directory (defaults to site.output_path)"),
                )
                .arg(year_arg()),
        )
        .subcommand(
            Command::new("stats")
                .about("Show catalog statistics")
                .arg(data_arg())
                .arg(year_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("upcoming")
                .about("Show what is being read next")
                .arg(data_arg())
                .arg(
                    Arg::new("limit")
                        .short('l')
                        .long("limit")
                        .value_name("N")
                        .value_parser(value_parser!(i64))
                        .allow_negative_numbers(true)
                        .help("Maximum number of books, 0 or less for all (defaults to site.upcoming_limit)"),
                )
                .arg(json_arg()),
        )
        .subcommand(Command::new("init").about("Write a default bookshelf.toml if none exists"))
}

/// Level used until the config file has been read
const STARTUP_LEVEL: LevelFilter = LevelFilter::Warn;

/// Starts logging before anything else runs so config warnings are shown
///
/// Returns true when `RUST_LOG` is set, in which case it keeps control of
/// the filter for the whole run.
fn init_logging() -> bool {
    let from_env = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();

    // Let every record through the logger and gate on the global max level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !from_env {
        log::set_max_level(STARTUP_LEVEL);
    }
    from_env
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();
    let filter_from_env = init_logging();

    let config_dir = matches.get_one::<PathBuf>("config-dir").cloned();
    let manager = ConfigManager::discover(config_dir)
        .map_err(commands::config_error)
        .context("Failed to locate configuration")?;
    let config = manager
        .load_with_env_overrides()
        .map_err(commands::config_error)
        .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;

    if !filter_from_env {
        log::set_max_level(config.app.log_level.to_level_filter());
    }
    console::set_colors_enabled(config.app.color_output && console::colors_enabled());
    log::debug!("Using config directory {}", manager.config_dir().display());

    match matches.subcommand() {
        Some(("build", sub_matches)) => commands::build_site(&config, sub_matches),
        Some(("stats", sub_matches)) => commands::show_stats(&config, sub_matches),
        Some(("upcoming", sub_matches)) => commands::show_upcoming(&config, sub_matches),
        Some(("init", _)) => commands::init_config(&manager),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        if let Some(app_error) = err.downcast_ref::<AppError>() {
            eprintln!("  {}", app_error.user_message());
            if app_error.severity() == ErrorSeverity::Fatal {
                log::error!("{:?}", app_error);
            }
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_build_arguments() {
        let matches = build_cli()
            .try_get_matches_from([
                "bookshelf", "build", "--data", "books.json", "-o", "public", "--year", "2024",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "build");
        assert_eq!(
            sub.get_one::<PathBuf>("data"),
            Some(&PathBuf::from("books.json"))
        );
        assert_eq!(sub.get_one::<PathBuf>("output"), Some(&PathBuf::from("public")));
        assert_eq!(sub.get_one::<i32>("year"), Some(&2024));
    }

    #[test]
    fn test_global_config_dir_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["bookshelf", "stats", "--config-dir", "/tmp/shelf"])
            .unwrap();

        assert_eq!(
            matches.get_one::<PathBuf>("config-dir"),
            Some(&PathBuf::from("/tmp/shelf"))
        );
    }

    #[test]
    fn test_upcoming_limit_must_be_a_number() {
        let result = build_cli().try_get_matches_from(["bookshelf", "upcoming", "--limit", "few"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_upcoming_limit_accepts_negative_numbers() {
        let matches = build_cli()
            .try_get_matches_from(["bookshelf", "upcoming", "--limit", "-1"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(sub.get_one::<i64>("limit"), Some(&-1));
    }

    #[test]
    fn test_config_warnings_pass_the_startup_level() {
        assert!(log::Level::Warn <= STARTUP_LEVEL);
        assert!(log::Level::Info > STARTUP_LEVEL);
    }

    #[test]
    fn test_year_must_be_a_number() {
        let result = build_cli().try_get_matches_from(["bookshelf", "stats", "--year", "soon"]);
        assert!(result.is_err());
    }
}
