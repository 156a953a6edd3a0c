mod config;
mod error;
mod fs;
mod paths;
mod platform;
mod store;

use crate::config::GamepathConfig;
use crate::error::{LocateResult, absent_as_none};
use crate::fs::OsFilesystem;
use crate::platform::{LibraryPolicy, LookupContext, PlatformConfig, SteamLocator};
use crate::store::host_store;
use std::path::PathBuf;
use std::process::ExitCode;

enum Query {
    AppId(PlatformConfig),
    SteamName(String),
    Libraries,
}

enum Command {
    Lookup(Query),
    WriteDefaultConfig,
}

struct Options {
    command: Command,
    config_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut gog = false;
    let mut name = None;
    let mut libraries = false;
    let mut config_path = None;
    let mut write_default_config = false;
    let mut app_id = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--gog" => gog = true,
            "--libraries" => libraries = true,
            "--write-default-config" => write_default_config = true,
            "--name" => match iter.next() {
                Some(next_arg) => name = Some(next_arg.clone()),
                None => return Err("--name needs a value".to_string()),
            },
            "--config" => match iter.next() {
                Some(next_arg) => config_path = Some(PathBuf::from(next_arg)),
                None => return Err("--config needs a value".to_string()),
            },
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            id if app_id.is_none() => app_id = Some(id.to_string()),
            extra => return Err(format!("unexpected argument {}", extra)),
        }
    }

    if write_default_config {
        return Ok(Options {
            command: Command::WriteDefaultConfig,
            config_path,
        });
    }

    let query = match (app_id, name, libraries) {
        (None, None, true) => Query::Libraries,
        (None, Some(name), false) if !gog => Query::SteamName(name),
        (Some(gog_id), None, false) if gog => Query::AppId(PlatformConfig::Gog { gog_id }),
        (Some(steam_appid), None, false) => {
            if steam_appid.is_empty() || !steam_appid.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("Steam app IDs are numeric, got {}", steam_appid));
            }
            Query::AppId(PlatformConfig::Steam { steam_appid })
        }
        _ => return Err("expected exactly one of <APP_ID>, --name or --libraries".to_string()),
    };

    Ok(Options {
        command: Command::Lookup(query),
        config_path,
    })
}

fn run(query: &Query, config: &GamepathConfig) -> LocateResult<Vec<PathBuf>> {
    let fs = OsFilesystem;
    let overrides = config.override_store();
    if !overrides.is_empty() {
        log::debug!("Using configuration overrides from settings");
    }
    let store = host_store(overrides);

    match query {
        Query::AppId(platform_config) => {
            let platform = platform_config.as_platform();
            log::debug!(
                "Resolving {} game {}",
                platform.name(),
                platform.app_identifier().unwrap_or_default()
            );
            let ctx = LookupContext {
                fs: &fs,
                store: &store,
                config,
            };
            platform.game_root_path(&ctx).map(|path| vec![path])
        }
        Query::SteamName(name) => {
            log::warn!("Name lookups break when a store renames a game; prefer app IDs");
            let locator = SteamLocator::new(&fs, &store, LibraryPolicy::from(config));
            Ok(vec![locator.find_game_by_name(name)?])
        }
        Query::Libraries => {
            let locator = SteamLocator::new(&fs, &store, LibraryPolicy::from(config));
            locator.library_roots()
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        return ExitCode::SUCCESS;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE_TEXT);
            return ExitCode::FAILURE;
        }
    };

    let query = match options.command {
        Command::Lookup(query) => query,
        Command::WriteDefaultConfig => return write_default_config(options.config_path),
    };

    let config = match &options.config_path {
        Some(path) => config::load_cfg_from(path),
        None => config::load_cfg(),
    };

    match absent_as_none(run(&query, &config)) {
        Ok(Some(paths)) => {
            for path in paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        // Not installed: print nothing
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn write_default_config(config_path: Option<PathBuf>) -> ExitCode {
    let Some(path) = config_path.or_else(paths::default_settings_path) else {
        log::error!("No settings location; pass --config <FILE>");
        return ExitCode::FAILURE;
    };

    match config::save_cfg(&GamepathConfig::default(), &path) {
        Ok(()) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to write {}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}

static USAGE_TEXT: &str = r#"
Usage: gamepath [OPTIONS] <APP_ID>

Prints the install directory of a Steam (or GOG) game, or nothing if it is not installed.

Options:
    --gog                    Treat <APP_ID> as a GOG product id
    --name <NAME>            Find a Steam game by (part of) its store name instead of its app id
    --libraries              List every Steam library root
    --config <FILE>          Read settings from FILE instead of the default location
    --write-default-config   Write default settings to the settings location and exit
    --help                   Show this text

Set RUST_LOG=debug to see which libraries and manifests were checked.
"#;
