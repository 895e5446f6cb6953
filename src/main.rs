// SPDX-License-Identifier: MPL-2.0
use postula::config;
use postula::i18n::parity::{check_parity, missing_legacy_keys};
use postula::i18n::{Catalog, I18n};
use postula::logging::LoggerBuilder;
use postula::paths;
use postula::style::{StyleConfig, ThemeMode};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
postula - Postula UI strings and style configuration

USAGE:
  postula [OPTIONS] <COMMAND>

COMMANDS:
  tr <KEY>...                 Translate keys in the current locale (with fallback)
  get <LOCALE> <KEY>          Strict lookup; fails on a missing translation
  locales                     List available locales
  check                       Verify locale key parity and legacy key coverage
  style show                  Print the style configuration as JSON
  style color <TOKEN>         Print a color token
  style dark-class <MODE>     Root class for light, dark or system mode
  style variant               CSS selector dark variants compile to
  style files [ROOT]          List files matched by the content globs

OPTIONS:
  --lang <CODE>               UI language (e.g. es, en)
  --config-dir <DIR>          Directory holding settings.toml
  --style <FILE>              Style configuration file (JSON or TOML)
  -v, --verbose               Log at debug level
  -h, --help                  Print help
";

struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    style: Option<PathBuf>,
    verbose: bool,
    command: Vec<String>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        style: args.opt_value_from_str("--style")?,
        verbose: args.contains(["-v", "--verbose"]),
        command: args
            .finish()
            .into_iter()
            .filter_map(|s| s.into_string().ok())
            .collect(),
    })
}

fn main() -> ExitCode {
    if std::env::args().any(|arg| arg == "-h" || arg == "--help") {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::from(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    let (settings, warning) = config::load();

    let level = if flags.verbose { "debug" } else { settings.log_level() };
    let logger = LoggerBuilder::new()
        .default_level(level)
        .ansi(std::io::stderr().is_terminal());
    if let Err(err) = logger.init() {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }
    if let Some(warning) = warning {
        tracing::warn!(warning = %warning, "using default settings");
    }

    match run(&flags, &settings) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(flags: &Flags, settings: &config::Config) -> postula::Result<ExitCode> {
    let words: Vec<&str> = flags.command.iter().map(String::as_str).collect();

    match words.as_slice() {
        ["tr", keys @ ..] if !keys.is_empty() => {
            let i18n = I18n::new(flags.lang.as_deref(), settings)?;
            for key in keys {
                println!("{}", i18n.tr(key));
            }
        }
        ["get", locale, key] => {
            let i18n = I18n::new(flags.lang.as_deref(), settings)?;
            println!("{}", i18n.translate(locale, key)?);
        }
        ["locales"] => {
            let i18n = I18n::new(flags.lang.as_deref(), settings)?;
            for locale in i18n.available_locales() {
                let marker = if locale == i18n.current_locale() { "*" } else { " " };
                println!("{} {}", marker, locale);
            }
        }
        ["check"] => return check(settings),
        ["style", rest @ ..] => {
            let style = StyleConfig::resolve(flags.style.clone(), settings)?;
            return style_command(&style, settings, rest);
        }
        _ => {
            eprint!("{}", HELP);
            return Ok(ExitCode::from(2));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check(settings: &config::Config) -> postula::Result<ExitCode> {
    let catalog = Catalog::load(&settings.i18n)?;
    let reference = catalog.default_locale(settings.default_locale())?;

    let report = check_parity(&catalog, &reference)?;
    print!("{}", report);

    let legacy = missing_legacy_keys(&catalog);
    for (locale, keys) in &legacy {
        println!("{}: legacy keys missing: {}", locale, keys.join(", "));
    }

    if report.is_complete() && legacy.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn style_command(style: &StyleConfig, settings: &config::Config, args: &[&str]) -> postula::Result<ExitCode> {
    match args {
        [] | ["show"] => println!("{}", style.to_json_pretty()?),
        ["color", token] => match style.color(token) {
            Some(color) => println!("{}", color),
            None => {
                eprintln!("unknown color token '{}'", token);
                return Ok(ExitCode::FAILURE);
            }
        },
        ["dark-class", rest @ ..] if rest.len() <= 1 => {
            let mode = match rest.first() {
                Some(raw) => raw.parse::<ThemeMode>().map_err(postula::Error::Config)?,
                None => settings.general.theme_mode,
            };
            println!("{}", style.root_class(mode).unwrap_or(""));
        }
        ["variant"] => println!("{}", style.variant_selector()),
        ["files", rest @ ..] if rest.len() <= 1 => {
            let root = PathBuf::from(rest.first().copied().unwrap_or("."));
            for file in style.content_matcher()?.scan(&root)? {
                println!("{}", file.display());
            }
        }
        _ => {
            eprint!("{}", HELP);
            return Ok(ExitCode::from(2));
        }
    }
    Ok(ExitCode::SUCCESS)
}
