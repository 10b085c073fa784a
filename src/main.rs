use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{debug, LevelFilter};
use phoneinfo::{
    format_phone_info, i18n::Locale, InfoRequest, LookupError, PhoneInfoLookup,
    PrefixDataProvider,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Carrier, country, region and timezones of an international phone number.", long_about = None)]
struct Args {
    /// Phone number in international format, e.g. +213549385183
    number: String,

    /// Print the carrier name.
    #[arg(short, long)]
    operator: bool,

    /// Print the country name.
    #[arg(short, long)]
    country: bool,

    /// Print the region description.
    #[arg(short, long)]
    region: bool,

    /// Print the timezones.
    #[arg(short, long)]
    timezones: bool,

    /// Display locale of the names, e.g. fr, en, fr_FR.
    #[arg(short, long, env = "PHONEINFO_LOCALE", default_value = "fr", value_parser = Locale::parse)]
    locale: Locale,

    /// Root of the prefix data files. Uses the bundled sample data when not set.
    #[arg(short, long, env = "PHONEINFO_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity, may be repeated.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbosity: u8,
}

impl Args {
    /// Every field when no field flag was given.
    fn request(&self) -> InfoRequest {
        let request = InfoRequest {
            operator: self.operator,
            country: self.country,
            region: self.region,
            timezones: self.timezones,
        };
        if request.is_empty() {
            InfoRequest::all()
        } else {
            request
        }
    }
}

fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Looks the number up and renders the requested fields.
fn run(args: &Args) -> Result<String, LookupError> {
    let provider = match &args.data_dir {
        Some(dir) => PrefixDataProvider::from_dir(dir),
        None => PrefixDataProvider::bundled(),
    };
    let phone_info = PhoneInfoLookup::new(provider).with_locale(args.locale.clone());
    let info = phone_info.lookup(&args.number, args.request())?;
    Ok(format_phone_info(&info))
}

fn error_message(err: &LookupError) -> String {
    format!("Erreur: {}", err)
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(level_for_verbosity(args.verbosity))
        .parse_default_env()
        .init();
    debug!("{:?}", args);

    match run(&args) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}
