use clap::{Arg, ArgAction, ArgGroup, ArgMatches, Command};
use grouplink::{DecodeError, GroupMasterKey, InviteLink, LinkConfig, LinkPassword};
use log::{debug, info, LevelFilter};
use settings::Settings;

mod log_utils;
mod settings;

const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
const VERSION_PARAM_NAME: &str = "version";
const LOG_LEVEL_PARAM_NAME: &str = "log_level";
const LOG_FILE_PARAM_NAME: &str = "log_file";
const SETTINGS_PARAM_NAME: &str = "settings";
const ENCODE_COMMAND_NAME: &str = "encode";
const DECODE_COMMAND_NAME: &str = "decode";
const MASTER_KEY_PARAM_NAME: &str = "master_key";
const PASSWORD_PARAM_NAME: &str = "password";
const RANDOM_PASSWORD_PARAM_NAME: &str = "random_password";
const URL_PARAM_NAME: &str = "url";

const EXIT_INVALID_LINK: i32 = 1;
const EXIT_NOT_OURS: i32 = 2;
const EXIT_UNKNOWN_VERSION: i32 = 3;

fn parse_master_key(value: &str) -> Result<GroupMasterKey, String> {
    let bytes =
        hex::decode(value).map_err(|e| format!("master key must be valid hex: {}", e))?;
    GroupMasterKey::try_from(bytes.as_slice()).map_err(|e| e.to_string())
}

fn parse_password(value: &str) -> Result<LinkPassword, String> {
    hex::decode(value)
        .map(LinkPassword::from_bytes)
        .map_err(|e| format!("password must be valid hex: {}", e))
}

fn build_command() -> Command {
    Command::new("grouplink")
        .about("Create and inspect group invite links")
        .args(&[
            // Print just the version, with `-v` as the shorthand
            Arg::new(VERSION_PARAM_NAME)
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print the version of this software and exit"),
            Arg::new(LOG_LEVEL_PARAM_NAME)
                .short('l')
                .long("loglvl")
                .action(ArgAction::Set)
                .value_parser(["info", "debug", "trace"])
                .default_value("info")
                .help("Logging level"),
            Arg::new(LOG_FILE_PARAM_NAME)
                .long("logfile")
                .action(ArgAction::Set)
                .help("File path for storing logs. If not specified, the logs are printed to stderr"),
            Arg::new(SETTINGS_PARAM_NAME)
                .long("settings")
                .action(ArgAction::Set)
                .help("Path to a TOML settings file overriding the link host and schemes"),
        ])
        .subcommand(
            Command::new(ENCODE_COMMAND_NAME)
                .about("Print the invite link for a group master key and password")
                .args(&[
                    Arg::new(MASTER_KEY_PARAM_NAME)
                        .short('k')
                        .long("master-key")
                        .action(ArgAction::Set)
                        .required(true)
                        .value_parser(parse_master_key)
                        .help("Group master key, 32 bytes in hex"),
                    Arg::new(PASSWORD_PARAM_NAME)
                        .short('p')
                        .long("password")
                        .action(ArgAction::Set)
                        .value_parser(parse_password)
                        .help("Invite link password in hex"),
                    Arg::new(RANDOM_PASSWORD_PARAM_NAME)
                        .long("random-password")
                        .action(ArgAction::SetTrue)
                        .help("Generate a fresh invite link password"),
                ])
                .group(
                    ArgGroup::new("password_source")
                        .args([PASSWORD_PARAM_NAME, RANDOM_PASSWORD_PARAM_NAME])
                        .required(true),
                ),
        )
        .subcommand(
            Command::new(DECODE_COMMAND_NAME)
                .about("Print the master key and password carried by an invite link")
                .arg(
                    Arg::new(URL_PARAM_NAME)
                        .action(ArgAction::Set)
                        .required(true)
                        .help("Invite link to decode"),
                ),
        )
        .disable_version_flag(true)
}

fn run_encode(config: &LinkConfig, args: &ArgMatches) -> i32 {
    let master_key = args
        .get_one::<GroupMasterKey>(MASTER_KEY_PARAM_NAME)
        .unwrap()
        .clone();

    let password = if args.get_flag(RANDOM_PASSWORD_PARAM_NAME) {
        match LinkPassword::generate() {
            Ok(password) => password,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        args.get_one::<LinkPassword>(PASSWORD_PARAM_NAME)
            .unwrap()
            .clone()
    };

    debug!("Encoding link with a {}-byte password", password.len());
    let link = InviteLink::for_group_with(config, master_key, password);
    println!("{}", link.url());
    0
}

fn run_decode(config: &LinkConfig, args: &ArgMatches) -> i32 {
    let url = args.get_one::<String>(URL_PARAM_NAME).unwrap();

    match grouplink::decode_with(config, url) {
        Ok(link) => {
            info!("Decoded group invite link");
            println!("master_key={}", hex::encode(link.master_key().as_bytes()));
            println!("password={}", hex::encode(link.password().as_bytes()));
            println!("url={}", link.url());
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                DecodeError::NotOurs => EXIT_NOT_OURS,
                DecodeError::InvalidLink(_) => EXIT_INVALID_LINK,
                DecodeError::UnknownVersion => {
                    eprintln!("This link was created by a newer client, try updating");
                    EXIT_UNKNOWN_VERSION
                }
            }
        }
    }
}

fn main() {
    let args = build_command().get_matches();

    if args.get_flag(VERSION_PARAM_NAME) {
        println!("{}", VERSION_STRING);
        return;
    }

    let _guard = log_utils::LogFlushGuard;
    let logger = match args.get_one::<String>(LOG_FILE_PARAM_NAME) {
        None => log_utils::make_stderr_logger(),
        Some(file) => match log_utils::make_file_logger(file) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Error: couldn't open the logging file: {}", e);
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = log::set_logger(logger) {
        eprintln!("Error: couldn't set logger: {}", e);
        std::process::exit(1);
    }

    log::set_max_level(
        match args
            .get_one::<String>(LOG_LEVEL_PARAM_NAME)
            .map(String::as_str)
        {
            Some("debug") => LevelFilter::Debug,
            Some("trace") => LevelFilter::Trace,
            _ => LevelFilter::Info,
        },
    );

    let settings = match args.get_one::<String>(SETTINGS_PARAM_NAME) {
        None => Settings::default(),
        Some(path) => match Settings::load(path) {
            Ok(settings) => {
                debug!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };

    let exit_code = match args.subcommand() {
        Some((ENCODE_COMMAND_NAME, sub_args)) => run_encode(&settings.link, sub_args),
        Some((DECODE_COMMAND_NAME, sub_args)) => run_decode(&settings.link, sub_args),
        _ => build_command()
            .error(
                clap::error::ErrorKind::MissingSubcommand,
                "a subcommand is required: encode or decode",
            )
            .exit(),
    };

    log::logger().flush();
    std::process::exit(exit_code);
}
