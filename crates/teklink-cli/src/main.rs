use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use teklink_core::ParamWriteRequest;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TEKLINK_BUILD_COMMIT"),
    " ",
    env!("TEKLINK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "teklink")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Codec for TEK-766 tank-level sensor LoRaWAN payloads.",
    long_about = None,
    after_help = "Examples:\n  teklink uplink decode --port 16 0000000000641e32 --stdout\n  teklink uplink decode --port 67 --file payload.hex -o report.json\n  teklink downlink build --tx-period-hours 12 --ping-rate-minutes 10"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on device uplink payloads.
    Uplink {
        #[command(subcommand)]
        command: UplinkCommands,
    },
    /// Operations on device downlink payloads.
    Downlink {
        #[command(subcommand)]
        command: DownlinkCommands,
    },
}

#[derive(Subcommand, Debug)]
enum UplinkCommands {
    /// Decode one payload into a JSON report.
    #[command(
        after_help = "Examples:\n  teklink uplink decode --port 48 3000000701042d0046005800000c012cf0 --stdout\n  teklink uplink decode --port 67 --file payload.hex -o report.json"
    )]
    Decode {
        /// LoRaWAN fPort the payload arrived on
        #[arg(short = 'p', long)]
        port: u8,

        /// Payload as a hex string
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        payload: Option<String>,

        /// Read the payload hex from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write the JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

#[derive(Subcommand, Debug)]
enum DownlinkCommands {
    /// Build a parameter write request payload from flags.
    #[command(
        after_help = "Examples:\n  teklink downlink build --tx-period-hours 12\n  teklink downlink build --logger-interval-minutes 15 --status-period-days 7"
    )]
    Build {
        /// Transmission period in hours
        #[arg(long)]
        tx_period_hours: Option<u32>,

        /// Transmission randomization in minutes
        #[arg(long)]
        tx_random_minutes: Option<u32>,

        /// Logger interval in minutes
        #[arg(long)]
        logger_interval_minutes: Option<u32>,

        /// Status period in days
        #[arg(long)]
        status_period_days: Option<u32>,

        /// Ping rate in minutes
        #[arg(long)]
        ping_rate_minutes: Option<u8>,

        /// RF RSSI threshold in dBm
        #[arg(long)]
        rssi_threshold_dbm: Option<i8>,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Uplink { command } => match command {
            UplinkCommands::Decode {
                port,
                payload,
                file,
                report,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_uplink_decode(port, payload, file, report, stdout, pretty, compact, quiet),
        },
        Commands::Downlink { command } => match command {
            DownlinkCommands::Build {
                tx_period_hours,
                tx_random_minutes,
                logger_interval_minutes,
                status_period_days,
                ping_rate_minutes,
                rssi_threshold_dbm,
                quiet,
            } => cmd_downlink_build(
                tx_period_hours,
                tx_random_minutes,
                logger_interval_minutes,
                status_period_days,
                ping_rate_minutes,
                rssi_threshold_dbm,
                quiet,
            ),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_uplink_decode(
    port: u8,
    payload: Option<String>,
    file: Option<PathBuf>,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let hex_text = if let Some(hex_text) = payload {
        hex_text
    } else if let Some(path) = file {
        let resolved = resolve_payload_path(&path)?;
        fs::read_to_string(&resolved)
            .with_context(|| format!("Failed to read payload file: {}", resolved.display()))?
    } else {
        return Err(CliError::new(
            "missing payload",
            Some("pass a hex string or --file".to_string()),
        ));
    };

    let bytes = parse_payload_hex(&hex_text)?;
    let uplink = teklink_core::decode_uplink(port, &bytes).map_err(|err| {
        CliError::new(
            format!("decode failed: {err}"),
            Some(format!("check the payload length for fPort {port}")),
        )
    })?;
    let json = serialize_report(&uplink, pretty, compact)?;

    if stdout {
        println!("{}", json);
        return Ok(());
    }

    let report = report.expect("report required when not using stdout");
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn cmd_downlink_build(
    tx_period_hours: Option<u32>,
    tx_random_minutes: Option<u32>,
    logger_interval_minutes: Option<u32>,
    status_period_days: Option<u32>,
    ping_rate_minutes: Option<u8>,
    rssi_threshold_dbm: Option<i8>,
    quiet: bool,
) -> Result<(), CliError> {
    let mut request = ParamWriteRequest::new();
    if let Some(hours) = tx_period_hours {
        request = request.tx_period_hours(hours);
    }
    if let Some(minutes) = tx_random_minutes {
        request = request.tx_random_minutes(minutes);
    }
    if let Some(minutes) = logger_interval_minutes {
        request = request.logger_interval_minutes(minutes);
    }
    if let Some(days) = status_period_days {
        request = request.status_period_days(days);
    }
    if let Some(minutes) = ping_rate_minutes {
        request = request.ping_rate_minutes(minutes);
    }
    if let Some(dbm) = rssi_threshold_dbm {
        request = request.rf_rssi_threshold_dbm(dbm);
    }

    if request.is_empty() {
        return Err(CliError::new(
            "no parameters given",
            Some("pass at least one parameter flag, e.g. --tx-period-hours 12".to_string()),
        ));
    }

    println!("{}", hex::encode(request.encode()));
    if !quiet {
        eprintln!("send on fPort {}", teklink_core::DOWNLINK_FPORT);
    }
    Ok(())
}

fn serialize_report(
    uplink: &teklink_core::Uplink,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(uplink)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(uplink)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn parse_payload_hex(text: &str) -> Result<Vec<u8>, CliError> {
    let cleaned: String = text.split_whitespace().collect();
    let cleaned = cleaned.strip_prefix("0x").unwrap_or(&cleaned);
    if cleaned.is_empty() {
        return Err(CliError::new(
            "empty payload",
            Some("pass at least one hex byte".to_string()),
        ));
    }
    hex::decode(cleaned).map_err(|err| {
        CliError::new(
            format!("invalid payload hex: {err}"),
            Some("expected an even number of hex digits".to_string()),
        )
    })
}

fn resolve_payload_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        if !input.exists() {
            return Err(CliError::new(
                format!("payload file not found: {}", input.display()),
                Some("pass a file containing the payload as hex text".to_string()),
            ));
        }
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single payload file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
