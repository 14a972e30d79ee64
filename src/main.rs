use clap::{Parser, Subcommand};
use serde::Serialize;
use victron_ble::devices::overrides::all_models;
use victron_ble::logging::{log_debug, log_info, log_warn};
use victron_ble::util::hex::{encode_hex_upper, parse_hex_lenient};
use victron_ble::{
    classify, init_logger, AdvertisementHeader, DeviceKind, ModeCode, ResolutionSource,
};

#[derive(Parser)]
#[command(name = "victron-ble")]
#[command(about = "Identify the decoder for Victron BLE advertisement payloads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more hex-encoded advertisement payloads
    Detect {
        #[arg(required = true)]
        payloads: Vec<String>,
        /// Print one JSON object per payload
        #[arg(long)]
        json: bool,
    },
    /// List the model override table
    Models {
        /// Only show models using this decoder
        #[arg(short, long)]
        kind: Option<DeviceKind>,
    },
    /// Show the mode code fallback table
    Modes,
}

#[derive(Serialize)]
struct DetectReport<'a> {
    payload: String,
    length: usize,
    header: Option<AdvertisementHeader>,
    kind: Option<DeviceKind>,
    source: Option<ResolutionSource>,
    model_name: Option<&'a str>,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { payloads, json } => {
            for input in &payloads {
                let data = match parse_hex_lenient(input) {
                    Ok(data) => data,
                    Err(e) => {
                        log_warn(&format!("Skipping payload {input:?}: {e}"));
                        continue;
                    }
                };
                log_debug(&format!("Classifying {} bytes", data.len()));

                let detection = classify(&data);
                if json {
                    let report = DetectReport {
                        payload: encode_hex_upper(&data),
                        length: data.len(),
                        header: detection.map(|d| d.header),
                        kind: detection.and_then(|d| d.kind),
                        source: detection.map(|d| d.source),
                        model_name: detection.and_then(|d| d.model_name),
                    };
                    println!("{}", serde_json::to_string(&report)?);
                    continue;
                }

                match detection {
                    None => println!("{}: truncated ({} bytes)", encode_hex_upper(&data), data.len()),
                    Some(d) => {
                        let kind = d
                            .kind
                            .map(|k| k.to_string())
                            .unwrap_or_else(|| "unrecognized".to_string());
                        let via = match d.source {
                            ResolutionSource::ModelOverride => {
                                format!("model override ({})", d.model_name.unwrap_or("-"))
                            }
                            ResolutionSource::ModeFallback => "mode".to_string(),
                        };
                        println!(
                            "{}: model 0x{:04X} mode 0x{:02X} -> {} via {}",
                            encode_hex_upper(&data),
                            d.header.model_id,
                            d.header.mode,
                            kind,
                            via
                        );
                    }
                }
            }
        }
        Commands::Models { kind } => {
            let mut count = 0;
            for info in all_models().filter(|info| kind.map_or(true, |k| info.kind == k)) {
                println!("0x{:04X}  {:<14} {}", info.model_id, info.kind, info.name);
                count += 1;
            }
            log_info(&format!("{count} model overrides"));
        }
        Commands::Modes => {
            for mode in ModeCode::ALL {
                let decoder = mode
                    .device_kind()
                    .map(|k| k.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("0x{:02X}  {:<22} {}", mode.code(), mode.family(), decoder);
            }
        }
    }

    Ok(())
}
