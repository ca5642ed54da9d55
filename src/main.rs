use anyhow::Context;
use clap::Parser;
use energycam_wmbus::device::meter_type::METER_TYPE_UNKNOWN;
use energycam_wmbus::logging::log_error;
use energycam_wmbus::{init_logger, DecodeOutcome, EnergyCam, Telegram};

#[derive(Parser)]
#[command(name = "energycam")]
#[command(about = "Decode EnergyCam wireless M-Bus telegrams")]
struct Cli {
    /// Device identifier used in log output
    #[arg(long, default_value = "unknown")]
    id: String,

    /// Meter type code (1 oil, 2 electricity, 3 gas, 7 water, 15 unknown)
    #[arg(short, long, default_value_t = METER_TYPE_UNKNOWN)]
    meter_type: u8,

    /// Print each telegram with its decoded values as JSON
    #[arg(long)]
    json: bool,

    /// Telegrams as hex strings
    #[arg(required = true)]
    telegrams: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let mut cam = EnergyCam::new(cli.id, cli.meter_type);

    for hex in &cli.telegrams {
        let mut telegram =
            Telegram::from_hex(hex).with_context(|| format!("parsing telegram {hex}"))?;

        let outcome = cam
            .process_new_message(&mut telegram)
            .with_context(|| format!("decoding telegram {hex}"))?;

        if cli.json {
            println!("{}", serde_json::to_string(&telegram)?);
            continue;
        }

        match outcome {
            DecodeOutcome::Decoded(m) => println!(
                "{}: {} {}",
                cam.descriptor.meter_type_label(),
                m.value,
                m.unit
            ),
            DecodeOutcome::Aborted => log_error(&format!(
                "Telegram from {} is encrypted, no value decoded",
                cam.id()
            )),
        }
    }

    Ok(())
}
