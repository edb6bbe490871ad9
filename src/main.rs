use anyhow::Context;
use clap::Parser;
use mixcore::core::snapshot::{read_snapshot, write_snapshot};
use mixcore::utils::logger;
use mixcore::{CliConfig, Mixer, VolumeWeightedBlender};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::info!("Starting mixcore CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let snapshot = read_snapshot(&config.snapshot)
        .with_context(|| format!("failed to read snapshot {}", config.snapshot))?;

    let mut mixer = Mixer::new();
    if let Err(e) = mixer.load(&snapshot) {
        tracing::error!("❌ Snapshot rejected: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Some(capacity) = config.resize {
        if let Err(e) = mixer.set_capacity(capacity) {
            tracing::error!("❌ Resize failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        println!("📦 Container resized to {:.1} ml", capacity);
    }

    print_allocation(&mixer);

    if let Some(output) = &config.output {
        write_snapshot(output, &mixer.export())
            .with_context(|| format!("failed to write snapshot {}", output))?;
        println!("✅ Snapshot saved to: {}", output);
    }

    Ok(())
}

fn print_allocation(mixer: &Mixer) {
    let name = if mixer.name().is_empty() {
        "Unnamed Mixture"
    } else {
        mixer.name()
    };
    println!("🧪 {}", name);

    for entry in mixer.entries() {
        let label = mixer
            .bound_label(entry.id())
            .map(|l| l.to_string())
            .unwrap_or_default();
        let marker = if mixer.filler() == Some(entry.id()) {
            " (fills container)"
        } else {
            ""
        };
        println!(
            "  {:<30} {:>7.1} ml  max {:<7}{}",
            entry.liquid().name,
            entry.volume(),
            label,
            marker
        );
    }

    println!(
        "Vol. {:.1} ml (in {:.1} ml container)",
        mixer.total_volume(),
        mixer.capacity()
    );

    let blend = mixer.mixture(&VolumeWeightedBlender);
    println!(
        "{:.0}PG / {:.0}VG, nic. {:.1} mg/ml",
        blend.pg, blend.vg, blend.nic
    );
}
