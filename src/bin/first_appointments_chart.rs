use std::error::Error;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use tabled::{builder::Builder, settings::Style};
use termine_stats::chart::{first_appointments_chart, stats_page};
use termine_stats::histogram::{bin_appointments, Binned};
use termine_stats::interval::Granularity;
use termine_stats::records::read_records;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with the exported appointment records, "-" for stdin
    input: PathBuf,

    /// Bucket width in minutes, must divide the day evenly
    #[arg(short, long, default_value = "30")]
    granularity: u32,

    /// Where to write the rendered chart page
    #[arg(short, long, default_value = "first_appointments.html")]
    out: PathBuf,

    /// Also print the non-empty buckets as a table
    #[arg(long)]
    table: bool,
}

/// Make an ASCII table from the non-empty buckets
fn ascii_table(binned: &Binned) -> tabled::Table {
    let mut builder = Builder::new();
    builder.push_record(vec!["Bucket", "Termine"]);
    for (label, count) in &binned.histogram {
        if *count == 0 {
            continue;
        }
        builder.push_record(vec![label.clone(), count.to_string()]);
    }
    let mut table = builder.build();
    table.with(Style::empty());
    table
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let granularity = Granularity::minutes(args.granularity).ok_or(format!(
        "{} minutes do not divide the day evenly",
        args.granularity
    ))?;

    let records = if args.input.as_os_str() == "-" {
        read_records(io::stdin().lock())?
    } else {
        read_records(File::open(&args.input)?)?
    };
    info!("Read {} appointment records", records.len());

    let binned = bin_appointments(&records, granularity);
    info!(
        "Counted {} records into {} buckets; {} without a first-seen time, {} unparseable",
        binned.summary.binned,
        granularity.buckets_per_day(),
        binned.summary.missing,
        binned.summary.unparseable
    );

    if args.table {
        println!("{}", ascii_table(&binned));
    }

    let plot = first_appointments_chart(&binned.histogram);
    fs::write(&args.out, stats_page(&plot))?;
    info!("Wrote chart to {}", args.out.display());

    Ok(())
}
