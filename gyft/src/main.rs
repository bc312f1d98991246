use std::io::Write;

use anyhow::Result;
use args::parse_args;
use clap::builder::styling::AnsiColor;
use env_logger::Builder;
use gyft_core::site::export_site;
use log::{debug, info, logger};
use logging_timer::time;

mod args;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

#[time]
fn main() -> Result<()> {
    configure_logging();
    main2()?;
    logger().flush();
    Ok(())
}

#[time]
fn main2() -> Result<()> {
    info!("Starting {PROGRAM_NAME}");

    let args = parse_args();
    debug!("{:?}", &args);
    if args.force {
        info!("'--force' specified, existing files in the output directory will be overwritten");
    }

    let dir = args.output_dir()?;
    let summary = export_site(&dir, args.force)?;
    for file in &summary.files {
        info!("Wrote {:?}", file);
    }

    Ok(())
}

fn configure_logging() {
    let mut builder = Builder::from_default_env();

    builder.format(|buf, record| {
        let level_style = buf.default_level_style(record.level());
        let level_style = match record.level() {
            log::Level::Error => level_style.fg_color(Some(AnsiColor::Red.into())),
            log::Level::Warn => level_style.fg_color(Some(AnsiColor::Yellow.into())),
            log::Level::Info => level_style.fg_color(Some(AnsiColor::Green.into())),
            log::Level::Debug => level_style.fg_color(Some(AnsiColor::Blue.into())),
            log::Level::Trace => level_style.fg_color(Some(AnsiColor::Magenta.into())),
        };

        match (record.file(), record.line()) {
            (Some(file), Some(line)) => writeln!(
                buf,
                "[{} {level_style}{}{level_style:#} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                file,
                line,
                record.args()
            ),
            _ => writeln!(
                buf,
                "[{} {level_style}{}{level_style:#} {}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.target(),
                record.args()
            ),
        }
    });

    builder.init();
}
