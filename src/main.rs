use dotboy::GameBoy;
use fern::Dispatch;
use log::{info, LevelFilter};
use std::fs::File;
use std::process::ExitCode;
use zip::ZipArchive;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let log_to_file = args.iter().any(|arg| arg == "--log-to-file");

    setup_logging(log_to_file);

    let Some(filepath) = args.iter().skip(1).find(|arg| !arg.starts_with("--")) else {
        eprintln!("Usage: dotboy <rom> [--log-to-file]");
        return ExitCode::FAILURE;
    };

    let mut gameboy = match GameBoy::new(load_rom(filepath)) {
        Ok(gameboy) => gameboy,
        Err(e) => {
            eprintln!("Failed to load {}: {}", filepath, e);
            return ExitCode::FAILURE;
        }
    };

    // Headless run until the CPU stops (STOP, unknown opcode) or the LCD
    // never produces another frame
    while gameboy.run_to_next_frame() {}

    info!(
        "Stopped after {} frames ({} dots)",
        gameboy.frame_number(),
        gameboy.dots()
    );

    if !gameboy.serial_output().is_empty() {
        // Test ROMs report their results over the serial port
        println!("{}", String::from_utf8_lossy(gameboy.serial_output()));
    }

    ExitCode::SUCCESS
}

fn load_rom(filepath: &str) -> Vec<u8> {
    if filepath.ends_with(".zip") {
        let file = File::open(filepath).expect("Failed to open ROM archive");
        let unzipped_filepath = unzip_rom(file);
        info!("Unzipped {} to {}", filepath, unzipped_filepath);
        std::fs::read(&unzipped_filepath).expect("Failed to read ROM file")
    } else {
        std::fs::read(filepath).expect("Failed to read ROM file")
    }
}

fn unzip_rom(file: File) -> String {
    let mut archive = ZipArchive::new(file).expect("Invalid zip archive");
    let mut rom = archive.by_index(0).expect("Empty zip archive");

    let filepath = match rom.enclosed_name() {
        Some(name) => name.to_owned(),
        None => panic!("No file found in zip archive"),
    };
    let filepath = std::env::temp_dir().join(filepath);
    let filepath = filepath.to_str().expect("Invalid path").to_owned();

    let mut unpacked_file = File::create(&filepath).expect("Failed to create temp file");
    std::io::copy(&mut rom, &mut unpacked_file).expect("Failed to unpack ROM");

    filepath
}

fn setup_logging(log_to_file: bool) {
    const LOG_PATH: &str = "./dotboy_trace.log";
    std::fs::remove_file(LOG_PATH).unwrap_or_default();

    let mut base_config = Dispatch::new()
        .level(LevelFilter::Trace)
        .chain(Dispatch::new().level(LevelFilter::Info).chain(std::io::stdout()))
        .format(move |out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)));

    if log_to_file {
        base_config = base_config.chain(
            Dispatch::new()
                .level(LevelFilter::Trace)
                .chain(fern::log_file(LOG_PATH).expect("Failed to open log file")),
        );
    }

    base_config.apply().expect("Failed to install logger");
}
