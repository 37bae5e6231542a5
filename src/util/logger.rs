use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = if logger.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(max_level))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
    pub log_banks: bool,
    pub log_ppu_flags: bool,
    pub log_frames: bool,
    pub log_layout: bool,
    pub verbose: bool,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.target() {
            "" => true,
            "banks" => self.log_banks,
            "ppuflags" => self.log_ppu_flags,
            "frames" => self.log_frames,
            "layout" => self.log_layout,
            target => {
                let chunks: Vec<&str> = target.split("::").collect();
                matches!(chunks[..], ["nesmap", ..])
            }
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if record.level() < Level::Info {
                print!("{} - ", record.level());
            }

            match record.target() {
                "banks" => print!("BANKS "),
                "ppuflags" => print!("PPU FLAGS "),
                "frames" => print!("FRAME "),
                _ => {}
            }

            println!("{}", record.args());
        }
    }

    fn flush(&self) {}
}
