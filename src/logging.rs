//! Logging backend which writes to the plugin's log file.

use chrono::Local;
use eyre::{eyre, Result, WrapErr};
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::{
    fs::File,
    io::Write,
    path::PathBuf,
    sync::{mpsc, Mutex},
};

use crate::meta::resources::Resources;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MessageType {
    Normal,
    Error,
    Warning,
    Debug,
}

impl From<Level> for MessageType {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => MessageType::Error,
            Level::Warn => MessageType::Warning,
            Level::Info => MessageType::Normal,
            Level::Debug | Level::Trace => MessageType::Debug,
        }
    }
}

struct Message {
    module: String,
    msg_type: MessageType,
    string: String,
    time: String,
}

impl Message {
    fn line(&self) -> String {
        let level_name = match self.msg_type {
            MessageType::Normal => "info",
            MessageType::Error => "error",
            MessageType::Warning => "warning",
            MessageType::Debug => "debug",
        };

        //      [date time] [module] [level] Text
        format!(
            "[{}] [{}] [{}] {}\n",
            self.time, self.module, level_name, self.string
        )
    }

    fn write_to_file(&self, file: &mut File) {
        let _ = file.write_all(self.line().as_bytes());
    }
}

pub struct Logger;

impl Logger {
    fn commit(&self, record: &Record) {
        let module_path = match record.module_path() {
            Some(path) => path,
            None => return,
        };

        let message = Message {
            module: module_path
                .split("::")
                .last()
                .unwrap_or("unknown")
                .to_string(),
            msg_type: record.level().into(),
            string: format!("{}", record.args()),
            time: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
        };

        // If the writer thread has gone there's nowhere left to send the message.
        if let Some(Ok(sender)) = MSG_SENDER.get().map(Mutex::lock) {
            let _ = sender.send(message);
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.commit(record);
        }
    }

    fn flush(&self) {}
}

static LOGGER: Logger = Logger;

static MSG_SENDER: OnceCell<Mutex<mpsc::Sender<Message>>> = OnceCell::new();

fn install_panic_hook(panic_path: PathBuf) {
    let previous_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let payload = info.payload();

        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "no message".to_string());

        let location = info
            .location()
            .map(ToString::to_string)
            .unwrap_or_else(|| "unknown".to_string());

        let time = Local::now();
        let backtrace = std::backtrace::Backtrace::force_capture();

        let info_dump = format!(
            "The emotes plugin panicked.

Message: {message}
Location: {location}
Time: {time}
Backtrace: see below

{backtrace}"
        );

        log::error!("{info_dump}");

        let _ = std::fs::write(&panic_path, info_dump);

        previous_hook(info);
    }));
}

/// Starts logging to the plugin's log file. Fails if a logger has already been installed.
pub fn init(resources: &Resources) -> Result<()> {
    let mut file = File::create(resources.log_path()).wrap_err("failed to create log file")?;

    log::set_logger(&LOGGER).map_err(|err| eyre!("unable to install logger: {err}"))?;

    log::set_max_level(if cfg!(feature = "debug") {
        LevelFilter::max()
    } else {
        LevelFilter::Info
    });

    let (sender, receiver) = mpsc::channel::<Message>();

    MSG_SENDER
        .set(Mutex::new(sender))
        .map_err(|_| eyre!("log sender was already set"))?;

    install_panic_hook(resources.panic_path());

    // Write on a background thread so that logging never stalls the client's event thread.
    std::thread::spawn(move || {
        for msg in receiver {
            msg.write_to_file(&mut file);
        }
    });

    Ok(())
}
