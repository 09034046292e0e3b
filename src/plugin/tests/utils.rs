//! Plugin Test Utilities
//!
//! Shared helpers for the loading and integration suites: a capturing
//! logger for asserting on the WARNING/ERROR contract, simple listener
//! doubles, and builders for manifests and in-memory distributions.

use crate::listeners::HostListener;
use crate::plugin::discovery::{Distribution, PluginEntryPoint};
use crate::plugin::error::{PluginError, PluginResult};
use crate::plugin::types::PluginDescriptor;
use log::{Level, Log, Metadata, Record};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

/// One captured log record
#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
}

#[derive(Default)]
struct CaptureLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push(CapturedRecord {
            level: record.level(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static CAPTURE: OnceLock<&'static CaptureLogger> = OnceLock::new();

/// Install the capture logger (once per process) and clear the buffer.
///
/// Tests that assert on log output must run `#[serial]` so the shared
/// buffer only sees their own records.
pub fn init_log_capture() {
    let logger = CAPTURE.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger::default()));
        log::set_logger(logger).expect("no other logger must be installed in tests");
        log::set_max_level(log::LevelFilter::Debug);
        logger
    });
    logger.records.lock().unwrap().clear();
}

/// All records captured since the last `init_log_capture` call.
pub fn captured_logs() -> Vec<CapturedRecord> {
    CAPTURE
        .get()
        .map(|logger| logger.records.lock().unwrap().clone())
        .unwrap_or_default()
}

/// Captured records at INFO or above (what an operator would see).
pub fn visible_logs() -> Vec<CapturedRecord> {
    captured_logs()
        .into_iter()
        .filter(|record| record.level <= Level::Info)
        .collect()
}

/// Captured WARNING records, in emission order.
pub fn captured_warnings() -> Vec<String> {
    captured_logs()
        .into_iter()
        .filter(|record| record.level == Level::Warn)
        .map(|record| record.message)
        .collect()
}

/// Captured ERROR records joined into one haystack for contains-checks.
pub fn captured_errors_text() -> String {
    captured_logs()
        .into_iter()
        .filter(|record| record.level == Level::Error)
        .map(|record| record.message)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Listener double with a configurable qualified name
pub struct TestListener {
    name: String,
}

impl TestListener {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl HostListener for TestListener {
    fn qualified_name(&self) -> String {
        self.name.clone()
    }
}

/// Write a manifest file into a plugins folder.
pub fn write_manifest(folder: &Path, file: &str, content: &str) -> PathBuf {
    let path = folder.join(file);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    path
}

/// Entry point whose loader returns a fresh descriptor with the given name.
pub fn loadable_entry_point(name: &str, group: &str, module: &str, plugin: &str) -> PluginEntryPoint {
    let plugin = plugin.to_string();
    PluginEntryPoint::new(
        name,
        group,
        module,
        Arc::new(move || Ok(PluginDescriptor::new(plugin.clone()))),
    )
}

/// Entry point whose loader always fails with the given message.
pub fn failing_entry_point(name: &str, group: &str, module: &str, message: &str) -> PluginEntryPoint {
    let message = message.to_string();
    PluginEntryPoint::new(
        name,
        group,
        module,
        Arc::new(move || {
            Err(PluginError::LoadFailed {
                message: message.clone(),
            })
        }),
    )
}

/// Entry point with a custom loader.
pub fn entry_point_with(
    name: &str,
    group: &str,
    module: &str,
    loader: impl Fn() -> PluginResult<PluginDescriptor> + Send + Sync + 'static,
) -> PluginEntryPoint {
    PluginEntryPoint::new(name, group, module, Arc::new(loader))
}

/// Single-distribution shorthand.
pub fn dist(name: &str, version: &str, entry_points: Vec<PluginEntryPoint>) -> Distribution {
    Distribution::new(name, version, entry_points)
}
