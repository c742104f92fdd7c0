// Copyright (C) 2026 Pango Team
// Licensed under GPL-3.0-or-later

// Onboarding session log
// Each run truncates <tmp>/pango_onboarding_debug.txt and appends one line per
// screen event, stamped with milliseconds since launch.

use crate::config::APP_NAME;
use crate::connection::{ConnectionState, ContinueRegion, Platform};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

const LOG_FILE_NAME: &str = "pango_onboarding_debug.txt";

lazy_static::lazy_static! {
    static ref SESSION_LOG: Mutex<SessionLog> = Mutex::new(SessionLog::open());
}

/// Something the onboarding screen did that is worth a line in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Mounted,
    Connected { platform: Platform, region: ContinueRegion },
    AlreadyConnected(Platform),
    ContinueGated(ConnectionState),
    Navigating,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Mounted => write!(f, "Onboarding screen mounted"),
            Event::Connected { platform, region } => {
                let gate = match region {
                    ContinueRegion::Enabled => "enabled",
                    ContinueRegion::Disabled => "disabled",
                };
                write!(f, "Connected to {} (continue {})", platform, gate)
            }
            Event::AlreadyConnected(platform) => {
                write!(f, "Ignored connect for {}: already connected", platform)
            }
            Event::ContinueGated(state) => {
                let missing = if !state.telegram {
                    "Telegram is required"
                } else {
                    "connect LinkedIn or Instagram"
                };
                write!(f, "Ignored continue: {}", missing)
            }
            Event::Navigating => write!(f, "Navigating to home screen"),
        }
    }
}

struct SessionLog {
    /// None when the temp dir is not writable; events are dropped
    path: Option<PathBuf>,
    started: Instant,
}

impl SessionLog {
    fn open() -> Self {
        let path = std::env::temp_dir().join(LOG_FILE_NAME);

        let path = std::fs::File::create(&path)
            .and_then(|mut f| {
                writeln!(f, "=== {} Onboarding Session ===", APP_NAME)?;
                writeln!(f, "Version: {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(f, "Platform: {} ({})", std::env::consts::OS, std::env::consts::ARCH)?;
                writeln!(f)
            })
            .ok()
            .map(|_| path);

        Self {
            path,
            started: Instant::now(),
        }
    }

    fn append(&self, line: &str) {
        let Some(path) = &self.path else {
            return;
        };
        if let Ok(mut f) = std::fs::OpenOptions::new().append(true).open(path) {
            let _ = writeln!(f, "{}", stamp(self.started.elapsed().as_millis(), line));
        }
    }
}

fn stamp(elapsed_ms: u128, line: &str) -> String {
    format!("[+{:>6}ms] {}", elapsed_ms, line)
}

/// Record a screen event
pub fn log_event(event: Event) {
    if let Ok(log) = SESSION_LOG.lock() {
        log.append(&event.to_string());
    }
}

/// Log a section header
pub fn log_section(section: &str) {
    if let Ok(log) = SESSION_LOG.lock() {
        log.append(&format!("=== {} ===", section));
    }
}

/// Path of the session log, if it could be created
pub fn get_log_path() -> Option<PathBuf> {
    SESSION_LOG.lock().ok().and_then(|log| log.path.clone())
}
