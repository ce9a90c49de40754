//! Append-only delimited recording of joint positions and derived angles.
//!
//! One header per session, then one row per recorded frame. Row layout:
//! elapsed milliseconds, x/y/z per joint in enumeration order at 4 decimals,
//! then the eight angle values in spec order at 4 decimals.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::angles::AngleResult;
use crate::error::SinkError;
use crate::frame::Frame;
use crate::joint::JointId;
use crate::tables::{ANGLE_COUNT, ANGLE_SPECS};

/// Append-only destination for formatted records.
///
/// Failure to append is fatal for the recording path.
pub trait RecordSink {
    fn append(&mut self, record: &str) -> Result<(), SinkError>;
}

/// External configuration for the record store: file path and
/// append-vs-truncate policy. Both stay outside the core contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    pub path: PathBuf,
    /// Append to an existing file instead of truncating it at session start
    #[serde(default = "default_append")]
    pub append: bool,
}

fn default_append() -> bool {
    true
}

impl RecorderConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// File-backed sink that opens, appends and closes on every call.
///
/// The scoped open costs a handle per frame but keeps every completed row on
/// disk even if the process dies between frames.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Apply the configured truncate policy, then hand back the sink
    pub fn from_config(config: &RecorderConfig) -> Result<Self, SinkError> {
        if !config.append {
            std::fs::File::create(&config.path).map_err(|source| SinkError::Open {
                path: config.path.clone(),
                source,
            })?;
            info!("truncated record store at {}", config.path.display());
        }
        Ok(Self::new(config.path.clone()))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl RecordSink for CsvFile {
    fn append(&mut self, record: &str) -> Result<(), SinkError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| SinkError::Open {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(record.as_bytes())
            .map_err(|source| SinkError::Append {
                path: self.path.clone(),
                source,
            })
    }
}

/// Session-scoped recorder: emits the header before the first data row and
/// never again.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    header_written: bool,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self {
            header_written: false,
        }
    }

    /// Append one row for `frame`, preceded by the header on the first call.
    ///
    /// The header flag flips only after the header append succeeds, so a
    /// failed first call retries the header next time instead of losing it.
    pub fn record<S: RecordSink + ?Sized>(
        &mut self,
        frame: &Frame,
        angles: &[AngleResult; ANGLE_COUNT],
        sink: &mut S,
    ) -> Result<(), SinkError> {
        if !self.header_written {
            sink.append(&header())?;
            self.header_written = true;
            debug!("record header written");
        }
        sink.append(&data_row(frame, angles))
    }
}

/// Header rows: a blank lead field and the joint labels, then the per-joint
/// x/y/z column labels and the eight angle labels.
pub fn header() -> String {
    let mut out = String::from(",");
    for id in JointId::ALL {
        out.push_str(&format!(",{},,", id.label()));
    }
    out.push_str("\nElapsed,");
    for _ in 0..JointId::COUNT {
        out.push_str("x,y,z,");
    }
    let names: Vec<&str> = ANGLE_SPECS.iter().map(|s| s.name).collect();
    out.push_str(&names.join(","));
    out.push('\n');
    out
}

/// One position as three 4-decimal fields, each comma-terminated
pub fn format_position(p: Vec3) -> String {
    format!("{:.4},{:.4},{:.4},", p.x, p.y, p.z)
}

/// One data row, newline-terminated.
///
/// Every joint is written regardless of tracking state; the trust level only
/// affects rendering, never column alignment.
pub fn data_row(frame: &Frame, angles: &[AngleResult; ANGLE_COUNT]) -> String {
    let mut out = format!("{},", frame.elapsed.as_millis());
    for (_, sample) in frame.skeleton.joints.iter() {
        out.push_str(&format_position(sample.position));
    }
    for angle in angles {
        out.push_str(&format!("{:.4},", angle.degrees));
    }
    out.push('\n');
    out
}
