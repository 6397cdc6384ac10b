//! Display sinks: where a formatted payload goes.
//!
//! The formatter never talks to a rendering environment directly. Callers
//! inject a [`DisplaySink`]; two are provided:
//!
//! - [`DisplayDataWriter`] writes a notebook `display_data` bundle as one
//!   JSON line to any [`Write`]r
//! - [`RecordingSink`] keeps every bundle in memory

use std::io::Write;
use std::sync::Mutex;

use bytes::Bytes;
use serde_json::{json, Value};
use velmap_common::{VelmapError, VelmapResult};

use crate::payload::DisplayOptions;
use crate::record::VelocityRecord;

/// Capability that receives a serialized payload.
pub trait DisplaySink {
    /// Whatever the sink reports back for a successful hand-off.
    type Output;

    /// Deliver `payload` tagged with `content_type`, with `metadata` keyed by
    /// the same content type.
    fn send(
        &self,
        payload: Bytes,
        content_type: &str,
        metadata: &DisplayOptions,
    ) -> VelmapResult<Self::Output>;
}

/// One hand-off to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBundle {
    pub content_type: String,
    pub payload: Bytes,
    pub metadata: DisplayOptions,
}

impl DisplayBundle {
    pub fn new(payload: Bytes, content_type: &str, metadata: &DisplayOptions) -> Self {
        Self {
            content_type: content_type.to_string(),
            payload,
            metadata: metadata.clone(),
        }
    }

    /// Parse the payload back into records.
    pub fn records(&self) -> VelmapResult<Vec<VelocityRecord>> {
        Ok(serde_json::from_slice(&self.payload)?)
    }

    /// Display options sent for this bundle's content type.
    pub fn options(&self) -> Option<&DisplayOptions> {
        self.metadata
            .get(&self.content_type)
            .and_then(Value::as_object)
    }

    /// Notebook `display_data` shape: the payload as a JSON string under
    /// `data`, options under `metadata`.
    pub fn to_display_data(&self) -> VelmapResult<Value> {
        let text = std::str::from_utf8(&self.payload)
            .map_err(|e| VelmapError::Serialization(format!("payload is not UTF-8: {}", e)))?;

        let mut data = DisplayOptions::new();
        data.insert(self.content_type.clone(), Value::from(text));

        Ok(json!({
            "data": data,
            "metadata": self.metadata,
        }))
    }
}

/// Sink that writes one `display_data` JSON line per payload.
#[derive(Debug)]
pub struct DisplayDataWriter<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> DisplayDataWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write> DisplaySink for DisplayDataWriter<W> {
    type Output = ();

    fn send(
        &self,
        payload: Bytes,
        content_type: &str,
        metadata: &DisplayOptions,
    ) -> VelmapResult<()> {
        let message = DisplayBundle::new(payload, content_type, metadata).to_display_data()?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| VelmapError::Display("display writer lock poisoned".to_string()))?;
        serde_json::to_writer(&mut *writer, &message)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Sink that records every bundle it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    sent: Mutex<Vec<DisplayBundle>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All bundles received so far, oldest first.
    pub fn sent(&self) -> Vec<DisplayBundle> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recent bundle.
    pub fn last(&self) -> Option<DisplayBundle> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DisplaySink for RecordingSink {
    /// Number of bundles recorded, including this one.
    type Output = usize;

    fn send(
        &self,
        payload: Bytes,
        content_type: &str,
        metadata: &DisplayOptions,
    ) -> VelmapResult<usize> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| VelmapError::Display("recording sink lock poisoned".to_string()))?;
        sent.push(DisplayBundle::new(payload, content_type, metadata));
        Ok(sent.len())
    }
}
