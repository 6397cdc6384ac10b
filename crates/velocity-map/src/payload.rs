//! The formatted payload handed to a display sink.

use bytes::Bytes;
use serde_json::{Map, Value};
use tracing::debug;
use velmap_common::{LatLon, VelmapResult};

use crate::display::DisplaySink;
use crate::record::VelocityRecord;
use crate::wire::{CENTER_OPTION, VELOCITY_MEDIA_TYPE};

/// Free-form display options forwarded to the map frontend.
pub type DisplayOptions = Map<String, Value>;

/// Build the final options: the computed center, overridden by any
/// caller-supplied key.
pub fn merge_options(center: LatLon, options: DisplayOptions) -> DisplayOptions {
    let mut merged = DisplayOptions::new();
    merged.insert(
        CENTER_OPTION.to_string(),
        Value::from(vec![center.lat(), center.lon()]),
    );
    merged.extend(options);
    merged
}

/// The `[u, v]` record pair plus merged display options.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPayload {
    records: [VelocityRecord; 2],
    center: LatLon,
    options: DisplayOptions,
}

impl DisplayPayload {
    pub fn new(records: [VelocityRecord; 2], center: LatLon, options: DisplayOptions) -> Self {
        Self {
            records,
            center,
            options,
        }
    }

    pub fn records(&self) -> &[VelocityRecord; 2] {
        &self.records
    }

    pub fn u_record(&self) -> &VelocityRecord {
        &self.records[0]
    }

    pub fn v_record(&self) -> &VelocityRecord {
        &self.records[1]
    }

    /// Mean (lat, lon) of the grid's coordinate vectors.
    pub fn center(&self) -> LatLon {
        self.center
    }

    /// Merged display options, including the center unless overridden.
    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn content_type(&self) -> &'static str {
        VELOCITY_MEDIA_TYPE
    }

    /// Serialized `[u_record, v_record]` array.
    pub fn to_json_bytes(&self) -> VelmapResult<Bytes> {
        Ok(Bytes::from(serde_json::to_vec(&self.records)?))
    }

    /// Metadata mapping keyed by the content type.
    pub fn metadata(&self) -> DisplayOptions {
        let mut metadata = DisplayOptions::new();
        metadata.insert(
            VELOCITY_MEDIA_TYPE.to_string(),
            Value::Object(self.options.clone()),
        );
        metadata
    }

    /// Hand the payload to a display sink in a single call.
    pub fn display<S: DisplaySink + ?Sized>(&self, sink: &S) -> VelmapResult<S::Output> {
        let bytes = self.to_json_bytes()?;
        debug!(
            content_type = VELOCITY_MEDIA_TYPE,
            payload_bytes = bytes.len(),
            "Sending velocity payload to display sink"
        );
        sink.send(bytes, VELOCITY_MEDIA_TYPE, &self.metadata())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_options_adds_center() {
        let merged = merge_options(LatLon(5.0, 10.0), DisplayOptions::new());
        assert_eq!(merged.get(CENTER_OPTION), Some(&json!([5.0, 10.0])));
    }

    #[test]
    fn test_merge_options_caller_wins() {
        let mut options = DisplayOptions::new();
        options.insert(CENTER_OPTION.to_string(), json!([45.0, -120.0]));
        options.insert("zoom".to_string(), json!(4));

        let merged = merge_options(LatLon(5.0, 10.0), options);
        assert_eq!(merged.get(CENTER_OPTION), Some(&json!([45.0, -120.0])));
        assert_eq!(merged.get("zoom"), Some(&json!(4)));
        assert_eq!(merged.len(), 2);
    }
}
