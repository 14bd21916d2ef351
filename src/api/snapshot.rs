use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};
use crate::render::RenderFrame;

pub const FRAME_JSON_SCHEMA_V1: u32 = 1;

/// Schema-versioned JSON envelope for a materialized frame, used for
/// diagnostics and golden-style comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: RenderFrame,
}

impl RenderFrame {
    pub fn to_json_contract_v1_pretty(&self) -> VizResult<String> {
        let payload = FrameJsonContractV1 {
            schema_version: FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            VizError::InvalidData(format!("failed to serialize frame contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> VizResult<Self> {
        if let Ok(frame) = serde_json::from_str::<Self>(input) {
            return Ok(frame);
        }
        let payload: FrameJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| VizError::InvalidData(format!("failed to parse frame json payload: {e}")))?;
        if payload.schema_version != FRAME_JSON_SCHEMA_V1 {
            return Err(VizError::InvalidData(format!(
                "unsupported frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}
