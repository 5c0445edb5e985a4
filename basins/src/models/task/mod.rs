use serde::{Deserialize, Serialize};

use super::{
    function::descriptor::FunctionDescriptor, resolution::Resolution, viewport::Viewport,
};

/// A complete render description, loadable from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderTask {
    pub function: FunctionDescriptor,
    pub viewport: Viewport,
    pub resolution: Resolution,
    pub quality: f64,
    pub max_iterations: u32,
    pub result_tolerance: f64,
    pub derivative_step_length: f64,
    pub cluster_epsilon: f64,
}

impl RenderTask {
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        let wrapped = serde_json::json!({ "RenderTask": self });
        serde_json::to_value(wrapped)
    }

    pub fn from_json(task: &str) -> Result<Self, serde_json::Error> {
        let v: serde_json::Value = serde_json::from_str(task)?;
        serde_json::from_value(v["RenderTask"].clone())
    }
}
