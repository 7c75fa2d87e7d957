use serde::{Deserialize, Serialize};

/// Where the rendered config goes: the literal `stdout`, or a file path
/// that is only rewritten when the rendered bytes differ.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_name")]
    pub name: String,
}

impl OutputConfig {
    pub fn is_stdout(&self) -> bool {
        self.name == "stdout"
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: default_output_name(),
        }
    }
}

fn default_output_name() -> String {
    "stdout".to_string()
}
