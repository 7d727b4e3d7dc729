mod recognizer;
mod registry;

pub use recognizer::{MissingTool, Recognizer, TOOL_NAME, UNKNOWN_TOOL};
pub use registry::{RecognizerRegistry, default_registry, detect, extract};
