pub mod editing;

// Re-export key types for easier usage
pub use editing::{commands::*, document::*, patch::*, selection::Selection};
