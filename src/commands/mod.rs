//! Command implementations for dnascan.

pub mod find;
pub mod generate;
pub mod scan;

pub use find::FindCommand;
pub use generate::{GenerateCommand, GenerateConfig, GenerateStats};
pub use scan::{process_folder, ScanCommand, ScanStats};
