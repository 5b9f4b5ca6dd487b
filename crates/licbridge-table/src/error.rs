/// Errors that can occur while assembling a function table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A required operation was never registered with the builder.
    #[error("function table is missing required capability: {0}")]
    MissingCapability(&'static str),
}

pub type Result<T> = std::result::Result<T, TableError>;
