use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to render PDF: {0}")]
    Render(String),

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
