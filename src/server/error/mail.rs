use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    /// The mail relay could not be reached.
    #[error("Failed to reach mail relay: {0}")]
    Request(#[from] reqwest::Error),

    /// The mail relay answered with a non-success status.
    #[error("Mail relay rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}
