use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Review entry is missing or has a malformed field: {0}")]
    FeedField(&'static str),

    #[error("Couldn't parse a review date: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Xlsx Error: {0}")]
    Xlsx(#[from] umya_spreadsheet::XlsxError),
    #[error("Workbook is missing the sheet: {0}")]
    MissingSheet(&'static str),
}
