use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
  #[error("required column '{name}' is missing from the survey data")]
  MissingColumn { name: String },

  #[error("no rows survived normalization")]
  EmptyDataset,

  #[error("invalid {field} selection: '{value}'")]
  InvalidSelection { field: &'static str, value: String },

  #[error(transparent)]
  Polars(#[from] polars::error::PolarsError),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}
