use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::path::PathBuf;

pub type RostrumResult<T> = Result<T, RostrumError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RostrumError {
    #[snafu(display("Error creating instance directory {:?}", path))]
    CreateInstanceDir {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error commiting SQL transaction"))]
    CommitTransaction { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to find student with id: {}", id))]
    MissingStudent { id: i64 },
    #[snafu(display("Unable to find evaluation with id: {}", id))]
    MissingEvaluation { id: i64 },
    #[snafu(display("Error with sessions"))]
    TowerSession {
        source: tower_sessions::session::Error,
    },
}

impl IntoResponse for RostrumError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Rostrum Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::CreateInstanceDir { .. } => ISE,
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::CommitTransaction { .. } => ISE,
            Self::MigrateError { .. } => ISE,
            Self::MissingStudent { .. } | Self::MissingEvaluation { .. } => NF,
            Self::TowerSession { .. } => ISE,
        };

        error!(?self, "Error!");
        (status_code, basic_error(self.to_string())).into_response()
    }
}
