//! Request and response bodies for the image-job backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly so serde needs no renames
//! beyond the job-kind wire strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Body of `POST /user/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful `POST /token/` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Successful `POST /job/` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JobCreated {
    #[serde(default)]
    pub ok: bool,
    pub job_id: String,
}

/// One processed image belonging to a job.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageRef {
    pub pk: String,
}

/// `GET /job/{id}/` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct JobStatus {
    #[serde(default)]
    pub ok: bool,
    pub pk: String,
    /// The backend sends `null` rather than `[]` for a job with no images.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<ImageRef>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error body returned with 4xx statuses.
///
/// The backend reports either a single `error` string or a list of
/// `non_field_errors` (credential failures).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub non_field_errors: Vec<String>,
}

impl ErrorBody {
    /// Human-readable message, if the body carried one.
    pub fn message(&self) -> Option<String> {
        if let Some(error) = self.error.as_deref().filter(|e| !e.trim().is_empty()) {
            return Some(error.to_owned());
        }
        if self.non_field_errors.is_empty() {
            None
        } else {
            Some(self.non_field_errors.join("\n"))
        }
    }
}

/// Image processing requested for an uploaded file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Store the image as uploaded.
    #[default]
    Original,
    /// Pad to a square of the original size on a white background.
    SquareOriginal,
    /// Pad to a 256x256 square on a white background.
    SquareSmall,
    /// All three of the above.
    AllThree,
}

impl JobKind {
    pub const ALL: [Self; 4] = [Self::Original, Self::SquareOriginal, Self::SquareSmall, Self::AllThree];

    /// Wire value sent in the `kind` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::SquareOriginal => "square_original",
            Self::SquareSmall => "square_small",
            Self::AllThree => "all_three",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Original => "Original",
            Self::SquareOriginal => "Square (original size)",
            Self::SquareSmall => "Square (256px)",
            Self::AllThree => "All three",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Not valid job kind: {s}"))
    }
}
