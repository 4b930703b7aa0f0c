use std::fmt;
use std::io;

mod document;
mod relational;

pub use document::{CaseDocument, DocumentWriter};
pub use relational::{SqlWriter, INSERT_CHUNK_ROWS};


#[derive(Debug)]
pub enum Error {
	Io(io::Error),
	Json(serde_json::Error),
}

impl fmt::Display for Error {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Io(e) => fmt::Display::fmt(e, f),
			Self::Json(e) => fmt::Display::fmt(e, f),
		}
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Json(err)
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			Self::Json(e) => Some(e),
		}
	}
}
