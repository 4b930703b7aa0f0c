use std::fmt;
use std::io;
use std::num::ParseIntError;


#[derive(Debug)]
pub enum Error {
	// unparseable numeric field; aborts the batch instead of skipping the
	// row, a skipped row would corrupt the aggregate sums
	MalformedRow{
		field: &'static str,
		value: String,
		source: ParseIntError,
	},
	// date string not in the 3-part M/D/YYYY form
	DateFormat{
		value: String,
	},
	Io(io::Error),
	Csv(csv::Error),
}

impl fmt::Display for Error {
	fn fmt<'f>(&self, f: &'f mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::MalformedRow{field, value, source} => write!(f, "malformed {} value {:?}: {}", field, value, source),
			Self::DateFormat{value} => write!(f, "date {:?} does not split into three /-delimited parts", value),
			Self::Io(e) => fmt::Display::fmt(e, f),
			Self::Csv(e) => fmt::Display::fmt(e, f),
		}
	}
}

impl From<io::Error> for Error {
	fn from(err: io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<csv::Error> for Error {
	fn from(err: csv::Error) -> Self {
		Self::Csv(err)
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::MalformedRow{source, ..} => Some(source),
			Self::DateFormat{..} => None,
			Self::Io(e) => Some(e),
			Self::Csv(e) => Some(e),
		}
	}
}
