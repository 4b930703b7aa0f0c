use std::collections::BTreeMap;

use chrono::NaiveDate;

use smartstring::alias::{String as SmartString};

use crate::error::Error;
use crate::records::CanonicalCaseRecord;

pub type DateString = SmartString;
pub type CountryName = SmartString;


/// Summed case measures for one grouping key. Addition is associative and
/// commutative, so partial sums built over any partition of the input can
/// be merged in any order before the final sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseSums {
	pub confirmed: u64,
	pub deaths: u64,
	pub recovered: u64,
}

impl CaseSums {
	pub fn merge(&mut self, other: &CaseSums) {
		self.confirmed += other.confirmed;
		self.deaths += other.deaths;
		self.recovered += other.recovered;
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
	/// Sort the M/D/YYYY date strings as plain text. This is what the
	/// sink format has always carried, so it stays the default, even
	/// though e.g. "11/1/2020" sorts before "2/1/2020" this way.
	Lexicographic,
	/// Parse the dates and sort by calendar date instead.
	Chronological,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDateAggregate {
	pub date: DateString,
	pub country: CountryName,
	pub confirmed: u64,
	pub deaths: u64,
	pub recovered: u64,
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateAggregate {
	pub date: DateString,
	pub confirmed: u64,
	pub deaths: u64,
	pub recovered: u64,
}


fn parse_count(field: &'static str, value: &str) -> Result<Option<u64>, Error> {
	let value = value.trim();
	if value.is_empty() {
		// an absent count contributes zero to the sums, matching SUM()
		// over NULL cells
		return Ok(None)
	}
	match value.parse::<u64>() {
		Ok(v) => Ok(Some(v)),
		Err(e) => Err(Error::MalformedRow{
			field,
			value: value.to_string(),
			source: e,
		}),
	}
}

fn row_sums(rec: &CanonicalCaseRecord) -> Result<CaseSums, Error> {
	Ok(CaseSums{
		confirmed: parse_count("Confirmed", &rec.confirmed)?.unwrap_or(0),
		deaths: parse_count("Deaths", &rec.deaths)?.unwrap_or(0),
		recovered: parse_count("Recovered", &rec.recovered)?.unwrap_or(0),
	})
}

fn calendar_date(s: &str) -> Result<NaiveDate, Error> {
	NaiveDate::parse_from_str(s, "%m/%d/%Y").map_err(|_| Error::DateFormat{
		value: s.to_string(),
	})
}


/// Roll the records up by (date, country), ascending in both key parts.
pub fn aggregate_by_date_and_country(records: &[CanonicalCaseRecord], order: DateOrder) -> Result<Vec<CountryDateAggregate>, Error> {
	let mut groups: BTreeMap<(DateString, CountryName), CaseSums> = BTreeMap::new();
	for rec in records {
		let sums = row_sums(rec)?;
		let k = (rec.observation_date.as_str().into(), rec.country_region.as_str().into());
		groups.entry(k).or_default().merge(&sums);
	}
	// BTreeMap iteration is already the lexicographic (date, country) order
	let rows: Vec<_> = groups.into_iter().map(|((date, country), s)| CountryDateAggregate{
		date,
		country,
		confirmed: s.confirmed,
		deaths: s.deaths,
		recovered: s.recovered,
	}).collect();
	match order {
		DateOrder::Lexicographic => Ok(rows),
		DateOrder::Chronological => {
			let mut keyed = rows.into_iter().map(|row| {
				Ok((calendar_date(&row.date)?, row))
			}).collect::<Result<Vec<_>, Error>>()?;
			// stable sort keeps the per-date country order intact
			keyed.sort_by(|a, b| a.0.cmp(&b.0));
			Ok(keyed.into_iter().map(|(_, row)| row).collect())
		},
	}
}


/// Roll the records up by date alone, across all countries; canonicalization
/// outcome does not matter here, orphaned names still count.
pub fn aggregate_by_date(records: &[CanonicalCaseRecord], order: DateOrder) -> Result<Vec<DateAggregate>, Error> {
	let mut groups: BTreeMap<DateString, CaseSums> = BTreeMap::new();
	for rec in records {
		let sums = row_sums(rec)?;
		groups.entry(rec.observation_date.as_str().into()).or_default().merge(&sums);
	}
	let rows: Vec<_> = groups.into_iter().map(|(date, s)| DateAggregate{
		date,
		confirmed: s.confirmed,
		deaths: s.deaths,
		recovered: s.recovered,
	}).collect();
	match order {
		DateOrder::Lexicographic => Ok(rows),
		DateOrder::Chronological => {
			let mut keyed = rows.into_iter().map(|row| {
				Ok((calendar_date(&row.date)?, row))
			}).collect::<Result<Vec<_>, Error>>()?;
			keyed.sort_by(|a, b| a.0.cmp(&b.0));
			Ok(keyed.into_iter().map(|(_, row)| row).collect())
		},
	}
}
