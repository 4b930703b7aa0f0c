use std::collections::HashSet;
use std::io;

use serde::Deserialize;

use crate::canon::canonicalize;
use crate::error::Error;
use crate::progress::{CountMeter, ProgressSink};


/// One observation row from the case CSV, counts still in their raw string
/// form. The count columns are parsed during aggregation so that an empty
/// cell can contribute zero instead of poisoning the whole row.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCaseRecord {
	#[serde(rename = "SNo")]
	pub serial: u64,
	#[serde(rename = "ObservationDate")]
	pub observation_date: String,
	#[serde(rename = "Country/Region")]
	pub country_region: String,
	#[serde(rename = "Confirmed")]
	pub confirmed: String,
	#[serde(rename = "Deaths")]
	pub deaths: String,
	#[serde(rename = "Recovered")]
	pub recovered: String,
}


/// A [`RawCaseRecord`] with the country name rewritten to its canonical
/// form.
#[derive(Debug, Clone)]
pub struct CanonicalCaseRecord {
	pub observation_date: String,
	pub country_region: String,
	pub confirmed: String,
	pub deaths: String,
	pub recovered: String,
}

impl From<RawCaseRecord> for CanonicalCaseRecord {
	fn from(raw: RawCaseRecord) -> Self {
		let country_region = canonicalize(&raw.country_region).to_string();
		Self{
			observation_date: raw.observation_date,
			country_region,
			confirmed: raw.confirmed,
			deaths: raw.deaths,
			recovered: raw.recovered,
		}
	}
}

pub fn canonicalize_records(records: Vec<RawCaseRecord>) -> Vec<CanonicalCaseRecord> {
	records.into_iter().map(CanonicalCaseRecord::from).collect()
}


/// One row of the reference country list: canonical name plus coordinates.
/// Passed through to the relational sink unmodified; the name set is the
/// join target of reconciliation.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceCountry {
	#[serde(rename = "country")]
	pub name: String,
	pub latitude: f64,
	pub longitude: f64,
}

pub fn reference_name_set(countries: &[ReferenceCountry]) -> HashSet<String> {
	countries.iter().map(|c| c.name.clone()).collect()
}


pub fn load_case_records<R: io::Read, S: ProgressSink + ?Sized>(s: &mut S, r: R) -> Result<Vec<RawCaseRecord>, Error> {
	let mut r = csv::Reader::from_reader(r);
	let mut pm = CountMeter::new(s);
	let mut records = Vec::new();
	let mut n = 0;
	for (i, row) in r.deserialize().enumerate() {
		let rec: RawCaseRecord = row?;
		records.push(rec);
		if i % 50000 == 49999 {
			pm.update(i+1);
		}
		n = i+1;
	}
	pm.finish(n);
	Ok(records)
}

pub fn load_reference_countries<R: io::Read, S: ProgressSink + ?Sized>(s: &mut S, r: R) -> Result<Vec<ReferenceCountry>, Error> {
	let mut r = csv::Reader::from_reader(r);
	let mut pm = CountMeter::new(s);
	let mut countries = Vec::new();
	let mut n = 0;
	for (i, row) in r.deserialize().enumerate() {
		let rec: ReferenceCountry = row?;
		countries.push(rec);
		if i % 50000 == 49999 {
			pm.update(i+1);
		}
		n = i+1;
	}
	pm.finish(n);
	Ok(countries)
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::progress::NullSink;

	static CASE_CSV: &str = "\
SNo,ObservationDate,Country/Region,Confirmed,Deaths,Recovered
1,1/22/2020,Mainland China,1,0,0
2,1/22/2020,US,2,0,1
";

	static COUNTRY_CSV: &str = "\
country,latitude,longitude
China,35.86166,104.195397
United States,37.09024,-95.712891
";

	#[test]
	fn loads_case_rows() {
		let recs = load_case_records(&mut NullSink(), CASE_CSV.as_bytes()).unwrap();
		assert_eq!(recs.len(), 2);
		assert_eq!(recs[0].serial, 1);
		assert_eq!(recs[0].observation_date, "1/22/2020");
		assert_eq!(recs[0].country_region, "Mainland China");
		assert_eq!(recs[1].confirmed, "2");
		assert_eq!(recs[1].recovered, "1");
	}

	#[test]
	fn loads_reference_countries() {
		let countries = load_reference_countries(&mut NullSink(), COUNTRY_CSV.as_bytes()).unwrap();
		assert_eq!(countries.len(), 2);
		assert_eq!(countries[0].name, "China");
		assert!((countries[0].latitude - 35.86166).abs() < 1e-9);
		assert!((countries[1].longitude - -95.712891).abs() < 1e-9);
		let names = reference_name_set(&countries);
		assert!(names.contains("China"));
		assert!(!names.contains("Atlantis"));
	}

	#[test]
	fn canonicalization_rewrites_during_conversion() {
		let recs = load_case_records(&mut NullSink(), CASE_CSV.as_bytes()).unwrap();
		let recs = canonicalize_records(recs);
		assert_eq!(recs[0].country_region, "China");
		assert_eq!(recs[1].country_region, "United States");
	}
}
