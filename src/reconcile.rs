use std::collections::HashSet;

use log::debug;

use crate::aggregate::{CountryDateAggregate, CountryName, DateString};
use crate::error::Error;


/// A country/date aggregate whose country exists in the reference set,
/// with the date rewritten for the relational sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledRow {
	pub date: DateString,
	pub country: CountryName,
	pub confirmed: u64,
	pub deaths: u64,
	pub recovered: u64,
}


/// Outcome of the reference join: every input aggregate lands in exactly
/// one of the two collections.
#[derive(Debug, Clone)]
pub struct Reconciliation {
	pub matched: Vec<ReconciledRow>,
	pub orphaned: Vec<CountryName>,
}


/// Rewrite `M/D/YYYY` as `YYYY-M-D`.
///
/// Purely textual: the three slash-delimited parts are reassembled without
/// zero-padding or calendar validation, so `3/5/2020` becomes `2020-3-5`.
pub fn normalize_date(raw: &str) -> Result<DateString, Error> {
	let mut parts = raw.split('/');
	match (parts.next(), parts.next(), parts.next(), parts.next()) {
		(Some(month), Some(day), Some(year), None) => {
			Ok(format!("{}-{}-{}", year, month, day).into())
		},
		_ => Err(Error::DateFormat{
			value: raw.to_string(),
		}),
	}
}


/// Split the aggregates into rows backed by a reference country and orphan
/// names without one. Stable: `matched` keeps the input order.
///
/// Orphans are not an error; they are the expected signature of a source
/// name the rule table does not cover (or of a deliberately blanked one)
/// and are surfaced to the caller for reporting.
pub fn reconcile(aggregates: Vec<CountryDateAggregate>, reference_names: &HashSet<String>) -> Result<Reconciliation, Error> {
	let mut matched = Vec::with_capacity(aggregates.len());
	let mut orphaned = Vec::new();
	for agg in aggregates {
		let date = normalize_date(&agg.date)?;
		let known = {
			let name: &str = &agg.country;
			reference_names.contains(name)
		};
		if known {
			matched.push(ReconciledRow{
				date,
				country: agg.country,
				confirmed: agg.confirmed,
				deaths: agg.deaths,
				recovered: agg.recovered,
			});
		} else {
			orphaned.push(agg.country);
		}
	}
	debug!("reconciliation kept {} rows, dropped {} without a reference country", matched.len(), orphaned.len());
	Ok(Reconciliation{matched, orphaned})
}
