use std::io;
use std::io::Write;

use log::debug;

use serde::Serialize;

use crate::aggregate::{DateAggregate, DateString};

use super::Error;


/// Document shape of the by-date rollup, one per observation date.
///
/// Field names are the store's document schema: `_id` is assigned
/// sequentially from zero and `death` is singular. The date stays in the
/// source M/D/YYYY form; unlike the relational path, this one never runs
/// through the date normalizer.
#[derive(Debug, Clone, Serialize)]
pub struct CaseDocument {
	#[serde(rename = "_id")]
	pub id: u64,
	pub date: DateString,
	pub confirmed: u64,
	pub death: u64,
	pub recovered: u64,
}


/// Emits the document batch as JSON Lines to an injected handle.
pub struct DocumentWriter<W: io::Write> {
	w: W,
	next_id: u64,
}

impl<W: io::Write> DocumentWriter<W> {
	pub fn new(w: W) -> Self {
		Self{
			w,
			next_id: 0,
		}
	}

	pub fn append(&mut self, rows: &[DateAggregate]) -> Result<(), Error> {
		debug!("writing {} case documents", rows.len());
		for row in rows {
			let doc = CaseDocument{
				id: self.next_id,
				date: row.date.clone(),
				confirmed: row.confirmed,
				death: row.deaths,
				recovered: row.recovered,
			};
			serde_json::to_writer(&mut self.w, &doc)?;
			self.w.write_all(&b"\n"[..])?;
			self.next_id += 1;
		}
		Ok(())
	}

	pub fn into_inner(self) -> W {
		self.w
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn agg(date: &str, confirmed: u64, deaths: u64, recovered: u64) -> DateAggregate {
		DateAggregate{
			date: date.into(),
			confirmed,
			deaths,
			recovered,
		}
	}

	#[test]
	fn documents_carry_sequential_ids_from_zero() {
		let mut w = DocumentWriter::new(Vec::new());
		w.append(&[agg("1/22/2020", 3, 0, 1), agg("1/23/2020", 7, 1, 0)]).unwrap();
		w.append(&[agg("1/24/2020", 9, 1, 2)]).unwrap();
		let out = String::from_utf8(w.into_inner()).unwrap();
		let docs: Vec<serde_json::Value> = out.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
		assert_eq!(docs.len(), 3);
		for (i, doc) in docs.iter().enumerate() {
			assert_eq!(doc["_id"], i as u64);
		}
	}

	#[test]
	fn documents_keep_the_source_date_form() {
		let mut w = DocumentWriter::new(Vec::new());
		w.append(&[agg("1/22/2020", 3, 2, 1)]).unwrap();
		let out = String::from_utf8(w.into_inner()).unwrap();
		let doc: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
		// not reformatted; only the relational path rewrites dates
		assert_eq!(doc["date"], "1/22/2020");
		assert_eq!(doc["confirmed"], 3);
		assert_eq!(doc["death"], 2);
		assert_eq!(doc["recovered"], 1);
		assert!(doc.get("deaths").is_none());
	}
}
