use std::io;
use std::io::Write;

use bytes::{BytesMut, BufMut};

use log::debug;

use crate::reconcile::ReconciledRow;
use crate::records::ReferenceCountry;

use super::Error;


/// Rows per INSERT statement. Whole-batch inserts run into server-side
/// lock timeouts on datasets of this size, so the batch is cut into
/// fixed-size statements; row order is preserved across the cuts.
pub const INSERT_CHUNK_ROWS: usize = 100;


fn write_sql_str<W: io::Write>(w: &mut W, s: &str) -> io::Result<()> {
	w.write_all(&b"'"[..])?;
	let mut prev = 0;
	for (idx, substr) in s.match_indices(&['\\', '\''][..]) {
		w.write_all(&s.as_bytes()[prev..idx])?;
		w.write_all(&b"\\"[..])?;
		w.write_all(substr.as_bytes())?;
		prev = idx + substr.len();
	}
	if prev != s.len() {
		w.write_all(&s.as_bytes()[prev..])?;
	}
	w.write_all(&b"'"[..])?;
	Ok(())
}


/// Emits the relational batches as multi-row INSERT statements.
///
/// The output handle is injected at construction; the writer never touches
/// ambient connection state, running the statements stays with the caller.
pub struct SqlWriter<W: io::Write> {
	w: W,
}

impl<W: io::Write> SqlWriter<W> {
	pub fn new(w: W) -> Self {
		Self{w}
	}

	/// Pass-through of the reference data into the Country table.
	pub fn insert_countries(&mut self, countries: &[ReferenceCountry]) -> Result<(), Error> {
		debug!("writing {} Country rows", countries.len());
		for chunk in countries.chunks(INSERT_CHUNK_ROWS) {
			let mut buf = BytesMut::new().writer();
			buf.get_mut().put(&b"INSERT INTO Country (name, latitude, longitude) VALUES"[..]);
			for (i, country) in chunk.iter().enumerate() {
				if i > 0 {
					buf.get_mut().put_u8(b',');
				}
				buf.get_mut().put(&b"\n\t("[..]);
				write_sql_str(&mut buf, &country.name).expect("write to BytesMut failed");
				write!(&mut buf, ", {}, {})", country.latitude, country.longitude).expect("write to BytesMut failed");
			}
			buf.get_mut().put(&b";\n"[..]);
			self.w.write_all(&buf.into_inner()[..])?;
		}
		Ok(())
	}

	/// Reconciled per-country rollup into the DailyCase table. The country
	/// column is a foreign key into Country, which reconciliation already
	/// guaranteed.
	pub fn insert_daily_cases(&mut self, rows: &[ReconciledRow]) -> Result<(), Error> {
		debug!("writing {} DailyCase rows", rows.len());
		for chunk in rows.chunks(INSERT_CHUNK_ROWS) {
			let mut buf = BytesMut::new().writer();
			buf.get_mut().put(&b"INSERT INTO DailyCase (datecase, country, confirmed, deaths, recovered) VALUES"[..]);
			for (i, row) in chunk.iter().enumerate() {
				if i > 0 {
					buf.get_mut().put_u8(b',');
				}
				buf.get_mut().put(&b"\n\t("[..]);
				write_sql_str(&mut buf, &row.date).expect("write to BytesMut failed");
				buf.get_mut().put(&b", "[..]);
				write_sql_str(&mut buf, &row.country).expect("write to BytesMut failed");
				write!(&mut buf, ", {}, {}, {})", row.confirmed, row.deaths, row.recovered).expect("write to BytesMut failed");
			}
			buf.get_mut().put(&b";\n"[..]);
			self.w.write_all(&buf.into_inner()[..])?;
		}
		Ok(())
	}

	pub fn into_inner(self) -> W {
		self.w
	}
}
