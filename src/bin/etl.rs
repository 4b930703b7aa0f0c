use std::fs;

use covid_etl;
use covid_etl::{DateOrder, aggregate_by_date, aggregate_by_date_and_country, canonicalize_records, load_case_records, load_reference_countries, magic_open, reconcile, reference_name_set};
use covid_etl::sink::{DocumentWriter, SqlWriter};


fn main() -> Result<(), Box<dyn std::error::Error>> {
	let mut order = DateOrder::Lexicographic;
	let mut args = Vec::new();
	for arg in std::env::args().skip(1) {
		if arg == "--chronological" {
			order = DateOrder::Chronological;
		} else {
			args.push(arg);
		}
	}
	if args.len() != 4 {
		eprintln!("usage: etl [--chronological] <case csv> <country csv> <sql out> <documents out>");
		std::process::exit(1);
	}
	let casefile = &args[0];
	let countryfile = &args[1];
	let sqlout = &args[2];
	let docsout = &args[3];

	println!("loading reference countries ...");
	let countries = load_reference_countries(&mut *covid_etl::default_output(), magic_open(countryfile)?)?;
	let reference = reference_name_set(&countries);

	println!("loading case data ...");
	let records = load_case_records(&mut *covid_etl::default_output(), magic_open(casefile)?)?;
	let records = canonicalize_records(records);

	println!("crunching ...");
	let by_country = aggregate_by_date_and_country(&records, order)?;
	let by_date = aggregate_by_date(&records, order)?;
	let reconciled = reconcile(by_country, &reference)?;

	if !reconciled.orphaned.is_empty() {
		let mut unmatched: Vec<&str> = reconciled.orphaned.iter().map(|n| &n[..]).collect();
		unmatched.sort();
		unmatched.dedup();
		println!("{} aggregate rows without a reference country ({} distinct names):", reconciled.orphaned.len(), unmatched.len());
		for name in unmatched {
			println!("  {:?}", name);
		}
	}

	println!("writing {} ...", sqlout);
	let mut sql = SqlWriter::new(fs::File::create(sqlout)?);
	sql.insert_countries(&countries)?;
	sql.insert_daily_cases(&reconciled.matched)?;

	println!("writing {} ...", docsout);
	let mut docs = DocumentWriter::new(fs::File::create(docsout)?);
	docs.append(&by_date)?;

	Ok(())
}
