use covid_etl::{DateOrder, NullSink, aggregate_by_date, aggregate_by_date_and_country, canonicalize_records, load_case_records, load_reference_countries, reconcile, reference_name_set};
use covid_etl::sink::{DocumentWriter, SqlWriter};


static CASE_CSV: &str = "\
SNo,ObservationDate,Country/Region,Confirmed,Deaths,Recovered
1,1/22/2020,Mainland China,1,0,0
2,1/22/2020,Mainland China,2,0,1
3,1/22/2020,Atlantis,4,1,0
4,1/23/2020,US,5,0,2
";

static COUNTRY_CSV: &str = "\
country,latitude,longitude
China,35.86166,104.195397
United States,37.09024,-95.712891
";


#[test]
fn full_batch_run() {
	let countries = load_reference_countries(&mut NullSink(), COUNTRY_CSV.as_bytes()).unwrap();
	let reference = reference_name_set(&countries);

	let records = load_case_records(&mut NullSink(), CASE_CSV.as_bytes()).unwrap();
	let records = canonicalize_records(records);

	let by_country = aggregate_by_date_and_country(&records, DateOrder::Lexicographic).unwrap();
	let by_date = aggregate_by_date(&records, DateOrder::Lexicographic).unwrap();
	let n_aggregates = by_country.len();
	let reconciled = reconcile(by_country, &reference).unwrap();

	// the two Mainland China rows collapse into one reconciled China row
	assert_eq!(reconciled.matched.len(), 2);
	assert_eq!(&reconciled.matched[0].date[..], "2020-1-22");
	assert_eq!(&reconciled.matched[0].country[..], "China");
	assert_eq!(reconciled.matched[0].confirmed, 3);
	assert_eq!(reconciled.matched[0].deaths, 0);
	assert_eq!(reconciled.matched[0].recovered, 1);
	assert_eq!(&reconciled.matched[1].date[..], "2020-1-23");
	assert_eq!(&reconciled.matched[1].country[..], "United States");

	// Atlantis has neither a rewrite rule nor a reference entry
	assert_eq!(reconciled.orphaned.len(), 1);
	assert_eq!(&reconciled.orphaned[0][..], "Atlantis");
	assert_eq!(reconciled.matched.len() + reconciled.orphaned.len(), n_aggregates);

	// the by-date rollup still counts the orphaned Atlantis row
	assert_eq!(by_date.len(), 2);
	assert_eq!(&by_date[0].date[..], "1/22/2020");
	assert_eq!(by_date[0].confirmed, 7);
	assert_eq!(by_date[0].deaths, 1);
	assert_eq!(by_date[0].recovered, 1);
	assert_eq!(by_date[1].confirmed, 5);

	let mut sql = SqlWriter::new(Vec::new());
	sql.insert_countries(&countries).unwrap();
	sql.insert_daily_cases(&reconciled.matched).unwrap();
	let sql = String::from_utf8(sql.into_inner()).unwrap();
	assert!(sql.contains("INSERT INTO Country (name, latitude, longitude) VALUES"));
	assert!(sql.contains("('China', 35.86166, 104.195397)"));
	assert!(sql.contains("INSERT INTO DailyCase (datecase, country, confirmed, deaths, recovered) VALUES"));
	assert!(sql.contains("('2020-1-22', 'China', 3, 0, 1)"));
	assert!(sql.contains("('2020-1-23', 'United States', 5, 0, 2)"));
	// Atlantis never reaches the relational sink
	assert!(!sql.contains("Atlantis"));

	let mut docs = DocumentWriter::new(Vec::new());
	docs.append(&by_date).unwrap();
	let docs = String::from_utf8(docs.into_inner()).unwrap();
	let docs: Vec<serde_json::Value> = docs.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
	assert_eq!(docs.len(), 2);
	assert_eq!(docs[0]["_id"], 0);
	assert_eq!(docs[0]["date"], "1/22/2020");
	assert_eq!(docs[0]["confirmed"], 7);
	assert_eq!(docs[0]["death"], 1);
	assert_eq!(docs[1]["_id"], 1);
	assert_eq!(docs[1]["date"], "1/23/2020");
}
