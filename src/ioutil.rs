use std::fs;
use std::io;
use std::io::Read;
use std::path::Path;

use flate2;


/// Open a data source by name: http(s) URLs are fetched, `.gz` files are
/// decompressed transparently, anything else is read as a plain file.
pub fn magic_open(source: &str) -> io::Result<Box<dyn Read>> {
	if source.starts_with("http://") || source.starts_with("https://") {
		let resp = reqwest::blocking::get(source)
			.and_then(|r| r.error_for_status())
			.map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
		return Ok(Box::new(resp))
	}
	let path = Path::new(source);
	match path.extension() {
		Some(x) if x == "gz" => {
			Ok(Box::new(flate2::read::GzDecoder::new(fs::File::open(path)?)))
		},
		_ => Ok(Box::new(fs::File::open(path)?)),
	}
}
