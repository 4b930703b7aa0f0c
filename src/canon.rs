/// Ordered (raw, canonical) substitution rules for country names.
///
/// The raw case data and the reference country list disagree on a number of
/// country names; these rules rewrite the case-data spelling to the
/// reference spelling so the downstream country join holds.
///
/// Notes on the odder entries:
/// - "Palestine" maps to the empty string, which matches nothing in the
///   reference set and therefore drops those rows during reconciliation.
/// - " Azerbaijan" carries its leading space verbatim; the source data
///   contains that exact key.
pub static NAME_RULES: &[(&str, &str)] = &[
	("Mainland China", "China"),
	("US", "United States"),
	("UK", "United Kingdom"),
	("occupied Palestinian territory", "Palestinian Territories"),
	("West Bank and Gaza", "Palestinian Territories"),
	("The Gambia", "Gambia"),
	("The Bahamas", "Bahamas"),
	("South Sudan", "Sudan"),
	("Reunion", "Réunion"),
	("Republic of the Congo", "Congo [Republic]"),
	("Republic of Ireland", "Ireland"),
	("Palestine", ""),
	("North Macedonia", "Macedonia [FYROM]"),
	("North Ireland", "Ireland"),
	("Ivory Coast", "Côte d'Ivoire"),
	("Holy See", "Vatican City"),
	("Gambia, The", "Gambia"),
	("Eswatini", "Swaziland"),
	("East Timor", "Timor-Leste"),
	("Congo (Kinshasa)", "Congo [DRC]"),
	("Congo (Brazzaville)", "Congo [Republic]"),
	("Channel Islands", "United Kingdom"),
	("Cabo Verde", "Cape Verde"),
	("Burma", "Myanmar [Burma]"),
	("Bahamas, The", "Bahamas"),
	(" Azerbaijan", "Azerbaijan"),
];


/// First exact match wins; unmatched input passes through verbatim.
pub fn apply_first_match<'x>(rules: &'x [(&str, &str)], raw: &'x str) -> &'x str {
	for &(pattern, replacement) in rules {
		if pattern == raw {
			return replacement
		}
	}
	raw
}

/// Map a raw country name to its canonical form.
///
/// Never fails: names without a rule are returned unchanged and surface
/// later as orphans of the reference join if they are genuinely unknown.
pub fn canonicalize(raw: &str) -> &str {
	apply_first_match(NAME_RULES, raw)
}
