use std::collections::HashSet;

use super::types::Paper;

/// Filename suffix variants the archive has used over the years, in the
/// order they are worth probing.
const SUFFIXES: [&str; 3] = ["", "_English", "_Hindi"];

/// Expand a (year, optional paper) request into the ordered list of
/// candidate PDF URLs under `base`.
///
/// For each paper under consideration (the requested one, or Paper 1 then
/// Paper 2 when none was given) this emits the underscore-separated variant
/// for every suffix, then one compact variant with no separator and no
/// suffix. Duplicates are dropped, keeping the first occurrence.
///
/// Pure string transformation: no I/O, deterministic, never empty.
pub fn candidate_urls(base: &str, year: &str, paper: Option<Paper>) -> Vec<String> {
    let yr = year.trim();
    let base = base.trim_end_matches('/');

    let papers = match paper {
        Some(p) => vec![p],
        None => vec![Paper::One, Paper::Two],
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for p in papers {
        let p = p.digit();
        for s in SUFFIXES {
            let url = format!("{base}/{yr}_{p}{s}.pdf");
            if seen.insert(url.clone()) {
                out.push(url);
            }
        }
        let compact = format!("{base}/{yr}{p}.pdf");
        if seen.insert(compact.clone()) {
            out.push(compact);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://jeeadv.ac.in/past_qps";

    #[test]
    fn single_paper_yields_its_four_variants() {
        let urls = candidate_urls(BASE, "2019", Some(Paper::One));
        assert_eq!(
            urls,
            vec![
                "https://jeeadv.ac.in/past_qps/2019_1.pdf",
                "https://jeeadv.ac.in/past_qps/2019_1_English.pdf",
                "https://jeeadv.ac.in/past_qps/2019_1_Hindi.pdf",
                "https://jeeadv.ac.in/past_qps/20191.pdf",
            ]
        );
    }

    #[test]
    fn no_paper_yields_paper_one_variants_then_paper_two() {
        let urls = candidate_urls(BASE, "2014", None);
        assert_eq!(urls.len(), 8);
        assert_eq!(urls[0], "https://jeeadv.ac.in/past_qps/2014_1.pdf");
        assert!(urls[..4].iter().all(|u| u.contains("_1") || u.ends_with("20141.pdf")));
        assert!(urls[4..].iter().all(|u| u.contains("_2") || u.ends_with("20142.pdf")));
    }

    #[test]
    fn output_has_no_duplicates() {
        for paper in [None, Some(Paper::One), Some(Paper::Two)] {
            let urls = candidate_urls(BASE, "2012", paper);
            let mut deduped = urls.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), urls.len());
        }
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let a = candidate_urls(BASE, "2020", None);
        let b = candidate_urls(BASE, "2020", None);
        assert_eq!(a, b);
    }

    #[test]
    fn trims_year_whitespace_and_base_slash() {
        let urls = candidate_urls("https://example.com/qps/", " 2015 ", Some(Paper::Two));
        assert_eq!(urls[0], "https://example.com/qps/2015_2.pdf");
    }
}
