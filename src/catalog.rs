//! Job catalog: the static, ordered job history shown on the page.
//!
//! The records ship inside the binary as `data/jobs.json` and are parsed once
//! at startup. Nothing mutates the catalog afterwards; the rest of the crate
//! refers to records by their ordinal position.

use serde::Deserialize;

const EMBEDDED_JOBS: &str = include_str!("../data/jobs.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: u32,
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl JobRecord {
    /// `"Jun 2019 - Aug 2019"`
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    jobs: Vec<JobRecord>,
}

impl Catalog {
    /// Build a catalog, keeping the first record for any repeated id.
    pub fn new(records: Vec<JobRecord>) -> Self {
        let mut jobs: Vec<JobRecord> = Vec::with_capacity(records.len());
        for record in records {
            if jobs.iter().any(|j| j.id == record.id) {
                crate::console::warn(&format!(
                    "catalog: dropping duplicate job id {} ({})",
                    record.id, record.company
                ));
                continue;
            }
            jobs.push(record);
        }
        Self { jobs }
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<JobRecord> = serde_json::from_str(text)?;
        Ok(Self::new(records))
    }

    /// Parse the job list compiled into the binary. A malformed document
    /// yields an empty catalog rather than a blank page.
    pub fn load_embedded() -> Self {
        match Self::from_json(EMBEDDED_JOBS) {
            Ok(catalog) => {
                crate::console::log(&format!("catalog: loaded {} jobs", catalog.len()));
                catalog
            }
            Err(e) => {
                crate::console::warn(&format!("catalog: failed to parse jobs.json: {e}"));
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn get(&self, ordinal: usize) -> Option<&JobRecord> {
        self.jobs.get(ordinal)
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobRecord> {
        self.jobs.iter()
    }

    #[allow(dead_code)]
    pub fn ordinal_of(&self, id: u32) -> Option<usize> {
        self.jobs.iter().position(|j| j.id == id)
    }
}

#[cfg(test)]
pub(crate) fn sample(companies: &[&str]) -> Catalog {
    Catalog::new(
        companies
            .iter()
            .enumerate()
            .map(|(i, company)| JobRecord {
                id: i as u32 + 1,
                company: company.to_string(),
                title: format!("Title {}", company),
                start_date: format!("Jan 20{:02}", i + 10),
                end_date: format!("Dec 20{:02}", i + 10),
                description: format!("Worked at {}.", company),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_jobs_parse() {
        let catalog = Catalog::load_embedded();
        assert!(!catalog.is_empty());
        let ids: Vec<u32> = catalog.iter().map(|j| j.id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn parses_camel_case_fields() {
        let json = r#"[{"id":7,"company":"A","title":"T","startDate":"2020","endDate":"2021","description":"D"}]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let job = catalog.get(0).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.start_date, "2020");
        assert_eq!(job.date_range(), "2020 - 2021");
    }

    #[test]
    fn duplicate_ids_keep_first() {
        let json = r#"[
            {"id":1,"company":"A","title":"","startDate":"","endDate":"","description":""},
            {"id":1,"company":"B","title":"","startDate":"","endDate":"","description":""},
            {"id":2,"company":"C","title":"","startDate":"","endDate":"","description":""}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().company, "A");
        assert_eq!(catalog.ordinal_of(2), Some(1));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Catalog::from_json("{not json").is_err());
        assert!(Catalog::from_json(r#"[{"id":1}]"#).is_err());
    }

    #[test]
    fn ordinal_lookup() {
        let catalog = sample(&["A", "B", "C"]);
        assert_eq!(catalog.ordinal_of(1), Some(0));
        assert_eq!(catalog.ordinal_of(3), Some(2));
        assert_eq!(catalog.ordinal_of(99), None);
        assert!(catalog.get(3).is_none());
    }
}
