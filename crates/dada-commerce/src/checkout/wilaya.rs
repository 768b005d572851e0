//! Algerian wilayas (provinces) and their communes.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const BUILTIN: [(&str, &str); 58] = [
    ("01", "أدرار"),
    ("02", "الشلف"),
    ("03", "الأغواط"),
    ("04", "أم البواقي"),
    ("05", "باتنة"),
    ("06", "بجاية"),
    ("07", "بسكرة"),
    ("08", "بشار"),
    ("09", "البليدة"),
    ("10", "البويرة"),
    ("11", "تمنراست"),
    ("12", "تبسة"),
    ("13", "تلمسان"),
    ("14", "تيارت"),
    ("15", "تيزي وزو"),
    ("16", "الجزائر"),
    ("17", "الجلفة"),
    ("18", "جيجل"),
    ("19", "سطيف"),
    ("20", "سعيدة"),
    ("21", "سكيكدة"),
    ("22", "سيدي بلعباس"),
    ("23", "عنابة"),
    ("24", "قالمة"),
    ("25", "قسنطينة"),
    ("26", "المدية"),
    ("27", "مستغانم"),
    ("28", "المسيلة"),
    ("29", "معسكر"),
    ("30", "ورقلة"),
    ("31", "وهران"),
    ("32", "البيض"),
    ("33", "إليزي"),
    ("34", "برج بوعريريج"),
    ("35", "بومرداس"),
    ("36", "الطارف"),
    ("37", "تندوف"),
    ("38", "تيسمسيلت"),
    ("39", "الوادي"),
    ("40", "خنشلة"),
    ("41", "سوق أهراس"),
    ("42", "تيبازة"),
    ("43", "ميلة"),
    ("44", "عين الدفلى"),
    ("45", "النعامة"),
    ("46", "عين تيموشنت"),
    ("47", "غرداية"),
    ("48", "غليزان"),
    ("49", "تيميمون"),
    ("50", "برج باجي مختار"),
    ("51", "أولاد جلال"),
    ("52", "بني عباس"),
    ("53", "عين صالح"),
    ("54", "عين قزام"),
    ("55", "تقرت"),
    ("56", "جانت"),
    ("57", "المغير"),
    ("58", "المنيعة"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wilaya {
    /// Two-digit code, "01" to "58".
    pub code: String,
    pub name: String,
    /// Sorted, without duplicates.
    pub communes: Vec<String>,
}

/// Lookup table from wilaya code to name and communes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WilayaDirectory {
    wilayas: Vec<Wilaya>,
}

impl WilayaDirectory {
    /// All 58 wilayas with their seat as the only commune.
    pub fn builtin() -> Self {
        let wilayas = BUILTIN
            .iter()
            .map(|(code, name)| Wilaya {
                code: code.to_string(),
                name: name.to_string(),
                communes: vec![name.to_string()],
            })
            .collect();
        Self { wilayas }
    }

    /// Parse `wilaya_code,wilaya_name,commune_name,daira_name` rows.
    ///
    /// The first line is a header. Quotes are stripped from every field and
    /// blank lines are skipped. A wilaya takes the name from its first row.
    pub fn from_csv(text: &str) -> Result<Self, CommerceError> {
        let mut names: BTreeMap<u32, (String, String)> = BTreeMap::new();
        let mut communes: BTreeMap<u32, BTreeSet<String>> = BTreeMap::new();

        for (idx, line) in text.trim().lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            let fields: Vec<String> = line
                .split(',')
                .map(|v| v.trim().replace('"', ""))
                .collect();

            if fields.len() < 3 {
                return Err(CommerceError::InvalidWilayaData {
                    line: line_no,
                    reason: format!("expected at least 3 fields, got {}", fields.len()),
                });
            }

            let code = &fields[0];
            let numeric: u32 = code.parse().map_err(|_| CommerceError::InvalidWilayaData {
                line: line_no,
                reason: format!("wilaya code is not a number: {code:?}"),
            })?;

            names
                .entry(numeric)
                .or_insert_with(|| (code.clone(), fields[1].clone()));
            communes
                .entry(numeric)
                .or_default()
                .insert(fields[2].clone());
        }

        let wilayas = names
            .into_iter()
            .map(|(numeric, (code, name))| Wilaya {
                code,
                name,
                communes: communes
                    .remove(&numeric)
                    .map(|set| set.into_iter().collect())
                    .unwrap_or_default(),
            })
            .collect();

        Ok(Self { wilayas })
    }

    pub fn wilayas(&self) -> &[Wilaya] {
        &self.wilayas
    }

    pub fn len(&self) -> usize {
        self.wilayas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wilayas.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Wilaya> {
        self.wilayas.iter().find(|w| w.code == code)
    }

    /// Display name for a code; an unknown code resolves to an empty string.
    pub fn resolve(&self, code: &str) -> &str {
        self.get(code).map(|w| w.name.as_str()).unwrap_or("")
    }

    pub fn communes(&self, code: &str) -> &[String] {
        self.get(code).map(|w| w.communes.as_slice()).unwrap_or(&[])
    }
}
