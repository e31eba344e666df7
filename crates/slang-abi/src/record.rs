//! The tab-separated language record carried in a successful payload
//!
//! ```text
//! name \t location \t 0xLCID \t bcp47 \t winid \t iso639_1 \t iso639_2 \t iso639_3
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{AbiError, Result};

/// Number of tab-separated fields in a record payload
pub const RECORD_FIELDS: usize = 8;

/// One language entry as it travels in a payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RecordJson", try_from = "RecordJson")]
pub struct LangRecord {
    /// Display name
    pub name: String,
    /// Region or location the entry describes
    pub location: String,
    /// Microsoft LCID
    pub lcid: u32,
    /// BCP 47 tag, e.g. `en-US`
    pub bcp47: String,
    /// Three-letter Windows language name, e.g. `ENU`
    pub win_id: String,
    /// ISO 639-1 code (falls back to the 639-2 code when there is none)
    pub iso639_1: String,
    /// ISO 639-2 code
    pub iso639_2: String,
    /// ISO 639-3 code
    pub iso639_3: String,
}

impl LangRecord {
    /// Text fields in payload order, LCID excluded
    fn text_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("name", self.name.as_str()),
            ("location", self.location.as_str()),
            ("bcp47", self.bcp47.as_str()),
            ("winid", self.win_id.as_str()),
            ("iso639_1", self.iso639_1.as_str()),
            ("iso639_2", self.iso639_2.as_str()),
            ("iso639_3", self.iso639_3.as_str()),
        ]
    }

    /// Check that every field can travel in a payload
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.text_fields() {
            if value.contains('\t') {
                return Err(AbiError::malformed(format!("{field} contains a tab")));
            }
            if value.contains('\0') {
                return Err(AbiError::malformed(format!("{field} contains a NUL byte")));
            }
        }
        Ok(())
    }

    /// LCID as it appears in the payload, e.g. `0x0409`
    pub fn lcid_hex(&self) -> String {
        format!("0x{:04X}", self.lcid)
    }

    /// Render the payload form
    pub fn to_tabstr(&self) -> String {
        let lcid = self.lcid_hex();
        [
            self.name.as_str(),
            self.location.as_str(),
            lcid.as_str(),
            self.bcp47.as_str(),
            self.win_id.as_str(),
            self.iso639_1.as_str(),
            self.iso639_2.as_str(),
            self.iso639_3.as_str(),
        ]
        .join("\t")
    }

    /// Parse the payload form
    pub fn from_tabstr(tabstr: &str) -> Result<Self> {
        let fields: Vec<&str> = tabstr.split('\t').collect();
        if fields.len() != RECORD_FIELDS {
            return Err(AbiError::malformed(format!(
                "expected {RECORD_FIELDS} tab-separated fields, found {}",
                fields.len()
            )));
        }

        let record = Self {
            name: fields[0].to_string(),
            location: fields[1].to_string(),
            lcid: parse_lcid(fields[2])?,
            bcp47: fields[3].to_string(),
            win_id: fields[4].to_string(),
            iso639_1: fields[5].to_string(),
            iso639_2: fields[6].to_string(),
            iso639_3: fields[7].to_string(),
        };
        record.validate()?;
        Ok(record)
    }
}

fn parse_lcid(field: &str) -> Result<u32> {
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .ok_or_else(|| AbiError::malformed(format!("LCID {field:?} lacks a 0x prefix")))?;
    u32::from_str_radix(digits, 16)
        .map_err(|e| AbiError::malformed(format!("LCID {field:?} is not hex: {e}")))
}

/// JSON shape of a record, keyed the way the Python bindings print it
#[derive(Serialize, Deserialize)]
struct RecordJson {
    name: String,
    location: String,
    #[serde(rename = "clidHex")]
    clid_hex: String,
    clid: u32,
    bcp47: String,
    winid: String,
    iso639_1: String,
    iso639_2: String,
    iso639_3: String,
}

impl From<LangRecord> for RecordJson {
    fn from(record: LangRecord) -> Self {
        Self {
            clid_hex: record.lcid_hex(),
            clid: record.lcid,
            name: record.name,
            location: record.location,
            bcp47: record.bcp47,
            winid: record.win_id,
            iso639_1: record.iso639_1,
            iso639_2: record.iso639_2,
            iso639_3: record.iso639_3,
        }
    }
}

impl TryFrom<RecordJson> for LangRecord {
    type Error = AbiError;

    fn try_from(json: RecordJson) -> Result<Self> {
        let lcid = parse_lcid(&json.clid_hex)?;
        if lcid != json.clid {
            return Err(AbiError::malformed(format!(
                "clidHex {} disagrees with clid {}",
                json.clid_hex, json.clid
            )));
        }
        let record = Self {
            name: json.name,
            location: json.location,
            lcid,
            bcp47: json.bcp47,
            win_id: json.winid,
            iso639_1: json.iso639_1,
            iso639_2: json.iso639_2,
            iso639_3: json.iso639_3,
        };
        record.validate()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn klingon() -> LangRecord {
        LangRecord {
            name: "Klingon".into(),
            location: "Star Trek Universe".into(),
            lcid: 0x0000,
            bcp47: "kg-SU".into(),
            win_id: "KLI".into(),
            iso639_1: "kg".into(),
            iso639_2: "tlh".into(),
            iso639_3: "tlh".into(),
        }
    }

    #[test]
    fn test_tabstr_format() {
        assert_eq!(
            klingon().to_tabstr(),
            "Klingon\tStar Trek Universe\t0x0000\tkg-SU\tKLI\tkg\ttlh\ttlh"
        );
    }

    #[test]
    fn test_from_tabstr() {
        let record =
            LangRecord::from_tabstr("English\tUnited States\t0x0409\ten-US\tENU\ten\teng\teng")
                .unwrap();
        assert_eq!(record.lcid, 0x0409);
        assert_eq!(record.win_id, "ENU");
        assert_eq!(record.iso639_3, "eng");
    }

    #[test]
    fn test_from_tabstr_rejects_wrong_field_count() {
        let err = LangRecord::from_tabstr("English\ten").unwrap_err();
        assert!(matches!(err, AbiError::MalformedRecord { .. }));

        assert!(LangRecord::from_tabstr("").is_err());
    }

    #[test]
    fn test_from_tabstr_rejects_bad_lcid() {
        assert!(LangRecord::from_tabstr("a\tb\t0409\tc\td\te\tf\tg").is_err());
        assert!(LangRecord::from_tabstr("a\tb\t0xZZ\tc\td\te\tf\tg").is_err());
    }

    #[test]
    fn test_validate_rejects_nul() {
        let mut record = klingon();
        record.name = "Kl\0ingon".into();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(klingon()).unwrap();
        assert_eq!(json["clidHex"], "0x0000");
        assert_eq!(json["clid"], 0);
        assert_eq!(json["winid"], "KLI");
        assert_eq!(json["iso639_2"], "tlh");

        let back: LangRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, klingon());
    }

    #[test]
    fn test_json_rejects_inconsistent_lcid() {
        let mut json = serde_json::to_value(klingon()).unwrap();
        json["clid"] = serde_json::json!(1033);
        assert!(serde_json::from_value::<LangRecord>(json).is_err());
    }
}
