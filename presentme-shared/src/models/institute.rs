use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Review lifecycle of an institute record.
///
/// Records appear in the pending collection until an admin approves
/// (verified) or rejects them; rejected is terminal and the record leaves
/// both active collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InstituteStatus {
    Pending,
    Verified,
    Rejected,
}

impl InstituteStatus {
    /// Canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for InstituteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstituteStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "verified" => Ok(Self::Verified),
            "rejected" => Ok(Self::Rejected),
            _ => Err("unknown institute status"),
        }
    }
}

/// One institute registration as returned by the list endpoints.
///
/// Wire names are preserved verbatim, including the backend's inconsistent
/// casing (`InstitutionName`, `designationIDUrl`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstituteSummary {
    /// Unique key; compared stringwise everywhere.
    #[serde(rename = "institutionId", deserialize_with = "string_or_number")]
    pub institution_id: String,

    /// Display name of the institute.
    #[serde(rename = "InstitutionName")]
    pub institution_name: String,

    /// Current review status.
    pub status: InstituteStatus,

    /// Institute category, e.g. "Engineering College".
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Postal address.
    #[serde(default)]
    pub address: String,

    /// Institute contact email.
    #[serde(rename = "emailId", default)]
    pub email_id: String,

    /// Institute contact phone.
    #[serde(default)]
    pub phone: String,

    /// Contact person's first name.
    #[serde(rename = "firstName", default)]
    pub first_name: String,

    /// Contact person's last name.
    #[serde(rename = "lastName", default)]
    pub last_name: String,

    /// Expected number of students.
    #[serde(rename = "expectedStudents", default)]
    pub expected_students: u32,

    /// Expected number of teachers.
    #[serde(rename = "expectedTeachers", default)]
    pub expected_teachers: u32,

    /// Free-form description of the institute.
    #[serde(default)]
    pub bio: String,

    /// Registration timestamp, displayed as the server sent it.
    #[serde(rename = "createdAt", default)]
    pub created_at: String,

    /// Uploaded profile picture, when present.
    #[serde(rename = "profilePicUrl", default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_url: Option<String>,

    /// Institute website, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    /// Aadhar card document of the contact person, when uploaded.
    #[serde(rename = "aadharUrl", default, skip_serializing_if = "Option::is_none")]
    pub aadhar_url: Option<String>,

    /// Designation ID document of the contact person, when uploaded.
    #[serde(rename = "designationIDUrl", default, skip_serializing_if = "Option::is_none")]
    pub designation_id_url: Option<String>,
}

impl InstituteSummary {
    /// Contact person's first and last name joined for display.
    #[must_use]
    pub fn contact_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    /// Case-insensitive match against the institution name or the contact
    /// person's first name, as the verified-list search box filters.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.institution_name.to_lowercase().contains(&query)
            || self.first_name.to_lowercase().contains(&query)
    }
}

/// Envelope of the `pendingInstitutes` / `verifiedInstitutes` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstituteCollection {
    /// The fetched institute summaries.
    pub data: Vec<InstituteSummary>,
}

impl InstituteCollection {
    /// Number of institutes in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the collection holds no institutes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Stringwise id scan, mirroring how detail pages locate a record.
    #[must_use]
    pub fn find(&self, institution_id: &str) -> Option<&InstituteSummary> {
        self.data
            .iter()
            .find(|institute| institute.institution_id == institution_id)
    }
}

/// Body of `PATCH sadmin/institutes/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdateRequest {
    /// The requested transition target; only verified or rejected are sent.
    pub status: InstituteStatus,
}

/// Accepts both `"42"` and `42` for ids; older records carry numeric ids.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Text(value) => value,
        StringOrNumber::Number(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "institutionId": "inst-001",
            "InstitutionName": "Meridian Engineering College",
            "status": "pending",
            "type": "Engineering College",
            "address": "14 Lakeview Road, Pune",
            "emailId": "office@meridian.example",
            "phone": "+91 98200 00000",
            "firstName": "Rohan",
            "lastName": "Mehta",
            "expectedStudents": 1200,
            "expectedTeachers": 80,
            "bio": "Autonomous engineering college established in 1998.",
            "createdAt": "2024-10-18",
            "designationIDUrl": "https://cdn.example/docs/designation-001.pdf",
            "unknownField": true
        }"#
    }

    #[test]
    fn summary_decodes_wire_names() {
        let institute: InstituteSummary = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(institute.institution_id, "inst-001");
        assert_eq!(institute.institution_name, "Meridian Engineering College");
        assert_eq!(institute.status, InstituteStatus::Pending);
        assert_eq!(institute.kind, "Engineering College");
        assert_eq!(institute.contact_name(), "Rohan Mehta");
        assert_eq!(institute.expected_students, 1200);
        assert!(institute.website.is_none());
        assert_eq!(
            institute.designation_id_url.as_deref(),
            Some("https://cdn.example/docs/designation-001.pdf")
        );
    }

    #[test]
    fn summary_accepts_numeric_id() {
        let json = r#"{
            "institutionId": 42,
            "InstitutionName": "Numeric Id College",
            "status": "verified"
        }"#;

        let institute: InstituteSummary = serde_json::from_str(json).unwrap();
        assert_eq!(institute.institution_id, "42");
    }

    #[test]
    fn summary_without_name_is_a_decode_error() {
        let json = r#"{"institutionId": "inst-002", "status": "pending"}"#;
        assert!(serde_json::from_str::<InstituteSummary>(json).is_err());
    }

    #[test]
    fn status_round_trips_lowercase() {
        for status in [
            InstituteStatus::Pending,
            InstituteStatus::Verified,
            InstituteStatus::Rejected,
        ] {
            let encoded = serde_json::to_string(&status).unwrap();
            assert_eq!(encoded, format!("\"{status}\""));
            assert_eq!(status.as_str().parse::<InstituteStatus>().unwrap(), status);
        }
        assert!("approved".parse::<InstituteStatus>().is_err());
    }

    #[test]
    fn collection_find_is_stringwise() {
        let collection: InstituteCollection =
            serde_json::from_str(&format!(r#"{{"data": [{}]}}"#, sample_json())).unwrap();

        assert_eq!(collection.len(), 1);
        assert!(collection.find("inst-001").is_some());
        assert!(collection.find("inst-0010").is_none());
    }

    #[test]
    fn query_matches_name_or_contact_first_name() {
        let institute: InstituteSummary = serde_json::from_str(sample_json()).unwrap();
        assert!(institute.matches_query(""));
        assert!(institute.matches_query("meridian"));
        assert!(institute.matches_query("ROHAN"));
        assert!(!institute.matches_query("mehta"));
        assert!(!institute.matches_query("stanford"));
    }

    #[test]
    fn status_update_request_body() {
        let body = StatusUpdateRequest {
            status: InstituteStatus::Rejected,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":"rejected"}"#
        );
    }
}
