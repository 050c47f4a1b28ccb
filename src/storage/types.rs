use serde::{Deserialize, Deserializer, Serialize};

/// The persisted profile document.
///
/// Field names on disk use the `bio_data.json` casing so that files written by
/// earlier versions load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "Skills", default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(rename = "Interests", default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(rename = "Learning", default, deserialize_with = "null_as_default")]
    pub learning: Vec<String>,
    #[serde(rename = "GitHubUrl", default, deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(rename = "FacebookUrl", default, deserialize_with = "null_as_default")]
    pub facebook_url: String,
    #[serde(rename = "TryhackmeUrl", default, deserialize_with = "null_as_default")]
    pub tryhackme_url: String,
}

/// Older files may carry `null` for fields that were never set.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Profile {
    /// Borrow one of the three list fields.
    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Skills => &self.skills,
            ListField::Interests => &self.interests,
            ListField::Learning => &self.learning,
        }
    }

    /// Replace one of the three list fields wholesale.
    pub fn set_list(&mut self, field: ListField, items: Vec<String>) {
        match field {
            ListField::Skills => self.skills = items,
            ListField::Interests => self.interests = items,
            ListField::Learning => self.learning = items,
        }
    }

    pub fn contacts(&self) -> Contacts {
        Contacts {
            github: self.github_url.clone(),
            facebook: self.facebook_url.clone(),
            tryhackme: self.tryhackme_url.clone(),
        }
    }

    pub fn set_contacts(&mut self, contacts: Contacts) {
        self.github_url = contacts.github;
        self.facebook_url = contacts.facebook;
        self.tryhackme_url = contacts.tryhackme;
    }
}

/// The three contact URLs, edited together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    pub github: String,
    pub facebook: String,
    pub tryhackme: String,
}

/// Names one of the editable list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Skills,
    Interests,
    Learning,
}

impl ListField {
    /// Label shown by the editor.
    pub fn label(&self) -> &'static str {
        match self {
            ListField::Skills => "Skills",
            ListField::Interests => "Interests",
            ListField::Learning => "Learning",
        }
    }
}

impl std::fmt::Display for ListField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let profile = Profile {
            skills: vec!["Rust".into()],
            github_url: "https://github.com/example".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        let obj = json.as_object().unwrap();
        let keys: Vec<_> = obj.keys().map(String::as_str).collect();
        for key in [
            "Skills",
            "Interests",
            "Learning",
            "GitHubUrl",
            "FacebookUrl",
            "TryhackmeUrl",
        ] {
            assert!(keys.contains(&key), "missing key {}", key);
        }
        assert_eq!(obj["GitHubUrl"], "https://github.com/example");
    }

    #[test]
    fn test_null_and_missing_fields_become_empty() {
        let json = r#"{ "Skills": null, "GitHubUrl": null, "Learning": ["Go"] }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.interests.is_empty());
        assert_eq!(profile.learning, vec!["Go".to_string()]);
        assert_eq!(profile.github_url, "");
        assert_eq!(profile.tryhackme_url, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{ "Skills": ["C"], "Extra": 42 }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skills, vec!["C".to_string()]);
    }

    #[test]
    fn test_list_accessors() {
        let mut profile = Profile::default();
        profile.set_list(ListField::Interests, vec!["a".into(), "b".into()]);
        assert_eq!(profile.list(ListField::Interests), ["a", "b"]);
        assert!(profile.list(ListField::Skills).is_empty());
        assert_eq!(ListField::Learning.to_string(), "Learning");
    }

    #[test]
    fn test_contacts_roundtrip_through_profile() {
        let mut profile = Profile::default();
        let contacts = Contacts {
            github: "g".into(),
            facebook: "f".into(),
            tryhackme: "t".into(),
        };
        profile.set_contacts(contacts.clone());
        assert_eq!(profile.contacts(), contacts);
        assert_eq!(profile.facebook_url, "f");
    }
}
