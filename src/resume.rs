//! The résumé being rendered, as read from JSON.

use crate::dates::{normalize, split_range, NormalizedDate, RANGE_SEPARATOR};
use crate::locale::{Locale, LocaleStrings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    /// Contact lines beyond the email, phone and address
    pub contacts: Vec<ContactItem>,
    pub skills: Vec<SkillEntry>,
    pub software: Vec<SoftwareEntry>,
    pub languages: Vec<LanguageEntry>,
    pub hobbies: Vec<HobbyEntry>,
    pub references: Vec<ReferenceEntry>,
    pub work: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub locale: Locale,
    pub photo: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub summary: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl PersonalInfo {
    /// First and last name joined by a space, skipping blank parts
    pub fn display_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Email,
    Phone,
    Address,
    Website,
    #[default]
    Other,
}

impl ContactKind {
    /// The dingbat drawn in front of this kind of contact
    pub fn icon(&self) -> char {
        match self {
            ContactKind::Email => '✉',
            ContactKind::Phone => '☎',
            ContactKind::Address | ContactKind::Website | ContactKind::Other => '●',
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactItem {
    pub kind: ContactKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareEntry {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HobbyEntry {
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceEntry {
    pub name: String,
    pub contact: String,
    pub company: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperienceEntry {
    pub position: String,
    pub company: Option<String>,
    /// Either the start date or, without an `end_date`, a whole
    /// `"start - end"` range
    pub start_date: String,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

impl ResumeDocument {
    /// Email, phone and address (when given) followed by any extra contacts
    pub fn contact_items(&self) -> Vec<ContactItem> {
        let personal = &self.personal;
        [
            (ContactKind::Email, &personal.email),
            (ContactKind::Phone, &personal.phone),
            (ContactKind::Address, &personal.address),
        ]
        .into_iter()
        .filter(|(_, text)| non_blank(text))
        .map(|(kind, text)| ContactItem {
            kind,
            text: text.trim().to_string(),
        })
        .chain(self.contacts.iter().filter(|c| non_blank(&c.text)).cloned())
        .collect()
    }

    pub fn skill_names(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|skill| skill.name.trim())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn software_entries(&self) -> Vec<&SoftwareEntry> {
        self.software
            .iter()
            .filter(|entry| non_blank(&entry.name) && non_blank(&entry.level))
            .collect()
    }

    pub fn language_entries(&self) -> Vec<&LanguageEntry> {
        self.languages
            .iter()
            .filter(|entry| non_blank(&entry.name) && non_blank(&entry.level))
            .collect()
    }

    pub fn hobby_names(&self) -> Vec<&str> {
        self.hobbies
            .iter()
            .map(|hobby| hobby.name.trim())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn reference_entries(&self) -> Vec<&ReferenceEntry> {
        self.references
            .iter()
            .filter(|entry| non_blank(&entry.name))
            .collect()
    }
}

/// One entry on the main column's timeline
#[derive(Clone, PartialEq, Debug)]
pub enum TimelineEntry {
    Work {
        dates: Option<String>,
        position: String,
        company: Option<String>,
        description: Option<String>,
    },
    Education {
        dates: Option<String>,
        degree: String,
        institution: Option<String>,
    },
    Certification {
        date: Option<String>,
        name: String,
        issuer: String,
    },
}

fn is_ongoing(end: &str) -> bool {
    let end = end.trim();
    end.is_empty() || end.eq_ignore_ascii_case("ongoing") || end.eq_ignore_ascii_case("present")
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl TimelineEntry {
    pub fn from_work(entry: &WorkExperienceEntry, strings: &LocaleStrings, locale: Locale) -> TimelineEntry {
        let (start, end) = match &entry.end_date {
            Some(end) => (entry.start_date.clone(), Some(end.clone())),
            None => split_range(&entry.start_date),
        };

        let start = normalize(&start, locale).map(NormalizedDate::into_string);
        let end = match end {
            Some(end) if !is_ongoing(&end) => normalize(&end, locale).map(NormalizedDate::into_string),
            _ => None,
        };

        let dates = start.map(|start| {
            let end = end.as_deref().unwrap_or(strings.present);
            format!("{start}{RANGE_SEPARATOR}{end}")
        });

        TimelineEntry::Work {
            dates,
            position: entry.position.trim().to_string(),
            company: trimmed(&entry.company),
            description: trimmed(&entry.description),
        }
    }

    pub fn from_education(entry: &EducationEntry, locale: Locale) -> TimelineEntry {
        let start = normalize(&entry.start_date, locale);
        let end = normalize(&entry.end_date, locale);
        let dates = match (start, end) {
            (Some(start), Some(end)) => Some(format!("{start}{RANGE_SEPARATOR}{end}")),
            _ => None,
        };

        TimelineEntry::Education {
            dates,
            degree: entry.degree.trim().to_string(),
            institution: trimmed(&entry.institution),
        }
    }

    pub fn from_certification(entry: &CertificationEntry, locale: Locale) -> TimelineEntry {
        TimelineEntry::Certification {
            date: normalize(&entry.date, locale).map(NormalizedDate::into_string),
            name: entry.name.trim().to_string(),
            issuer: entry.issuer.trim().to_string(),
        }
    }

    pub fn date_label(&self) -> Option<&str> {
        match self {
            TimelineEntry::Work { dates, .. } | TimelineEntry::Education { dates, .. } => dates.as_deref(),
            TimelineEntry::Certification { date, .. } => date.as_deref(),
        }
    }

    pub fn heading(&self) -> &str {
        match self {
            TimelineEntry::Work { position, .. } => position,
            TimelineEntry::Education { degree, .. } => degree,
            TimelineEntry::Certification { name, .. } => name,
        }
    }

    /// The company or institution, when there is one
    pub fn secondary_heading(&self) -> Option<&str> {
        match self {
            TimelineEntry::Work { company, .. } => company.as_deref(),
            TimelineEntry::Education { institution, .. } => institution.as_deref(),
            TimelineEntry::Certification { .. } => None,
        }
    }

    pub fn description(&self, strings: &LocaleStrings) -> Option<String> {
        match self {
            TimelineEntry::Work { description, .. } => description.clone(),
            TimelineEntry::Education { .. } => None,
            TimelineEntry::Certification { issuer, .. } if !issuer.is_empty() => {
                Some(strings.issued_by(issuer))
            }
            TimelineEntry::Certification { .. } => None,
        }
    }
}
