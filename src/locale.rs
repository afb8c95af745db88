//! The languages a résumé can be rendered in, with their section titles and
//! month abbreviations.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    En,
    #[default]
    Fr,
    Tr,
}

/// Every user-visible string the renderer draws itself
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleStrings {
    pub contact: &'static str,
    pub skills: &'static str,
    pub software: &'static str,
    pub languages: &'static str,
    pub hobbies: &'static str,
    pub references: &'static str,
    pub summary: &'static str,
    pub work_experience: &'static str,
    pub education: &'static str,
    pub certifications: &'static str,
    /// Stands in for the end date of an ongoing position
    pub present: &'static str,
    /// Certification description, `{issuer}` is replaced with the issuer
    pub issued_by: &'static str,
}

impl LocaleStrings {
    pub fn issued_by(&self, issuer: &str) -> String {
        self.issued_by.replace("{issuer}", issuer)
    }
}

static EN: LocaleStrings = LocaleStrings {
    contact: "Contact Information",
    skills: "Skills",
    software: "Software",
    languages: "Languages",
    hobbies: "Hobbies",
    references: "References",
    summary: "Professional Objective",
    work_experience: "Work Experience",
    education: "Education",
    certifications: "Certifications",
    present: "present",
    issued_by: "Issued by: {issuer}",
};

static FR: LocaleStrings = LocaleStrings {
    contact: "Coordonnées",
    skills: "Compétences",
    software: "Logiciels",
    languages: "Langues",
    hobbies: "Loisirs",
    references: "Références",
    summary: "Objectif professionnel",
    work_experience: "Expérience professionnelle",
    education: "Formation",
    certifications: "Certifications",
    present: "présent",
    issued_by: "Émis par : {issuer}",
};

static TR: LocaleStrings = LocaleStrings {
    contact: "İletişim Bilgileri",
    skills: "Beceriler",
    software: "Yazılım",
    languages: "Diller",
    hobbies: "Hobiler",
    references: "Referanslar",
    summary: "Profesyonel Hedef",
    work_experience: "İş Deneyimi",
    education: "Eğitim",
    certifications: "Sertifikalar",
    present: "Devam",
    issued_by: "Veren: {issuer}",
};

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const FR_MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Aoû", "Sep", "Oct", "Nov", "Déc",
];
const TR_MONTHS: [&str; 12] = [
    "Oca", "Şub", "Mar", "Nis", "May", "Haz", "Tem", "Ağu", "Eyl", "Eki", "Kas", "Ara",
];

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Fr, Locale::Tr];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Tr => "tr",
        }
    }

    /// Look up a locale by its language code. Region suffixes (`en-US`,
    /// `fr_CA`) and case are ignored.
    pub fn parse(code: &str) -> Option<Locale> {
        let language = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == language)
    }

    /// Like [Locale::parse], falling back to the default locale for codes
    /// that are not supported
    pub fn from_code(code: &str) -> Locale {
        Locale::parse(code).unwrap_or_else(|| {
            let fallback = Locale::default();
            log::warn!(
                "locale `{code}` is not supported, falling back to `{}`",
                fallback.code()
            );
            fallback
        })
    }

    pub fn strings(&self) -> &'static LocaleStrings {
        match self {
            Locale::En => &EN,
            Locale::Fr => &FR,
            Locale::Tr => &TR,
        }
    }

    /// The abbreviated name of a month, numbered from 1
    pub fn month_abbreviation(&self, month: u32) -> &'static str {
        let months = match self {
            Locale::En => &EN_MONTHS,
            Locale::Fr => &FR_MONTHS,
            Locale::Tr => &TR_MONTHS,
        };
        months[(month.clamp(1, 12) - 1) as usize]
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale::from_code(&code)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_ignore_case_and_region() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("FR_ca"), Some(Locale::Fr));
        assert_eq!(Locale::parse(" tr "), Some(Locale::Tr));
        assert_eq!(Locale::parse("de"), None);
    }

    #[test]
    fn unsupported_codes_fall_back_to_french() {
        assert_eq!(Locale::from_code("de-DE"), Locale::Fr);
        assert_eq!(Locale::from_code(""), Locale::Fr);
    }

    #[test]
    fn months_are_localized() {
        assert_eq!(Locale::En.month_abbreviation(2), "Feb");
        assert_eq!(Locale::Fr.month_abbreviation(2), "Fév");
        assert_eq!(Locale::Tr.month_abbreviation(8), "Ağu");
        assert_eq!(Locale::Fr.month_abbreviation(12), "Déc");
    }

    #[test]
    fn issuer_is_substituted() {
        assert_eq!(Locale::En.strings().issued_by("AWS"), "Issued by: AWS");
        assert_eq!(Locale::Fr.strings().issued_by("AWS"), "Émis par : AWS");
    }

    #[test]
    fn locales_read_from_json_codes() {
        let locale: Locale = serde_json::from_str("\"en-GB\"").unwrap();
        assert_eq!(locale, Locale::En);
        assert_eq!(serde_json::to_string(&Locale::Tr).unwrap(), "\"tr\"");
    }
}
