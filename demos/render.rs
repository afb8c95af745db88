use cv_render::{
    render, CertificationEntry, EducationEntry, LanguageEntry, Locale, PersonalInfo, RenderSettings,
    ResumeDocument, SkillEntry, WorkExperienceEntry,
};

fn main() {
    // describe the résumé; every section is optional and empty ones are left out
    let resume = ResumeDocument {
        personal: PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            summary: "Mathematician working on the Analytical Engine.\nWrote the first published algorithm.".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            ..Default::default()
        },
        skills: ["Mathematics", "Algorithms", "Technical writing"]
            .into_iter()
            .map(|name| SkillEntry { name: name.to_string() })
            .collect(),
        languages: vec![LanguageEntry {
            name: "English".to_string(),
            level: "Native".to_string(),
        }],
        work: vec![WorkExperienceEntry {
            position: "Analyst".to_string(),
            company: Some("Analytical Engine".to_string()),
            // a single field may hold the whole range
            start_date: "1842-01-01 - present".to_string(),
            description: Some(lipsum::lipsum(40)),
            ..Default::default()
        }],
        education: vec![EducationEntry {
            degree: "Private tuition in mathematics".to_string(),
            institution: Some("Augustus De Morgan".to_string()),
            start_date: "Jan 1840".to_string(),
            end_date: "Dec 1841".to_string(),
        }],
        certifications: vec![CertificationEntry {
            name: "Notes on the Analytical Engine".to_string(),
            issuer: "Scientific Memoirs".to_string(),
            date: "1843-08-01".to_string(),
        }],
        locale: Locale::En,
        ..Default::default()
    };

    // lay it out on an A4 page with the built-in fonts
    let document = render(&resume, &RenderSettings::default()).expect("can render résumé");

    // anywhere we can write would do
    let mut out = std::fs::File::create("resume.pdf").unwrap();
    document.write(&mut out).unwrap();
}
