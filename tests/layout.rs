use cv_render::{
    compose, DrawList, FontClass, Locale, PersonalInfo, Pt, RenderContext, RenderSettings,
    ResumeDocument, WorkExperienceEntry,
};

fn engineer(description: String) -> ResumeDocument {
    ResumeDocument {
        personal: PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        },
        work: vec![WorkExperienceEntry {
            position: "Engineer".to_string(),
            start_date: "Jan 2020".to_string(),
            description: Some(description),
            ..Default::default()
        }],
        locale: Locale::En,
        ..Default::default()
    }
}

#[test]
fn a_work_entry_flows_below_its_section_title() {
    let mut settings = RenderSettings::default();
    // widen the main column so 14 words of "abcd" fit its 366.5pt timeline
    settings.geometry.width = Pt(650.0);
    let ctx = RenderContext::new(&settings, Locale::En);
    let resume = engineer(vec!["abcd"; 40].join(" "));

    let mut canvas = DrawList::new();
    let cursor = compose(&resume, &ctx, &mut canvas, None);

    let texts: Vec<((Pt, Pt), &str, FontClass)> = canvas
        .texts()
        .map(|(origin, text, style)| (*origin, text, style.font))
        .collect();
    let title = texts
        .iter()
        .position(|(_, text, _)| *text == "Work Experience")
        .expect("section title is drawn");
    assert_eq!(texts[title].0, (Pt(248.5), Pt(50.0)));

    let entry = &texts[title + 1..];
    assert_eq!(entry[0], ((Pt(188.5), Pt(70.0)), "Jan 2020 -", FontClass::Regular));
    assert_eq!(entry[1], ((Pt(188.5), Pt(85.0)), "present", FontClass::Regular));
    // no company, so the heading stays regular
    assert_eq!(entry[2], ((Pt(253.5), Pt(70.0)), "Engineer", FontClass::Regular));

    let description: Vec<(Pt, &str)> = entry[3..].iter().map(|(origin, text, _)| (origin.1, *text)).collect();
    assert_eq!(description.len(), 3);
    assert_eq!(description[0].0, Pt(92.5));
    assert_eq!(description[1].0, Pt(107.5));
    assert_eq!(description[2].0, Pt(122.5));
    assert_eq!(description[0].1.split(' ').count(), 14);
    assert_eq!(description[1].1.split(' ').count(), 14);
    assert_eq!(description[2].1.split(' ').count(), 12);

    // the guide is drawn again down to the last description line
    let guide = canvas
        .lines()
        .filter(|(from, _)| from.0 == Pt(243.5))
        .last()
        .expect("guide line");
    assert_eq!(*guide.0, (Pt(243.5), Pt(70.0)));
    assert_eq!(*guide.1, (Pt(243.5), Pt(137.5)));

    // entry spacing plus section spacing
    assert_eq!(cursor.main, Pt(137.5 + 20.0 + 20.0));
}

#[test]
fn short_entries_do_not_extend_the_guide() {
    let settings = RenderSettings::default();
    let ctx = RenderContext::new(&settings, Locale::En);
    let resume = engineer("Kept the lights on".to_string());

    let mut canvas = DrawList::new();
    compose(&resume, &ctx, &mut canvas, None);
    let guides = canvas.lines().filter(|(from, _)| from.0 == Pt(243.5)).count();
    assert_eq!(guides, 1);
}

#[test]
fn sidebar_sections_follow_each_other() {
    let settings = RenderSettings::default();
    let ctx = RenderContext::new(&settings, Locale::Fr);
    let resume: ResumeDocument = serde_json::from_str(
        r#"{
            "personal": { "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com", "phone": "+44 20 7946 0000" },
            "skills": [ { "name": "Mathématiques" } ],
            "languages": [ { "name": "Anglais", "level": "Natif" } ],
            "hobbies": [ { "name": "Poésie" } ],
            "references": [ { "name": "Charles Babbage", "company": "Analytical Engine", "contact": "charles@example.com" } ]
        }"#,
    )
    .unwrap();

    let mut canvas = DrawList::new();
    let cursor = compose(&resume, &ctx, &mut canvas, None);
    let texts: Vec<((Pt, Pt), &str)> = canvas.texts().map(|(origin, text, _)| (*origin, text)).collect();
    let at = |needle: &str| {
        texts
            .iter()
            .find(|(_, text)| *text == needle)
            .map(|(origin, _)| origin.1)
            .unwrap_or_else(|| panic!("{needle} was not drawn"))
    };

    // name at 50 takes one 21pt line; contact title 10 below that
    assert_eq!(at("Ada Lovelace"), Pt(50.0));
    assert_eq!(at("Coordonnées"), Pt(81.0));
    assert_eq!(at("✉"), Pt(101.0));
    assert_eq!(at("ada@example.com"), Pt(101.0));
    assert_eq!(at("☎"), Pt(121.0));
    // two contacts at 15 + 5 each
    assert_eq!(at("Compétences"), Pt(151.0));
    assert_eq!(at("Mathématiques"), Pt(171.0));
    assert_eq!(at("Langues"), Pt(196.0));
    assert_eq!(at("Anglais: Natif"), Pt(216.0));
    assert_eq!(at("Loisirs"), Pt(241.0));
    assert_eq!(at("• Poésie"), Pt(261.0));
    assert_eq!(at("Références"), Pt(286.0));
    assert_eq!(at("Charles Babbage"), Pt(306.0));
    assert_eq!(at("Analytical Engine | charles@example.com"), Pt(321.0));
    assert_eq!(cursor.sidebar, Pt(336.0));
}
