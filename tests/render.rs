use cv_render::{
    render, save_timestamped, Locale, PageContents, Pt, RenderConfig, RenderSettings, ResumeDocument,
};

fn resume(locale: &str) -> ResumeDocument {
    serde_json::from_str(&format!(
        r#"{{
            "personal": {{
                "first_name": "Grace",
                "last_name": "Hopper",
                "summary": "Wrote the first compiler.\nLed the COBOL effort.",
                "email": "grace.hopper@navy.example.mil"
            }},
            "skills": [ {{ "name": "Compilers" }}, {{ "name": "" }} ],
            "software": [ {{ "name": "FLOW-MATIC", "level": "Expert" }} ],
            "work": [
                {{ "position": "Rear Admiral", "company": "US Navy", "start_date": "1943-01-01", "end_date": "1986-08-14",
                   "description": "Computer programming" }}
            ],
            "education": [
                {{ "degree": "PhD Mathematics", "institution": "Yale", "start_date": "1930", "end_date": "1934" }}
            ],
            "certifications": [ {{ "name": "Computer Sciences Man of the Year", "issuer": "DPMA", "date": "1969-01-01" }} ],
            "locale": "{locale}"
        }}"#
    ))
    .unwrap()
}

fn page_texts(document: &cv_render::Document) -> Vec<String> {
    document
        .ordered_pages()
        .flat_map(|page| page.contents.iter())
        .filter_map(|contents| match contents {
            PageContents::Text(spans) => Some(spans.iter().map(|span| span.text.clone())),
            _ => None,
        })
        .flatten()
        .collect()
}

#[test]
fn a_full_resume_renders_to_one_pdf_page() {
    let document = render(&resume("en"), &RenderSettings::default()).unwrap();
    assert_eq!(document.ordered_pages().count(), 1);

    let info = document.info.as_ref().unwrap();
    assert_eq!(info.title.as_deref(), Some("Grace Hopper"));
    assert_eq!(info.author.as_deref(), Some("Grace Hopper"));
    assert_eq!(info.keywords.as_deref(), Some("Compilers"));

    let texts = page_texts(&document);
    for expected in ["Grace Hopper", "Skills", "Compilers", "Work Experience", "Education", "Certifications"] {
        assert!(texts.iter().any(|text| text == expected), "{expected} missing from {texts:?}");
    }
    assert!(texts.iter().any(|text| text == "Jan 1943 -"));
    assert!(texts.iter().any(|text| text == "Aug 1986"));

    let mut bytes: Vec<u8> = Vec::new();
    document.write(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Count 1"));
    assert!(pdf.contains("/FlateDecode"));
}

#[test]
fn section_titles_follow_the_locale() {
    let french = page_texts(&render(&resume("fr"), &RenderSettings::default()).unwrap());
    assert!(french.iter().any(|text| text == "Compétences"));
    assert!(french.iter().any(|text| text == "Jan 1943 -"));

    let turkish = page_texts(&render(&resume("tr-TR"), &RenderSettings::default()).unwrap());
    assert!(turkish.iter().any(|text| text == "Beceriler"));
}

#[test]
fn turkish_titles_are_encoded_without_replacements() {
    let document = render(&resume("tr"), &RenderSettings::default()).unwrap();
    let span = document
        .ordered_pages()
        .flat_map(|page| page.contents.iter())
        .filter_map(|contents| match contents {
            PageContents::Text(spans) => spans.first(),
            _ => None,
        })
        .find(|span| span.text == "İletişim Bilgileri")
        .expect("contact title is drawn");

    let encoded = document.fonts[span.font.id].encode(&span.text);
    assert_eq!(&encoded[..8], &[0x7f, b'l', b'e', b't', b'i', 0x8f, b'i', b'm']);
    assert!(!encoded.contains(&b'?'));
}

#[test]
fn settings_come_from_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "page_size": "letter", "fonts": { "regular": "Helvetica" } }"#).unwrap();

    let settings = RenderConfig::from_file(&path).unwrap().into_settings().unwrap();
    let document = render(&resume("en"), &settings).unwrap();
    let page = document.ordered_pages().next().unwrap();
    assert_eq!(page.media_box.width(), Pt(612.0));
    assert_eq!(page.media_box.height(), Pt(792.0));

    let mut bytes: Vec<u8> = Vec::new();
    document.write(&mut bytes).unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/Helvetica"));
}

#[test]
fn photos_are_scaled_into_the_sidebar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.png");
    image::RgbaImage::new(300, 200).save(&path).unwrap();

    let mut resume = resume("en");
    resume.photo = Some(path);
    let document = render(&resume, &RenderSettings::default()).unwrap();
    assert_eq!(document.images.len(), 1);

    let placed = document
        .ordered_pages()
        .flat_map(|page| page.contents.iter())
        .find_map(|contents| match contents {
            PageContents::Image(image) => Some(image.position),
            _ => None,
        })
        .unwrap();
    assert_eq!(placed.width(), Pt(142.0));
    assert_eq!(placed.height(), Pt(94.0));

    let mut bytes: Vec<u8> = Vec::new();
    document.write(&mut bytes).unwrap();
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Image"));
    assert!(pdf.contains("/SMask"));
}

#[test]
fn jpeg_photos_are_read_once_at_render_time() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    image::RgbImage::new(300, 200).save(&path).unwrap();

    let mut resume = resume("en");
    resume.photo = Some(path.clone());
    let document = render(&resume, &RenderSettings::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    let mut bytes: Vec<u8> = Vec::new();
    document.write(&mut bytes).unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("/DCTDecode"));
}

#[test]
fn missing_photos_are_left_out() {
    let mut resume = resume("en");
    resume.photo = Some("/nonexistent/photo.jpg".into());
    let document = render(&resume, &RenderSettings::default()).unwrap();
    assert_eq!(document.images.len(), 0);
}

#[test]
fn renders_are_saved_under_timestamped_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    let first = save_timestamped(render(&resume("en"), &RenderSettings::default()).unwrap(), &out).unwrap();
    let second = save_timestamped(render(&resume("en"), &RenderSettings::default()).unwrap(), &out).unwrap();
    assert_ne!(first, second);

    for name in [&first, &second] {
        assert!(name.starts_with("cv_") && name.ends_with(".pdf"), "{name}");
        let bytes = std::fs::read(out.join(name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}

#[test]
fn unknown_locales_fall_back_to_french() {
    let document = render(&resume("de"), &RenderSettings::default()).unwrap();
    assert!(page_texts(&document).iter().any(|text| text == "Compétences"));
    assert_eq!(Locale::from_code("de"), Locale::Fr);
}
