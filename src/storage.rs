use crate::document::Document;
use crate::Error;
use chrono::{DateTime, Local};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

/// `cv_{YYYYmmdd_HHMMSS}`, the name a render made at `time` is saved under
pub fn timestamped_stem(time: DateTime<Local>) -> String {
    format!("cv_{}", time.format("%Y%m%d_%H%M%S"))
}

/// Write `document` into `dir` (created if needed) under a name derived from
/// the current local time and return that file name. An existing file is
/// never replaced; a numeric suffix is appended instead.
pub fn save_timestamped<P: AsRef<Path>>(document: Document, dir: P) -> Result<String, Error> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let stem = timestamped_stem(Local::now());
    let (name, file) = create_unique(dir, &stem)?;
    let path = dir.join(&name);
    if let Err(e) = write_to(document, file) {
        if let Err(remove) = std::fs::remove_file(&path) {
            log::warn!("could not remove partial {}: {remove}", path.display());
        }
        return Err(e);
    }

    log::info!("saved {}", path.display());
    Ok(name)
}

fn write_to(document: Document, file: File) -> Result<(), Error> {
    let mut writer = BufWriter::new(file);
    document.write(&mut writer)?;
    writer.flush()?;
    Ok(())
}

fn create_unique(dir: &Path, stem: &str) -> Result<(String, File), Error> {
    let mut attempt: u32 = 0;
    loop {
        let name = match attempt {
            0 => format!("{stem}.pdf"),
            n => format!("{stem}_{n}.pdf"),
        };
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dir.join(&name))
        {
            Ok(file) => return Ok((name, file)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::{BuiltinFont, Font, FontTable};
    use crate::page::Page;
    use crate::pagesize;
    use chrono::TimeZone;

    #[test]
    fn names_carry_the_local_time() {
        let time = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(timestamped_stem(time), "cv_20240309_140507");
    }

    #[test]
    fn existing_files_are_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv_x.pdf"), b"taken").unwrap();

        let (name, _) = create_unique(dir.path(), "cv_x").unwrap();
        assert_eq!(name, "cv_x_1.pdf");
        let (name, _) = create_unique(dir.path(), "cv_x").unwrap();
        assert_eq!(name, "cv_x_2.pdf");
        assert_eq!(std::fs::read(dir.path().join("cv_x.pdf")).unwrap(), b"taken");
    }

    #[test]
    fn failed_writes_leave_no_file_behind() {
        // a page id from another document cannot be resolved while writing
        let mut other = Document::default();
        let font = other.add_font(Font::Builtin(BuiltinFont::TimesRoman));
        let fonts = FontTable {
            regular: font,
            bold: font,
            italic: font,
            icon: font,
        };
        let foreign = other.add_page(Page::new(pagesize::A4, fonts));
        let mut document = Document::default();
        document.page_order.push(foreign);

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(save_timestamped(document, dir.path()), Err(Error::PageMissing)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
