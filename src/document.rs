use crate::{
    font::Font,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    Error,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    /// The pages in the order they are written
    pub fn ordered_pages(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Add a font to the document structure. Fonts are stored "globally" within the
    /// document, such that any page can refer to it by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Add an image to the document structure. Like fonts, images are shared by
    /// all pages of the document.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first.
    ///
    /// Until `write` is called, all references are un-resolved. Calling `write` generates
    /// the PDF objects and the references between them.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), Error> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            images,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        for (i, font) in fonts.iter() {
            font.write(&mut refs, i, &mut writer);
        }

        for (i, image) in images.iter() {
            image.write(&mut refs, i.index(), &mut writer);
        }

        let mut page_refs: Vec<Ref> = Vec::with_capacity(page_order.len());
        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(Error::PageMissing)?;
            page.write(&mut refs, page_index, page_tree_id, &fonts, &images, &mut writer)?;
            if let Some(page_ref) = refs.get(RefType::Page(page_index)) {
                page_refs.push(page_ref);
            }
        }

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
