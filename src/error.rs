use crate::image::ImageError;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Error {
    /// The résumé has no display name; nothing is drawn
    #[error("a display name is required to render a résumé")]
    MissingDisplayName,

    /// A configured font name is not one of the PDF base-14 fonts
    #[error("unknown built-in font `{0}`")]
    UnknownFont(String),

    /// A configured page size name is not known
    #[error("unknown page size `{0}`")]
    UnknownPageSize(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// An image could not be loaded or encoded
    Image(#[from] ImageError),

    #[error(transparent)]
    /// A résumé or configuration file was not valid JSON
    Json(#[from] serde_json::Error),

    /// A page id in the page order has no page behind it
    #[error("page is missing from the document")]
    PageMissing,
}
