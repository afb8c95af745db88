use crate::refs::{ObjectReferences, RefType};
use image::{imageops::FilterType, ColorType, DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub enum RasterImage {
    /// RGB JPEGs are embedded in the PDF as-is, from the bytes read at load
    DirectlyEmbeddableJpeg(Vec<u8>),
    Decoded(DynamicImage),
}

/// A raster image that can be placed on pages. `width` and `height` are the
/// pixel dimensions.
pub struct Image {
    pub image: RasterImage,
    pub width: f32,
    pub height: f32,
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, ImageError> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tga"));

        let data = std::fs::read(path)?;
        let format = if is_tga {
            image::ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let image = image::load_from_memory_with_format(&data, format)?;

        match (format, image.color()) {
            (image::ImageFormat::Jpeg, ColorType::Rgb8) => Ok(Image {
                width: image.width() as f32,
                height: image.height() as f32,
                image: RasterImage::DirectlyEmbeddableJpeg(data),
            }),
            _ => Ok(Self::new_raster(image)),
        }
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        Image {
            width: image.width() as f32,
            height: image.height() as f32,
            image: RasterImage::Decoded(image),
        }
    }

    /// The size this image is drawn at when its longer side may not exceed
    /// `max`. Images that already fit keep their natural size; the result is
    /// truncated to whole units.
    pub fn fitted_size(&self, max: f32) -> (f32, f32) {
        let (width, height) = (self.width, self.height);
        if width <= max && height <= max {
            return (width, height);
        }
        if width > height {
            (max, (height * (max / width)).floor())
        } else {
            ((width * (max / height)).floor(), max)
        }
    }

    /// Downscale decoded images so their longer side is at most `max` pixels,
    /// keeping the aspect ratio. JPEGs embedded as-is keep their pixels and
    /// are only scaled when placed.
    pub fn fit_within(self, max: u32) -> Image {
        let (width, height) = self.fitted_size(max as f32);
        match self.image {
            RasterImage::Decoded(image) if width < self.width || height < self.height => {
                let resized = image.resize_exact(width as u32, height as u32, FilterType::Lanczos3);
                Self::new_raster(resized)
            }
            image => Image {
                image,
                width: self.width,
                height: self.height,
            },
        }
    }

    fn encode(&self) -> EncodeOutput {
        match &self.image {
            RasterImage::DirectlyEmbeddableJpeg(data) => EncodeOutput {
                filter: Filter::DctDecode,
                bytes: data.clone(),
                mask: None,
            },
            RasterImage::Decoded(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<u8> = image.pixels().map(|(_, _, p)| p.0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes: compress_to_vec_zlib(image.to_rgb8().as_raw(), level),
                    mask,
                }
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
