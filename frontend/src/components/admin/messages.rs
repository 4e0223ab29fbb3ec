use common::gateway::{DeleteOutcome, MutationError};
use web_sys::File;

/// Text inputs of the product form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Category,
    NameTh,
    NameEn,
    NameCn,
    DescriptionTh,
    DescriptionEn,
    DescriptionCn,
    Weight,
    Price,
    ImageUrl,
}

pub enum Msg {
    EditProduct(ProductField, String),
    SetNew(bool),
    /// A file was picked (or the picker was cleared).
    StageImage(Option<File>),
    SubmitProduct,
    ProductSaved(Result<String, MutationError>),
    EditSlideUrl(String),
    SubmitSlide,
    SlideSaved(Result<String, MutationError>),
    DeleteProduct(String),
    DeleteSlide(String),
    Deleted(Result<DeleteOutcome, MutationError>),
}
