use std::rc::Rc;

use common::gateway::{MutationGateway, ProductForm, SlideForm, StagedImage};
use gloo_file::ObjectUrl;
use web_sys::{File, HtmlInputElement};
use yew::NodeRef;

use crate::store::HttpCatalogStore;

pub struct AdminPanel {
    /// Shared with the spawned mutation tasks.
    pub gateway: Rc<MutationGateway<HttpCatalogStore>>,
    pub product_form: ProductForm,
    pub staged_image: Option<StagedImage<File>>,
    /// Object URL of the staged file, revoked when dropped.
    pub staged_preview: Option<ObjectUrl>,
    pub slide_form: SlideForm,
    /// True while a mutation is in flight; disables the submit buttons.
    pub submitting: bool,
    /// Last validation or store error, shown above the product form.
    pub error: Option<String>,
    pub file_input_ref: NodeRef,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self {
            gateway: Rc::new(MutationGateway::new(HttpCatalogStore)),
            product_form: ProductForm::default(),
            staged_image: None,
            staged_preview: None,
            slide_form: SlideForm::default(),
            submitting: false,
            error: None,
            file_input_ref: NodeRef::default(),
        }
    }

    /// URL shown in the image preview: the staged file wins over a typed URL.
    pub fn preview_url(&self) -> Option<String> {
        if let Some(preview) = &self.staged_preview {
            return Some(preview.to_string());
        }
        let typed = self.product_form.image_url.trim();
        (!typed.is_empty()).then(|| typed.to_string())
    }

    pub fn clear_staged_image(&mut self) {
        self.staged_image = None;
        self.staged_preview = None;
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
