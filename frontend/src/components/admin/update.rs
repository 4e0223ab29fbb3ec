//! Update function for the admin panel.
//!
//! Form edits only touch local state. Submissions are validated here first so
//! the inline error shows up without a round trip, then handed to the gateway
//! on a spawned task whose result comes back as a `*Saved` or `Deleted`
//! message. A failed save keeps the form contents.

use common::gateway::{
    DeleteOutcome, HeroSlides, MutationError, Products, StagedImage, ValidationError,
};
use gloo_console::log;
use gloo_file::ObjectUrl;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{confirm, now_ms, show_toast};

use super::messages::{Msg, ProductField};
use super::state::AdminPanel;

pub fn update(component: &mut AdminPanel, ctx: &Context<AdminPanel>, msg: Msg) -> bool {
    match msg {
        Msg::EditProduct(field, value) => {
            edit_product(component, field, value);
            true
        }
        Msg::SetNew(is_new) => {
            component.product_form.is_new = is_new;
            true
        }
        Msg::StageImage(file) => {
            match file {
                Some(file) => {
                    let blob = web_sys::Blob::from(file.clone());
                    component.staged_preview =
                        Some(ObjectUrl::from(gloo_file::Blob::from(blob)));
                    component.staged_image = Some(StagedImage {
                        file_name: file.name(),
                        blob: file,
                    });
                }
                None => component.clear_staged_image(),
            }
            true
        }
        Msg::SubmitProduct => {
            if component.submitting {
                return false;
            }
            if let Err(e) = component.product_form.to_draft() {
                report(component, &MutationError::from(e));
                return true;
            }
            component.submitting = true;
            component.error = None;

            let gateway = component.gateway.clone();
            let form = component.product_form.clone();
            let image = component.staged_image.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway
                    .create_product(&form, image.as_ref(), now_ms())
                    .await;
                link.send_message(Msg::ProductSaved(result));
            });
            true
        }
        Msg::ProductSaved(result) => {
            component.submitting = false;
            match result {
                Ok(id) => {
                    log!(format!("product {} created", id));
                    component.product_form.reset();
                    component.clear_staged_image();
                    show_toast("เพิ่มสินค้าเรียบร้อย");
                }
                Err(e) => report(component, &e),
            }
            true
        }
        Msg::EditSlideUrl(url) => {
            component.slide_form.url = url;
            true
        }
        Msg::SubmitSlide => {
            if component.submitting {
                return false;
            }
            if let Err(e) = component.slide_form.to_draft() {
                report(component, &MutationError::from(e));
                return true;
            }
            component.submitting = true;
            component.error = None;

            let gateway = component.gateway.clone();
            let form = component.slide_form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway.create_slide(&form).await;
                link.send_message(Msg::SlideSaved(result));
            });
            true
        }
        Msg::SlideSaved(result) => {
            component.submitting = false;
            match result {
                Ok(_) => {
                    component.slide_form.reset();
                    show_toast("เพิ่มวิดีโอเรียบร้อย");
                }
                Err(e) => report(component, &e),
            }
            true
        }
        Msg::DeleteProduct(id) => {
            if component.submitting {
                return false;
            }
            component.submitting = true;
            let gateway = component.gateway.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway
                    .delete::<Products>(&id, || confirm("ยืนยันการลบสินค้านี้?"))
                    .await;
                link.send_message(Msg::Deleted(result));
            });
            true
        }
        Msg::DeleteSlide(id) => {
            if component.submitting {
                return false;
            }
            component.submitting = true;
            let gateway = component.gateway.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = gateway
                    .delete::<HeroSlides>(&id, || confirm("ยืนยันการลบวิดีโอนี้?"))
                    .await;
                link.send_message(Msg::Deleted(result));
            });
            true
        }
        Msg::Deleted(result) => {
            component.submitting = false;
            match result {
                Ok(DeleteOutcome::Deleted) => show_toast("ลบเรียบร้อย"),
                Ok(DeleteOutcome::Cancelled) => {}
                Err(e) => report(component, &e),
            }
            true
        }
    }
}

fn edit_product(component: &mut AdminPanel, field: ProductField, value: String) {
    let form = &mut component.product_form;
    match field {
        ProductField::Category => form.category = value.parse().ok(),
        ProductField::NameTh => form.name_th = value,
        ProductField::NameEn => form.name_en = value,
        ProductField::NameCn => form.name_cn = value,
        ProductField::DescriptionTh => form.description_th = value,
        ProductField::DescriptionEn => form.description_en = value,
        ProductField::DescriptionCn => form.description_cn = value,
        ProductField::Weight => form.weight = value,
        ProductField::Price => form.price = value,
        ProductField::ImageUrl => form.image_url = value,
    }
}

fn report(component: &mut AdminPanel, error: &MutationError) {
    let message = describe(error);
    show_toast(&message);
    component.error = Some(message);
}

fn describe(error: &MutationError) -> String {
    match error {
        MutationError::Validation(ValidationError::MissingThaiName) => {
            "กรุณากรอกชื่อสินค้า (ไทย)".to_string()
        }
        MutationError::Validation(ValidationError::MissingCategory) => {
            "กรุณาเลือกหมวดหมู่".to_string()
        }
        MutationError::Validation(ValidationError::InvalidPrice(raw)) => {
            format!("ราคาไม่ถูกต้อง: {}", raw)
        }
        MutationError::Validation(ValidationError::MissingSlideUrl) => {
            "กรุณากรอกลิงก์วิดีโอ".to_string()
        }
        MutationError::Busy => "กำลังบันทึกรายการก่อนหน้า กรุณารอสักครู่".to_string(),
        other => format!("เกิดข้อผิดพลาด: {}", other),
    }
}
