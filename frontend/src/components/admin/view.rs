use common::model::{Category, HeroSlide, Language, Product};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::format_price;

use super::messages::{Msg, ProductField};
use super::state::AdminPanel;

pub fn view(component: &AdminPanel, ctx: &Context<AdminPanel>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <div class="admin-root">
            <header class="admin-header">
                <h1>{"ระบบจัดการหลังบ้าน"}</h1>
                <button class="admin-back" onclick={props.on_back.reform(|_| ())}>
                    {"กลับสู่หน้าหลัก"}
                </button>
            </header>
            {
                match &component.error {
                    Some(error) => html! { <div class="admin-error">{error.clone()}</div> },
                    None => Html::default(),
                }
            }
            <div class="admin-columns">
                { build_product_form(component, link) }
                { build_slide_form(component, link) }
            </div>
            { build_product_list(props.products.items(), component.submitting, link) }
            { build_slide_list(props.slides.items(), component.submitting, link) }
        </div>
    }
}

fn build_product_form(component: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    let form = &component.product_form;

    html! {
        <form class="admin-card" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitProduct
        })}>
            <h2>{"เพิ่มสินค้าใหม่"}</h2>

            <label>{"หมวดหมู่"}</label>
            <select onchange={link.callback(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::EditProduct(ProductField::Category, select.value())
            })}>
                <option value="" selected={form.category.is_none()}>{"-- เลือกหมวดหมู่ --"}</option>
                {
                    for Category::ALL.into_iter().map(|category| html! {
                        <option value={category.as_str()} selected={form.category == Some(category)}>
                            {category_label(category)}
                        </option>
                    })
                }
            </select>

            { text_input(link, "ชื่อ (ไทย) *", ProductField::NameTh, &form.name_th, "") }
            { text_input(link, "ชื่อ (English)", ProductField::NameEn, &form.name_en, "") }
            { text_input(link, "ชื่อ (中文)", ProductField::NameCn, &form.name_cn, "") }
            { text_area(link, "รายละเอียด (ไทย)", ProductField::DescriptionTh, &form.description_th) }
            { text_area(link, "รายละเอียด (English)", ProductField::DescriptionEn, &form.description_en) }
            { text_area(link, "รายละเอียด (中文)", ProductField::DescriptionCn, &form.description_cn) }
            { text_input(link, "ขนาด (Weight)", ProductField::Weight, &form.weight, "เช่น 500g") }
            { text_input(link, "ราคา (Price)", ProductField::Price, &form.price, "บาท") }
            { text_input(link, "URL รูปภาพ", ProductField::ImageUrl, &form.image_url, "https://...") }

            <label>{"หรืออัปโหลดรูปภาพ"}</label>
            <input
                type="file"
                accept="image/*"
                ref={component.file_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::StageImage(input.files().and_then(|files| files.get(0)))
                })}
            />
            {
                match &component.staged_image {
                    Some(staged) => html! { <p class="staged-file">{staged.file_name.clone()}</p> },
                    None => Html::default(),
                }
            }
            {
                match component.preview_url() {
                    Some(url) => html! { <img class="image-preview" src={url} alt="preview" /> },
                    None => Html::default(),
                }
            }

            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={form.is_new}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetNew(input.checked())
                    })}
                />
                {"สินค้าใหม่ (NEW)"}
            </label>

            <button type="submit" class="admin-submit" disabled={component.submitting}>
                { if component.submitting { "กำลังบันทึก..." } else { "บันทึกสินค้า" } }
            </button>
        </form>
    }
}

fn build_slide_form(component: &AdminPanel, link: &Scope<AdminPanel>) -> Html {
    html! {
        <form class="admin-card" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitSlide
        })}>
            <h2>{"เพิ่มวิดีโอหน้าแรก"}</h2>
            <label>{"ลิงก์วิดีโอ (.mp4)"}</label>
            <input
                type="text"
                placeholder="https://..."
                value={component.slide_form.url.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditSlideUrl(input.value())
                })}
            />
            <button type="submit" class="admin-submit" disabled={component.submitting}>
                {"เพิ่มวิดีโอ"}
            </button>
        </form>
    }
}

fn build_product_list(products: &[Product], busy: bool, link: &Scope<AdminPanel>) -> Html {
    html! {
        <section class="admin-card">
            <h2>{format!("สินค้าทั้งหมด ({})", products.len())}</h2>
            <ul class="admin-list">
                {
                    for products.iter().map(|product| {
                        let id = product.id.clone();
                        html! {
                            <li key={product.id.clone()}>
                                <span>{product.name.get(Language::Th).to_string()}</span>
                                <span class="admin-meta">{category_label(product.category)}</span>
                                <span class="admin-meta">
                                    { product.price.map(format_price).unwrap_or_default() }
                                </span>
                                <button
                                    class="admin-delete"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::DeleteProduct(id.clone()))}
                                >
                                    {"ลบ"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </section>
    }
}

fn build_slide_list(slides: &[HeroSlide], busy: bool, link: &Scope<AdminPanel>) -> Html {
    html! {
        <section class="admin-card">
            <h2>{format!("วิดีโอหน้าแรก ({})", slides.len())}</h2>
            <ul class="admin-list">
                {
                    for slides.iter().enumerate().map(|(position, slide)| {
                        let id = slide.id.clone();
                        html! {
                            <li key={slide.id.clone()}>
                                <span class="admin-meta">{format!("#{}", position + 1)}</span>
                                <span class="admin-url">{slide.url.clone()}</span>
                                <button
                                    class="admin-delete"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::DeleteSlide(id.clone()))}
                                >
                                    {"ลบ"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </section>
    }
}

fn text_input(
    link: &Scope<AdminPanel>,
    label: &'static str,
    field: ProductField,
    value: &str,
    placeholder: &'static str,
) -> Html {
    html! {
        <>
            <label>{label}</label>
            <input
                type="text"
                placeholder={placeholder}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::EditProduct(field, input.value())
                })}
            />
        </>
    }
}

fn text_area(link: &Scope<AdminPanel>, label: &'static str, field: ProductField, value: &str) -> Html {
    html! {
        <>
            <label>{label}</label>
            <textarea
                rows="2"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::EditProduct(field, input.value())
                })}
            />
        </>
    }
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Seasoning => "ผงปรุงรส (Seasoning)",
        Category::Beverage => "เครื่องดื่ม (Beverage)",
        Category::Additives => "สารเสริม (Additives)",
    }
}
