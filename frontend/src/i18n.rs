//! Storefront copy in Thai, English and Chinese.
//!
//! The admin panel is Thai-only and keeps its labels inline.

use common::model::{Category, CategoryFilter, Language};

pub struct Translation {
    pub nav_home: &'static str,
    pub nav_products: &'static str,
    pub nav_admin: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_cta: &'static str,
    pub products_title: &'static str,
    pub filter_all: &'static str,
    pub filter_seasoning: &'static str,
    pub filter_beverage: &'static str,
    pub filter_additives: &'static str,
    pub loading: &'static str,
    pub empty_category: &'static str,
    pub reconnecting: &'static str,
    pub offline: &'static str,
    pub view_detail: &'static str,
    pub new_badge: &'static str,
}

impl Translation {
    pub fn filter_label(&self, filter: CategoryFilter) -> &'static str {
        match filter {
            CategoryFilter::All => self.filter_all,
            CategoryFilter::Only(Category::Seasoning) => self.filter_seasoning,
            CategoryFilter::Only(Category::Beverage) => self.filter_beverage,
            CategoryFilter::Only(Category::Additives) => self.filter_additives,
        }
    }
}

pub fn translation(language: Language) -> &'static Translation {
    match language {
        Language::Th => &TH,
        Language::En => &EN,
        Language::Cn => &CN,
    }
}

pub fn language_label(language: Language) -> &'static str {
    match language {
        Language::Th => "ไทย",
        Language::En => "EN",
        Language::Cn => "中文",
    }
}

static TH: Translation = Translation {
    nav_home: "หน้าแรก",
    nav_products: "สินค้า",
    nav_admin: "ผู้ดูแล",
    hero_title: "รสชาติแท้ จากครัวไทย",
    hero_subtitle: "ผงปรุงรส เครื่องดื่ม และสารเสริมคุณภาพสำหรับทุกครัว",
    hero_cta: "ดูสินค้าของเรา",
    products_title: "สินค้าของเรา",
    filter_all: "ทั้งหมด",
    filter_seasoning: "ผงปรุงรส",
    filter_beverage: "เครื่องดื่ม",
    filter_additives: "สารเสริม",
    loading: "กำลังโหลดสินค้า...",
    empty_category: "ยังไม่มีสินค้าในหมวดหมู่นี้",
    reconnecting: "กำลังเชื่อมต่อใหม่ รายการอาจไม่เป็นปัจจุบัน",
    offline: "ไม่สามารถเชื่อมต่อได้ แสดงข้อมูลล่าสุดที่มี",
    view_detail: "ดูรายละเอียด",
    new_badge: "ใหม่",
};

static EN: Translation = Translation {
    nav_home: "Home",
    nav_products: "Products",
    nav_admin: "Admin",
    hero_title: "Authentic Taste from the Thai Kitchen",
    hero_subtitle: "Quality seasonings, beverages and additives for every kitchen",
    hero_cta: "See our products",
    products_title: "Our Products",
    filter_all: "All",
    filter_seasoning: "Seasoning",
    filter_beverage: "Beverage",
    filter_additives: "Additives",
    loading: "Loading products...",
    empty_category: "No products in this category yet",
    reconnecting: "Reconnecting, the list may be out of date",
    offline: "Connection lost, showing the last known products",
    view_detail: "View Detail",
    new_badge: "NEW",
};

static CN: Translation = Translation {
    nav_home: "首页",
    nav_products: "产品",
    nav_admin: "管理",
    hero_title: "来自泰国厨房的正宗风味",
    hero_subtitle: "为每个厨房提供优质调味料、饮料和添加剂",
    hero_cta: "查看我们的产品",
    products_title: "我们的产品",
    filter_all: "全部",
    filter_seasoning: "调味粉",
    filter_beverage: "饮料",
    filter_additives: "添加剂",
    loading: "正在加载产品...",
    empty_category: "此类别暂无产品",
    reconnecting: "正在重新连接，列表可能不是最新的",
    offline: "连接已断开，显示最近的产品",
    view_detail: "查看详情",
    new_badge: "新品",
};
