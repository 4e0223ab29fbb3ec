pub mod category;
pub mod hero_slide;
pub mod localized;
pub mod product;

pub use category::{Category, CategoryFilter};
pub use hero_slide::{HeroSlide, NewHeroSlide, SlideKind};
pub use localized::{Language, LocalizedText};
pub use product::{NewProduct, Product};
