use std::rc::Rc;

use common::model::{HeroSlide, Language};
use yew::Properties;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Slides in display order, straight from the live mirror.
    pub slides: Rc<Vec<HeroSlide>>,
    pub language: Language,
}
