//! Hero Carousel
//!
//! Binds the page's `.carousel-slide` and `.dot` elements to a carousel
//! controller and starts auto-play.

use leptos_carousel::{bind_active_class, bind_dots, Carousel};

use crate::config::SiteConfig;
use crate::dom;

const SLIDES: &str = ".carousel-slide";
const DOTS: &str = ".dot";

pub fn start(config: &SiteConfig) -> Carousel {
    let slides = dom::query_all(SLIDES);
    let dots = dom::query_all(DOTS);
    let carousel = Carousel::new(slides.len(), config.autoplay_ms);
    log::debug!("carousel: {} slides, {} dots", carousel.slide_count(), dots.len());
    bind_dots(carousel, &dots);
    bind_active_class(carousel, slides, dots);

    carousel.set_slide(0);
    carousel.start_auto_play();
    carousel
}
