use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub control_icon: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            control_icon: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.92, 0.92, 0.92, 1.0),
                None,
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.marquee-window {
    background-color: #1a1a1d;
}

.slider {
    padding: 24px;
}

.slide {
    opacity: 0.55;
    transition: opacity 400ms ease;
}

.slide--current {
    opacity: 1;
}

.slide--previous, .slide--next {
    opacity: 0.75;
}

.slide__image-wrapper {
    background-color: #101012;
    border-radius: 6px;
}

.slide__image {
    opacity: 0;
    transition: opacity 600ms ease;
}

.slide__image--loaded {
    opacity: 1;
}

.slide__content {
    padding: 16px;
}

.slide__headline {
    color: #ffffff;
    font-size: 22px;
    font-weight: 700;
}

.slide__action {
    margin-top: 12px;
}

.slider__controls {
    margin-top: 16px;
}

.btn {
    border-radius: 24px;
    padding: 6px;
}

.visuallyhidden {
    opacity: 0;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
