use super::model::{PointerOffset, SlideRole};
use super::{CONTROL_SIZE, IMAGE_BLEED, PARALLAX_FACTOR, SLIDE_HEIGHT, SLIDE_WIDTH};
use crate::gui::app::{AppModel, AppMsg};
use crate::gui::theme::ThemeColors;
use barker::content::SlideRecord;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4 as gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::ComponentSender;
use strum::Display as StrumDisplay;

/// Widget handles for one rendered slide. The pure state lives in
/// [`super::SliderState`]; this type only translates it into GTK calls.
pub struct SlideHandle {
    index: usize,
    root: gtk::Box,
    image_fixed: gtk::Fixed,
    picture: gtk::Picture,
}

impl SlideHandle {
    pub fn new(record: &SlideRecord, sender: &ComponentSender<AppModel>) -> Self {
        let index = record.index;
        let bleed = IMAGE_BLEED as i32;

        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.set_css_classes(&["slide"]);
        root.set_size_request(SLIDE_WIDTH, SLIDE_HEIGHT);

        let picture = gtk::Picture::new();
        picture.add_css_class("slide__image");
        picture.set_can_shrink(false);
        picture.set_size_request(SLIDE_WIDTH + 2 * bleed, SLIDE_HEIGHT + 2 * bleed);
        picture.set_alternative_text(Some(record.headline.as_str()));

        let image_fixed = gtk::Fixed::new();
        image_fixed.add_css_class("slide__image-wrapper");
        image_fixed.set_size_request(SLIDE_WIDTH, SLIDE_HEIGHT);
        image_fixed.set_overflow(gtk::Overflow::Hidden);
        image_fixed.put(&picture, -IMAGE_BLEED, -IMAGE_BLEED);

        let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
        content.add_css_class("slide__content");
        content.set_halign(gtk::Align::Start);
        content.set_valign(gtk::Align::End);

        let headline = gtk::Label::new(Some(record.headline.as_str()));
        headline.add_css_class("slide__headline");
        headline.set_halign(gtk::Align::Start);
        content.append(&headline);

        let action = gtk::Button::with_label(record.button.as_str());
        action.set_css_classes(&["slide__action", "btn"]);
        action.set_halign(gtk::Align::Start);
        {
            let sender = sender.clone();
            action.connect_clicked(move |_| sender.input(AppMsg::SlideClicked(index)));
        }
        content.append(&action);

        let overlay = gtk::Overlay::new();
        overlay.set_child(Some(&image_fixed));
        overlay.add_overlay(&content);
        root.append(&overlay);

        let click = gtk::GestureClick::new();
        click.set_button(gdk::BUTTON_PRIMARY);
        {
            let sender = sender.clone();
            click.connect_released(move |_, _, _, _| sender.input(AppMsg::SlideClicked(index)));
        }
        root.add_controller(click);

        let motion = gtk::EventControllerMotion::new();
        {
            let sender = sender.clone();
            let slide = root.downgrade();
            motion.connect_motion(move |_, x, y| {
                if let Some(slide) = slide.upgrade() {
                    let offset = PointerOffset::from_pointer(x, y, slide.width(), slide.height());
                    sender.input(AppMsg::PointerMoved { index, offset });
                }
            });
        }
        {
            let sender = sender.clone();
            motion.connect_leave(move |_| sender.input(AppMsg::PointerLeft(index)));
        }
        root.add_controller(motion);

        Self {
            index,
            root,
            image_fixed,
            picture,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    pub fn set_role(&self, role: SlideRole) {
        match role.css_class() {
            Some(class) => self.root.set_css_classes(&["slide", class]),
            None => self.root.set_css_classes(&["slide"]),
        }
    }

    /// Shifts the picture inside its wrapper against the cursor. The shift
    /// is clamped to the bleed so the wrapper never shows through.
    pub fn apply_pointer_offset(&self, offset: PointerOffset) {
        let dx = (offset.dx * PARALLAX_FACTOR).clamp(-IMAGE_BLEED, IMAGE_BLEED);
        let dy = (offset.dy * PARALLAX_FACTOR).clamp(-IMAGE_BLEED, IMAGE_BLEED);
        self.image_fixed
            .move_(&self.picture, -IMAGE_BLEED - dx, -IMAGE_BLEED - dy);
    }

    /// Sets the decoded image and fades it in. Must only be called once the
    /// load actually finished; the picture stays transparent until then.
    pub fn reveal(&self, pixbuf: &Pixbuf) {
        let texture = gdk::Texture::for_pixbuf(pixbuf);
        self.picture.set_paintable(Some(&texture));
        self.picture.add_css_class("slide__image--loaded");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Previous => "Go to your previous slide",
            Self::Next => "Go to your next slide",
        }
    }
}

/// A directional control button with a cairo-drawn chevron.
pub fn control_button(direction: NavDirection, sender: &ComponentSender<AppModel>) -> gtk::Button {
    let icon = gtk::DrawingArea::new();
    icon.set_content_width(CONTROL_SIZE);
    icon.set_content_height(CONTROL_SIZE);
    icon.set_draw_func(move |area, cr, width, height| {
        let colors = ThemeColors::from_context(&area.style_context());
        if let Err(e) = draw_chevron(cr, width, height, direction, &colors) {
            log::error!("Drawing error: {}", e);
        }
    });

    let button = gtk::Button::new();
    button.set_child(Some(&icon));
    button.set_css_classes(&["btn", &format!("btn--{}", direction)]);
    button.set_tooltip_text(Some(direction.title()));
    button.update_property(&[gtk::accessible::Property::Label(direction.title())]);
    {
        let sender = sender.clone();
        button.connect_clicked(move |_| {
            sender.input(match direction {
                NavDirection::Previous => AppMsg::Previous,
                NavDirection::Next => AppMsg::Next,
            });
        });
    }
    button
}

// Right-pointing chevron in a 24x24 viewbox, mirrored for "previous".
const CHEVRON: [(f64, f64); 6] = [
    (8.59, 16.58),
    (13.17, 12.0),
    (8.59, 7.41),
    (10.0, 6.0),
    (16.0, 12.0),
    (10.0, 18.0),
];

fn draw_chevron(
    cr: &Context,
    width: i32,
    height: i32,
    direction: NavDirection,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let scale = f64::from(width.min(height)) / 24.0;

    cr.save()?;
    if direction == NavDirection::Previous {
        cr.translate(f64::from(width), 0.0);
        cr.scale(-scale, scale);
    } else {
        cr.scale(scale, scale);
    }

    let (r, g, b, a) = colors.control_icon.into_components();
    cr.set_source_rgba(r, g, b, a);

    let (x, y) = CHEVRON[0];
    cr.move_to(x, y);
    for &(x, y) in &CHEVRON[1..] {
        cr.line_to(x, y);
    }
    cr.close_path();
    cr.fill()?;
    cr.restore()
}
