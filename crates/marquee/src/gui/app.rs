use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::slider::view::{NavDirection, SlideHandle, control_button};
use crate::gui::slider::{PointerOffset, SLIDE_HEIGHT, SLIDE_WIDTH, SliderState};
use crate::gui::theme;
use crate::sys::loader;
use barker::content::Heading;
use gdk_pixbuf::Pixbuf;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

pub struct AppModel {
    state: SliderState,
    heading: Heading,
    slides: Vec<SlideHandle>,
    viewport: gtk::Fixed,
    wrapper: gtk::Box,
    heading_label: gtk::Label,
    event_tx: async_channel::Sender<AppEvent>,
}

#[derive(Debug)]
pub enum AppMsg {
    Previous,
    Next,
    SlideClicked(usize),
    PointerMoved { index: usize, offset: PointerOffset },
    PointerLeft(usize),
    ImageLoaded {
        index: usize,
        generation: u64,
        pixbuf: Pixbuf,
    },
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Next => AppMsg::Next,
            AppEvent::Previous => AppMsg::Previous,
            AppEvent::Select(index) => AppMsg::SlideClicked(index),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::ImageLoaded {
                index,
                generation,
                pixbuf,
            } => AppMsg::ImageLoaded {
                index,
                generation,
                pixbuf,
            },
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Config,
        async_channel::Sender<AppEvent>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Marquee"),
            set_resizable: false,
            add_css_class: "marquee-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Left {
                        sender.input(AppMsg::Previous);
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::Right {
                        sender.input(AppMsg::Next);
                        return glib::Propagation::Stop;
                    }
                    if key == gtk::gdk::Key::Escape {
                        relm4::main_application().quit();
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "slider"]
            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_halign: gtk::Align::Center,
                set_valign: gtk::Align::Center,
                add_css_class: "slider",

                #[name = "heading_label"]
                gtk::Label {
                    add_css_class: "visuallyhidden",
                },

                #[name = "viewport"]
                gtk::Fixed {
                    set_overflow: gtk::Overflow::Hidden,
                    set_size_request: (SLIDE_WIDTH, SLIDE_HEIGHT),
                },

                #[name = "controls"]
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_halign: gtk::Align::Center,
                    set_spacing: 12,
                    add_css_class: "slider__controls",
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, tx, rx) = init;

        theme::load_css();

        let model = AppModel {
            state: SliderState::new(config.deck(), 0),
            heading: config.heading.clone(),
            slides: Vec::new(),
            viewport: gtk::Fixed::default(),
            wrapper: gtk::Box::default(),
            heading_label: gtk::Label::default(),
            event_tx: tx,
        };

        let widgets = view_output!();

        let mut model = model;
        model.viewport = widgets.viewport.clone();
        model.heading_label = widgets.heading_label.clone();
        model.apply_heading();
        model.rebuild_track(&sender);

        widgets
            .controls
            .append(&control_button(NavDirection::Previous, &sender));
        widgets
            .controls
            .append(&control_button(NavDirection::Next, &sender));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        relm4::spawn(loader::load_deck(
            model.state.deck().to_vec(),
            model.state.generation(),
            model.event_tx.clone(),
        ));

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Previous => {
                self.state.select_previous();
                self.refresh_positions();
            }
            AppMsg::Next => {
                self.state.select_next();
                self.refresh_positions();
            }
            AppMsg::SlideClicked(index) => {
                if self.state.select_index(index) {
                    self.refresh_positions();
                }
            }
            AppMsg::PointerMoved { index, offset } => {
                if let Some(slide) = self.slides.get(index) {
                    slide.apply_pointer_offset(offset);
                }
            }
            AppMsg::PointerLeft(index) => {
                if let Some(slide) = self.slides.get(index) {
                    slide.apply_pointer_offset(PointerOffset::ZERO);
                }
            }
            AppMsg::ImageLoaded {
                index,
                generation,
                pixbuf,
            } => {
                if self.state.mark_loaded(index, generation)
                    && let Some(slide) = self.slides.get(index)
                {
                    slide.reveal(&pixbuf);
                }
            }
            AppMsg::ConfigReload => {
                let config = config::load_or_setup();
                // the generation bump retires any loader still running for
                // the old deck
                self.state = SliderState::new(config.deck(), self.state.generation() + 1);
                self.heading = config.heading;
                self.apply_heading();
                self.rebuild_track(&sender);
                relm4::spawn(loader::load_deck(
                    self.state.deck().to_vec(),
                    self.state.generation(),
                    self.event_tx.clone(),
                ));
                log::info!("Configuration reloaded");
            }
        }
    }
}

impl AppModel {
    fn apply_heading(&self) {
        self.heading_label.set_label(self.heading.as_str());
        self.heading_label.set_widget_name(&self.heading.anchor_id());
        if let Some(slider) = self.viewport.parent() {
            slider.update_property(&[gtk::accessible::Property::Label(self.heading.as_str())]);
        }
    }

    /// Rebuilds the slide track from the current deck. Called once at init
    /// and again whenever the config reloads.
    fn rebuild_track(&mut self, sender: &ComponentSender<Self>) {
        while let Some(child) = self.viewport.first_child() {
            self.viewport.remove(&child);
        }

        let wrapper = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        wrapper.add_css_class("slider__wrapper");

        let slides: Vec<SlideHandle> = self
            .state
            .deck()
            .iter()
            .map(|record| SlideHandle::new(record, sender))
            .collect();
        for slide in &slides {
            wrapper.append(slide.widget());
        }

        self.viewport.put(&wrapper, 0.0, 0.0);
        self.wrapper = wrapper;
        self.slides = slides;
        self.refresh_positions();
    }

    /// Re-applies every slide's positional class and moves the track so the
    /// active slide sits at the viewport origin.
    fn refresh_positions(&self) {
        let track_width = f64::from(self.state.len() as i32 * SLIDE_WIDTH);
        let offset = track_width * self.state.track_offset_percent() / 100.0;
        self.viewport.move_(&self.wrapper, -offset, 0.0);

        for slide in &self.slides {
            slide.set_role(self.state.role_of(slide.index()));
        }
    }
}
