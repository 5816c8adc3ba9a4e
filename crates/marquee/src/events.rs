use barker::proto::ControlCommand;
use gdk_pixbuf::Pixbuf;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Next,
    Previous,
    Select(usize),
    ConfigReload,
    ImageLoaded {
        index: usize,
        generation: u64,
        pixbuf: Pixbuf,
    },
}

impl From<ControlCommand> for AppEvent {
    fn from(command: ControlCommand) -> Self {
        match command {
            ControlCommand::Next => AppEvent::Next,
            ControlCommand::Previous => AppEvent::Previous,
            ControlCommand::Select(index) => AppEvent::Select(index),
            ControlCommand::Reload => AppEvent::ConfigReload,
        }
    }
}
