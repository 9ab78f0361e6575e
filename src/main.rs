use iced::{Application, Settings};
use ytnotes::*;

fn main() -> iced::Result {
    env_logger::init();

    gui::App::run(Settings {
        window: iced::window::Settings {
            size: (520, 560),
            ..Default::default()
        },
        ..Default::default()
    })
}
