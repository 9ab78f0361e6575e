use iced::{
    widget::{container, scrollable, text, Button, Column, TextInput},
    Color, Element, Length,
};

use super::{App, Message};
use crate::form::{FormState, ResultView};

impl App {
    pub fn view_form<'a>(state: &'_ FormState) -> Element<'a, Message> {
        let email_input = TextInput::new("you@example.com", state.email.value.as_str())
            .on_input(Message::EmailInputChanged)
            .on_submit(Message::EmailBlurred);

        let url_input = TextInput::new(
            "https://youtube.com/playlist?list=0123456789abcdef",
            state.playlist_url.value.as_str(),
        )
        .on_input(Message::UrlInputChanged)
        .on_submit(Message::UrlBlurred);

        let mut send_button = Button::new("Send");
        if state.result != ResultView::Processing {
            send_button = send_button.on_press(Message::SubmitForm);
        }

        let mut content = Column::new().spacing(20).max_width(800);
        content = content.push(email_input);
        if let Some(message) = state.email.error() {
            content = content.push(error_text(message));
        }
        content = content.push(url_input);
        if let Some(message) = state.playlist_url.error() {
            content = content.push(error_text(message));
        }
        content = content.push(send_button);

        content = match &state.result {
            ResultView::Hidden => content,
            ResultView::Processing => content.push(text("Processing your request...")),
            ResultView::Success(message) => content
                .push(text(message))
                .push(Button::new("Process another playlist").on_press(Message::ResetForm)),
            ResultView::Error(message) => content
                .push(error_text(message))
                .push(Button::new("Process another playlist").on_press(Message::ResetForm)),
        };

        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(40)
                .center_x(),
        )
        .into()
    }
}

fn error_text<'a>(message: &str) -> Element<'a, Message> {
    text(message)
        .size(16)
        .style(iced::theme::Text::Color(Color::from_rgb(0.84, 0.11, 0.29)))
        .into()
}
