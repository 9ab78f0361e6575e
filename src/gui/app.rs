use super::message::Message;
use crate::form::{FormState, ResultView};
use crate::webhook::{self, SubmissionRequest};
use iced::{Application, Command, Element, Theme};

/// The form controller. Owns every piece of page state and is constructed
/// once at startup; there is no ambient global state.
#[derive(Debug, Default)]
pub struct App {
    form: FormState,
}

impl Application for App {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Self::Message>) {
        (Self::default(), Command::none())
    }

    fn title(&self) -> String {
        String::from("ytnotes")
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::EmailInputChanged(value) => self.form.email.input(value),
            Message::UrlInputChanged(value) => self.form.playlist_url.input(value),
            Message::EmailBlurred => self.form.blur_email(),
            Message::UrlBlurred => self.form.blur_playlist_url(),
            Message::SubmitForm => {
                if self.form.result == ResultView::Processing {
                    // one request in flight at a time
                    return Command::none();
                }

                if self.form.validate_all() {
                    let request = SubmissionRequest::new(
                        self.form.email.value.trim().to_owned(),
                        self.form.playlist_url.value.trim().to_owned(),
                    );
                    self.form.result = ResultView::Processing;
                    return Command::perform(webhook::submit(request), Message::SubmissionFinished);
                }
                log::debug!("form failed validation, nothing sent");
            }
            Message::SubmissionFinished(outcome) => {
                self.form.result = webhook::outcome_view(&outcome);
            }
            Message::ResetForm => self.form.reset(),
        }

        Command::none()
    }

    fn view(&self) -> Element<Self::Message> {
        Self::view_form(&self.form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldState, EMAIL_INVALID, EMAIL_REQUIRED, URL_REQUIRED};
    use crate::webhook::{SubmitError, SuccessInfo};

    #[test]
    fn an_empty_submit_flags_both_fields_and_sends_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::SubmitForm);

        assert_eq!(app.form.email.state, FieldState::Invalid(EMAIL_REQUIRED));
        assert_eq!(
            app.form.playlist_url.state,
            FieldState::Invalid(URL_REQUIRED)
        );
        assert_eq!(app.form.result, ResultView::Hidden);
    }

    #[test]
    fn a_half_valid_submit_flags_only_the_bad_field() {
        let mut app = App::default();
        let _ = app.update(Message::EmailInputChanged(String::from("broken@address")));
        let _ = app.update(Message::UrlInputChanged(String::from("youtu.be/abc")));
        let _ = app.update(Message::SubmitForm);

        assert_eq!(app.form.email.state, FieldState::Invalid(EMAIL_INVALID));
        assert_eq!(app.form.playlist_url.state, FieldState::Valid);
        assert_eq!(app.form.result, ResultView::Hidden);
    }

    #[test]
    fn a_valid_submit_moves_the_result_to_processing() {
        let mut app = App::default();
        let _ = app.update(Message::EmailInputChanged(String::from(
            "someone@example.com",
        )));
        let _ = app.update(Message::UrlInputChanged(String::from(
            "https://www.youtube.com/playlist?list=XYZ",
        )));
        let _ = app.update(Message::SubmitForm);

        assert_eq!(app.form.result, ResultView::Processing);
    }

    #[test]
    fn submitting_while_processing_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::EmailInputChanged(String::from("a@b.co")));
        let _ = app.update(Message::UrlInputChanged(String::from("youtu.be/abc")));
        let _ = app.update(Message::SubmitForm);
        assert_eq!(app.form.result, ResultView::Processing);

        // emptying a field then re-submitting must not re-validate mid-flight;
        // a processed submit would flag the now-empty email as required
        let _ = app.update(Message::EmailInputChanged(String::new()));
        let _ = app.update(Message::SubmitForm);
        assert_eq!(app.form.email.state, FieldState::Valid);
        assert_eq!(app.form.result, ResultView::Processing);
    }

    #[test]
    fn a_finished_submission_renders_its_outcome() {
        let mut app = App::default();
        let _ = app.update(Message::SubmissionFinished(Ok(SuccessInfo {
            email: String::from("someone@example.com"),
        })));
        match &app.form.result {
            ResultView::Success(message) => assert!(message.contains("someone@example.com")),
            other => panic!("expected success, got {other:?}"),
        }

        let _ = app.update(Message::SubmissionFinished(Err(SubmitError::Status(502))));
        assert!(matches!(app.form.result, ResultView::Error(_)));
    }

    #[test]
    fn reset_restores_the_untouched_hidden_state() {
        let mut app = App::default();
        let _ = app.update(Message::EmailInputChanged(String::from("a@b.co")));
        let _ = app.update(Message::SubmitForm);
        let _ = app.update(Message::SubmissionFinished(Err(SubmitError::Network(
            String::from("timed out"),
        ))));

        let _ = app.update(Message::ResetForm);
        assert!(app.form.email.value.is_empty());
        assert_eq!(app.form.email.state, FieldState::Untouched);
        assert_eq!(app.form.playlist_url.state, FieldState::Untouched);
        assert_eq!(app.form.result, ResultView::Hidden);
    }

    #[test]
    fn typing_into_an_invalid_field_clears_the_error_at_once() {
        let mut app = App::default();
        let _ = app.update(Message::EmailBlurred);
        assert_eq!(app.form.email.state, FieldState::Invalid(EMAIL_REQUIRED));

        let _ = app.update(Message::EmailInputChanged(String::from("x")));
        assert_eq!(app.form.email.state, FieldState::Untouched);
    }
}
