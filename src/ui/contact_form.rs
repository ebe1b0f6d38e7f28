// SPDX-License-Identifier: MPL-2.0
//! Contact form.
//!
//! Holds the three field values, the submission status and an in-flight
//! flag. The form never talks to the relay itself: [`ContactForm::update`]
//! returns [`Event::Submit`] with a snapshot of the fields, the app hands it
//! to the relay, and the outcome comes back through
//! [`ContactForm::finish_submit`].

use crate::application::port::RelayError;
use crate::domain::contact::{Field, FieldError, FormFields, FormSubmission, SubmissionStatus};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::{fade, ColorScheme};
use iced::widget::{button, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment::Vertical, font, Element, Font, Length};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_TEXT: &str = "Message sent successfully!";
pub const FAILURE_TEXT: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
}

/// Events the parent must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Relay this submission, then report back with `finish_submit`.
    Submit(FormSubmission),
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    message: text_editor::Content,
    status: SubmissionStatus,
    in_flight: bool,
    validation: Option<FieldError>,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with `fields`.
    #[must_use]
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            message: text_editor::Content::with_text(&fields.message),
            fields,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Problem found by the last rejected submit attempt, if any.
    #[must_use]
    pub fn validation(&self) -> Option<FieldError> {
        self.validation
    }

    /// Whether pressing submit would produce a request right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.in_flight && self.fields.validate().is_ok()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.fields.name = value;
                self.validation = None;
            }
            Message::EmailChanged(value) => {
                self.fields.email = value;
                self.validation = None;
            }
            Message::MessageEdited(action) => {
                let is_edit = action.is_edit();
                self.message.perform(action);
                if is_edit {
                    self.fields.message = editor_text(&self.message);
                    self.validation = None;
                }
            }
            Message::Submit => {
                if let Some(submission) = self.begin_submit() {
                    return Event::Submit(submission);
                }
            }
        }
        Event::None
    }

    /// Starts a submission: marks the form in flight, resets the status and
    /// returns the values to relay.
    ///
    /// Returns `None` while a request is already in flight or when a field
    /// is invalid; the latter is remembered for display.
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if self.in_flight {
            tracing::debug!("submit ignored, request already in flight");
            return None;
        }
        if let Err(err) = self.fields.validate() {
            tracing::debug!("submit rejected: {err}");
            self.status = SubmissionStatus::Idle;
            self.validation = Some(err);
            return None;
        }

        self.in_flight = true;
        self.status = SubmissionStatus::Idle;
        self.validation = None;
        Some(FormSubmission {
            fields: self.fields.clone(),
        })
    }

    /// Text of the status line under the form, and whether it reports a
    /// problem. A pending validation error outranks the last send outcome.
    pub fn status_text(&self) -> Option<(String, bool)> {
        if let Some(err) = self.validation {
            return Some((err.to_string(), true));
        }
        match self.status {
            SubmissionStatus::Success => Some((SUCCESS_TEXT.to_owned(), false)),
            SubmissionStatus::Error => Some((FAILURE_TEXT.to_owned(), true)),
            SubmissionStatus::Idle => None,
        }
    }

    /// Records the relay outcome. Success clears the fields; failure keeps
    /// them so the visitor can resubmit.
    pub fn finish_submit(&mut self, result: Result<(), RelayError>) {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!("contact message sent");
                self.status = SubmissionStatus::Success;
                self.fields.clear();
                self.message = text_editor::Content::new();
            }
            Err(err) => {
                tracing::warn!("contact message failed: {err}");
                self.status = SubmissionStatus::Error;
            }
        }
    }
}

fn editor_text(content: &text_editor::Content) -> String {
    let mut text = content.text();
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub form: &'a ContactForm,
    pub colors: &'a ColorScheme,
    pub opacity: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let form = ctx.form;
    let alpha = ctx.opacity;

    let label = |field: Field| {
        Text::new(field.label())
            .size(typography::BODY_SM)
            .font(Font {
                weight: font::Weight::Medium,
                ..Font::DEFAULT
            })
            .color(fade(colors.text_secondary, alpha))
    };

    let name = text_input("", &form.fields.name)
        .on_input(Message::NameChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(styles::input::field(colors));

    let email = text_input("", &form.fields.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .style(styles::input::field(colors));

    let message = text_editor(&form.message)
        .on_action(Message::MessageEdited)
        .padding(spacing::XS)
        .size(typography::BODY)
        .height(Length::Fixed(sizing::MESSAGE_HEIGHT))
        .style(styles::input::message(colors));

    let submit_label = if form.in_flight {
        SENDING_LABEL
    } else {
        SUBMIT_LABEL
    };
    let submit = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(icons::send(), sizing::ICON_SM, iced::Color::WHITE))
            .push(Text::new(submit_label).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding([spacing::SM, spacing::LG])
    .on_press_maybe((!form.in_flight).then_some(Message::Submit))
    .style(styles::button::gradient(colors));

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Column::new().spacing(spacing::XXS).push(label(Field::Name)).push(name))
        .push(Column::new().spacing(spacing::XXS).push(label(Field::Email)).push(email))
        .push(Column::new().spacing(spacing::XXS).push(label(Field::Message)).push(message))
        .push(submit);

    if let Some(line) = status_line(form, colors) {
        content = content.push(line);
    }

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::NARROW_MAX_WIDTH)
        .padding(spacing::XL)
        .style(styles::container::card(colors))
        .into()
}

fn status_line<'a>(form: &ContactForm, colors: &ColorScheme) -> Option<Element<'a, Message>> {
    let (text, is_error) = form.status_text()?;
    let color = if is_error { colors.error } else { colors.success };

    Some(
        Container::new(Text::new(text).size(typography::BODY_SM))
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .style(styles::container::status(color))
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn begin_submit_marks_in_flight_and_resets_status() {
        let mut form = ContactForm::with_fields(filled());
        form.status = SubmissionStatus::Error;

        let submission = form.begin_submit().expect("valid form submits");
        assert_eq!(submission.fields, filled());
        assert!(form.is_in_flight());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn empty_resubmit_after_success_shows_the_validation_error() {
        let mut form = ContactForm::with_fields(filled());
        assert!(form.begin_submit().is_some());
        form.finish_submit(Ok(()));
        assert_eq!(
            form.status_text(),
            Some((SUCCESS_TEXT.to_owned(), false))
        );

        assert_eq!(form.update(Message::Submit), Event::None);
        let (text, is_error) = form.status_text().expect("status line shown");
        assert_eq!(text, "Name is required");
        assert!(is_error);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn invalid_retry_after_failure_replaces_the_failure_text() {
        let mut form = ContactForm::with_fields(filled());
        assert!(form.begin_submit().is_some());
        form.finish_submit(Err(RelayError::Transport("connection reset".into())));
        assert_eq!(form.status_text(), Some((FAILURE_TEXT.to_owned(), true)));

        form.update(Message::EmailChanged("nope".into()));
        form.update(Message::Submit);
        let (text, _) = form.status_text().expect("status line shown");
        assert_ne!(text, FAILURE_TEXT);
        assert!(form.validation().is_some());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = ContactForm::with_fields(filled());
        assert!(form.begin_submit().is_some());
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.update(Message::Submit), Event::None);
    }

    #[test]
    fn success_clears_fields() {
        let mut form = ContactForm::with_fields(filled());
        form.begin_submit();
        form.finish_submit(Ok(()));

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.fields().is_empty());
        assert!(!form.is_in_flight());
        assert_eq!(editor_text(&form.message), "");
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = ContactForm::with_fields(filled());
        form.begin_submit();
        form.finish_submit(Err(RelayError::Transport("connection reset".into())));

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &filled());
        assert!(!form.is_in_flight());
        assert!(form.can_submit());
    }

    #[test]
    fn invalid_fields_are_reported_not_sent() {
        let mut form = ContactForm::new();
        assert_eq!(form.update(Message::Submit), Event::None);
        assert_eq!(form.validation(), Some(FieldError::Missing(Field::Name)));
        assert!(!form.is_in_flight());

        form.update(Message::NameChanged("Ada".into()));
        assert_eq!(form.validation(), None);
    }

    #[test]
    fn submit_message_yields_event() {
        let mut form = ContactForm::with_fields(filled());
        match form.update(Message::Submit) {
            Event::Submit(submission) => assert_eq!(submission.fields.email, "ada@example.com"),
            Event::None => panic!("expected a submission"),
        }
    }

    #[test]
    fn editor_actions_update_message_field() {
        let mut form = ContactForm::new();
        for ch in ['h', 'i'] {
            form.update(Message::MessageEdited(text_editor::Action::Edit(
                text_editor::Edit::Insert(ch),
            )));
        }
        assert_eq!(form.fields().message, "hi");
    }

    #[test]
    fn view_renders_every_status() {
        let colors = ColorScheme::light();
        let mut form = ContactForm::with_fields(filled());
        {
            let _idle = view(ViewContext {
                form: &form,
                colors: &colors,
                opacity: 1.0,
            });
        }

        form.begin_submit();
        {
            let _sending = view(ViewContext {
                form: &form,
                colors: &colors,
                opacity: 1.0,
            });
        }

        form.finish_submit(Err(RelayError::Rejected("bad key".into())));
        {
            let _failed = view(ViewContext {
                form: &form,
                colors: &colors,
                opacity: 1.0,
            });
        }
    }
}
