//! Content area
//!
//! Renders the render surface: nothing while hidden, a status message, or
//! the answer title followed by numbered rows that copy themselves on click.

use crate::file_handler::DisplayLine;
use crate::i18n;
use crate::message::{ClipboardMessage, Message};
use crate::state::{AnswerBody, AppState, StatusKind, SurfaceContent};
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, container, scrollable, text, Column, Row};
use cosmic::Element;

/// Row height for answer lines
const ROW_HEIGHT: f32 = 32.0;

/// Build the content area
pub fn view_content(state: &AppState) -> Element<'_, Message> {
    let surface = &state.surface;
    if !surface.visible {
        return container(Column::new()).height(Length::Fixed(0.0)).into();
    }

    let body: Element<'_, Message> = match &surface.content {
        SurfaceContent::Blank => Column::new().into(),
        SurfaceContent::Status(statuses) => statuses
            .iter()
            .fold(Column::new().spacing(8), |col, status| col.push(view_status(status)))
            .into(),
        SurfaceContent::Answer { title, body } => {
            let heading = container(text(title.as_str()).size(20))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding([0, 0, 8, 0]);

            let rows: Element<'_, Message> = match body {
                AnswerBody::Lines(lines) => view_lines(lines, state.copied_line),
                AnswerBody::Empty => view_status(&StatusKind::EmptyContent),
            };

            Column::new().push(heading).push(rows).spacing(4).into()
        }
    };

    container(scrollable(body).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
        .class(cosmic::theme::Container::Card)
        .into()
}

/// A single status paragraph
fn view_status<'a>(status: &StatusKind) -> Element<'a, Message> {
    container(text(i18n::status_text(status)).size(14))
        .width(Length::Fill)
        .padding(8)
        .into()
}

/// Numbered, clickable answer rows
fn view_lines(lines: &[DisplayLine], copied: Option<usize>) -> Element<'_, Message> {
    let mut items = Column::new().spacing(2);

    for line in lines {
        let mut row_content = Row::new()
            .push(text(i18n::numbered_line(line.number, &line.text)).size(14))
            .spacing(8)
            .align_y(Alignment::Center)
            .padding([4, 8]);

        if copied == Some(line.number) {
            row_content = row_content
                .push(cosmic::widget::horizontal_space())
                .push(text(i18n::copied()).size(12));
        }

        let clickable = button::custom(row_content)
            .class(if copied == Some(line.number) {
                cosmic::theme::Button::Suggested
            } else {
                cosmic::theme::Button::Text
            })
            .on_press(Message::Clipboard(ClipboardMessage::CopyLine(line.number)))
            .width(Length::Fill)
            .padding(0);

        items = items.push(
            container(clickable)
                .width(Length::Fill)
                .height(Length::Fixed(ROW_HEIGHT)),
        );
    }

    items.into()
}
