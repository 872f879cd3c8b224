//! Main window layout and composition
//!
//! Title bar on top, search input below it, then the content area. When
//! startup failed the whole window is replaced by the fatal message.

use crate::chrome::WindowChrome;
use crate::config::BACKGROUND_RGB;
use crate::i18n;
use crate::message::{Message, SearchMessage};
use crate::state::{AppState, FatalState};
use crate::ui::content_view::view_content;
use crate::ui::title_bar::view_title_bar;
use cosmic::iced::widget::container::Style;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget::{container, text, text_input, Column};
use cosmic::Element;

/// Background of the fatal error card (#903030)
const FATAL_RGB: [u8; 3] = [0x90, 0x30, 0x30];

/// Text colour on the coloured surfaces (#ECECEC)
const TEXT_RGB: [u8; 3] = [0xEC, 0xEC, 0xEC];

/// Build the main window view
pub fn view<'a>(state: &'a AppState, chrome: &WindowChrome) -> Element<'a, Message> {
    let body = match &state.fatal {
        Some(fatal) => view_fatal(fatal),
        None => view_search(state),
    };

    let window = Column::new().push(view_title_bar(chrome)).push(body);

    container(window)
        .width(Length::Fill)
        .height(Length::Fill)
        .class(cosmic::theme::Container::custom(filled(BACKGROUND_RGB)))
        .into()
}

/// Search input and content area
fn view_search(state: &AppState) -> Element<'_, Message> {
    let input = text_input(i18n::search_placeholder(), state.search.query.as_str())
        .on_input(|s| Message::Search(SearchMessage::QueryChanged(s)))
        .width(Length::Fill);

    Column::new()
        .push(input)
        .push(view_content(state))
        .spacing(12)
        .padding([8, 20])
        .into()
}

/// Full-window fatal error message
fn view_fatal(fatal: &FatalState) -> Element<'_, Message> {
    let [first, second] = i18n::fatal_body();
    let card = Column::new()
        .push(text(i18n::fatal_title()).size(24))
        .push(text(first).size(14))
        .push(text(second).size(14))
        .push(text(i18n::fatal_detail(&fatal.detail)).size(12))
        .spacing(8)
        .align_x(Alignment::Center);

    container(
        container(card)
            .padding(20)
            .width(Length::Fill)
            .class(cosmic::theme::Container::custom(filled(FATAL_RGB))),
    )
    .width(Length::Fill)
    .padding([50, 20, 0, 20])
    .into()
}

/// Container style with a solid background and light text
fn filled(rgb: [u8; 3]) -> impl Fn(&cosmic::Theme) -> Style {
    move |_theme| Style {
        background: Some(Color::from_rgb8(rgb[0], rgb[1], rgb[2]).into()),
        text_color: Some(Color::from_rgb8(TEXT_RGB[0], TEXT_RGB[1], TEXT_RGB[2])),
        ..Default::default()
    }
}
