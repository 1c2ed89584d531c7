mod footer;
mod header;

use iced::widget::{column, container};
use iced::{Element, Length};

use crate::message::Message;
use crate::settings::ThemeSetting;
use crate::state::MainState;
use crate::theme::tokens;
use crate::widgets::helpers::divider;
use crate::widgets::release_list;

pub fn view(state: &MainState, theme: ThemeSetting) -> Element<'_, Message> {
    let list = release_list::view(state);

    let content = column![
        header::header_view(state, theme),
        divider(),
        container(list).height(Length::Fill),
        divider(),
        footer::footer_view(&state.source),
    ]
    .max_width(tokens::CONTENT_MAX_WIDTH)
    .height(Length::Fill);

    container(content)
        .padding(iced::Padding::new(0.0).left(16.0).right(16.0))
        .center_x(Length::Fill)
        .height(Length::Fill)
        .into()
}
