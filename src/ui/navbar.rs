// SPDX-License-Identifier: MPL-2.0
//! App bar for the home screen.
//!
//! Menu glyph, product title, notification bell with the unread badge
//! numeral, and the account button with its Profile / My account dropdown.
//! The badge numeral is rendered only while there are unread notifications;
//! at zero it is omitted entirely.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the app bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub account_menu_open: bool,
    /// Badge numeral from the notification cell; `None` hides the badge.
    pub unread_label: Option<String>,
}

/// Messages emitted by the app bar.
#[derive(Debug, Clone)]
pub enum Message {
    NotificationsPressed,
    ToggleAccountMenu,
    ProfilePressed,
    MyAccountPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The bell was clicked: acknowledge the badge and show the dialog.
    AcknowledgeNotifications,
}

/// Process an app bar message and return the corresponding event.
pub fn update(message: Message, account_menu_open: &mut bool) -> Event {
    match message {
        Message::NotificationsPressed => {
            *account_menu_open = false;
            Event::AcknowledgeNotifications
        }
        Message::ToggleAccountMenu => {
            *account_menu_open = !*account_menu_open;
            Event::None
        }
        // The account items have no destination yet; they only dismiss the
        // menu.
        Message::ProfilePressed | Message::MyAccountPressed => {
            *account_menu_open = false;
            Event::None
        }
    }
}

/// Render the app bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.account_menu_open {
        content = content.push(build_account_menu(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_glyph = Container::new(icons::sized(icons::menu(), sizing::ICON_MD))
        .padding(spacing::XS);

    let title = Container::new(Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE))
        .width(Length::Fill);

    let mut bell_content = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Top)
        .push(icons::sized(icons::bell(), sizing::ICON_MD));
    if let Some(label) = ctx.unread_label.clone() {
        bell_content = bell_content.push(badge(label));
    }
    let bell_button = button(bell_content)
        .on_press(Message::NotificationsPressed)
        .padding(spacing::XS)
        .style(button::text);

    let account_button = button(icons::sized(icons::account(), sizing::ICON_MD))
        .on_press(Message::ToggleAccountMenu)
        .padding(spacing::XS)
        .style(button::text);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_glyph)
        .push(title)
        .push(bell_button)
        .push(account_button);

    Container::new(row)
        .width(Length::Fill)
        .style(toolbar_style)
        .into()
}

/// The unread numeral overlayed next to the bell.
fn badge<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([1.0, spacing::XXS])
        .style(badge_style)
        .into()
}

fn build_account_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let profile_item = build_menu_item(ctx.i18n.tr("account-menu-profile"), Message::ProfilePressed);
    let account_item = build_menu_item(
        ctx.i18n.tr("account-menu-my-account"),
        Message::MyAccountPressed,
    );

    let menu_column = Column::new()
        .spacing(spacing::XXS)
        .push(profile_item)
        .push(account_item);

    Container::new(
        Container::new(menu_column)
            .padding(spacing::XS)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                border: Border {
                    radius: radius::SM.into(),
                    width: 1.0,
                    color: theme.extended_palette().background.strong.color,
                },
                ..Default::default()
            }),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .into()
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .style(menu_item_style)
        .into()
}

fn toolbar_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

fn badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(palette::ERROR_500.into()),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}
