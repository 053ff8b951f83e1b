// SPDX-License-Identifier: MPL-2.0
//! Rendering for the home screen: headline, the three action cards, and the
//! modal information dialog.
//!
//! The dialog presentation (windowed card vs full surface) is a pure
//! function of the viewport width; it never touches the dialog state.

use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, scrim, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::image::Image;
use iced::widget::svg::Svg;
use iced::widget::{
    button, center, container, mouse_area, opaque, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Border, ContentFit, Element, Length, Theme};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Small-viewport signal: stacks the cards and renders the dialog
    /// full-surface when set.
    pub compact: bool,
}

/// Renders the home screen, overlaying the dialog when it is open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let headline = Text::new(ctx.i18n.tr("home-headline")).size(typography::HEADLINE);

    let cards: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::LG)
            .push(upload_card(&ctx))
            .push(dashboard_card(&ctx))
            .push(notifications_card(&ctx))
            .into()
    } else {
        Row::new()
            .spacing(spacing::LG)
            .push(upload_card(&ctx))
            .push(dashboard_card(&ctx))
            .push(notifications_card(&ctx))
            .into()
    };

    let base = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .push(headline)
            .push(cards),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    if ctx.state.dialog.is_open() {
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(dialog_overlay(&ctx))
            .into()
    } else {
        base.into()
    }
}

fn upload_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let preview: Element<'a, Message> = if let Some(image) = ctx.state.selection.current() {
        Image::new(image.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .into()
    } else {
        let placeholder_key = if ctx.state.selection.is_loading() {
            "upload-loading"
        } else {
            "upload-placeholder"
        };
        Text::new(ctx.i18n.tr(placeholder_key))
            .size(typography::BODY)
            .into()
    };

    let drop_area = button(
        Container::new(preview)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::OpenPicker)
    .style(drop_area_style)
    .padding(0.0);

    let upload_button = button(
        Text::new(ctx.i18n.tr("upload-button"))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::OpenPicker)
    .width(Length::Fill)
    .style(button::primary);

    card(
        icons::upload(),
        ctx.i18n.tr("upload-card-title"),
        Column::new()
            .spacing(spacing::MD)
            .push(drop_area)
            .push(upload_button)
            .into(),
    )
}

fn dashboard_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    action_card(
        icons::bar_chart(),
        ctx.i18n.tr("dashboard-card-title"),
        ctx.i18n.tr("dashboard-card-body"),
        ctx.i18n.tr("dashboard-button"),
        Message::OpenDashboard,
    )
}

fn notifications_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    action_card(
        icons::bell(),
        ctx.i18n.tr("notifications-card-title"),
        ctx.i18n.tr("notifications-card-body"),
        ctx.i18n.tr("notifications-button"),
        Message::Acknowledge,
    )
}

/// A card with a body paragraph and one full-width action button.
fn action_card<'a>(
    icon: Svg<'static>,
    title: String,
    body: String,
    action_label: String,
    action: Message,
) -> Element<'a, Message> {
    let action_button = button(
        Text::new(action_label)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(action)
    .width(Length::Fill)
    .style(button::primary);

    card(
        icon,
        title,
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(body).size(typography::BODY))
            .push(action_button)
            .into(),
    )
}

fn card<'a>(
    icon: Svg<'static>,
    title: String,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icon, sizing::ICON_MD))
        .push(Text::new(title).size(typography::SUBTITLE));

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(content),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(card_style)
    .into()
}

fn dialog_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close_icon = button(icons::sized(icons::cross(), sizing::ICON_SM))
        .on_press(Message::CloseDialog)
        .padding(spacing::XXS)
        .style(button::text);

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE))
                .width(Length::Fill),
        )
        .push(close_icon);

    let body = Text::new(ctx.state.dialog.body()).size(typography::BODY);

    let close_button = button(Text::new(ctx.i18n.tr("dialog-close")))
        .on_press(Message::CloseDialog)
        .style(button::primary);

    let actions = Container::new(close_button)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right);

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(body)
            .push(actions),
    )
    .padding(spacing::LG)
    .style(dialog_card_style);

    // Full surface on small viewports; same close semantics either way.
    let card = if ctx.compact {
        card.width(Length::Fill).height(Length::Fill)
    } else {
        card.width(Length::Fixed(sizing::DIALOG_WIDTH))
    };

    // Clicking the backdrop dismisses the dialog.
    let backdrop = mouse_area(
        center(opaque(card)).style(|_theme: &Theme| container::Style {
            background: Some(scrim(opacity::OVERLAY_MEDIUM).into()),
            ..container::Style::default()
        }),
    )
    .on_press(Message::CloseDialog);

    opaque(backdrop)
}

fn card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

fn dialog_card_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}

fn drop_area_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.base.color,
        _ => palette.background.strong.color,
    };

    button::Style {
        background: None,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            width: 2.0,
            color: border_color,
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;

    fn i18n() -> I18n {
        I18n::default()
    }

    #[test]
    fn home_view_renders_empty_state() {
        let state = State::new();
        let i18n = i18n();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            compact: false,
        });
    }

    #[test]
    fn home_view_renders_with_preview_and_open_dialog() {
        let mut state = State::new();
        let _ = state
            .selection
            .finish_load(Ok(ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])));
        state.dialog.open("Body text");
        let i18n = i18n();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            compact: false,
        });
    }

    #[test]
    fn home_view_renders_compact_layout() {
        let mut state = State::new();
        state.dialog.open("Full surface");
        let i18n = i18n();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
            compact: true,
        });
    }
}
