// SPDX-License-Identifier: MPL-2.0
//! Library screen: browse the sample videos.

use crate::domain::catalog::{
    format_count, sample_catalog, CatalogQuery, LevelFilter, SampleVideo, SortKey,
};
use crate::domain::requirements::EducationLevel;
use crate::i18n::fluent::I18n;
use crate::ui::choice::{self, Choice};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, container, pick_list, scrollable, text, text_input, tooltip, Column, Container, Row,
    Space, Text,
};
use iced::{alignment::Vertical, Alignment, Element, Length, Theme};

/// Cards per grid row.
const CARDS_PER_ROW: usize = 3;

/// Concept chips shown before the "+N" overflow chip.
const VISIBLE_CONCEPTS: usize = 3;

pub struct State {
    catalog: Vec<SampleVideo>,
    query: CatalogQuery,
}

impl Default for State {
    fn default() -> Self {
        Self {
            catalog: sample_catalog(),
            query: CatalogQuery::default(),
        }
    }
}

impl State {
    #[must_use]
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Videos matching the current query, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<&SampleVideo> {
        self.query.apply(&self.catalog)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.catalog.len()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    LevelSelected(LevelFilter),
    SortSelected(SortKey),
    Download(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    DownloadRequested { file_name: String, url: String },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SearchChanged(search) => state.query.search = search,
        Message::LevelSelected(level) => state.query.level = level,
        Message::SortSelected(sort) => state.query.sort = sort,
        Message::Download(id) => {
            if let Some(video) = state.catalog.iter().find(|video| video.id == id) {
                return Event::DownloadRequested {
                    file_name: video.download_file_name(),
                    url: video.download_url.to_string(),
                };
            }
        }
    }
    Event::None
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

fn level_filter_choices(i18n: &I18n) -> Vec<Choice<LevelFilter>> {
    std::iter::once(Choice {
        value: LevelFilter::All,
        label: i18n.tr("library-level-all"),
    })
    .chain(EducationLevel::ALL.iter().map(|&level| Choice {
        value: LevelFilter::Only(level),
        label: i18n.tr(level.i18n_key()),
    }))
    .collect()
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let visible = state.visible();

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("library-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("library-subtitle")).size(typography::BODY_LG));

    let search = text_input(&i18n.tr("library-search-placeholder"), &state.query.search)
        .on_input(Message::SearchChanged)
        .padding(spacing::XS)
        .width(Length::FillPortion(2));

    let levels = level_filter_choices(i18n);
    let level_selected = choice::find(&levels, &state.query.level);
    let level = pick_list(levels, level_selected, |c: Choice<LevelFilter>| {
        Message::LevelSelected(c.value)
    })
    .padding(spacing::XS)
    .width(Length::FillPortion(1));

    let sorts = choice::localized(i18n, &SortKey::ALL, SortKey::i18n_key);
    let sort_selected = choice::find(&sorts, &state.query.sort);
    let sort = pick_list(sorts, sort_selected, |c: Choice<SortKey>| {
        Message::SortSelected(c.value)
    })
    .padding(spacing::XS)
    .width(Length::FillPortion(1));

    let filters = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(search)
            .push(level)
            .push(sort),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card);

    let count = Text::new(i18n.tr_with_args(
        "library-count",
        &[
            ("shown", &visible.len().to_string()),
            ("total", &state.total().to_string()),
        ],
    ))
    .size(typography::BODY);

    let results: Element<'_, Message> = if visible.is_empty() {
        build_empty_state(i18n)
    } else {
        let mut grid = Column::new().spacing(spacing::LG);
        for chunk in visible.chunks(CARDS_PER_ROW) {
            let mut row = Row::new().spacing(spacing::LG);
            for video in chunk {
                row = row.push(build_card(i18n, *video));
            }
            grid = grid.push(row);
        }
        grid.into()
    };

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header)
        .push(filters)
        .push(count)
        .push(results);

    scrollable(content).into()
}

fn build_card<'a>(i18n: &I18n, video: &'a SampleVideo) -> Element<'a, Message> {
    let badge = container(Text::new(format!("{}m", video.duration_minutes)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::duration_badge);

    let thumbnail = container(
        Column::new()
            .push(
                Row::new()
                    .push(Space::new().width(Length::Fill))
                    .push(badge),
            )
            .push(
                container(Text::new(video.topic).size(typography::BODY_SM))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            ),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
    .style(styles::container::media_placeholder);
    // Thumbnails are not fetched; the source is shown on hover.
    let thumbnail = tooltip(
        thumbnail,
        container(Text::new(video.thumbnail_url.as_str()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::chip),
        tooltip::Position::Bottom,
    )
    .gap(4);

    let subtitle = Text::new(format!(
        "{} • {}",
        i18n.tr(video.level.i18n_key()),
        video.topic
    ))
    .size(typography::BODY_SM);

    let mut chips = Row::new().spacing(spacing::XXS);
    for concept in video.concepts.iter().take(VISIBLE_CONCEPTS) {
        chips = chips.push(
            container(Text::new(*concept).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::chip),
        );
    }
    if video.concepts.len() > VISIBLE_CONCEPTS {
        chips = chips.push(
            container(
                Text::new(format!("+{}", video.concepts.len() - VISIBLE_CONCEPTS))
                    .size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::chip),
        );
    }

    let stats = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(format!("★ {:.1}", video.rating))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::RATING_GOLD),
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            Text::new(i18n.tr_with_args(
                "library-views",
                &[("views", &format_count(video.views))],
            ))
            .size(typography::BODY_SM),
        );

    let download = button(
        container(Text::new(format!("⬇ {}", i18n.tr("library-download")))).center_x(Length::Fill),
    )
    .on_press(Message::Download(video.id))
    .width(Length::Fill)
    .style(styles::button::primary);

    let body = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(Text::new(video.title).size(typography::TITLE_SM))
        .push(subtitle)
        .push(chips)
        .push(stats)
        .push(download);

    Container::new(Column::new().push(thumbnail).push(body))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn build_empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Alignment::Center)
            .push(Text::new("🔍").size(typography::TITLE_LG))
            .push(Text::new(i18n.tr("library-empty-title")).size(typography::TITLE_MD))
            .push(Text::new(i18n.tr("library-empty-hint")).size(typography::BODY)),
    )
    .padding(spacing::XL)
    .center_x(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_full_catalog() {
        let state = State::default();
        assert_eq!(state.visible().len(), state.total());
        assert_eq!(state.total(), 6);
    }

    #[test]
    fn query_messages_update_visible_list() {
        let mut state = State::default();
        update(&mut state, Message::SearchChanged("MATRIX".into()));
        let ids: Vec<u32> = state.visible().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3]);

        update(&mut state, Message::SearchChanged(String::new()));
        update(
            &mut state,
            Message::LevelSelected(LevelFilter::Only(EducationLevel::MiddleSchool)),
        );
        let ids: Vec<u32> = state.visible().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![6]);
    }

    #[test]
    fn sort_message_reorders() {
        let mut state = State::default();
        update(&mut state, Message::SortSelected(SortKey::Views));
        assert_eq!(state.visible()[0].id, 6);
    }

    #[test]
    fn download_names_file_after_title() {
        let mut state = State::default();
        let event = update(&mut state, Message::Download(4));
        assert_eq!(
            event,
            Event::DownloadRequested {
                file_name: "physics:_wave_mechanics.mp4".to_string(),
                url: "/videos/waves.mp4".to_string(),
            }
        );
        assert_eq!(update(&mut state, Message::Download(99)), Event::None);
    }

    #[test]
    fn level_choices_start_with_all() {
        let i18n = I18n::default();
        let choices = level_filter_choices(&i18n);
        assert_eq!(choices.len(), EducationLevel::ALL.len() + 1);
        assert_eq!(choices[0].value, LevelFilter::All);
    }

    #[test]
    fn view_renders_results_and_empty_state() {
        let i18n = I18n::default();
        let mut state = State::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        update(&mut state, Message::SearchChanged("astronomy".into()));
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
