mod common;

use common::*;
use newscards::model::PostId;
use newscards::strings::Strings;
use newscards::ui::assets::AssetCatalog;
use newscards::ui::popular_card::{CardSize, PopularCard, PopularCardIntent, TITLE_MAX_LINES};
use newscards::ui::semantics::Role;
use newscards::ui::text::ELLIPSIS;
use newscards::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

const LONG_TITLE: &str =
    "An extraordinarily long headline that keeps going well past the two lines a card allows";
const LONG_AUTHOR: &str = "Bartholomew Featherstonehaugh-Smithington";

#[test]
fn activation_navigates_once_with_post_id() {
    let post = post("p1", "Title", "Author");
    let strings = Strings::default();
    let theme = Theme::default();
    let assets = AssetCatalog::default();
    let card = PopularCard::new(&post, &strings, &theme, &assets);

    let mut calls = Vec::new();
    card.dispatch(PopularCardIntent::Activate, &mut |id: &PostId| {
        calls.push(id.clone())
    });

    assert_eq!(calls, vec![PostId::new("p1")]);
}

#[test]
fn caption_uses_min_read_template() {
    let post = post("p1", "Title", "Author");
    let strings = Strings::default();
    let theme = Theme::default();
    let assets = AssetCatalog::default();
    let card = PopularCard::new(&post, &strings, &theme, &assets);

    assert_eq!(card.caption(), "Apr 1 - 5 min read");

    let rows = render_rows(40, 16, |area, buf| (&card).render(area, buf));
    assert!(rows.iter().any(|row| row.contains("Apr 1 - 5 min read")));
}

#[test]
fn long_title_and_author_are_ellipsized() {
    let post = post("p1", LONG_TITLE, LONG_AUTHOR);
    let strings = Strings::default();
    let theme = Theme::default();
    let assets = AssetCatalog::default();
    let card = PopularCard::new(&post, &strings, &theme, &assets).size(CardSize {
        width: 24,
        height: 14,
    });
    let content = card.layout(Rect::new(0, 0, 40, 20)).content;

    let title = card.title_lines(content.width);
    assert_eq!(title.len(), TITLE_MAX_LINES);
    assert!(title[1].ends_with(ELLIPSIS));
    assert!(title.iter().all(|line| line.width() <= content.width as usize));

    let author = card.author_line(content.width).unwrap();
    assert!(author.ends_with(ELLIPSIS));
    assert!(author.width() <= content.width as usize);

    let rows = render_rows(40, 20, |area, buf| (&card).render(area, buf));
    let text = rows.join("\n");
    assert!(text.contains(title[1].as_str()));
    assert!(text.contains(author.as_str()));
    assert!(!text.contains("Smithington"));
}

#[test]
fn short_text_is_not_ellipsized() {
    let post = post("p1", "Short", "Ada");
    let strings = Strings::default();
    let theme = Theme::default();
    let assets = AssetCatalog::default();
    let card = PopularCard::new(&post, &strings, &theme, &assets);

    assert_eq!(card.title_lines(30), vec!["Short"]);
    assert_eq!(card.author_line(30).as_deref(), Some("Ada"));
}

#[test]
fn size_override_changes_card_bounds() {
    let post = post("p1", "Title", "Author");
    let strings = Strings::default();
    let theme = Theme::default();
    let assets = AssetCatalog::default();
    let card = PopularCard::new(&post, &strings, &theme, &assets).size(CardSize {
        width: 20,
        height: 12,
    });
    let area = Rect::new(0, 0, 80, 40);

    assert_eq!(card.layout(area).card, Rect::new(0, 0, 20, 12));
    assert_eq!(card.hit_test(area, 19, 11), Some(PopularCardIntent::Activate));
    assert_eq!(card.hit_test(area, 20, 11), None);
}

#[test]
fn semantics_carry_read_article_label() {
    let post = post("p1", "Title", "Author");
    let strings = Strings::default();
    let theme = Theme::default();
    let assets = AssetCatalog::default();
    let card = PopularCard::new(&post, &strings, &theme, &assets);

    let tree = card.semantics();
    assert_eq!(tree.role, Some(Role::Button));
    assert_eq!(tree.click_label.as_deref(), Some("read article"));
    assert_eq!(tree.on_click, Some(PopularCardIntent::Activate));
    assert_eq!(tree.focus_order().len(), 1);
}
