use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use crate::catalog::EmojiCatalog;
use crate::search::DEFAULT_DEBOUNCE;
use crate::storage::{MemoryStore, RecentStore};
use crate::ui::EmojiPicker;

fn sample_picker() -> (EmojiPicker, MemoryStore) {
    let store = MemoryStore::new();
    let observer = store.clone();
    let catalog: EmojiCatalog = [("fire", "🔥"), ("fire_truck", "🚒"), ("star", "⭐")]
        .into_iter()
        .collect();
    (EmojiPicker::new(catalog, store), observer)
}

fn draw(picker: &mut EmojiPicker) -> String {
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|frame| picker.draw(frame, frame.area()))
        .unwrap();
    terminal.backend().to_string()
}

fn key(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

fn press(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_and_commit(picker: &mut EmojiPicker, text: &str) {
    let start = Instant::now();
    for ch in text.chars() {
        picker.handle_event(&key(ch), start);
    }
    assert!(picker.pump(start + DEFAULT_DEBOUNCE));
}

#[test]
fn placeholder_renders_until_text_is_typed() {
    let (mut picker, _) = sample_picker();

    let view = draw(&mut picker);
    assert!(view.contains("Search emojis..."));
    assert!(view.contains("Emoji"));

    picker.handle_event(&key('f'), Instant::now());
    let view = draw(&mut picker);
    assert!(view.contains("> f"));
    assert!(!view.contains("Search emojis..."));
}

#[test]
fn committed_query_draws_its_matches_as_cells() {
    let (mut picker, _) = sample_picker();

    type_and_commit(&mut picker, "fire");
    let view = draw(&mut picker);

    assert!(view.contains("🔥"));
    assert!(view.contains("🚒"));
    assert!(!view.contains("⭐"));
    assert_eq!(picker.cells.len(), 2);
}

#[test]
fn unmatched_query_shows_the_empty_message() {
    let (mut picker, _) = sample_picker();

    type_and_commit(&mut picker, "zzz");
    let view = draw(&mut picker);

    assert!(view.contains("No matching emoji"));
    assert!(picker.cells.is_empty());
}

#[test]
fn recents_render_while_the_query_is_empty() {
    let mut store = MemoryStore::new();
    store.save(&["🔥".to_string()]).unwrap();
    let catalog: EmojiCatalog = [("fire", "🔥")].into_iter().collect();
    let mut picker = EmojiPicker::new(catalog, store);

    let view = draw(&mut picker);

    assert!(view.contains("Recently used"));
    assert!(view.contains("🔥"));
    assert_eq!(picker.cells.len(), 1);
}

#[test]
fn cells_take_their_display_width() {
    let (mut picker, _) = sample_picker();

    type_and_commit(&mut picker, "fire");
    draw(&mut picker);

    // Both 🔥 and 🚒 occupy two columns.
    assert!(picker.cells.iter().all(|cell| cell.area.width == 2));
}

#[test]
fn pressing_a_drawn_cell_picks_that_emoji() {
    let (mut picker, observer) = sample_picker();

    type_and_commit(&mut picker, "fire");
    draw(&mut picker);

    // Second cell is fire_truck.
    let cell = picker.cells[1].area;
    let outcome = picker
        .handle_event(&press(cell.x, cell.y), Instant::now())
        .expect("press on a cell yields a pick");

    assert_eq!(outcome.emoji, "🚒");
    assert_eq!(outcome.query, "fire");
    assert_eq!(picker.recent().entries(), ["🚒"]);
    assert_eq!(observer.stored(), Some(vec!["🚒".to_string()]));
}

#[test]
fn presses_off_any_cell_pick_nothing() {
    let (mut picker, _) = sample_picker();

    type_and_commit(&mut picker, "fire");
    draw(&mut picker);

    assert!(picker.handle_event(&press(29, 7), Instant::now()).is_none());
    assert!(picker.recent().is_empty());
}

#[test]
fn recents_cells_are_pickable_too() {
    let mut store = MemoryStore::new();
    store.save(&["⭐".to_string()]).unwrap();
    let catalog: EmojiCatalog = [("star", "⭐")].into_iter().collect();
    let mut picker = EmojiPicker::new(catalog, store);

    draw(&mut picker);
    let cell = picker.cells[0].area;
    let outcome = picker
        .handle_event(&press(cell.x, cell.y), Instant::now())
        .expect("press on a recents cell yields a pick");

    assert_eq!(outcome.emoji, "⭐");
    assert_eq!(outcome.query, "");
}

#[test]
fn chorded_keys_leave_the_query_alone() {
    let (mut picker, _) = sample_picker();

    let chord = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    picker.handle_event(&chord, Instant::now());

    assert_eq!(picker.search().input(), "");
}

#[test]
fn deleting_the_last_character_clears_matches_at_once() {
    let (mut picker, _) = sample_picker();

    type_and_commit(&mut picker, "f");
    assert_eq!(picker.search().match_count(), 2);

    let backspace = Event::Key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    picker.handle_event(&backspace, Instant::now());

    // No pump needed: emptying the input commits synchronously.
    assert_eq!(picker.search().committed(), "");
    assert_eq!(picker.search().match_count(), 0);
}

#[test]
fn draw_records_the_panel_area() {
    let (mut picker, _) = sample_picker();
    assert_eq!(picker.area(), None);

    draw(&mut picker);

    let area = picker.area().expect("area recorded during draw");
    assert_eq!((area.width, area.height), (30, 8));
}
