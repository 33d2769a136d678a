//! Run the emoji picker as a centered dropdown over a blank screen.
//!
//! A press outside the panel or a terminal resize dismisses it, the way
//! a host application would close a dropdown. Esc also exits.

use std::cell::Cell;
use std::io::stdout;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use mojibox::{DismissRegistry, EmojiPicker, PickOutcome};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
};
use ratatui::crossterm::execute;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

const PANEL_WIDTH: u16 = 44;
const PANEL_HEIGHT: u16 = 12;

fn main() -> Result<()> {
    let mut picker = EmojiPicker::open_default()?;
    let mut dismiss = DismissRegistry::new();

    let dismissed = Rc::new(Cell::new(false));
    let on_outside = Rc::clone(&dismissed);
    let on_resize = Rc::clone(&dismissed);
    let outside = dismiss.bind_outside_press(Rect::default(), move || on_outside.set(true));
    dismiss.bind_resize(move || on_resize.set(true));

    let mut terminal = ratatui::init();
    terminal.clear()?;
    execute!(stdout(), EnableMouseCapture)?;

    let picked = run(&mut terminal, &mut picker, &mut dismiss, outside, &dismissed);

    ratatui::restore();
    execute!(stdout(), DisableMouseCapture)?;

    match picked? {
        Some(outcome) => println!("Picked {} (query: {:?})", outcome.emoji, outcome.query),
        None => println!("Dismissed without a pick"),
    }
    Ok(())
}

fn run(
    terminal: &mut ratatui::DefaultTerminal,
    picker: &mut EmojiPicker,
    dismiss: &mut DismissRegistry,
    outside: mojibox::BindingId,
    dismissed: &Rc<Cell<bool>>,
) -> Result<Option<PickOutcome>> {
    loop {
        terminal.draw(|frame| {
            let area = centered(frame.area(), PANEL_WIDTH, PANEL_HEIGHT);
            picker.draw(frame, area);
        })?;
        // The panel moves when the terminal does; keep the outside-press
        // binding watching the drawn area.
        if let Some(area) = picker.area() {
            dismiss.relocate(outside, area);
        }

        if event::poll(Duration::from_millis(50))? {
            let event = event::read()?;
            if let Event::Key(key) = &event {
                if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc {
                    return Ok(None);
                }
            }
            if let Some(outcome) = picker.handle_event(&event, Instant::now()) {
                return Ok(Some(outcome));
            }
            dismiss.dispatch(&event);
            if dismissed.get() {
                return Ok(None);
            }
        }

        picker.pump(Instant::now());
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
