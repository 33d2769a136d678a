//! Dismissal triggers: presses outside the panel and terminal resizes.
//!
//! Hosts bind callbacks against the panel's drawn area and feed every
//! terminal event through [`DismissRegistry::dispatch`]. Each binding is
//! addressed by the [`BindingId`] returned at registration, so several
//! panels can coexist in one registry and unbind independently.

use ratatui::crossterm::event::{Event, MouseEventKind};
use ratatui::layout::Rect;

/// Handle for one registered dismissal binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

enum Trigger {
    OutsidePress { area: Rect },
    Resize,
}

struct Binding {
    id: BindingId,
    trigger: Trigger,
    callback: Box<dyn FnMut()>,
}

/// Routes terminal events to dismissal callbacks.
#[derive(Default)]
pub struct DismissRegistry {
    bindings: Vec<Binding>,
    next_id: u64,
}

impl DismissRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke `callback` on any mouse press (either button) landing
    /// outside `area`. Presses inside the area are the panel's own
    /// business and never trigger the callback.
    pub fn bind_outside_press(
        &mut self,
        area: Rect,
        callback: impl FnMut() + 'static,
    ) -> BindingId {
        self.bind(Trigger::OutsidePress { area }, Box::new(callback))
    }

    /// Invoke `callback` whenever the terminal is resized.
    pub fn bind_resize(&mut self, callback: impl FnMut() + 'static) -> BindingId {
        self.bind(Trigger::Resize, Box::new(callback))
    }

    fn bind(&mut self, trigger: Trigger, callback: Box<dyn FnMut()>) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding {
            id,
            trigger,
            callback,
        });
        id
    }

    /// Remove a binding. Returns `false` when `id` is not registered.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|binding| binding.id != id);
        self.bindings.len() != before
    }

    /// Move an outside-press binding to a new area, typically after a
    /// redraw relaid the panel out. Returns `false` for unknown ids and
    /// for resize bindings, which watch no area.
    pub fn relocate(&mut self, id: BindingId, area: Rect) -> bool {
        for binding in &mut self.bindings {
            if binding.id != id {
                continue;
            }
            if let Trigger::OutsidePress { area: watched } = &mut binding.trigger {
                *watched = area;
                return true;
            }
            return false;
        }
        false
    }

    /// Route one terminal event, invoking every binding it triggers.
    /// Returns the number of callbacks that fired.
    pub fn dispatch(&mut self, event: &Event) -> usize {
        let mut fired = 0;
        for binding in &mut self.bindings {
            let hit = match (&binding.trigger, event) {
                (Trigger::OutsidePress { area }, Event::Mouse(mouse)) => {
                    matches!(mouse.kind, MouseEventKind::Down(_))
                        && !point_in_rect(mouse.column, mouse.row, *area)
                }
                (Trigger::Resize, Event::Resize(_, _)) => true,
                _ => false,
            };
            if hit {
                (binding.callback)();
                fired += 1;
            }
        }
        fired
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl std::fmt::Debug for DismissRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissRegistry")
            .field("bindings", &self.bindings.len())
            .finish_non_exhaustive()
    }
}

/// Check if a point (column, row) is inside a rectangle.
///
/// A zero-width or zero-height rectangle contains nothing.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
    if area.width == 0 || area.height == 0 {
        return false;
    }
    let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
    let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
    inside_x && inside_y
}
