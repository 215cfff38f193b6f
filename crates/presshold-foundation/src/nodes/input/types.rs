use presshold_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerEventKind {
    fn phase(self) -> PointerPhase {
        match self {
            PointerEventKind::Down => PointerPhase::Start,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::End,
            PointerEventKind::Cancel => PointerPhase::Cancel,
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
}

/// Pressed-button bit set. Touch input reports [`PointerButtons::NONE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn with(mut self, button: PointerButton) -> Self {
        self.0 |= 1 << (button as u8);
        self
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Pointer event with consumption tracking.
///
/// Another handler that claims the stream (a scroll container, for example)
/// consumes the event; a press-and-hold recognizer treats a consumed event
/// as the end of its attempt.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    /// Position in the local coordinates of the press surface.
    pub position: Point,
    pub buttons: PointerButtons,
    /// Shared via Rc<Cell> so consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            phase: kind.phase(),
            position,
            buttons: PointerButtons::NONE,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Touch contacts and primary-button presses can start a long press.
    pub fn is_primary_press(&self) -> bool {
        self.buttons.is_empty() || self.buttons.contains(PointerButton::Primary)
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
