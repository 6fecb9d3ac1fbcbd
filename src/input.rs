//! Input model: mouse buttons, board cells, and the button-state router.
//!
//! The browser reports three independent mouse-button transitions. The board
//! gives them a combined meaning: the left button alone previews a single
//! cell, left plus right (a chord) previews a 3x3 block, and a right press on
//! its own flags a cell. Releasing any button digs whatever is previewed.
//!
//! [`InputCore`] owns the held-button flags and turns each DOM event into an
//! ordered list of [`Action`]s. It never talks to the game directly, so every
//! transition can be checked without a browser.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A canvas-local position in CSS pixels (`MouseEvent.offsetX/Y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A board cell in tile units. `x` grows rightward, `y` downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell under `point`, truncating toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn at(point: Point, cell_size: f64) -> Self {
        Self {
            x: (point.x / cell_size).trunc() as i32,
            y: (point.y / cell_size).trunc() as i32,
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

impl Button {
    /// Map `MouseEvent.button`. Back/forward and other extra buttons are `None`.
    #[must_use]
    pub fn from_dom(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Which mouse buttons are currently held.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    /// Record a press or release of `button`.
    pub fn set(&mut self, button: Button, down: bool) {
        match button {
            Button::Primary => self.left = down,
            Button::Middle => self.middle = down,
            Button::Secondary => self.right = down,
        }
    }

    /// What the held buttons mean for the cell under the cursor.
    #[must_use]
    pub fn intent(self) -> Intent {
        match (self.left, self.right) {
            (true, false) => Intent::Mark,
            (true, true) => Intent::MarkBlock,
            _ => Intent::Idle,
        }
    }
}

/// Combined meaning of the held buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Nothing to preview.
    Idle,
    /// Preview the single cell under the cursor.
    Mark,
    /// Preview the 3x3 block around the cursor.
    MarkBlock,
}

/// A game call produced by an input event, in the order it must be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleFlag(Cell),
    Mark(Cell),
    MarkBlock(Cell),
    DigMarked,
}

/// Button-state machine translating mouse events into game actions.
#[derive(Debug, Clone)]
pub struct InputCore {
    buttons: ButtonState,
    cell_size: f64,
}

impl InputCore {
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self { buttons: ButtonState::default(), cell_size }
    }

    /// Current held-button flags.
    #[must_use]
    pub fn buttons(&self) -> ButtonState {
        self.buttons
    }

    /// A button went down at `point`.
    ///
    /// A right press with the left button up flags the cell first; the
    /// combined-button preview is then evaluated at the same cell.
    pub fn on_mouse_down(&mut self, point: Point, button: Option<Button>) -> Vec<Action> {
        let cell = Cell::at(point, self.cell_size);
        let mut actions = Vec::new();

        if let Some(button) = button {
            self.buttons.set(button, true);
            if button == Button::Secondary && !self.buttons.left {
                actions.push(Action::ToggleFlag(cell));
            }
        }

        actions.extend(self.preview(cell));
        actions
    }

    /// The pointer moved to `point`; refresh the preview if a button is held.
    pub fn on_mouse_move(&mut self, point: Point) -> Vec<Action> {
        let cell = Cell::at(point, self.cell_size);
        self.preview(cell).into_iter().collect()
    }

    /// A button was released. Digging happens on every release.
    pub fn on_mouse_up(&mut self, button: Option<Button>) -> Vec<Action> {
        if let Some(button) = button {
            self.buttons.set(button, false);
        }
        vec![Action::DigMarked]
    }

    fn preview(&self, cell: Cell) -> Option<Action> {
        match self.buttons.intent() {
            Intent::Mark => Some(Action::Mark(cell)),
            Intent::MarkBlock => Some(Action::MarkBlock(cell)),
            Intent::Idle => None,
        }
    }
}
