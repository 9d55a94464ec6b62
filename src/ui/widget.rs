/// Visibility state of the floating chat widget.
///
/// closed → open → minimized → open → closed; minimize only makes sense on
/// an open widget, everything can be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
    Minimized,
}

impl WidgetState {
    pub fn open(self) -> WidgetState {
        WidgetState::Open
    }

    pub fn minimize(self) -> WidgetState {
        match self {
            WidgetState::Open => WidgetState::Minimized,
            other => other,
        }
    }

    pub fn close(self) -> WidgetState {
        WidgetState::Closed
    }
}

/// Pixel coordinates of the widget's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Position {
    /// Keep the widget fully inside the viewport. A viewport smaller than
    /// the widget pins it to the top-left edge.
    pub fn clamped(self, widget: Size, viewport: Size) -> Position {
        let max_x = (viewport.width - widget.width).max(0.0);
        let max_y = (viewport.height - widget.height).max(0.0);
        Position {
            x: self.x.clamp(0.0, max_x),
            y: self.y.clamp(0.0, max_y),
        }
    }
}

/// Draggable floating widget: raw pointer deltas against a captured start
/// position, clamped on every move and on viewport resize. No inertia.
#[derive(Debug, Clone, Copy)]
pub struct FloatingWidget {
    pub state: WidgetState,
    pub position: Position,
    pub size: Size,
    drag: Option<DragStart>,
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    pointer: Position,
    widget: Position,
}

impl FloatingWidget {
    pub fn new(position: Position, size: Size) -> Self {
        Self {
            state: WidgetState::default(),
            position,
            size,
            drag: None,
        }
    }

    pub fn begin_drag(&mut self, pointer: Position) {
        self.drag = Some(DragStart {
            pointer,
            widget: self.position,
        });
    }

    pub fn drag_to(&mut self, pointer: Position, viewport: Size) {
        let Some(start) = self.drag else { return };
        let moved = Position {
            x: start.widget.x + (pointer.x - start.pointer.x),
            y: start.widget.y + (pointer.y - start.pointer.y),
        };
        self.position = moved.clamped(self.size, viewport);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    pub fn on_resize(&mut self, viewport: Size) {
        self.position = self.position.clamped(self.size, viewport);
    }
}
