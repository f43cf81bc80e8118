/// Events emitted as the pointer moves across the cells of a chart
#[derive(Debug, Clone, PartialEq)]
pub enum HoverEvent {
    /// Pointer moved into the cell of a record
    Enter(HoverEnterEvent),

    /// Pointer moved out of the cell of a record
    Leave(HoverLeaveEvent),
}

impl HoverEvent {
    /// Index of the record the event refers to
    pub fn index(&self) -> usize {
        match self {
            HoverEvent::Enter(event) => event.index,
            HoverEvent::Leave(event) => event.index,
        }
    }
}

/// Hover enter event data
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEnterEvent {
    pub position: [f64; 2],
    pub index: usize,
}

/// Hover leave event data. The position is `None` when the pointer left the
/// chart altogether.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverLeaveEvent {
    pub position: Option<[f64; 2]>,
    pub index: usize,
}
