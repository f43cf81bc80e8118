use crate::event::{HoverEnterEvent, HoverEvent, HoverLeaveEvent};
use log::trace;
use tessera_geometry::Voronoi;

/// Resolves a pointer location to the record under it
pub trait PointLocator {
    /// Index of the record whose cell contains `(x, y)`, if any
    fn locate(&self, x: f64, y: f64) -> Option<usize>;

    /// Like [`PointLocator::locate`], limited to records within `radius`
    fn locate_within(&self, x: f64, y: f64, radius: f64) -> Option<usize>;
}

impl PointLocator for Voronoi {
    fn locate(&self, x: f64, y: f64) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Voronoi::locate(self, x, y)
    }

    fn locate_within(&self, x: f64, y: f64, radius: f64) -> Option<usize> {
        if !self.bounds().contains(x, y) {
            return None;
        }
        Voronoi::locate_within(self, x, y, radius)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverTrackerConfig {
    /// Ignore records further than this from the pointer
    pub max_distance: Option<f64>,
}

/// Tracks the hovered record across pointer moves.
///
/// Each move is resolved on its own; a newer position simply replaces the
/// previous one.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    config: HoverTrackerConfig,
    current: Option<usize>,
}

impl HoverTracker {
    pub fn new(config: HoverTrackerConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.config.max_distance = Some(max_distance);
        self
    }

    pub fn config(&self) -> &HoverTrackerConfig {
        &self.config
    }

    /// Currently hovered record
    pub fn hovered(&self) -> Option<usize> {
        self.current
    }

    /// Resolves the record under `position` and returns the leave and enter
    /// events caused by the move, leave first
    pub fn pointer_moved(
        &mut self,
        position: [f64; 2],
        locator: &impl PointLocator,
    ) -> Vec<HoverEvent> {
        let [x, y] = position;
        let target = match self.config.max_distance {
            Some(radius) => locator.locate_within(x, y, radius),
            None => locator.locate(x, y),
        };

        let mut events = Vec::new();
        match (self.current, target) {
            (Some(prev), Some(curr)) if prev != curr => {
                events.push(HoverEvent::Leave(HoverLeaveEvent {
                    position: Some(position),
                    index: prev,
                }));
                events.push(HoverEvent::Enter(HoverEnterEvent {
                    position,
                    index: curr,
                }));
            }
            (Some(prev), None) => {
                events.push(HoverEvent::Leave(HoverLeaveEvent {
                    position: Some(position),
                    index: prev,
                }));
            }
            (None, Some(curr)) => {
                events.push(HoverEvent::Enter(HoverEnterEvent {
                    position,
                    index: curr,
                }));
            }
            _ => {}
        }

        if !events.is_empty() {
            trace!("hover {:?} -> {:?} at {:?}", self.current, target, position);
        }
        self.current = target;
        events
    }

    /// Pointer left the chart: leave the hovered record, if any
    pub fn pointer_left(&mut self) -> Vec<HoverEvent> {
        match self.current.take() {
            Some(index) => vec![HoverEvent::Leave(HoverLeaveEvent {
                position: None,
                index,
            })],
            None => Vec::new(),
        }
    }
}
