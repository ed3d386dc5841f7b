use std::collections::HashMap;
use std::rc::Rc;

use yew::Reducible;

/// What an overlay is attached to: the service circle or a named area marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverlayTarget {
    Radius,
    Area(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    Enter,
    Leave,
    Click,
    Close,
}

/// Hover-opened overlays follow the pointer; click-opened overlays are
/// pinned and stay up until closed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Hovered,
    Pinned,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        self != OverlayState::Hidden
    }

    pub fn is_pinned(self) -> bool {
        self == OverlayState::Pinned
    }

    pub fn on(self, event: OverlayEvent) -> Self {
        match (self, event) {
            (_, OverlayEvent::Close) => OverlayState::Hidden,
            (_, OverlayEvent::Click) => OverlayState::Pinned,
            (OverlayState::Pinned, _) => OverlayState::Pinned,
            (_, OverlayEvent::Enter) => OverlayState::Hovered,
            (_, OverlayEvent::Leave) => OverlayState::Hidden,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayAction {
    pub target: OverlayTarget,
    pub event: OverlayEvent,
}

impl OverlayAction {
    pub fn new(target: OverlayTarget, event: OverlayEvent) -> Self {
        Self { target, event }
    }
}

/// Overlay state for every target on one map. Targets not present are hidden.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Overlays {
    states: HashMap<OverlayTarget, OverlayState>,
}

impl Overlays {
    pub fn state(&self, target: &OverlayTarget) -> OverlayState {
        self.states.get(target).copied().unwrap_or_default()
    }

    pub fn apply(&mut self, action: OverlayAction) {
        let next = self.state(&action.target).on(action.event);
        if next.is_open() {
            self.states.insert(action.target, next);
        } else {
            self.states.remove(&action.target);
        }
    }

    #[cfg(test)]
    pub fn open_count(&self) -> usize {
        self.states.len()
    }
}

impl Reducible for Overlays {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.state(&action.target).on(action.event) == self.state(&action.target) {
            return self;
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(name: &str) -> OverlayTarget {
        OverlayTarget::Area(name.to_string())
    }

    #[test]
    fn everything_starts_hidden() {
        let overlays = Overlays::default();
        assert_eq!(overlays.state(&OverlayTarget::Radius), OverlayState::Hidden);
        assert_eq!(overlays.state(&area("Minneapolis")), OverlayState::Hidden);
        assert_eq!(overlays.open_count(), 0);
    }

    #[test]
    fn hover_opens_and_leave_closes() {
        let mut overlays = Overlays::default();
        overlays.apply(OverlayAction::new(area("Minneapolis"), OverlayEvent::Enter));
        assert_eq!(overlays.state(&area("Minneapolis")), OverlayState::Hovered);
        overlays.apply(OverlayAction::new(area("Minneapolis"), OverlayEvent::Leave));
        assert_eq!(overlays.state(&area("Minneapolis")), OverlayState::Hidden);
        assert_eq!(overlays.open_count(), 0);
    }

    #[test]
    fn click_pins_through_pointer_leave() {
        let mut overlays = Overlays::default();
        let target = area("St. Paul");
        overlays.apply(OverlayAction::new(target.clone(), OverlayEvent::Enter));
        overlays.apply(OverlayAction::new(target.clone(), OverlayEvent::Click));
        overlays.apply(OverlayAction::new(target.clone(), OverlayEvent::Leave));
        assert_eq!(overlays.state(&target), OverlayState::Pinned);
        overlays.apply(OverlayAction::new(target.clone(), OverlayEvent::Enter));
        assert_eq!(overlays.state(&target), OverlayState::Pinned);
        overlays.apply(OverlayAction::new(target.clone(), OverlayEvent::Close));
        assert_eq!(overlays.state(&target), OverlayState::Hidden);
    }

    #[test]
    fn targets_are_independent() {
        let mut overlays = Overlays::default();
        overlays.apply(OverlayAction::new(OverlayTarget::Radius, OverlayEvent::Enter));
        overlays.apply(OverlayAction::new(area("Plymouth"), OverlayEvent::Click));
        overlays.apply(OverlayAction::new(area("Bloomington"), OverlayEvent::Leave));
        assert!(overlays.state(&OverlayTarget::Radius).is_open());
        assert!(overlays.state(&area("Plymouth")).is_pinned());
        assert_eq!(overlays.state(&area("Bloomington")), OverlayState::Hidden);
        assert_eq!(overlays.open_count(), 2);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let overlays = Rc::new(Overlays::default());
        let next = overlays
            .clone()
            .reduce(OverlayAction::new(area("Minnetonka"), OverlayEvent::Leave));
        assert!(Rc::ptr_eq(&overlays, &next));

        let opened = overlays.reduce(OverlayAction::new(area("Minnetonka"), OverlayEvent::Enter));
        assert!(opened.state(&area("Minnetonka")).is_open());
    }
}
