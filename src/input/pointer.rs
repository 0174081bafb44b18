use glam::Vec2;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle of a click subscription on a [`PointerInput`].
    pub struct ClickSubscription;
}

/// Platform-independent pointer state with a "click anywhere" event source.
///
/// Components that react to clicks subscribe and later drain their own
/// inbox, so several mounted components never share listener state and
/// an unsubscribed component stops receiving clicks immediately.
#[derive(Default, Debug, Clone)]
pub struct PointerInput {
    /// Current cursor position inside the viewport
    pub cursor_position: Vec2,
    /// Viewport size
    pub screen_size: Vec2,
    /// Position of the most recent click
    pub last_click: Option<Vec2>,
    // Pending click count per subscriber
    inboxes: SlotMap<ClickSubscription, u32>,
}

impl PointerInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> ClickSubscription {
        self.inboxes.insert(0)
    }

    /// Returns `false` if the subscription was already removed.
    pub fn unsubscribe(&mut self, subscription: ClickSubscription) -> bool {
        self.inboxes.remove(subscription).is_some()
    }

    #[must_use]
    pub fn is_subscribed(&self, subscription: ClickSubscription) -> bool {
        self.inboxes.contains_key(subscription)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inboxes.len()
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.screen_size = Vec2::new(width as f32, height as f32);
    }

    pub fn handle_cursor_move(&mut self, x: f64, y: f64) {
        self.cursor_position = Vec2::new(x as f32, y as f32);
    }

    /// Delivers a click at `position` to every subscriber.
    /// Returns the number of subscribers reached.
    pub fn dispatch_click(&mut self, position: Vec2) -> usize {
        self.last_click = Some(position);
        for (_, pending) in &mut self.inboxes {
            *pending = pending.saturating_add(1);
        }
        log::debug!(
            "Click at ({}, {}) delivered to {} subscriber(s)",
            position.x,
            position.y,
            self.inboxes.len()
        );
        self.inboxes.len()
    }

    /// Delivers a click at the current cursor position.
    pub fn click(&mut self) -> usize {
        self.dispatch_click(self.cursor_position)
    }

    /// Returns and clears the pending clicks of `subscription`.
    pub fn take_clicks(&mut self, subscription: ClickSubscription) -> u32 {
        self.inboxes
            .get_mut(subscription)
            .map_or(0, std::mem::take)
    }
}
