//! Change notifications for views that mirror editor state.
//!
//! Views subscribe once and drain their receiver whenever they redraw, in the same way
//! the app drains async results from a channel. Subscribers whose receiver has been
//! dropped are forgotten on the next emit.

use crate::types::{CoordSystem, EdgeId, EditMode, VertexId};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Something observable changed in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A vertex was inserted
    VertexAdded(VertexId),
    /// A vertex changed position (drag)
    VertexMoved(VertexId),
    /// A vertex was deleted; its edges are announced separately
    VertexRemoved(VertexId),
    /// An edge was created
    EdgeAdded(EdgeId),
    /// An edge was deleted, explicitly or by cascade
    EdgeRemoved(EdgeId),
    /// The selected vertex changed
    SelectionChanged(Option<VertexId>),
    /// The pending edge source changed
    PendingChanged(Option<VertexId>),
    /// The edit mode changed
    ModeChanged(EditMode),
    /// The displayed coordinate system changed
    CoordSystemChanged(CoordSystem),
    /// Every vertex and edge was removed at once
    Cleared,
}

impl ChangeEvent {
    /// Whether the event changes what a vertex or edge list shows.
    pub fn affects_lists(&self) -> bool {
        !matches!(self, ChangeEvent::ModeChanged(_) | ChangeEvent::PendingChanged(_))
    }
}

/// Fan-out of [`ChangeEvent`]s to any number of channel subscribers.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    subscribers: Vec<Sender<ChangeEvent>>,
}

impl ChangeNotifier {
    /// Registers a new subscriber and returns its receiving end.
    pub fn subscribe(&mut self) -> Receiver<ChangeEvent> {
        let (sender, receiver) = channel();
        self.subscribers.push(sender);
        receiver
    }

    /// Delivers `event` to every live subscriber.
    pub fn emit(&mut self, event: ChangeEvent) {
        self.subscribers.retain(|s| s.send(event).is_ok());
    }

    /// Number of subscribers still registered.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
