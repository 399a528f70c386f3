use std::fmt::{self, Display};

use galileo_types::cartesian::Point2;
use scream::types::Zone;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::instrument;

use crate::app::{UiState, ZoneSelection};

/// Selection changes produced by the map's click handler. The handler runs
/// inside the galileo event processor and cannot touch egui state directly,
/// so changes travel over a channel and are applied at the top of each frame.
#[derive(Debug)]
pub enum Event {
    ZoneSelected { zone: Zone, at: Point2 },
    SelectionCleared,
}

impl Event {
    #[instrument(skip(ui_state))]
    pub fn handle(self, ui_state: &mut UiState) {
        match self {
            Self::ZoneSelected { zone, at } => {
                log::debug!("Processed event ZoneSelected ({})", zone.name());
                ui_state.popup = Some(ZoneSelection { zone, at });
            }
            Self::SelectionCleared => {
                log::debug!("Processed event SelectionCleared");
                ui_state.popup = None;
            }
        }
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::ZoneSelected { .. } => "ZoneSelected",
                Self::SelectionCleared => "SelectionCleared",
            }
        )
    }
}

pub struct EventHandler {
    recv: UnboundedReceiver<Event>,
}

impl EventHandler {
    pub fn new(recv: UnboundedReceiver<Event>) -> Self {
        Self { recv }
    }

    pub fn handle_events(&mut self, ui_state: &mut UiState) {
        loop {
            match self.recv.try_recv() {
                Ok(event) => event.handle(ui_state),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    panic!("All senders disconnected from event channel.")
                }
            }
        }
    }
}
