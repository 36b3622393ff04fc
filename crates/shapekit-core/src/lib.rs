//! # ShapeKit Core
//!
//! Core types shared by the ShapeKit crates.
//! Provides the unified error taxonomy and the event bus used to notify
//! the UI shell about scene, selection and hover changes.

pub mod error;
pub mod event_bus;

pub use error::{Error, GroupingError, Result};

pub use event_bus::{
    ControlsSnapshot, Delivery, EditorEvent, EventBus, EventBusConfig, EventBusError, EventCategory,
    EventFilter, GroupButton, HandleMode, SubscriptionId,
};
