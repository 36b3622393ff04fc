//! # Event Bus Module
//!
//! Provides the observer interface between the editor core and the UI shell.
//!
//! ## Overview
//!
//! - The designer state publishes typed events after every state change
//! - Subscribers filter by category and receive events synchronously
//! - Async shells can poll a broadcast receiver instead
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_core::event_bus::{EditorEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Controls]),
//!     |event| {
//!         if let EditorEvent::ControlsChanged(controls) = event {
//!             println!("button: {}", controls.group_button);
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
