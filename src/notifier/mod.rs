//! The poll → merge → classify → notify → sleep loop.

mod notification_loop;

pub use notification_loop::{CycleReport, LoopTiming, NotificationLoop};
