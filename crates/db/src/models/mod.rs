//! Document models and write payloads.

pub mod record;
