//! PDF Chat Page UI Module (MVVM Standard)
//!
//! Structure:
//! - state.rs: pure state object and transitions (no DOM, no signals)
//! - progress.rs: simulated upload progress and its tick driver
//! - model.rs: API functions for /upload_pdf/ and /ask/
//! - view_model.rs: PdfChatVm with RwSignals, runs effects
//! - view.rs: Main component PdfChatPage

mod model;
mod progress;
mod state;
mod view;
mod view_model;

pub use progress::{IncrementSource, ProgressStep, RandomIncrements, UploadProgress};
pub use state::{
    ChatControls, ChatEffect, FileOrigin, PdfChatState, TickResult, UploadOutcome, UploadStatus,
};
pub use view::PdfChatPage;
pub use view_model::PdfChatVm;
