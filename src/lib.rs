//! RAG chat widget
//!
//! A chat panel that collects user text, posts it to a remote
//! chat-completion backend and renders the exchange.
//!
//! # Architecture
//!
//! - **Widget**: controller owning visibility and a bounded transcript,
//!   driven by explicit UI events
//! - **Client**: `POST /chat` against the configured backend
//! - **UI**: terminal rendition of the widget's roles plus a host loop
//!
//! # Modules
//!
//! - [`widget`]: controller, events, history and render records
//! - [`client`]: backend trait and HTTP implementation
//! - [`config`]: layered configuration
//! - [`ui`]: terminal view and host loop

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod client;
pub mod config;
pub mod ui;
pub mod widget;
