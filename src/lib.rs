//! PagePress - an A4 Markdown page-layout studio.
//!
//! The `app` module holds the configuration store, the document assembler
//! and the delivery helpers; `ui` holds the FLTK surface. The binary wires
//! the two together with a message channel.

pub mod app;
pub mod ui;
