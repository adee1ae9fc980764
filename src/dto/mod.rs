//! Wire types shared by the HTTP handlers and the client hooks.

pub mod api;
