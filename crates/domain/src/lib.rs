//! # easypanel-domain
//!
//! Pure domain model for the easypanel status client.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **service states** and their visual **badges**
//! - Define **snapshots** returned by the status endpoints
//! - Define **service actions** and the **command result** envelope
//! - Define **bindings** (the key an on-screen element displays)
//! - Define **notifications** (transient outcome messages)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod action;
pub mod badge;
pub mod binding;
pub mod notification;
pub mod service;
pub mod stats;
