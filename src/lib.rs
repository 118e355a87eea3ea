//! Client-side core for a wellness community app.
//!
//! The crate owns the state the screens render from: the social feed
//! ([`store::FeedStore`]), the daily plan ([`store::PlanStore`]), the
//! home-screen aggregate ([`store::DashboardStore`]), and the transient
//! drafts behind the composers ([`draft`]). Remote data flows through a
//! single [`gateway::Gateway`] capability with a networked and an
//! in-memory implementation, wrapped by the typed endpoint services in
//! [`services`]. [`view`] holds the pure projections the presentation
//! layer renders with.
//!
//! Mutations are optimistic: posts and comments are applied to local
//! state first and reconciled with the backend identity when the create
//! call settles. Creates are at-least-once; a failed create keeps the
//! local entity flagged, it is never rolled back.

pub mod config;
pub mod draft;
pub mod error;
pub mod gateway;
pub mod models;
pub mod services;
pub mod store;
pub mod view;

pub use config::Config;
pub use error::{AppError, Result};
pub use gateway::{Gateway, HttpGateway, MemoryGateway};
pub use store::{DashboardStore, FeedStore, PlanStore};
