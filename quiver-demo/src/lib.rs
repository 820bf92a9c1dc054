//! Filter-options demo: on-demand queries per category (tags, persons,
//! locations) into shared reducer-managed state.
//!
//! The interesting property is what does *not* happen here. The original UI
//! this mirrors lost data when two categories were loaded concurrently,
//! because its query library's response cache kept only the latest result per
//! operation. This controller, running on a client with no response cache,
//! keeps both: each resolution updates only its own category's slice, in
//! whatever order the network returns them.

pub mod controller;
pub mod queries;
pub mod store;

pub use controller::FilterController;
pub use store::{Category, FilterAction, FilterState, FilterStore};
