//! Declarative list requests: filters, sort and pagination shared by the
//! HTTP list endpoints and the client-side [`state::ListState`].

pub mod params;
pub mod sort;
pub mod state;

pub use params::{ListMeta, ListResponse, Pagination};
pub use sort::{Sort, SortDirection, SortKey};
pub use state::ListState;
