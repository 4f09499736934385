//! # Views
//!
//! HTML rendering for the admin pages. [`NodeListView`] is the listing
//! itself; pagination, layout and URL resolution are injected so the
//! host decides how links and page chrome look.

pub mod dates;
pub mod escape;
pub mod layout;
pub mod node_list;
pub mod pagination;
pub mod resolver;
pub mod script;

pub use dates::DateStyle;
pub use layout::{AdminLayout, Layout};
pub use node_list::{NodeListOptions, NodeListView};
pub use pagination::{NumberedPagination, PaginationControl};
pub use resolver::{PathResolver, UrlResolver};
