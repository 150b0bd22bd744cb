//! Catalog bounded context: accumulation, derivation, and sequencing.
//!
//! [`CatalogState`] owns the accumulated records and the fetch bookkeeping;
//! [`CatalogSession`] sequences guard, fetch, and merge against a provider;
//! [`tags`] and [`view`] are pure derivations over state snapshots.

pub mod session;
pub mod state;
pub mod tags;
pub mod view;

pub use session::{CatalogSession, LoadOutcome};
pub use state::{CatalogState, FetchRequest};
pub use tags::{MAX_VISIBLE_TAGS, extract_tags};
pub use view::filter_view;
