pub mod filter;
pub mod listing;
pub mod map;
pub mod normalize;
pub mod table;
pub mod view;

pub use filter::{PriceBucket, SelectorPair, TransitBucket};
pub use listing::{NormalizedRecord, RawRecord};
pub use normalize::{normalize, MalformedFieldError};
pub use view::{render_view, RenderContext, RenderView};
