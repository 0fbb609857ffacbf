pub mod filtering;
pub mod ordering;
pub mod visibility;

pub use filtering::{
    all_categories, all_tags, filter_items, filter_posts, find_post_by_slug, ALL_CATEGORIES,
};
pub use ordering::{newest_first, sort_by_priority};
pub use visibility::visible;
