pub mod analytics;
pub mod content_entity;
pub mod demo_data;
pub mod entities;
pub mod patch;
pub mod policies;
pub mod slug;
pub mod source;
