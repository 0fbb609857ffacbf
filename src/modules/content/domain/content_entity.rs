use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use chrono::Utc;
use uuid::Uuid;

use super::demo_data;
use super::slug::slugify;
use super::entities::{
    BlogPost, ContentSnapshot, Education, EntityKind, Experience, ItemStatus, PortfolioItem,
    PostStatus, Skill,
};

/// A record that lives in one of the snapshot's collections.
///
/// Drafts are plain values of the entity type with an empty id; whichever
/// backend persists the draft assigns the id.
pub trait ContentEntity:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn collection(snapshot: &ContentSnapshot) -> &Vec<Self>;

    fn collection_mut(snapshot: &mut ContentSnapshot) -> &mut Vec<Self>;

    /// Fixed record set served when no live backend can answer.
    fn demo_records() -> Vec<Self>;

    /// Fills derived fields of a draft before it is handed to any backend.
    fn prepare_draft(&mut self) {}

    /// Refreshes bookkeeping fields when a backend without server-side
    /// timestamps stores the record.
    fn touch(&mut self) {}
}

/// Records rendered in descending priority order.
pub trait Prioritized {
    fn priority(&self) -> i32;
}

/// Records whose public visibility is gated by a status field.
pub trait Publishable {
    fn is_public(&self) -> bool;
}

macro_rules! impl_content_entity {
    ($ty:ty, $kind:expr, $field:ident, $demo:path $(, { $($extra:item)* })?) => {
        impl ContentEntity for $ty {
            const KIND: EntityKind = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn collection(snapshot: &ContentSnapshot) -> &Vec<Self> {
                &snapshot.$field
            }

            fn collection_mut(snapshot: &mut ContentSnapshot) -> &mut Vec<Self> {
                &mut snapshot.$field
            }

            fn demo_records() -> Vec<Self> {
                $demo()
            }

            $($($extra)*)?
        }
    };
}

impl_content_entity!(
    Experience,
    EntityKind::Experience,
    experience,
    demo_data::experience
);
impl_content_entity!(Skill, EntityKind::Skill, skills, demo_data::skills);
impl_content_entity!(
    Education,
    EntityKind::Education,
    education,
    demo_data::education
);
impl_content_entity!(BlogPost, EntityKind::BlogPost, blog_posts, demo_data::blog_posts, {
    fn prepare_draft(&mut self) {
        if self.slug.trim().is_empty() {
            let slug = slugify(&self.title);
            self.slug = if slug.is_empty() {
                format!("post-{}", &Uuid::new_v4().simple().to_string()[..8])
            } else {
                slug
            };
        }
    }

    fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = now;
        if self.status == PostStatus::Published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
    }
});
impl_content_entity!(
    PortfolioItem,
    EntityKind::PortfolioItem,
    portfolio_items,
    demo_data::portfolio_items
);

impl Prioritized for Experience {
    fn priority(&self) -> i32 {
        self.priority
    }
}

impl Prioritized for Skill {
    fn priority(&self) -> i32 {
        self.priority
    }
}

impl Prioritized for Education {
    fn priority(&self) -> i32 {
        self.priority
    }
}

impl Publishable for BlogPost {
    fn is_public(&self) -> bool {
        self.status == PostStatus::Published
    }
}

impl Publishable for PortfolioItem {
    fn is_public(&self) -> bool {
        self.status == ItemStatus::Active
    }
}
