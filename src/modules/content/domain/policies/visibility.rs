use crate::modules::content::domain::content_entity::Publishable;

/// Status gate for public views. Admin mode sees everything.
pub fn visible<T>(items: &[T], admin_mode: bool) -> Vec<T>
where
    T: Publishable + Clone,
{
    items
        .iter()
        .filter(|item| admin_mode || item.is_public())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::demo_data;
    use crate::modules::content::domain::entities::{ItemStatus, PostStatus};

    #[test]
    fn drafts_hidden_from_public() {
        let posts = demo_data::blog_posts();
        assert!(posts.iter().any(|p| p.status == PostStatus::Draft));

        let public = visible(&posts, false);

        assert!(public.iter().all(|p| p.status == PostStatus::Published));
        assert_eq!(public.len(), 2);
    }

    #[test]
    fn drafts_shown_in_admin_mode() {
        let posts = demo_data::blog_posts();

        let all = visible(&posts, true);

        assert_eq!(all.len(), posts.len());
        assert!(all.iter().any(|p| p.status == PostStatus::Draft));
    }

    #[test]
    fn archived_items_hidden_from_public() {
        let items = demo_data::portfolio_items();

        let public = visible(&items, false);

        assert!(public.iter().all(|i| i.status == ItemStatus::Active));
        assert_eq!(visible(&items, true).len(), 5);
    }
}
