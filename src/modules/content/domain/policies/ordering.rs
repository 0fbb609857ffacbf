use crate::modules::content::domain::content_entity::Prioritized;
use crate::modules::content::domain::entities::BlogPost;

/// Descending by priority. `sort_by` is stable, so equal priorities keep
/// their insertion order.
pub fn sort_by_priority<T>(items: &[T]) -> Vec<T>
where
    T: Prioritized + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.priority().cmp(&a.priority()));
    sorted
}

/// Newest publication first; unpublished posts rank by their last edit.
pub fn newest_first(posts: &[BlogPost]) -> Vec<BlogPost> {
    let mut sorted = posts.to_vec();
    sorted.sort_by(|a, b| {
        let a_date = a.published_at.unwrap_or(a.updated_at);
        let b_date = b.published_at.unwrap_or(b.updated_at);
        b_date.cmp(&a_date)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::demo_data;

    fn skills_with_priorities(priorities: &[i32]) -> Vec<crate::modules::content::domain::entities::Skill> {
        let template = demo_data::skills().remove(0);
        priorities
            .iter()
            .enumerate()
            .map(|(idx, priority)| {
                let mut skill = template.clone();
                skill.id = format!("s{}", idx);
                skill.priority = *priority;
                skill
            })
            .collect()
    }

    #[test]
    fn sorts_descending_by_priority() {
        let skills = skills_with_priorities(&[3, 1, 2]);

        let sorted = sort_by_priority(&skills);

        let priorities: Vec<i32> = sorted.iter().map(|s| s.priority).collect();
        assert_eq!(priorities, vec![3, 2, 1]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let skills = skills_with_priorities(&[1, 5, 1, 5]);

        let sorted = sort_by_priority(&skills);

        let ids: Vec<&str> = sorted.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s3", "s0", "s2"]);
    }

    #[test]
    fn does_not_touch_the_source_collection() {
        let experience = demo_data::experience();
        let reversed: Vec<_> = experience.iter().rev().cloned().collect();

        let _ = sort_by_priority(&reversed);

        assert_eq!(reversed[0].id, "3");
    }

    #[test]
    fn posts_sorted_newest_first() {
        let posts = demo_data::blog_posts();

        let sorted = newest_first(&posts);

        assert!(sorted.windows(2).all(|w| {
            w[0].published_at.unwrap_or(w[0].updated_at)
                >= w[1].published_at.unwrap_or(w[1].updated_at)
        }));
        assert_eq!(sorted.len(), posts.len());
    }
}
