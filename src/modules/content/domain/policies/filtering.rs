use std::collections::BTreeSet;

use crate::modules::content::domain::entities::{BlogPost, PortfolioItem};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

fn normalized(needle: Option<&str>) -> Option<String> {
    needle
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

pub fn filter_posts(posts: &[BlogPost], search: Option<&str>, tag: Option<&str>) -> Vec<BlogPost> {
    let search = normalized(search);
    let tag = tag.map(str::trim).filter(|t| !t.is_empty());

    posts
        .iter()
        .filter(|post| match &search {
            Some(needle) => {
                contains(&post.title, needle)
                    || contains(&post.excerpt, needle)
                    || post.tags.iter().any(|t| contains(t, needle))
            }
            None => true,
        })
        .filter(|post| match tag {
            Some(tag) => post.tags.iter().any(|t| t == tag),
            None => true,
        })
        .cloned()
        .collect()
}

pub fn filter_items(
    items: &[PortfolioItem],
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<PortfolioItem> {
    let search = normalized(search);
    let category = category
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

    items
        .iter()
        .filter(|item| match category {
            Some(category) => item.category == category,
            None => true,
        })
        .filter(|item| match &search {
            Some(needle) => {
                contains(&item.title, needle)
                    || contains(&item.description, needle)
                    || item.technologies.iter().any(|t| contains(t, needle))
            }
            None => true,
        })
        .cloned()
        .collect()
}

pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn all_categories(items: &[PortfolioItem]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.category.clone())
        .filter(|c| !c.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn find_post_by_slug<'a>(posts: &'a [BlogPost], slug: &str) -> Option<&'a BlogPost> {
    posts.iter().find(|p| p.slug == slug)
}
