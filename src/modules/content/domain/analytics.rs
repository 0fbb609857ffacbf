use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::entities::{ContentSnapshot, EntityKind, ItemStatus, PostStatus};

const TOP_POSTS: usize = 5;
const TOP_TECHNOLOGIES: usize = 8;
const RECENT_ACTIVITY: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContentCounts {
    pub blog_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub portfolio_items: usize,
    pub active_projects: usize,
    pub archived_projects: usize,
    pub experience: usize,
    pub skills: usize,
    pub education: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentRef {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default)]
    pub read_time: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyCount {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub action: String,
    pub title: String,
    pub date: NaiveDate,
}

/// Derived view over the content; never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub counts: ContentCounts,
    #[serde(default)]
    pub top_posts: Vec<ContentRef>,
    #[serde(default)]
    pub top_technologies: Vec<TechnologyCount>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}

/// Experience start dates are "YYYY-MM" or "YYYY-MM-DD".
fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .ok()
}

impl AnalyticsSummary {
    pub fn from_snapshot(snapshot: &ContentSnapshot) -> Self {
        let posts = &snapshot.blog_posts;
        let items = &snapshot.portfolio_items;

        let published_posts = posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count();
        let active_projects = items
            .iter()
            .filter(|i| i.status == ItemStatus::Active)
            .count();

        let counts = ContentCounts {
            blog_posts: posts.len(),
            published_posts,
            draft_posts: posts.len() - published_posts,
            portfolio_items: items.len(),
            active_projects,
            archived_projects: items.len() - active_projects,
            experience: snapshot.experience.len(),
            skills: snapshot.skills.len(),
            education: snapshot.education.len(),
        };

        let mut top_posts: Vec<ContentRef> = posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .map(|p| ContentRef {
                id: p.id.clone(),
                title: p.title.clone(),
                slug: Some(p.slug.clone()),
                read_time: p.read_time,
            })
            .collect();
        top_posts.sort_by(|a, b| b.read_time.cmp(&a.read_time));
        top_posts.truncate(TOP_POSTS);

        let mut tech: HashMap<&str, usize> = HashMap::new();
        for name in snapshot
            .experience
            .iter()
            .flat_map(|e| e.technologies.iter())
            .chain(items.iter().flat_map(|i| i.technologies.iter()))
        {
            *tech.entry(name.as_str()).or_default() += 1;
        }
        let mut top_technologies: Vec<TechnologyCount> = tech
            .into_iter()
            .map(|(name, count)| TechnologyCount {
                name: name.to_string(),
                count,
            })
            .collect();
        top_technologies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        top_technologies.truncate(TOP_TECHNOLOGIES);

        let mut recent_activity: Vec<ActivityEntry> = Vec::new();
        for post in posts {
            let (action, date) = match (post.status, post.published_at) {
                (PostStatus::Published, Some(published)) if published >= post.updated_at => {
                    ("published", published)
                }
                (PostStatus::Published, _) => ("updated", post.updated_at),
                (PostStatus::Draft, _) => ("drafted", post.updated_at),
            };
            recent_activity.push(ActivityEntry {
                kind: EntityKind::BlogPost,
                action: action.to_string(),
                title: post.title.clone(),
                date: date.date_naive(),
            });
        }
        for item in items {
            if let Some(completed) = item.completed_at {
                recent_activity.push(ActivityEntry {
                    kind: EntityKind::PortfolioItem,
                    action: "completed".to_string(),
                    title: item.title.clone(),
                    date: completed,
                });
            }
        }
        for exp in &snapshot.experience {
            if let Some(started) = parse_start_date(&exp.start_date) {
                recent_activity.push(ActivityEntry {
                    kind: EntityKind::Experience,
                    action: "started".to_string(),
                    title: format!("{} @ {}", exp.title, exp.company),
                    date: started,
                });
            }
        }
        recent_activity.sort_by(|a, b| b.date.cmp(&a.date));
        recent_activity.truncate(RECENT_ACTIVITY);

        Self {
            counts,
            top_posts,
            top_technologies,
            recent_activity,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_reflect_demo_snapshot() {
        let summary = AnalyticsSummary::from_snapshot(&ContentSnapshot::demo());

        assert_eq!(summary.counts.blog_posts, 3);
        assert_eq!(summary.counts.published_posts, 2);
        assert_eq!(summary.counts.draft_posts, 1);
        assert_eq!(summary.counts.portfolio_items, 5);
        assert_eq!(summary.counts.active_projects, 4);
        assert_eq!(summary.counts.archived_projects, 1);
        assert_eq!(summary.counts.skills, 11);
    }

    #[test]
    fn top_posts_exclude_drafts_and_sort_by_read_time() {
        let summary = AnalyticsSummary::from_snapshot(&ContentSnapshot::demo());

        let ids: Vec<&str> = summary.top_posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn recent_activity_is_newest_first_and_bounded() {
        let summary = AnalyticsSummary::from_snapshot(&ContentSnapshot::demo());

        assert!(summary.recent_activity.len() <= RECENT_ACTIVITY);
        assert!(summary
            .recent_activity
            .windows(2)
            .all(|w| w[0].date >= w[1].date));
        assert_eq!(summary.recent_activity[0].action, "drafted");
    }

    #[test]
    fn technologies_are_counted_across_experience_and_projects() {
        let summary = AnalyticsSummary::from_snapshot(&ContentSnapshot::demo());

        let sql = summary
            .top_technologies
            .iter()
            .find(|t| t.name == "SQL")
            .expect("SQL should be counted");
        assert_eq!(sql.count, 4);
    }

    #[test]
    fn empty_snapshot_yields_zero_counts() {
        let mut snapshot = ContentSnapshot::demo();
        snapshot.blog_posts.clear();
        snapshot.portfolio_items.clear();
        snapshot.experience.clear();

        let summary = AnalyticsSummary::from_snapshot(&snapshot);

        assert_eq!(summary.counts.blog_posts, 0);
        assert!(summary.top_posts.is_empty());
        assert!(summary.recent_activity.is_empty());
    }

    #[test]
    fn start_dates_accept_month_precision() {
        assert_eq!(parse_start_date("2022-03"), NaiveDate::from_ymd_opt(2022, 3, 1));
        assert_eq!(parse_start_date("2022-03-15"), NaiveDate::from_ymd_opt(2022, 3, 15));
        assert_eq!(parse_start_date("soon"), None);
    }
}
