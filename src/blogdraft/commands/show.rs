use crate::commands::{all_posts, CmdResult};
use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::store::PostStore;
use uuid::Uuid;

pub const MAX_RELATED: usize = 2;

/// Other posts in the same category, in collection order.
pub fn related(posts: &[Post], post: &Post, limit: usize) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| p.id != post.id && p.category == post.category)
        .take(limit)
        .cloned()
        .collect()
}

pub fn run<S: PostStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let posts = all_posts(store);
    let post = posts
        .iter()
        .find(|p| &p.id == id)
        .cloned()
        .ok_or(BlogError::PostNotFound(*id))?;
    let related = related(&posts, &post, MAX_RELATED);

    Ok(CmdResult::default()
        .with_affected_posts(vec![post])
        .with_related_posts(related))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::store::memory::fixtures::{post_on, StoreFixture};

    #[test]
    fn shows_catalog_post_with_related() {
        let store = StoreFixture::new().store;
        let result = run(&store, &Uuid::from_u128(1)).unwrap();
        assert_eq!(
            result.affected_posts[0].title,
            "Getting Started with Next.js"
        );
        let related: Vec<_> = result.related_posts.iter().map(|p| p.id).collect();
        assert_eq!(related, [Uuid::from_u128(6)]);
    }

    #[test]
    fn shows_saved_post() {
        let saved = post_on("Mine", "travel", "Ann", "2024-05-01");
        let fixture = StoreFixture::new().with_post(saved.clone());
        let result = run(&fixture.store, &saved.id).unwrap();
        assert_eq!(result.affected_posts, vec![saved]);
        assert_eq!(result.related_posts[0].title, "Exploring Hidden Gems in Europe");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().store;
        let id = Uuid::new_v4();
        assert!(matches!(run(&store, &id), Err(BlogError::PostNotFound(x)) if x == id));
    }

    #[test]
    fn related_respects_limit() {
        let mut posts = catalog::posts().to_vec();
        for i in 0..4 {
            posts.push(post_on(&format!("T{}", i), "technology", "Ann", "2024-05-01"));
        }
        let found = related(&posts, &posts[0], MAX_RELATED);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.category == "technology" && p.id != posts[0].id));
    }
}
