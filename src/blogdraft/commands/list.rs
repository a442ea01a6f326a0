use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::PostStore;

/// Saved posts, most recently saved first.
pub fn run<S: PostStore>(store: &S) -> Result<CmdResult> {
    let mut posts = store.load();
    posts.reverse();

    let mut result = CmdResult::default().with_listed_posts(posts);
    if result.listed_posts.is_empty() {
        result.add_message(CmdMessage::info("No saved posts yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_newest_first() {
        let fixture = StoreFixture::new().with_posts(2);
        let result = run(&fixture.store).unwrap();
        let titles: Vec<_> = result.listed_posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Test Post 2", "Test Post 1"]);
    }

    #[test]
    fn empty_store_says_so() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.listed_posts.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
