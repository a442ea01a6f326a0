//! Built-in sample posts shown by the explore view alongside saved posts.

use crate::draft::tags::TagSet;
use crate::model::{Author, ImageRef, Post};
use chrono::{NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

struct Entry {
    title: &'static str,
    author: &'static str,
    bio: &'static str,
    category: &'static str,
    excerpt: &'static str,
    image: &'static str,
    date: (i32, u32, u32),
    tags: [&'static str; 3],
}

const ENTRIES: [Entry; 6] = [
    Entry {
        title: "Getting Started with Next.js",
        author: "John Doe",
        bio: "Senior Full Stack Developer with 5 years of experience in web development.",
        category: "technology",
        excerpt: "Learn the basics of Next.js and how to create your first application with this powerful React framework.",
        image: "https://images.pexels.com/photos/261662/pexels-photo-261662.jpeg",
        date: (2024, 3, 15),
        tags: ["Next.js", "React", "Web Development"],
    },
    Entry {
        title: "Healthy Living: A Complete Guide",
        author: "Jane Smith",
        bio: "Health coach and writer.",
        category: "health",
        excerpt: "Discover the essential habits and practices for maintaining a healthy lifestyle in today's fast-paced world.",
        image: "https://images.pexels.com/photos/4052198/pexels-photo-4052198.jpeg",
        date: (2024, 3, 14),
        tags: ["Health", "Lifestyle", "Wellness"],
    },
    Entry {
        title: "Exploring Hidden Gems in Europe",
        author: "Mike Johnson",
        bio: "Travel writer always looking for the next small town.",
        category: "travel",
        excerpt: "Take a journey through Europe's lesser-known destinations and discover the charm of off-the-beaten-path locations.",
        image: "https://images.pexels.com/photos/20046363/pexels-photo-20046363.jpeg",
        date: (2024, 3, 13),
        tags: ["Travel", "Europe", "Adventure"],
    },
    Entry {
        title: "The Art of Food Photography",
        author: "Sarah Williams",
        bio: "Food photographer and home cook.",
        category: "food",
        excerpt: "Master the techniques of food photography and learn how to capture stunning images that make your dishes look irresistible.",
        image: "https://images.pexels.com/photos/6869016/pexels-photo-6869016.jpeg",
        date: (2024, 3, 12),
        tags: ["Photography", "Food", "Art"],
    },
    Entry {
        title: "Minimalist Living: Less is More",
        author: "John Doe",
        bio: "Senior Full Stack Developer with 5 years of experience in web development.",
        category: "lifestyle",
        excerpt: "Explore the benefits of minimalist living and learn how to declutter your life for greater happiness and productivity.",
        image: "https://images.pexels.com/photos/261662/pexels-photo-261662.jpeg",
        date: (2024, 3, 11),
        tags: ["Lifestyle", "Minimalism", "Productivity"],
    },
    Entry {
        title: "The Future of Artificial Intelligence",
        author: "Jane Smith",
        bio: "Health coach and writer.",
        category: "technology",
        excerpt: "Dive into the latest developments in AI and explore how this transformative technology is shaping our future.",
        image: "https://images.pexels.com/photos/4052198/pexels-photo-4052198.jpeg",
        date: (2024, 3, 10),
        tags: ["AI", "Technology", "Future"],
    },
];

static CATALOG: Lazy<Vec<Post>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| to_post(i as u128 + 1, entry))
        .collect()
});

fn to_post(n: u128, entry: &Entry) -> Post {
    let (y, m, d) = entry.date;
    let day = NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    Post {
        id: Uuid::from_u128(n),
        title: entry.title.to_string(),
        author: Author::new(entry.author, entry.bio),
        category: entry.category.to_string(),
        content: format!("<p>{}</p>", entry.excerpt),
        image: Some(ImageRef::trusted(entry.image)),
        tags: TagSet::from(
            entry
                .tags
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>(),
        ),
        created_at: Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap_or_default()),
    }
}

/// The sample posts, newest first.
pub fn posts() -> &'static [Post] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::categories::CategoryRegistry;

    #[test]
    fn catalog_has_six_dated_posts() {
        let posts = posts();
        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].id, Uuid::from_u128(1));
        assert_eq!(
            posts[0].published_on(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(
            posts[5].published_on(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }

    #[test]
    fn catalog_categories_are_registry_ids() {
        let registry = CategoryRegistry::new();
        for post in posts() {
            assert!(registry.contains(&post.category), "{}", post.category);
        }
    }

    #[test]
    fn catalog_posts_are_valid() {
        for post in posts() {
            assert!(crate::draft::validation::validate(post).is_empty());
        }
    }
}
