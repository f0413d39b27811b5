//! Aggregate statistics over blog collections.
//!
//! Pure functions: every input is an ordered slice and order matters only for
//! breaking ties.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::Blog;

/// The most liked blog, reduced to the fields worth showing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavouriteBlog {
    pub title: String,
    pub author: Option<String>,
    pub likes: i64,
}

/// The author with the most posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogs {
    pub author: Option<String>,
    pub blogs: i64,
}

/// The author with the highest summed likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: i64,
}

/// Sum of likes; 0 for an empty slice. The exact sum is clamped to the `i64`
/// range.
pub fn total_likes(blogs: &[Blog]) -> i64 {
    clamp(blogs.iter().map(|b| i128::from(b.likes)).sum())
}

/// Like counts are unchecked `i64`s; sums are exact in `i128` and only clamped
/// when reported.
fn clamp(total: i128) -> i64 {
    i64::try_from(total).unwrap_or(if total > 0 { i64::MAX } else { i64::MIN })
}

/// First blog holding the maximum like count.
pub fn favourite_blog(blogs: &[Blog]) -> Option<FavouriteBlog> {
    let (first, rest) = blogs.split_first()?;
    let favourite = rest
        .iter()
        .fold(first, |max, blog| if blog.likes > max.likes { blog } else { max });

    Some(FavouriteBlog {
        title: favourite.title.clone(),
        author: favourite.author.clone(),
        likes: favourite.likes,
    })
}

/// Author with the most posts.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    let (author, blogs) = first_to_reach(blogs.iter().map(|b| (b.author.as_deref(), 1)))?;
    Some(AuthorBlogs {
        author: author.map(str::to_string),
        blogs,
    })
}

/// Author with the highest summed likes.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    let (author, likes) = first_to_reach(blogs.iter().map(|b| (b.author.as_deref(), b.likes)))?;
    Some(AuthorLikes {
        author: author.map(str::to_string),
        likes,
    })
}

/// Group `(author, amount)` entries by author and return the author with the
/// greatest total.
///
/// Ties go to the author whose running total hit the winning value first while
/// scanning left to right. The winner is compared against real totals only, so
/// a best total of 0 or below is still reported.
fn first_to_reach<'a>(
    entries: impl Iterator<Item = (Option<&'a str>, i64)>,
) -> Option<(Option<&'a str>, i64)> {
    let entries: Vec<_> = entries.collect();

    let mut totals: HashMap<Option<&str>, i128> = HashMap::new();
    for (author, amount) in &entries {
        *totals.entry(*author).or_insert(0) += i128::from(*amount);
    }
    let best = *totals.values().max()?;

    let mut running: HashMap<Option<&str>, i128> = HashMap::new();
    for (author, amount) in &entries {
        let sum = running.entry(*author).or_insert(0);
        *sum += i128::from(*amount);
        if *sum == best && totals.get(author) == Some(&best) {
            return Some((*author, clamp(best)));
        }
    }

    // A winning author's running total equals its final total after its last entry.
    None
}
