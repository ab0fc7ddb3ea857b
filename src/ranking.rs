// src/ranking.rs

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::models::post::{LikeState, Post};

/// Posts older than this stop losing score.
pub const AGE_CEILING_HOURS: f64 = 48.0;

/// Weight of the viewer's own like.
pub const LIKED_WEIGHT: u64 = 2;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours since `post` was created, capped at the ceiling.
pub fn age_hours(post: &Post, now: DateTime<Utc>) -> f64 {
    let millis = (now - post.created_at).num_milliseconds() as f64;
    (millis / MILLIS_PER_HOUR).min(AGE_CEILING_HOURS)
}

/// The viewer's own like plus likes on top-level comments.
/// Reply likes do not count.
pub fn engagement(post: &Post) -> u64 {
    let liked = match post.like_state {
        LikeState::Liked => LIKED_WEIGHT,
        LikeState::NotLiked => 0,
    };
    post.comments
        .iter()
        .fold(liked, |acc, c| acc.saturating_add(c.likes))
}

pub fn score(post: &Post, now: DateTime<Utc>) -> f64 {
    engagement(post) as f64 + (AGE_CEILING_HOURS - age_hours(post, now))
}

/// Display order for `posts` at `now`, highest score first.
///
/// Equal scores keep their input order. The input is left untouched, and
/// nothing is cached: call again whenever the posts or the time change.
pub fn rank(posts: &[Post], now: DateTime<Utc>) -> Vec<&Post> {
    let mut scored: Vec<(f64, &Post)> = posts.iter().map(|p| (score(p, now), p)).collect();

    // sort_by is stable; NaN cannot occur but would compare equal
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().map(|(_, post)| post).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{comment::Comment, comment::Reply, post::PostKind};
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_714_557_600_000).unwrap()
    }

    fn comment(id: &str, likes: u64) -> Comment {
        Comment {
            id: id.to_string(),
            content: "c".to_string(),
            author_id: "u2".to_string(),
            author_username: "bo".to_string(),
            author_avatar: None,
            created_at: now(),
            likes,
            replies: Vec::new(),
        }
    }

    fn post(id: &str, hours_ago: i64, like_state: LikeState, comment_likes: &[u64]) -> Post {
        Post {
            id: id.to_string(),
            kind: PostKind::Image,
            title: id.to_string(),
            body: "http://img".to_string(),
            description: None,
            created_at: now() - Duration::hours(hours_ago),
            like_state,
            author_id: "u1".to_string(),
            author_username: "ana".to_string(),
            author_avatar: None,
            comments: comment_likes
                .iter()
                .enumerate()
                .map(|(i, likes)| comment(&format!("{}-c{}", id, i), *likes))
                .collect(),
            image_url: None,
        }
    }

    fn ids<'a>(ranked: &[&'a Post]) -> Vec<&'a str> {
        ranked.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn recency_beats_old_engagement() {
        let p1 = post("P1", 1, LikeState::NotLiked, &[]);
        let p2 = post("P2", 47, LikeState::NotLiked, &[3, 2]);

        assert_eq!(score(&p1, now()), 47.0);
        assert_eq!(score(&p2, now()), 6.0);

        let posts = vec![p2, p1];
        assert_eq!(ids(&rank(&posts, now())), vec!["P1", "P2"]);
    }

    #[test]
    fn own_like_does_not_outweigh_age() {
        let liked = post("liked", 40, LikeState::Liked, &[]);
        let fresh = post("fresh", 5, LikeState::NotLiked, &[]);

        assert_eq!(score(&liked, now()), 10.0);
        assert_eq!(score(&fresh, now()), 43.0);

        let posts = vec![liked, fresh];
        assert_eq!(ids(&rank(&posts, now())), vec!["fresh", "liked"]);
    }

    #[test]
    fn age_is_capped_at_ceiling() {
        let ancient = post("ancient", 24 * 365, LikeState::NotLiked, &[4]);
        assert_eq!(age_hours(&ancient, now()), AGE_CEILING_HOURS);
        assert_eq!(score(&ancient, now()), 4.0);
    }

    #[test]
    fn reply_likes_are_ignored() {
        let mut p = post("p", 0, LikeState::NotLiked, &[1]);
        p.comments[0].replies.push(Reply::from(comment("r", 50)));
        assert_eq!(engagement(&p), 1);
    }

    #[test]
    fn ties_keep_input_order() {
        let posts = vec![
            post("a", 10, LikeState::NotLiked, &[]),
            post("b", 10, LikeState::NotLiked, &[]),
            post("c", 12, LikeState::NotLiked, &[2]),
            post("d", 1, LikeState::NotLiked, &[]),
        ];
        assert_eq!(ids(&rank(&posts, now())), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn rank_is_pure_and_deterministic() {
        let posts = vec![
            post("a", 3, LikeState::Liked, &[1]),
            post("b", 30, LikeState::NotLiked, &[20]),
            post("c", 60, LikeState::NotLiked, &[]),
        ];
        let snapshot = posts.clone();

        let first = ids(&rank(&posts, now()));
        let second = ids(&rank(&posts, now()));

        assert_eq!(first, second);
        assert_eq!(posts, snapshot);
    }

    #[test]
    fn later_now_can_reorder() {
        let posts = vec![
            post("old-popular", 20, LikeState::NotLiked, &[10]),
            post("new", 0, LikeState::NotLiked, &[]),
        ];
        // 10 + 28 = 38 vs 48
        assert_eq!(ids(&rank(&posts, now())), vec!["new", "old-popular"]);
        // 48h later both are capped: 10 vs 0
        let later = now() + Duration::hours(48);
        assert_eq!(ids(&rank(&posts, later)), vec!["old-popular", "new"]);
    }

    #[test]
    fn huge_like_counts_saturate() {
        let posts = vec![
            post("small", 0, LikeState::NotLiked, &[1]),
            post("huge", 10, LikeState::Liked, &[u64::MAX - 1, 0, 5]),
        ];
        assert_eq!(engagement(&posts[1]), u64::MAX);
        assert_eq!(ids(&rank(&posts, now())), vec!["huge", "small"]);
    }
}
