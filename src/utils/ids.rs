use crate::utils::clock::Clock;

/// Client-generated post id: the submission time in Unix milliseconds.
/// Two submissions in the same millisecond collide; the store drops the second.
pub fn post_id(clock: &dyn Clock) -> String {
    clock.now_millis().to_string()
}

/// Client-generated comment id, `c` followed by Unix milliseconds.
pub fn comment_id(clock: &dyn Clock) -> String {
    format!("c{}", clock.now_millis())
}
