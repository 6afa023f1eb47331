use api::Post;

/// Home and profile feed order: newest first by descending id.
pub fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.id.cmp(&a.id));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> Post {
        Post {
            id,
            title: format!("post {id}"),
            description: String::new(),
            image_path: None,
            video_path: None,
            user_name: None,
        }
    }

    #[test]
    fn test_newest_first() {
        let ids: Vec<_> = newest_first(vec![post(2), post(9), post(4)])
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![9, 4, 2]);
    }

    #[test]
    fn test_empty_feed() {
        assert!(newest_first(Vec::new()).is_empty());
    }
}
