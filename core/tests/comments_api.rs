//! Black-box tests for `CommentApi`.

mod common;

const REQUIRED_FIELDS: [&str; 5] = ["postId", "id", "name", "email", "body"];

mod smoke {
    use crate::common::{as_list, comment_api};

    #[test]
    fn get_all_comments() {
        let response = comment_api().get_all_comments().unwrap();
        assert_eq!(response.status, 200);
        let body = response.json_value().unwrap();
        assert!(!as_list(&body).is_empty());
    }

    #[test]
    fn get_comment_by_id() {
        let response = comment_api().get_comment(1).unwrap();
        assert_eq!(response.status, 200);
        let comment = response.json_value().unwrap();
        assert_eq!(comment["id"], 1);
        for field in super::REQUIRED_FIELDS {
            assert!(comment.get(field).is_some(), "missing field: {field}");
        }
    }
}

mod positive {
    use placeholder_core::{Comment, NewComment};
    use serde_json::json;

    use crate::common::comment_api;

    #[test]
    fn create_comment() {
        let comment_data = json!({
            "postId": 1,
            "name": "Test Comment",
            "email": "test@example.com",
            "body": "This is a test comment.",
        });
        let response = comment_api().create_comment(&comment_data).unwrap();
        assert_eq!(response.status, 201);
        let created = response.json_value().unwrap();
        assert_eq!(created["name"], "Test Comment");
        assert_eq!(created["email"], "test@example.com");
    }

    #[test]
    fn create_comment_with_typed_payload() {
        let payload = NewComment {
            post_id: 2,
            name: "Typed Comment".to_string(),
            email: "typed@example.com".to_string(),
            body: "Typed body.".to_string(),
        };
        let response = comment_api().create_comment(&payload).unwrap();
        assert_eq!(response.status, 201);
        let created: Comment = response.json().unwrap();
        assert_eq!(created.post_id, 2);
        assert_eq!(created.email, "typed@example.com");
    }

    #[test]
    fn update_comment() {
        let comment_data = json!({
            "postId": 1,
            "name": "Updated Comment",
            "email": "updated@example.com",
            "body": "This is an updated comment.",
        });
        let response = comment_api().update_comment(1, &comment_data).unwrap();
        assert_eq!(response.status, 200);
        let updated = response.json_value().unwrap();
        assert_eq!(updated["name"], "Updated Comment");
    }

    #[test]
    fn delete_comment() {
        let response = comment_api().delete_comment(1).unwrap();
        assert_eq!(response.status, 200);
    }
}

mod negative {
    use serde_json::json;

    use crate::common::comment_api;

    #[test]
    fn get_nonexistent_comment() {
        let response = comment_api().get_comment(99999).unwrap();
        assert_eq!(response.status, 404);
    }

    #[test]
    fn create_comment_missing_email() {
        let comment_data = json!({
            "postId": 1,
            "name": "Test Comment",
            "body": "This is a test comment.",
        });
        let response = comment_api().create_comment(&comment_data).unwrap();
        assert!([201, 400].contains(&response.status), "status {}", response.status);
    }

    #[test]
    fn create_comment_invalid_post_id() {
        let comment_data = json!({
            "postId": -1,
            "name": "Test Comment",
            "email": "test@example.com",
            "body": "This is a test comment.",
        });
        let response = comment_api().create_comment(&comment_data).unwrap();
        assert!([201, 400].contains(&response.status), "status {}", response.status);
    }

    #[test]
    fn comments_for_missing_post_is_empty_list() {
        let response = comment_api().get_comments_by_post(99999).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.json_value().unwrap(), json!([]));
    }
}

mod regression {
    use crate::common::{as_list, comment_api, ids};

    #[test]
    fn get_comments_by_post() {
        let response = comment_api().get_comments_by_post(1).unwrap();
        assert_eq!(response.status, 200);
        let body = response.json_value().unwrap();
        let comments = as_list(&body);
        assert!(!comments.is_empty());
        for comment in comments {
            assert_eq!(comment["postId"], 1);
        }
    }

    #[test]
    fn comments_by_post_filter_is_stable() {
        let api = comment_api();
        let first = api.get_comments_by_post(3).unwrap().json_value().unwrap();
        let second = api.get_comments_by_post(3).unwrap().json_value().unwrap();
        assert_eq!(ids(as_list(&first)), ids(as_list(&second)));
    }

    #[test]
    fn get_comments_by_email() {
        let response = comment_api().get_comments_by_email("Eliseo@gardner.biz").unwrap();
        assert_eq!(response.status, 200);
        let body = response.json_value().unwrap();
        for comment in as_list(&body) {
            assert_eq!(comment["email"], "Eliseo@gardner.biz");
        }
    }

    #[test]
    fn comment_response_structure() {
        let response = comment_api().get_comment(1).unwrap();
        assert_eq!(response.status, 200);
        let comment = response.json_value().unwrap();
        for field in super::REQUIRED_FIELDS {
            assert!(comment.get(field).is_some(), "missing field: {field}");
        }
    }
}
