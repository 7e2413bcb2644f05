//! Deterministic seed data shaped like the public JSONPlaceholder dataset.
//!
//! 10 users, 10 posts per user, 5 comments per post, 20 todos per user.

use serde::Serialize;
use serde_json::Value;

pub const USER_COUNT: i64 = 10;
pub const POSTS_PER_USER: i64 = 10;
pub const COMMENTS_PER_POST: i64 = 5;
pub const TODOS_PER_USER: i64 = 20;

const USERS: [(&str, &str, &str); 10] = [
    ("Leanne Graham", "Bret", "Sincere@april.biz"),
    ("Ervin Howell", "Antonette", "Shanna@melissa.tv"),
    ("Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
    ("Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org"),
    ("Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca"),
    ("Mrs. Dennis Schulist", "Leopoldo_Corkery", "Karley_Dach@jasper.info"),
    ("Kurtis Weissnat", "Elwyn.Skiles", "Telly.Hoeger@billy.biz"),
    ("Nicholas Runolfsdottir V", "Maxime_Nienow", "Sherwood@rosamond.me"),
    ("Glenna Reichert", "Delphine", "Chaim_McDermott@dana.io"),
    ("Clementina DuBuque", "Moriah.Stanton", "Rey.Padberg@karina.biz"),
];

#[derive(Serialize)]
struct Geo {
    lat: String,
    lng: String,
}

#[derive(Serialize)]
struct Address {
    street: String,
    suite: String,
    city: String,
    zipcode: String,
    geo: Geo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Company {
    name: String,
    catch_phrase: String,
    bs: String,
}

#[derive(Serialize)]
struct User {
    id: i64,
    name: &'static str,
    username: &'static str,
    email: &'static str,
    address: Address,
    phone: String,
    website: String,
    company: Company,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Post {
    user_id: i64,
    id: i64,
    title: String,
    body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Comment {
    post_id: i64,
    id: i64,
    name: String,
    email: String,
    body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Todo {
    user_id: i64,
    id: i64,
    title: String,
    completed: bool,
}

fn to_value<T: Serialize>(record: T) -> Value {
    // Plain structs of strings and integers always serialize.
    serde_json::to_value(record).unwrap_or(Value::Null)
}

pub fn users() -> Vec<Value> {
    USERS
        .iter()
        .zip(1..)
        .map(|(&(name, username, email), id)| {
            to_value(User {
                id,
                name,
                username,
                email,
                address: Address {
                    street: format!("{id} Main Street"),
                    suite: format!("Apt. {}", 100 + id),
                    city: "Gwenborough".to_string(),
                    zipcode: format!("9299{id}-3874"),
                    geo: Geo {
                        lat: format!("-37.{id:04}"),
                        lng: format!("81.{id:04}"),
                    },
                },
                phone: format!("1-770-736-80{id:02}"),
                website: format!("{}.org", username.to_lowercase()),
                company: Company {
                    name: format!("{} Group", name.split_whitespace().last().unwrap_or(name)),
                    catch_phrase: "Multi-layered client-server neural-net".to_string(),
                    bs: "harness real-time e-markets".to_string(),
                },
            })
        })
        .collect()
}

pub fn posts() -> Vec<Value> {
    (1..=USER_COUNT * POSTS_PER_USER)
        .map(|id| {
            to_value(Post {
                user_id: (id - 1) / POSTS_PER_USER + 1,
                id,
                title: format!("post {id} title"),
                body: format!("body of post {id}"),
            })
        })
        .collect()
}

pub fn comments() -> Vec<Value> {
    (1..=USER_COUNT * POSTS_PER_USER * COMMENTS_PER_POST)
        .map(|id| {
            let email = if id == 1 {
                "Eliseo@gardner.biz".to_string()
            } else {
                format!("commenter{id}@example.com")
            };
            to_value(Comment {
                post_id: (id - 1) / COMMENTS_PER_POST + 1,
                id,
                name: format!("comment {id}"),
                email,
                body: format!("body of comment {id}"),
            })
        })
        .collect()
}

pub fn todos() -> Vec<Value> {
    (1..=USER_COUNT * TODOS_PER_USER)
        .map(|id| {
            to_value(Todo {
                user_id: (id - 1) / TODOS_PER_USER + 1,
                id,
                title: format!("todo {id}"),
                completed: id % 3 == 0,
            })
        })
        .collect()
}
