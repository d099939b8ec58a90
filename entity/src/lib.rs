pub mod user;
pub mod post;
pub mod post_member;
pub mod post_image;

/*
 Users register freely and own any number of posts.
 The author of a post is always its member but is never stored in post_member,
 so the join table only ever holds collaborators who joined on their own.
 Author is written once at creation and never updated.
 */
