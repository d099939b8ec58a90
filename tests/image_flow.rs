mod common;

use actix_web::{http::{header, StatusCode}, test};
use codev::types::{error::AppError, post::ImageCreateRes};
use common::{client::TestClient, TestContext};
use uuid::Uuid;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

#[actix_web::test]
async fn test_author_attaches_and_anyone_reads() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.signer.clone());
    let app = test::init_service(client.create_app()).await;

    let (author, token) = client.create_test_user(None).await.unwrap();
    let post_id = client.create_post_for(author.id).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/image", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header((header::CONTENT_TYPE, "image/png"))
        .set_payload(PNG_BYTES)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ImageCreateRes = test::read_body_json(resp).await;
    println!("[+] image {} attached", created.id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/image/{}", created.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "image/png");
    assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], PNG_BYTES);
}

#[actix_web::test]
async fn test_non_image_upload_is_rejected() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.signer.clone());
    let app = test::init_service(client.create_app()).await;

    let (author, token) = client.create_test_user(None).await.unwrap();
    let post_id = client.create_post_for(author.id).await;
    let script: &[u8] = b"<script>alert(document.cookie)</script>";

    for content_type in [Some("text/html"), Some("image/svg+xml"), Some("application/javascript"), None] {
        let mut req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/image", post_id))
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_payload(script);
        if let Some(ct) = content_type {
            req = req.insert_header((header::CONTENT_TYPE, ct));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{:?}", content_type);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    // nothing was stored for the post
    let res = ctx.db.attach_image(&post_id.to_string(), author.id, "text/html", script.to_vec()).await;
    assert!(matches!(res, Err(AppError::Validation(_))), "got {:?}", res);
}

#[actix_web::test]
async fn test_non_author_cannot_attach() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.signer.clone());
    let app = test::init_service(client.create_app()).await;

    let (author, _) = client.create_test_user(None).await.unwrap();
    let (member, token) = client.create_test_user(None).await.unwrap();
    let post_id = client.create_post_for(author.id).await;
    ctx.db.add_member(&post_id.to_string(), member.id).await.unwrap();

    // membership does not grant image rights
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/image", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header((header::CONTENT_TYPE, "image/png"))
        .set_payload(PNG_BYTES)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/image", post_id))
        .insert_header((header::CONTENT_TYPE, "image/png"))
        .set_payload(PNG_BYTES)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_attach_image_rejections() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.signer.clone());
    let (author, _) = client.create_test_user(None).await.unwrap();
    let post_id = client.create_post_for(author.id).await.to_string();

    let res = ctx.db.attach_image(&Uuid::new_v4().to_string(), author.id, "image/png", PNG_BYTES.to_vec()).await;
    assert!(matches!(res, Err(AppError::PostNotFound)), "got {:?}", res);

    let res = ctx.db.attach_image("garbage", author.id, "image/png", PNG_BYTES.to_vec()).await;
    assert!(matches!(res, Err(AppError::PostNotFound)), "got {:?}", res);

    let res = ctx.db.attach_image(&post_id, author.id, "image/png", vec![]).await;
    assert!(matches!(res, Err(AppError::Validation(_))), "got {:?}", res);

    let id = ctx.db.attach_image(&post_id, author.id, "image/png", PNG_BYTES.to_vec()).await.unwrap();
    let stored = ctx.db.get_image(&id.to_string()).await.unwrap();
    assert_eq!(stored.post_id.to_string(), post_id);
    assert_eq!(stored.data, PNG_BYTES);
}

#[actix_web::test]
async fn test_get_image_not_found() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.signer.clone());
    let app = test::init_service(client.create_app()).await;

    for id in [Uuid::new_v4().to_string(), "nope".to_string()] {
        let req = test::TestRequest::get().uri(&format!("/api/image/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{id}");
    }
}
